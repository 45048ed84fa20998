//! Handlebars templates for the text the letter derives from answers

use handlebars::{no_escape, Handlebars};
use serde_json::json;

use super::LetterError;

const SALUTATION: &str = "salutation";
const FILE_NAME: &str = "file_name";
const FOOTER_LINE: &str = "footer_line";

/// Built-in template sources
const TEMPLATES: &[(&str, &str)] = &[
    (SALUTATION, "{{recipient}}에게"),
    (FILE_NAME, "{{recipient}}_편지.pdf"),
    (FOOTER_LINE, "{{label}}: {{value}}"),
];

/// Registered letter templates
pub struct LetterTemplates {
    handlebars: Handlebars<'static>,
}

impl LetterTemplates {
    pub fn new() -> Result<Self, LetterError> {
        let mut handlebars = Handlebars::new();
        // Output is plain text for a PDF, not HTML
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(true);
        for (name, source) in TEMPLATES {
            handlebars.register_template_string(name, *source)?;
        }
        Ok(Self { handlebars })
    }

    /// "아랑에게"
    pub fn salutation(&self, recipient: &str) -> Result<String, LetterError> {
        Ok(self
            .handlebars
            .render(SALUTATION, &json!({ "recipient": recipient }))?)
    }

    /// "아랑_편지.pdf", with path separators replaced
    pub fn file_name(&self, recipient: &str) -> Result<String, LetterError> {
        let safe: String = recipient
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '\0' => '_',
                other => other,
            })
            .collect();
        Ok(self
            .handlebars
            .render(FILE_NAME, &json!({ "recipient": safe }))?)
    }

    /// "label: value" line of the reference footer
    pub fn footer_line(&self, label: &str, value: &str) -> Result<String, LetterError> {
        Ok(self
            .handlebars
            .render(FOOTER_LINE, &json!({ "label": label, "value": value }))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salutation_addresses_recipient() {
        let templates = LetterTemplates::new().unwrap();
        assert_eq!(templates.salutation("아랑").unwrap(), "아랑에게");
    }

    #[test]
    fn test_file_name_is_recipient_derived() {
        let templates = LetterTemplates::new().unwrap();
        assert_eq!(templates.file_name("재현").unwrap(), "재현_편지.pdf");
        assert_eq!(templates.file_name("a/b").unwrap(), "a_b_편지.pdf");
    }

    #[test]
    fn test_footer_line_is_not_html_escaped() {
        let templates = LetterTemplates::new().unwrap();
        assert_eq!(
            templates.footer_line("사건", "<b>&</b>").unwrap(),
            "사건: <b>&</b>"
        );
    }
}
