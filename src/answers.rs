//! Answers files: a session record written by hand or by a script, used
//! by the non-interactive subcommands.

use anyhow::{Context, Result};
use std::path::Path;

use crate::wizard::Session;

/// Read a session from TOML, or JSON when the extension says so
pub fn load_answers(path: &Path) -> Result<Session> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file: {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let session: Session = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON answers: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML answers: {}", path.display()))?
    };

    let session = session
        .validated()
        .with_context(|| format!("Invalid answers in {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        variant = ?session.variant(),
        "Loaded answers"
    );
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Variant;
    use tempfile::TempDir;

    #[test]
    fn test_loads_toml_answers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("answers.toml");
        std::fs::write(
            &path,
            r#"
variant = "short"
selected_character = "아랑"
event_description = "테스트"
letter_content = "안녕"
letter_touched = true
"#,
        )
        .unwrap();

        let session = load_answers(&path).unwrap();
        assert_eq!(session.variant(), Variant::Short);
        assert_eq!(session.selected_character(), "아랑");
        assert!(session.letter_touched());
    }

    #[test]
    fn test_loads_json_answers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("answers.json");
        std::fs::write(&path, r#"{"variant": "full", "writer_character": "나"}"#).unwrap();

        let session = load_answers(&path).unwrap();
        assert_eq!(session.variant(), Variant::Full);
        assert_eq!(session.writer_character(), "나");
    }

    #[test]
    fn test_rejects_unknown_character() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("answers.toml");
        std::fs::write(&path, "selected_character = \"홍길동\"\n").unwrap();
        assert!(load_answers(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_answers(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read answers file"));
    }
}
