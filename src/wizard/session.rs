//! The session record: every answer the student has given so far

use serde::{Deserialize, Serialize};

use super::catalog::{self, Emotion, EmotionTag};
use super::error::WizardError;
use super::step::{Step, Variant};

/// Letter sections of the full flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Intro,
    EventDetail,
    Thoughts,
    FeelingsDetail,
    Closing,
    WriterName,
}

impl Section {
    /// Body sections in the order they appear in the letter
    pub fn body() -> &'static [Section] {
        &[
            Section::Intro,
            Section::EventDetail,
            Section::Thoughts,
            Section::FeelingsDetail,
            Section::Closing,
        ]
    }

    /// All sections, signature last
    pub fn all() -> &'static [Section] {
        &[
            Section::Intro,
            Section::EventDetail,
            Section::Thoughts,
            Section::FeelingsDetail,
            Section::Closing,
            Section::WriterName,
        ]
    }

    /// Hint shown next to the section's input
    pub fn hint(&self) -> &'static str {
        match self {
            Section::Intro => "첫인사",
            Section::EventDetail => "일어난 사건",
            Section::Thoughts => "일어난 사건에 대한 자신의 생각이나 행동",
            Section::FeelingsDetail => "나누려는 마음",
            Section::Closing => "끝인사",
            Section::WriterName => "글을 쓴 사람",
        }
    }
}

/// Free-text letter sections of the full flow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterSections {
    pub intro: String,
    pub event_detail: String,
    pub thoughts: String,
    pub feelings_detail: String,
    pub closing: String,
    pub writer_name: String,
}

impl LetterSections {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Intro => &self.intro,
            Section::EventDetail => &self.event_detail,
            Section::Thoughts => &self.thoughts,
            Section::FeelingsDetail => &self.feelings_detail,
            Section::Closing => &self.closing,
            Section::WriterName => &self.writer_name,
        }
    }

    pub(crate) fn set(&mut self, section: Section, value: String) {
        let slot = match section {
            Section::Intro => &mut self.intro,
            Section::EventDetail => &mut self.event_detail,
            Section::Thoughts => &mut self.thoughts,
            Section::FeelingsDetail => &mut self.feelings_detail,
            Section::Closing => &mut self.closing,
            Section::WriterName => &mut self.writer_name,
        };
        *slot = value;
    }
}

/// Self-review questions of the full flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckItem {
    EventDetail,
    ExpressFeelings,
    EasyExpression,
}

impl CheckItem {
    pub fn all() -> &'static [CheckItem] {
        &[
            CheckItem::EventDetail,
            CheckItem::ExpressFeelings,
            CheckItem::EasyExpression,
        ]
    }

    pub fn question(&self) -> &'static str {
        match self {
            CheckItem::EventDetail => "1) 일어난 사건을 자세히 밝혔나요?",
            CheckItem::ExpressFeelings => "2) 나누려는 마음을 잘 표현했나요?",
            CheckItem::EasyExpression => "3) 읽을 사람을 생각해 알기 쉬운 표현을 썼나요?",
        }
    }

    /// Corrective hint shown when the answer is "아니오"
    pub fn hint(&self) -> &'static str {
        match self {
            CheckItem::EventDetail => {
                "💡 일어난 사건을 다시 한번 떠올려 읽을 사람이 이해하기 쉽게 자세히 씁니다."
            }
            CheckItem::ExpressFeelings => "💡 나누려는 마음을 자세하게 나타냅니다.",
            CheckItem::EasyExpression => "💡 읽을 사람을 위해 정확하고 쉬운 표현을 씁니다.",
        }
    }
}

/// Tri-state checklist answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckAnswer {
    #[default]
    Unset,
    Yes,
    No,
}

impl CheckAnswer {
    pub fn label(&self) -> &'static str {
        match self {
            CheckAnswer::Unset => "",
            CheckAnswer::Yes => "예",
            CheckAnswer::No => "아니오",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "예" => CheckAnswer::Yes,
            "아니오" => CheckAnswer::No,
            _ => CheckAnswer::Unset,
        }
    }
}

/// Answers to the three self-review questions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checklist {
    pub event_detail: CheckAnswer,
    pub express_feelings: CheckAnswer,
    pub easy_expression: CheckAnswer,
}

impl Checklist {
    pub fn get(&self, item: CheckItem) -> CheckAnswer {
        match item {
            CheckItem::EventDetail => self.event_detail,
            CheckItem::ExpressFeelings => self.express_feelings,
            CheckItem::EasyExpression => self.easy_expression,
        }
    }

    pub(crate) fn set(&mut self, item: CheckItem, answer: CheckAnswer) {
        match item {
            CheckItem::EventDetail => self.event_detail = answer,
            CheckItem::ExpressFeelings => self.express_feelings = answer,
            CheckItem::EasyExpression => self.easy_expression = answer,
        }
    }

    pub fn all_yes(&self) -> bool {
        CheckItem::all()
            .iter()
            .all(|item| self.get(*item) == CheckAnswer::Yes)
    }

    /// Items currently answered "아니오"
    pub fn declined(&self) -> Vec<CheckItem> {
        CheckItem::all()
            .iter()
            .copied()
            .filter(|item| self.get(*item) == CheckAnswer::No)
            .collect()
    }
}

/// One student's answers for the lifetime of a session.
///
/// Fields are only changed through [`super::reduce`]; the UI reads them
/// through the accessors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    variant: Variant,
    current_step: usize,
    writer_character: String,
    selected_character: String,
    event_description: String,
    selected_emojis: Vec<EmotionTag>,
    shared_feelings: String,
    letter_content: String,
    letter_touched: bool,
    sections: LetterSections,
    checks: Checklist,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl Session {
    /// Fresh record at step 1 with empty answers
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            current_step: 1,
            writer_character: String::new(),
            selected_character: String::new(),
            event_description: String::new(),
            selected_emojis: Vec::new(),
            shared_feelings: String::new(),
            letter_content: catalog::LETTER_TEMPLATE.to_string(),
            letter_touched: false,
            sections: LetterSections::default(),
            checks: Checklist::default(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// 1-based index of the current step
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The current step; always defined for a validated session
    pub fn step(&self) -> Step {
        self.variant
            .step_at(self.current_step)
            .unwrap_or(self.variant.steps()[0])
    }

    pub fn writer_character(&self) -> &str {
        &self.writer_character
    }

    pub fn selected_character(&self) -> &str {
        &self.selected_character
    }

    pub fn event_description(&self) -> &str {
        &self.event_description
    }

    /// Selected emotions in the order they were picked
    pub fn selected_emojis(&self) -> &[EmotionTag] {
        &self.selected_emojis
    }

    pub fn shared_feelings(&self) -> &str {
        &self.shared_feelings
    }

    pub fn letter_content(&self) -> &str {
        &self.letter_content
    }

    /// Whether the short-flow letter has been edited at least once
    pub fn letter_touched(&self) -> bool {
        self.letter_touched
    }

    pub fn sections(&self) -> &LetterSections {
        &self.sections
    }

    pub fn checks(&self) -> &Checklist {
        &self.checks
    }

    /// Reject records that could not have come out of the reducer,
    /// e.g. an answers file naming step 9 or an unknown character.
    pub fn validated(self) -> Result<Self, WizardError> {
        if !self.variant.contains_index(self.current_step) {
            return Err(WizardError::StepOutOfRange {
                requested: self.current_step,
                max: self.variant.step_count(),
            });
        }
        if !self.writer_character.is_empty()
            && !catalog::WRITER_CHARACTERS.contains(&self.writer_character.as_str())
        {
            return Err(WizardError::UnknownCharacter(self.writer_character));
        }
        if !self.selected_character.is_empty()
            && !catalog::RECIPIENT_CHARACTERS.contains(&self.selected_character.as_str())
        {
            return Err(WizardError::UnknownCharacter(self.selected_character));
        }
        for tag in &self.selected_emojis {
            match Emotion::find(&tag.label) {
                Some(e) if e.glyph == tag.glyph => {}
                _ => return Err(WizardError::UnknownEmotion(tag.label.clone())),
            }
        }
        Ok(self)
    }

    // Setters are crate-private; the reducer is the only writer.

    pub(crate) fn set_current_step(&mut self, index: usize) {
        self.current_step = index;
    }

    pub(crate) fn set_writer_character(&mut self, name: String) {
        self.writer_character = name;
    }

    pub(crate) fn set_selected_character(&mut self, name: String) {
        self.selected_character = name;
    }

    pub(crate) fn set_event_description(&mut self, text: String) {
        self.event_description = text;
    }

    pub(crate) fn emojis_mut(&mut self) -> &mut Vec<EmotionTag> {
        &mut self.selected_emojis
    }

    pub(crate) fn set_shared_feelings(&mut self, text: String) {
        self.shared_feelings = text;
    }

    pub(crate) fn set_letter_content(&mut self, text: String) {
        self.letter_content = text;
        self.letter_touched = true;
    }

    pub(crate) fn sections_mut(&mut self) -> &mut LetterSections {
        &mut self.sections
    }

    pub(crate) fn checks_mut(&mut self) -> &mut Checklist {
        &mut self.checks
    }
}
