//! Per-step form, rebuilt from the session whenever the step changes

use crossterm::event::KeyEvent;

use crate::ui::form_field::{FieldInput, FormField};
use crate::wizard::catalog::{
    self, Emotion, EMOTIONS, RECIPIENT_CHARACTERS, WRITER_CHARACTERS,
};
use crate::wizard::{Action, CheckAnswer, CheckItem, Section, Session, Step};

/// Labels of the checklist radio buttons
pub const CHECK_OPTIONS: &[&str] = &["예", "아니오"];

/// The session field a form entry edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    Writer,
    Recipient,
    Event,
    Emotions,
    SharedFeelings,
    Letter,
    Section(Section),
    Check(CheckItem),
}

impl FieldTarget {
    /// Translate a field edit into the action that records it
    fn action(self, input: FieldInput, field: &FormField) -> Option<Action> {
        match (self, input) {
            (FieldTarget::Emotions, FieldInput::Toggled(i)) => EMOTIONS
                .get(i)
                .map(|e| Action::ToggleEmotion(e.label.to_string())),
            (target, FieldInput::Changed) => {
                let value = field.value();
                Some(match target {
                    FieldTarget::Writer => Action::SetWriter(value),
                    FieldTarget::Recipient => Action::SetRecipient(value),
                    FieldTarget::Event => Action::SetEvent(value),
                    FieldTarget::SharedFeelings => Action::SetSharedFeelings(value),
                    FieldTarget::Letter => Action::SetLetterContent(value),
                    FieldTarget::Section(section) => Action::SetSection(section, value),
                    FieldTarget::Check(item) => {
                        Action::SetCheck(item, CheckAnswer::from_label(&value))
                    }
                    FieldTarget::Emotions => return None,
                })
            }
            _ => None,
        }
    }
}

pub struct FormEntry {
    pub target: FieldTarget,
    pub label: &'static str,
    pub field: FormField,
}

impl FormEntry {
    fn new(target: FieldTarget, label: &'static str, field: FormField) -> Self {
        Self {
            target,
            label,
            field,
        }
    }
}

/// The fields of one step, with keyboard focus
pub struct StepForm {
    pub entries: Vec<FormEntry>,
    pub focused_index: usize,
}

impl StepForm {
    /// Build the form for the session's current step from its field values
    pub fn build(session: &Session) -> Self {
        let entries = match session.step() {
            Step::Writer => vec![FormEntry::new(
                FieldTarget::Writer,
                "편지를 쓰는 '나'",
                FormField::enum_select(WRITER_CHARACTERS, session.writer_character()),
            )],
            Step::Recipient => vec![FormEntry::new(
                FieldTarget::Recipient,
                "등장인물",
                FormField::enum_select(RECIPIENT_CHARACTERS, session.selected_character()),
            )],
            Step::Event => {
                let chosen = session
                    .selected_emojis()
                    .iter()
                    .filter_map(|tag| Emotion::index_of(&tag.label))
                    .collect();
                vec![
                    FormEntry::new(
                        FieldTarget::Event,
                        "일어난 사건",
                        FormField::text_area(
                            session.event_description(),
                            catalog::EVENT_PLACEHOLDER,
                        ),
                    ),
                    FormEntry::new(
                        FieldTarget::Emotions,
                        "등장인물의 감정",
                        FormField::multi_select(
                            EMOTIONS.iter().map(Emotion::display).collect(),
                            chosen,
                        ),
                    ),
                ]
            }
            Step::Feelings => vec![FormEntry::new(
                FieldTarget::SharedFeelings,
                "나누려는 마음 요약",
                FormField::text_area(
                    session.shared_feelings(),
                    catalog::SHARED_FEELINGS_PLACEHOLDER,
                ),
            )],
            Step::Letter => vec![FormEntry::new(
                FieldTarget::Letter,
                "편지 내용",
                FormField::text_area(session.letter_content(), ""),
            )],
            Step::Compose => {
                let mut entries: Vec<FormEntry> = Section::all()
                    .iter()
                    .map(|section| {
                        let value = session.sections().get(*section);
                        let field = if *section == Section::WriterName {
                            FormField::text_input(value, catalog::WRITER_NAME_PLACEHOLDER)
                        } else {
                            FormField::text_area(value, "")
                        };
                        FormEntry::new(FieldTarget::Section(*section), section.hint(), field)
                    })
                    .collect();
                entries.extend(CheckItem::all().iter().map(|item| {
                    FormEntry::new(
                        FieldTarget::Check(*item),
                        item.question(),
                        FormField::choice(CHECK_OPTIONS, session.checks().get(*item).label()),
                    )
                }));
                entries
            }
        };

        Self {
            entries,
            focused_index: 0,
        }
    }

    pub fn focused(&self) -> Option<&FormEntry> {
        self.entries.get(self.focused_index)
    }

    pub fn entry(&self, target: FieldTarget) -> Option<&FormEntry> {
        self.entries.iter().find(|e| e.target == target)
    }

    /// Move to the next field, wrapping around
    pub fn next_field(&mut self) {
        if !self.entries.is_empty() {
            self.focused_index = (self.focused_index + 1) % self.entries.len();
        }
    }

    /// Move to the previous field, wrapping around
    pub fn prev_field(&mut self) {
        if !self.entries.is_empty() {
            self.focused_index =
                (self.focused_index + self.entries.len() - 1) % self.entries.len();
        }
    }

    /// Field values in form order
    pub fn values(&self) -> Vec<(FieldTarget, String)> {
        self.entries
            .iter()
            .map(|e| (e.target, e.field.value()))
            .collect()
    }

    /// Feed a key to the focused field; returns the action to dispatch
    /// when the key edited a value.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let entry = self.entries.get_mut(self.focused_index)?;
        let input = entry.field.handle_key(key);
        entry.target.action(input, &entry.field)
    }
}
