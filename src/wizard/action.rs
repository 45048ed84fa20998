use super::session::{CheckAnswer, CheckItem, Section};

/// Everything that can happen to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move to the next step
    Advance,
    /// Move to the previous step
    Retreat,
    /// Move to any defined step (1-based), forward skips allowed
    Jump(usize),
    SetWriter(String),
    SetRecipient(String),
    SetEvent(String),
    /// Add the emotion if absent, remove it if present
    ToggleEmotion(String),
    SetSharedFeelings(String),
    /// Replace the short-flow letter and mark it as touched
    SetLetterContent(String),
    SetSection(Section, String),
    SetCheck(CheckItem, CheckAnswer),
}

impl Action {
    /// Whether the action moves between steps
    pub fn is_navigation(&self) -> bool {
        matches!(self, Action::Advance | Action::Retreat | Action::Jump(_))
    }
}
