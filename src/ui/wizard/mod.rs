//! Letter-writing wizard screen
//!
//! The screen mirrors a [`Session`] but never changes it. Key presses
//! become [`ScreenEvent`]s; edits come out as [`Action`]s for the app to
//! reduce, after which the app calls [`WizardScreen::sync`] with the new
//! session.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::letter::{FOOTER_EMOTIONS, FOOTER_EVENT, FOOTER_FEELINGS, FOOTER_RECIPIENT};
use crate::ui::keybindings::{self, Command};
use crate::wizard::{evaluate, Action, BannerLevel, Gate, Session, Step, Variant};

pub mod form;
pub mod steps;

pub use form::{FieldTarget, FormEntry, StepForm};

#[cfg(test)]
mod tests;

/// What the app should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Nothing beyond a redraw
    Idle,
    /// Reduce this action into the session
    Dispatch(Action),
    Save,
    Export,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl From<BannerLevel> for NoticeLevel {
    fn from(level: BannerLevel) -> Self {
        match level {
            BannerLevel::Info => NoticeLevel::Info,
            BannerLevel::Warning => NoticeLevel::Warning,
        }
    }
}

/// One-off message shown above the footer until the next step change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

pub struct WizardScreen {
    pub(crate) variant: Variant,
    /// 1-based, as in the session
    pub(crate) step_index: usize,
    pub(crate) step: Step,
    pub(crate) form: StepForm,
    pub(crate) gate: Gate,
    /// Earlier answers echoed on the compose step
    pub(crate) reference: Vec<(&'static str, String)>,
    pub(crate) notice: Option<Notice>,
    /// Non-fatal font problem, shown on every step
    pub(crate) font_warning: Option<String>,
}

impl WizardScreen {
    pub fn new(session: &Session, font_warning: Option<String>) -> Self {
        Self {
            variant: session.variant(),
            step_index: session.current_step(),
            step: session.step(),
            form: StepForm::build(session),
            gate: evaluate(session),
            reference: reference_lines(session),
            notice: None,
            font_warning,
        }
    }

    /// Follow the session after a dispatch. The form is rebuilt only when
    /// the step changed, so cursor positions survive ordinary edits.
    pub fn sync(&mut self, session: &Session) {
        if session.current_step() != self.step_index || session.variant() != self.variant {
            tracing::debug!(
                from = self.step_index,
                to = session.current_step(),
                "Step changed"
            );
            self.variant = session.variant();
            self.step_index = session.current_step();
            self.step = session.step();
            self.form = StepForm::build(session);
            self.notice = None;
        }
        self.gate = evaluate(session);
        self.reference = reference_lines(session);
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn form(&self) -> &StepForm {
        &self.form
    }

    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// The export control is offered only when the gate is open
    pub fn export_available(&self) -> bool {
        self.step.is_final() && self.gate.is_ready()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenEvent {
        if let Some(command) = keybindings::command_for(&key, self.step.is_final()) {
            return match command {
                Command::Quit => ScreenEvent::Quit,
                Command::Advance => ScreenEvent::Dispatch(Action::Advance),
                Command::Retreat => ScreenEvent::Dispatch(Action::Retreat),
                Command::Jump(index) => ScreenEvent::Dispatch(Action::Jump(index)),
                Command::NextField => {
                    self.form.next_field();
                    ScreenEvent::Idle
                }
                Command::PrevField => {
                    self.form.prev_field();
                    ScreenEvent::Idle
                }
                Command::Save => ScreenEvent::Save,
                Command::Export if self.export_available() => ScreenEvent::Export,
                Command::Export => {
                    tracing::debug!(gate = ?self.gate, "Export requested while gate is closed");
                    ScreenEvent::Idle
                }
            };
        }

        match self.form.handle_key(key) {
            Some(action) => ScreenEvent::Dispatch(action),
            None => ScreenEvent::Idle,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let layout = self.frame_layout(frame.area());
        self.render_nav(frame, layout.nav);
        self.render_header(frame, layout.header);
        match self.step {
            Step::Writer | Step::Recipient => self.render_select_step(frame, layout.body),
            Step::Event => self.render_event_step(frame, layout.body),
            Step::Feelings => self.render_feelings_step(frame, layout.body),
            Step::Letter => self.render_letter_step(frame, layout.body),
            Step::Compose => self.render_compose_step(frame, layout.body),
        }
        self.render_notice(frame, layout.notice);
        self.render_footer(frame, layout.footer);
    }
}

fn reference_lines(session: &Session) -> Vec<(&'static str, String)> {
    let emotions: Vec<String> = session
        .selected_emojis()
        .iter()
        .map(crate::wizard::EmotionTag::display)
        .collect();
    vec![
        (FOOTER_RECIPIENT, session.selected_character().to_string()),
        (FOOTER_EVENT, session.event_description().to_string()),
        (FOOTER_EMOTIONS, emotions.join(" ")),
        (FOOTER_FEELINGS, session.shared_feelings().to_string()),
    ]
}
