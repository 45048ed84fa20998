//! Shared-feelings step

use ratatui::{layout::Rect, Frame};

use super::render_entry;
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_feelings_step(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.form.focused_index;
        if let Some(entry) = self.form.entries.first_mut() {
            render_entry(frame, area, entry, focused == 0);
        }
    }
}
