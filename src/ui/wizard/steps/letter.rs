//! Free-form letter step of the short flow

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use super::render_entry;
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_letter_step(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(5)])
            .split(area);

        let salutation = self
            .reference
            .first()
            .map(|(_, recipient)| recipient.as_str())
            .filter(|r| !r.is_empty())
            .map_or_else(String::new, |r| format!("{r}에게"));
        frame.render_widget(
            Paragraph::new(Span::styled(salutation, Style::default().fg(Color::White))),
            chunks[0],
        );

        let focused = self.form.focused_index;
        if let Some(entry) = self.form.entries.first_mut() {
            render_entry(frame, chunks[1], entry, focused == 0);
        }
    }
}
