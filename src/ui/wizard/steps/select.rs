//! Character selection steps (writer, recipient)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::render_entry;
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_select_step(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(columns[1]);

        let focused = self.form.focused_index;
        if let Some(entry) = self.form.entries.first_mut() {
            render_entry(frame, chunks[0], entry, focused == 0);

            let value = entry.field.value();
            let status = if value.is_empty() {
                Span::styled(
                    "↑/↓ 로 고르고 Enter 로 선택하세요.",
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                Span::styled(format!("선택: {value}"), Style::default().fg(Color::Green))
            };
            frame.render_widget(Paragraph::new(Line::from(status)), chunks[1]);
        }
    }
}
