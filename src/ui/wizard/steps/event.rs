//! Event step: what happened, and which emotions the character felt

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::render_entry;
use crate::ui::wizard::{FieldTarget, WizardScreen};

impl WizardScreen {
    pub(crate) fn render_event_step(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Event description
                Constraint::Min(4),    // Emotion picker
                Constraint::Length(2), // Picked emotions
            ])
            .split(area);

        let picked = self
            .form
            .entry(FieldTarget::Emotions)
            .map(|e| e.field.value())
            .unwrap_or_default();

        let focused = self.form.focused_index;
        for (i, (entry, chunk)) in self
            .form
            .entries
            .iter_mut()
            .zip([chunks[0], chunks[1]])
            .enumerate()
        {
            render_entry(frame, chunk, entry, focused == i);
        }

        let summary = if picked.is_empty() {
            Line::from(Span::styled(
                "Space 로 감정을 골라 보세요. 여러 개를 고를 수 있어요.",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled("선택한 감정: ", Style::default().fg(Color::Gray)),
                Span::styled(picked, Style::default().fg(Color::Green)),
            ])
        };
        frame.render_widget(
            Paragraph::new(summary).wrap(Wrap { trim: true }),
            chunks[2],
        );
    }
}
