//! Compose step of the full flow: letter sections on the left, earlier
//! answers and the self-review checklist on the right

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::render_entry;
use crate::ui::wizard::form::CHECK_OPTIONS;
use crate::ui::wizard::{FieldTarget, WizardScreen};
use crate::wizard::{CheckItem, Section};

impl WizardScreen {
    pub(crate) fn render_compose_step(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        self.render_sections(frame, columns[0]);
        self.render_review(frame, columns[1]);
    }

    fn render_sections(&mut self, frame: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = Section::all()
            .iter()
            .map(|section| {
                if *section == Section::WriterName {
                    Constraint::Length(2)
                } else {
                    Constraint::Fill(1)
                }
            })
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let focused = self.form.focused_index;
        for (i, entry) in self.form.entries.iter_mut().enumerate() {
            if let (FieldTarget::Section(_), Some(chunk)) = (entry.target, chunks.get(i)) {
                render_entry(frame, *chunk, entry, focused == i);
            }
        }
    }

    fn render_review(&mut self, frame: &mut Frame, area: Rect) {
        let check_count = CheckItem::all().len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),                   // Earlier answers
                Constraint::Length(check_count * 3 + 2), // Checklist
            ])
            .split(area);

        let reference: Vec<Line> = self
            .reference
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
                    Span::raw(value.as_str()),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(reference)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Gray))
                        .title(" 참고 "),
                )
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " 점검하기 ",
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); CheckItem::all().len()])
            .split(inner);

        let focused = self.form.focused_index;
        let mut row = 0;
        for (i, entry) in self.form.entries.iter_mut().enumerate() {
            let FieldTarget::Check(item) = entry.target else {
                continue;
            };
            let Some(area) = rows.get(row).copied() else {
                break;
            };
            row += 1;

            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Length(1)])
                .split(area);
            render_entry(frame, parts[0], entry, focused == i);

            // inline hint under every "아니오"
            if entry.field.value() == CHECK_OPTIONS[1] {
                frame.render_widget(
                    Paragraph::new(Span::styled(item.hint(), Style::default().fg(Color::Yellow))),
                    parts[1],
                );
            }
        }
    }
}
