//! Step rendering for the wizard screen

mod compose;
mod event;
mod feelings;
mod letter;
mod select;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use super::{FormEntry, NoticeLevel, WizardScreen};
use crate::ui::keybindings;
use crate::wizard::Step;

/// Short name for the navigation bar
pub(crate) fn nav_label(step: Step) -> &'static str {
    match step {
        Step::Writer => "나",
        Step::Recipient => "등장인물",
        Step::Event => "사건",
        Step::Feelings => "나누려는 마음",
        Step::Letter | Step::Compose => "편지 쓰기",
    }
}

pub(crate) struct FrameLayout {
    pub nav: Rect,
    pub header: Rect,
    pub body: Rect,
    pub notice: Rect,
    pub footer: Rect,
}

pub(crate) fn level_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::Cyan,
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

/// Draw a labelled field; the label sits on the line above the widget
pub(crate) fn render_entry(frame: &mut Frame, area: Rect, entry: &mut FormEntry, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(entry.label, label_style)),
        chunks[0],
    );
    entry.field.render(frame, chunks[1], focused);
}

impl WizardScreen {
    pub(crate) fn frame_layout(&self, area: Rect) -> FrameLayout {
        let warning_height = u16::from(self.font_warning.is_some()) * 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),              // Navigation bar
                Constraint::Length(warning_height), // Font warning
                Constraint::Length(3),              // Title + instruction
                Constraint::Min(6),                 // Step body
                Constraint::Length(3),              // Notice / banner
                Constraint::Length(1),              // Key hints
            ])
            .split(area);

        FrameLayout {
            nav: Rect {
                height: chunks[0].height + chunks[1].height,
                ..chunks[0]
            },
            header: chunks[2],
            body: chunks[3],
            notice: chunks[4],
            footer: chunks[5],
        }
    }

    pub(crate) fn render_nav(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let titles: Vec<Line> = self
            .variant
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| Line::from(format!("{}. {}", i + 1, nav_label(*step))))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(Line::from(vec![
                        Span::raw(" "),
                        Span::styled(
                            "까만 달걀",
                            Style::default()
                                .fg(Color::LightRed)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!(" 편지 쓰기 ({}) ", self.variant.display_name())),
                    ])),
            )
            .select(self.step_index.saturating_sub(1))
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .divider("│");
        frame.render_widget(tabs, chunks[0]);

        if let Some(warning) = &self.font_warning {
            let para = Paragraph::new(Span::styled(
                format!("⚠ {warning}"),
                Style::default().fg(Color::Yellow),
            ))
            .wrap(Wrap { trim: true });
            frame.render_widget(para, chunks[1]);
        }
    }

    pub(crate) fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                self.step.title(),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.step.instruction(),
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(header, area);
    }

    /// Transient notice, then on the final step either the gate banner
    /// or the export control.
    pub(crate) fn render_notice(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        if let Some(notice) = &self.notice {
            lines.push(Line::from(Span::styled(
                notice.text.as_str(),
                Style::default().fg(level_color(notice.level)),
            )));
        }
        if self.export_available() {
            lines.push(Line::from(vec![
                Span::styled(
                    "[ PDF 출력 ]",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "  Ctrl+P 를 누르면 편지를 PDF로 저장합니다.",
                    Style::default().fg(Color::Green),
                ),
            ]));
        } else if self.step.is_final() {
            if let Some((level, text)) = self.gate.banner() {
                lines.push(Line::from(Span::styled(
                    text,
                    Style::default().fg(level_color(level.into())),
                )));
            }
        }

        let para = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(para, area);
    }

    pub(crate) fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(Span::styled(
            keybindings::footer_hint(self.step.is_final()),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }
}
