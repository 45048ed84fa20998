//! Reusable form field widgets for the wizard steps

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

/// What a key press did to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    /// Key not handled by the field
    Ignored,
    /// Handled, value unchanged (cursor or highlight moved)
    Consumed,
    /// Value changed; read it back with [`FormField::value`]
    Changed,
    /// An option of a multi-select was switched on or off
    Toggled(usize),
}

/// A form field widget that can handle different input types
pub enum FormField {
    /// Single-line text input; `cursor_pos` counts chars, not bytes
    TextInput {
        value: String,
        cursor_pos: usize,
        placeholder: String,
    },
    /// Multi-line text input using tui-textarea
    TextArea {
        textarea: Box<TextArea<'static>>,
        placeholder: String,
    },
    /// Single choice from a list; nothing is chosen until the user picks
    EnumSelect {
        options: Vec<String>,
        selected: Option<usize>,
        list_state: ListState,
    },
    /// Any number of options, remembered in the order they were picked
    MultiSelect {
        options: Vec<String>,
        chosen: Vec<usize>,
        list_state: ListState,
    },
    /// Inline radio buttons, possibly unanswered
    Choice {
        options: Vec<String>,
        selected: Option<usize>,
    },
}

fn byte_index(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map_or(value.len(), |(i, _)| i)
}

impl FormField {
    pub fn text_input(value: &str, placeholder: &str) -> Self {
        FormField::TextInput {
            cursor_pos: value.chars().count(),
            value: value.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn text_area(value: &str, placeholder: &str) -> Self {
        let lines: Vec<String> = value.split('\n').map(str::to_string).collect();
        FormField::TextArea {
            textarea: Box::new(TextArea::new(lines)),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn enum_select(options: &[&str], current: &str) -> Self {
        let selected = options.iter().position(|o| *o == current);
        let mut list_state = ListState::default();
        list_state.select(Some(selected.unwrap_or(0)));
        FormField::EnumSelect {
            options: options.iter().map(|o| (*o).to_string()).collect(),
            selected,
            list_state,
        }
    }

    pub fn multi_select(options: Vec<String>, chosen: Vec<usize>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        FormField::MultiSelect {
            options,
            chosen,
            list_state,
        }
    }

    pub fn choice(options: &[&str], current: &str) -> Self {
        FormField::Choice {
            options: options.iter().map(|o| (*o).to_string()).collect(),
            selected: options.iter().position(|o| *o == current),
        }
    }

    /// Get the current value as a string
    pub fn value(&self) -> String {
        match self {
            FormField::TextInput { value, .. } => value.clone(),
            FormField::TextArea { textarea, .. } => textarea.lines().join("\n"),
            FormField::EnumSelect {
                options, selected, ..
            }
            | FormField::Choice { options, selected } => selected
                .and_then(|i| options.get(i).cloned())
                .unwrap_or_default(),
            FormField::MultiSelect {
                options, chosen, ..
            } => chosen
                .iter()
                .filter_map(|i| options.get(*i).map(String::as_str))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Indices picked in a multi-select, in pick order
    pub fn chosen(&self) -> &[usize] {
        match self {
            FormField::MultiSelect { chosen, .. } => chosen,
            _ => &[],
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> FieldInput {
        match self {
            FormField::TextInput {
                value, cursor_pos, ..
            } => {
                let len = value.chars().count();
                match key.code {
                    KeyCode::Char(c) => {
                        let at = byte_index(value, *cursor_pos);
                        value.insert(at, c);
                        *cursor_pos += 1;
                        FieldInput::Changed
                    }
                    KeyCode::Backspace if *cursor_pos > 0 => {
                        *cursor_pos -= 1;
                        let at = byte_index(value, *cursor_pos);
                        value.remove(at);
                        FieldInput::Changed
                    }
                    KeyCode::Delete if *cursor_pos < len => {
                        let at = byte_index(value, *cursor_pos);
                        value.remove(at);
                        FieldInput::Changed
                    }
                    KeyCode::Left => {
                        *cursor_pos = cursor_pos.saturating_sub(1);
                        FieldInput::Consumed
                    }
                    KeyCode::Right => {
                        *cursor_pos = (*cursor_pos + 1).min(len);
                        FieldInput::Consumed
                    }
                    KeyCode::Home => {
                        *cursor_pos = 0;
                        FieldInput::Consumed
                    }
                    KeyCode::End => {
                        *cursor_pos = len;
                        FieldInput::Consumed
                    }
                    KeyCode::Backspace | KeyCode::Delete => FieldInput::Consumed,
                    _ => FieldInput::Ignored,
                }
            }
            FormField::TextArea { textarea, .. } => {
                // TextArea handles its own key events
                if textarea.input(key) {
                    FieldInput::Changed
                } else {
                    FieldInput::Consumed
                }
            }
            FormField::EnumSelect {
                options,
                selected,
                list_state,
            } => {
                let highlighted = list_state.selected().unwrap_or(0);
                match key.code {
                    // moving the highlight stores nothing
                    KeyCode::Up | KeyCode::Char('k') => {
                        list_state.select(Some(highlighted.saturating_sub(1)));
                        FieldInput::Consumed
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        list_state
                            .select(Some((highlighted + 1).min(options.len().saturating_sub(1))));
                        FieldInput::Consumed
                    }
                    KeyCode::Char(' ') | KeyCode::Enter if highlighted < options.len() => {
                        list_state.select(Some(highlighted));
                        if *selected == Some(highlighted) {
                            FieldInput::Consumed
                        } else {
                            *selected = Some(highlighted);
                            FieldInput::Changed
                        }
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => FieldInput::Consumed,
                    _ => FieldInput::Ignored,
                }
            }
            FormField::MultiSelect {
                options,
                chosen,
                list_state,
            } => {
                let highlighted = list_state.selected().unwrap_or(0);
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        list_state.select(Some(highlighted.saturating_sub(1)));
                        FieldInput::Consumed
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        list_state
                            .select(Some((highlighted + 1).min(options.len().saturating_sub(1))));
                        FieldInput::Consumed
                    }
                    KeyCode::Char(' ') | KeyCode::Enter if highlighted < options.len() => {
                        if let Some(pos) = chosen.iter().position(|i| *i == highlighted) {
                            chosen.remove(pos);
                        } else {
                            chosen.push(highlighted);
                        }
                        FieldInput::Toggled(highlighted)
                    }
                    _ => FieldInput::Ignored,
                }
            }
            FormField::Choice { options, selected } => {
                let target = match key.code {
                    KeyCode::Left | KeyCode::Char('h') => 0,
                    KeyCode::Right | KeyCode::Char('l') => options.len().saturating_sub(1),
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        selected.map_or(0, |i| (i + 1) % options.len().max(1))
                    }
                    _ => return FieldInput::Ignored,
                };
                if *selected == Some(target) {
                    FieldInput::Consumed
                } else {
                    *selected = Some(target);
                    FieldInput::Changed
                }
            }
        }
    }

    /// Get the height needed to render this field
    pub fn render_height(&self) -> u16 {
        match self {
            FormField::TextInput { .. } | FormField::Choice { .. } => 1,
            FormField::TextArea { .. } => 5, // Multi-line gets more space
            FormField::EnumSelect { options, .. } => (options.len() as u16).min(10),
            FormField::MultiSelect { options, .. } => (options.len() as u16).min(12),
        }
    }

    /// Render the field
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::Gray };

        match self {
            FormField::TextInput {
                value,
                cursor_pos,
                placeholder,
            } => {
                let content = if value.is_empty() && !focused {
                    Line::from(Span::styled(
                        placeholder.as_str(),
                        Style::default().fg(Color::DarkGray),
                    ))
                } else {
                    let mut text = value.clone();
                    if focused {
                        text.insert(byte_index(value, *cursor_pos), '|');
                    }
                    Line::from(text)
                };

                let para = Paragraph::new(content).style(Style::default().fg(if focused {
                    Color::White
                } else {
                    Color::Gray
                }));
                frame.render_widget(para, area);
            }
            FormField::TextArea {
                textarea,
                placeholder,
            } => {
                textarea.set_cursor_line_style(Style::default());
                textarea.set_cursor_style(if focused {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                });
                textarea.set_block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border_color)),
                );
                textarea.set_placeholder_text(placeholder.clone());
                textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

                frame.render_widget(&**textarea, area);
            }
            FormField::EnumSelect {
                options,
                selected,
                list_state,
            } => {
                let items: Vec<ListItem> = options
                    .iter()
                    .enumerate()
                    .map(|(i, opt)| {
                        let is_selected = *selected == Some(i);
                        let marker = if is_selected { "(•)" } else { "( )" };
                        let style = if is_selected {
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::Gray)
                        };
                        ListItem::new(Line::from(vec![
                            Span::styled(marker, style),
                            Span::raw(" "),
                            Span::styled(opt.as_str(), style),
                        ]))
                    })
                    .collect();

                let list = List::new(items)
                    .highlight_style(if focused {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    })
                    .highlight_symbol(if focused { "> " } else { "  " });

                frame.render_stateful_widget(list, area, list_state);
            }
            FormField::MultiSelect {
                options,
                chosen,
                list_state,
            } => {
                let items: Vec<ListItem> = options
                    .iter()
                    .enumerate()
                    .map(|(i, opt)| {
                        let is_chosen = chosen.contains(&i);
                        let checkbox = if is_chosen { "[x]" } else { "[ ]" };
                        ListItem::new(Line::from(vec![
                            Span::styled(
                                checkbox,
                                Style::default().fg(if is_chosen {
                                    Color::Green
                                } else {
                                    Color::DarkGray
                                }),
                            ),
                            Span::raw(" "),
                            Span::styled(
                                opt.as_str(),
                                Style::default().fg(if is_chosen {
                                    Color::White
                                } else {
                                    Color::Gray
                                }),
                            ),
                        ]))
                    })
                    .collect();

                let list = List::new(items)
                    .highlight_style(if focused {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    })
                    .highlight_symbol(if focused { "> " } else { "  " });

                frame.render_stateful_widget(list, area, list_state);
            }
            FormField::Choice { options, selected } => {
                let mut spans = Vec::with_capacity(options.len() * 2);
                for (i, opt) in options.iter().enumerate() {
                    let style = if *selected == Some(i) {
                        Style::default()
                            .fg(if i == 0 { Color::Green } else { Color::Red })
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    if i > 0 {
                        spans.push(Span::raw(" / "));
                    }
                    let mark = if *selected == Some(i) { "(•)" } else { "( )" };
                    spans.push(Span::styled(format!("{mark} {opt}"), style));
                }
                let line = Line::from(spans);
                let para = Paragraph::new(line).style(if focused {
                    Style::default().add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default()
                });
                frame.render_widget(para, area);
            }
        }
    }
}
