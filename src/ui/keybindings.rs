//! Centralized keyboard shortcuts registry.
//!
//! Single source of truth for the wizard's global keys: the screen looks
//! commands up here, and the footer renders its hints from the same table.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use once_cell::sync::Lazy;

/// What a global shortcut does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Advance,
    Retreat,
    /// Go straight to a step (1-based); bound to the function keys
    Jump(usize),
    NextField,
    PrevField,
    Save,
    Export,
}

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key, always with Ctrl held
    pub ctrl_key: Option<char>,
    pub command: Command,
    /// Human-readable description shown in the footer
    pub description: &'static str,
    /// Context where this shortcut is active
    pub context: ShortcutContext,
}

/// Contexts where shortcuts are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Every step
    Global,
    /// Only on the letter-writing step
    FinalStep,
}

impl ShortcutContext {
    pub fn all() -> &'static [ShortcutContext] {
        &[ShortcutContext::Global, ShortcutContext::FinalStep]
    }
}

impl Shortcut {
    /// Format key for display (e.g., "PgDn/Ctrl+N")
    pub fn key_display(&self) -> String {
        let primary = format_keycode(&self.key);
        match self.ctrl_key {
            Some(c) => format!("{}/Ctrl+{}", primary, c.to_ascii_uppercase()),
            None => primary,
        }
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (self.ctrl_key, key.code) {
            (Some(c), KeyCode::Char(pressed)) if ctrl => pressed.eq_ignore_ascii_case(&c),
            _ => !ctrl && key.code == self.key,
        }
    }
}

/// Format a KeyCode for display
fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => format!("{key:?}"),
    }
}

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        key: KeyCode::PageDown,
        ctrl_key: Some('n'),
        command: Command::Advance,
        description: "다음",
        context: ShortcutContext::Global,
    },
    Shortcut {
        key: KeyCode::PageUp,
        ctrl_key: Some('b'),
        command: Command::Retreat,
        description: "이전",
        context: ShortcutContext::Global,
    },
    Shortcut {
        key: KeyCode::Tab,
        ctrl_key: None,
        command: Command::NextField,
        description: "다음 칸",
        context: ShortcutContext::Global,
    },
    Shortcut {
        key: KeyCode::BackTab,
        ctrl_key: None,
        command: Command::PrevField,
        description: "이전 칸",
        context: ShortcutContext::Global,
    },
    Shortcut {
        key: KeyCode::Esc,
        ctrl_key: Some('c'),
        command: Command::Quit,
        description: "끝내기",
        context: ShortcutContext::Global,
    },
    Shortcut {
        key: KeyCode::F(12),
        ctrl_key: Some('s'),
        command: Command::Save,
        description: "저장",
        context: ShortcutContext::FinalStep,
    },
    Shortcut {
        key: KeyCode::F(10),
        ctrl_key: Some('p'),
        command: Command::Export,
        description: "PDF 출력",
        context: ShortcutContext::FinalStep,
    },
];

/// Highest step reachable from the function-key row
const JUMP_KEYS: u8 = 5;

/// Resolve a key press to a command, if it is a global shortcut
pub fn command_for(key: &KeyEvent, final_step: bool) -> Option<Command> {
    if let KeyCode::F(n) = key.code {
        if (1..=JUMP_KEYS).contains(&n) && key.modifiers.is_empty() {
            return Some(Command::Jump(usize::from(n)));
        }
    }
    SHORTCUTS
        .iter()
        .filter(|s| final_step || s.context == ShortcutContext::Global)
        .find(|s| s.matches(key))
        .map(|s| s.command)
}

/// Get all shortcuts for a given context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

static FOOTER_HINTS: Lazy<HashMap<ShortcutContext, String>> = Lazy::new(|| {
    ShortcutContext::all()
        .iter()
        .map(|ctx| {
            let hints: Vec<String> = shortcuts_for_context(*ctx)
                .map(|s| format!("{} {}", s.key_display(), s.description))
                .collect();
            (*ctx, hints.join("  "))
        })
        .collect()
});

/// Footer line listing the keys active on the current step
pub fn footer_hint(final_step: bool) -> String {
    let global = FOOTER_HINTS
        .get(&ShortcutContext::Global)
        .map_or("", String::as_str);
    let mut line = format!("F1-F5 단계 이동  {global}");
    if final_step {
        if let Some(extra) = FOOTER_HINTS.get(&ShortcutContext::FinalStep) {
            line.push_str("  ");
            line.push_str(extra);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_all_shortcuts_have_descriptions() {
        for shortcut in SHORTCUTS {
            assert!(
                !shortcut.description.is_empty(),
                "Shortcut {:?} has empty description",
                shortcut.key
            );
        }
    }

    #[test]
    fn test_key_display_with_ctrl_alternative() {
        let advance = SHORTCUTS
            .iter()
            .find(|s| s.command == Command::Advance)
            .unwrap();
        assert_eq!(advance.key_display(), "PgDn/Ctrl+N");
    }

    #[test]
    fn test_navigation_keys_resolve() {
        assert_eq!(command_for(&plain(KeyCode::PageDown), false), Some(Command::Advance));
        assert_eq!(command_for(&ctrl('n'), false), Some(Command::Advance));
        assert_eq!(command_for(&ctrl('b'), false), Some(Command::Retreat));
        assert_eq!(command_for(&plain(KeyCode::F(3)), false), Some(Command::Jump(3)));
        assert_eq!(command_for(&plain(KeyCode::Esc), false), Some(Command::Quit));
    }

    #[test]
    fn test_plain_letters_are_not_shortcuts() {
        assert_eq!(command_for(&plain(KeyCode::Char('n')), true), None);
        assert_eq!(command_for(&plain(KeyCode::Char('s')), true), None);
    }

    #[test]
    fn test_save_and_export_only_on_final_step() {
        assert_eq!(command_for(&ctrl('s'), false), None);
        assert_eq!(command_for(&ctrl('s'), true), Some(Command::Save));
        assert_eq!(command_for(&ctrl('p'), true), Some(Command::Export));
    }

    #[test]
    fn test_footer_hint_lists_final_step_keys() {
        assert!(!footer_hint(false).contains("PDF"));
        assert!(footer_hint(true).contains("Ctrl+P PDF 출력"));
    }
}
