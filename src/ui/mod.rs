pub mod form_field;
pub mod keybindings;
pub mod terminal_guard;
pub mod wizard;

pub use terminal_guard::{install_panic_hook, TerminalGuard};
pub use wizard::{Notice, NoticeLevel, ScreenEvent, WizardScreen};
