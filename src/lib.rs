//! penpal - guided letter writing for young readers of 「까만 달걀」
//!
//! The wizard state machine and letter assembly are plain library code;
//! the terminal UI and the `penpal` binary sit on top of them.

pub mod answers;
pub mod app;
pub mod config;
pub mod export;
pub mod letter;
pub mod logging;
pub mod ui;
pub mod wizard;
