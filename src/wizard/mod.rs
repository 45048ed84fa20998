//! Step wizard: session record, transition table and reducer
//!
//! The UI never edits a [`Session`] in place. It builds an [`Action`],
//! hands it to [`reduce`], and replaces its session with the result.

pub mod action;
pub mod catalog;
pub mod error;
pub mod gate;
pub mod reducer;
pub mod session;
pub mod step;

pub use action::Action;
pub use catalog::{Emotion, EmotionTag};
pub use error::WizardError;
pub use gate::{evaluate, BannerLevel, Gate, Requirement};
pub use reducer::reduce;
pub use session::{CheckAnswer, CheckItem, Checklist, LetterSections, Section, Session};
pub use step::{Step, Variant};
