use thiserror::Error;

use super::step::Variant;

/// Rejected wizard actions. The session is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("already at the last step")]
    NoNextStep,

    #[error("already at the first step")]
    NoPreviousStep,

    #[error("step {requested} is not defined (steps run from 1 to {max})")]
    StepOutOfRange { requested: usize, max: usize },

    #[error("'{0}' is not a character in this story")]
    UnknownCharacter(String),

    #[error("'{0}' is not a known emotion")]
    UnknownEmotion(String),

    #[error("the {variant:?} flow has no '{field}' field")]
    FieldNotInVariant {
        field: &'static str,
        variant: Variant,
    },
}
