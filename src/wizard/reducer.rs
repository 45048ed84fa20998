//! Pure session reducer
//!
//! `reduce(&state, action)` returns the next session or a [`WizardError`].
//! A rejected action never produces a partially updated session.

use super::action::Action;
use super::catalog::{self, Emotion, EmotionTag};
use super::error::WizardError;
use super::session::Session;
use super::step::Variant;

/// Apply one action to a session
pub fn reduce(state: &Session, action: Action) -> Result<Session, WizardError> {
    let variant = state.variant();
    let mut next = state.clone();

    match action {
        Action::Advance => {
            let target = state.current_step() + 1;
            if !variant.contains_index(target) {
                return Err(WizardError::NoNextStep);
            }
            next.set_current_step(target);
        }
        Action::Retreat => {
            let target = state
                .current_step()
                .checked_sub(1)
                .filter(|i| variant.contains_index(*i))
                .ok_or(WizardError::NoPreviousStep)?;
            next.set_current_step(target);
        }
        Action::Jump(target) => {
            if !variant.contains_index(target) {
                return Err(WizardError::StepOutOfRange {
                    requested: target,
                    max: variant.step_count(),
                });
            }
            next.set_current_step(target);
        }
        Action::SetWriter(name) => {
            require(variant, Variant::Full, "writer_character")?;
            if !catalog::WRITER_CHARACTERS.contains(&name.as_str()) {
                return Err(WizardError::UnknownCharacter(name));
            }
            next.set_writer_character(name);
        }
        Action::SetRecipient(name) => {
            if !catalog::RECIPIENT_CHARACTERS.contains(&name.as_str()) {
                return Err(WizardError::UnknownCharacter(name));
            }
            next.set_selected_character(name);
        }
        Action::SetEvent(text) => next.set_event_description(text),
        Action::ToggleEmotion(label) => {
            let emotion =
                Emotion::find(&label).ok_or_else(|| WizardError::UnknownEmotion(label.clone()))?;
            let emojis = next.emojis_mut();
            if let Some(pos) = emojis.iter().position(|t| t.label == label) {
                emojis.remove(pos);
            } else {
                emojis.push(EmotionTag::from(emotion));
            }
        }
        Action::SetSharedFeelings(text) => next.set_shared_feelings(text),
        Action::SetLetterContent(text) => {
            require(variant, Variant::Short, "letter_content")?;
            next.set_letter_content(text);
        }
        Action::SetSection(section, text) => {
            require(variant, Variant::Full, section.hint())?;
            next.sections_mut().set(section, text);
        }
        Action::SetCheck(item, answer) => {
            require(variant, Variant::Full, item.question())?;
            next.checks_mut().set(item, answer);
        }
    }

    Ok(next)
}

fn require(actual: Variant, needed: Variant, field: &'static str) -> Result<(), WizardError> {
    if actual == needed {
        Ok(())
    } else {
        Err(WizardError::FieldNotInVariant {
            field,
            variant: actual,
        })
    }
}
