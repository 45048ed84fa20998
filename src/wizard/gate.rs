//! Completeness predicate gating the PDF export

use super::catalog;
use super::session::{CheckItem, Section, Session};
use super::step::Variant;

/// A required answer that is still missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Writer,
    Recipient,
    Event,
    SharedFeelings,
    Letter,
    Section(Section),
}

impl Requirement {
    pub fn label(&self) -> &'static str {
        match self {
            Requirement::Writer => "편지를 쓰는 '나'",
            Requirement::Recipient => "등장인물",
            Requirement::Event => "사건",
            Requirement::SharedFeelings => "나누려는 마음 요약",
            Requirement::Letter => "편지 내용",
            Requirement::Section(section) => section.hint(),
        }
    }
}

/// Outcome of the completeness check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Export control is offered
    Ready,
    /// Some self-review answer is not "예" (full flow)
    ChecksPending { declined: Vec<CheckItem> },
    /// Required answers are empty, or the letter was never edited
    Incomplete { missing: Vec<Requirement> },
}

/// Severity of the banner shown in place of the export control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLevel {
    Info,
    Warning,
}

impl Gate {
    pub fn is_ready(&self) -> bool {
        matches!(self, Gate::Ready)
    }

    /// Banner replacing the export control, if any
    pub fn banner(&self) -> Option<(BannerLevel, String)> {
        match self {
            Gate::Ready => None,
            Gate::ChecksPending { .. } => Some((
                BannerLevel::Warning,
                catalog::CHECKS_PENDING_MESSAGE.to_string(),
            )),
            Gate::Incomplete { missing } if missing == &[Requirement::Letter] => Some((
                BannerLevel::Info,
                catalog::UNTOUCHED_LETTER_MESSAGE.to_string(),
            )),
            Gate::Incomplete { missing } => {
                let names: Vec<&str> = missing.iter().map(Requirement::label).collect();
                Some((
                    BannerLevel::Info,
                    format!(
                        "{} (비어 있음: {})",
                        catalog::INCOMPLETE_MESSAGE,
                        names.join(", ")
                    ),
                ))
            }
        }
    }

    /// Corrective hints for every declined check
    pub fn hints(&self) -> Vec<&'static str> {
        match self {
            Gate::ChecksPending { declined } => declined.iter().map(CheckItem::hint).collect(),
            _ => Vec::new(),
        }
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Evaluate the completeness predicate for a session
pub fn evaluate(session: &Session) -> Gate {
    match session.variant() {
        Variant::Short => evaluate_short(session),
        Variant::Full => evaluate_full(session),
    }
}

fn evaluate_short(session: &Session) -> Gate {
    let mut missing = Vec::new();
    if !filled(session.selected_character()) {
        missing.push(Requirement::Recipient);
    }
    if !filled(session.event_description()) {
        missing.push(Requirement::Event);
    }
    if !session.letter_touched() || !filled(session.letter_content()) {
        missing.push(Requirement::Letter);
    }

    if missing.is_empty() {
        Gate::Ready
    } else {
        Gate::Incomplete { missing }
    }
}

fn evaluate_full(session: &Session) -> Gate {
    // The checklist is reviewed first, the way the compose screen reads.
    if !session.checks().all_yes() {
        return Gate::ChecksPending {
            declined: session.checks().declined(),
        };
    }

    let mut missing = Vec::new();
    if !filled(session.writer_character()) {
        missing.push(Requirement::Writer);
    }
    if !filled(session.selected_character()) {
        missing.push(Requirement::Recipient);
    }
    if !filled(session.event_description()) {
        missing.push(Requirement::Event);
    }
    if !filled(session.shared_feelings()) {
        missing.push(Requirement::SharedFeelings);
    }
    for section in Section::all() {
        if !filled(session.sections().get(*section)) {
            missing.push(Requirement::Section(*section));
        }
    }

    if missing.is_empty() {
        Gate::Ready
    } else {
        Gate::Incomplete { missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::action::Action;
    use crate::wizard::reduce;
    use crate::wizard::session::CheckAnswer;

    fn apply(session: Session, actions: Vec<Action>) -> Session {
        actions
            .into_iter()
            .fold(session, |s, a| reduce(&s, a).unwrap())
    }

    fn complete_full() -> Session {
        let mut actions = vec![
            Action::SetWriter("나".to_string()),
            Action::SetRecipient("아랑".to_string()),
            Action::SetEvent("낱말 카드를 만들었다".to_string()),
            Action::SetSharedFeelings("칭찬하고 싶다".to_string()),
        ];
        for section in Section::all() {
            actions.push(Action::SetSection(*section, format!("{} 내용", section.hint())));
        }
        for item in CheckItem::all() {
            actions.push(Action::SetCheck(*item, CheckAnswer::Yes));
        }
        apply(Session::new(Variant::Full), actions)
    }

    #[test]
    fn test_short_flow_ready_with_touched_letter() {
        let session = apply(
            Session::new(Variant::Short),
            vec![
                Action::SetRecipient("아랑".to_string()),
                Action::SetEvent("테스트".to_string()),
                Action::SetLetterContent("아랑아 안녕".to_string()),
            ],
        );
        assert_eq!(evaluate(&session), Gate::Ready);
        assert!(evaluate(&session).banner().is_none());
    }

    #[test]
    fn test_short_flow_untouched_template_shows_info_banner() {
        let session = apply(
            Session::new(Variant::Short),
            vec![
                Action::SetRecipient("아랑".to_string()),
                Action::SetEvent("테스트".to_string()),
            ],
        );
        let gate = evaluate(&session);
        assert_eq!(
            gate,
            Gate::Incomplete {
                missing: vec![Requirement::Letter]
            }
        );
        let (level, text) = gate.banner().unwrap();
        assert_eq!(level, BannerLevel::Info);
        assert_eq!(text, catalog::UNTOUCHED_LETTER_MESSAGE);
    }

    #[test]
    fn test_short_flow_blank_letter_is_incomplete() {
        let session = apply(
            Session::new(Variant::Short),
            vec![
                Action::SetRecipient("아랑".to_string()),
                Action::SetEvent("테스트".to_string()),
                Action::SetLetterContent("  \n ".to_string()),
            ],
        );
        assert!(!evaluate(&session).is_ready());
    }

    #[test]
    fn test_full_flow_ready_when_everything_filled_and_checked() {
        assert_eq!(evaluate(&complete_full()), Gate::Ready);
    }

    #[test]
    fn test_full_flow_unset_checks_are_not_yes() {
        let session = Session::new(Variant::Full);
        assert_eq!(
            evaluate(&session),
            Gate::ChecksPending { declined: vec![] }
        );
    }

    #[test]
    fn test_declining_a_check_hides_export_and_keeps_fields() {
        let ready = complete_full();
        let declined = reduce(
            &ready,
            Action::SetCheck(CheckItem::EasyExpression, CheckAnswer::No),
        )
        .unwrap();

        let gate = evaluate(&declined);
        assert!(!gate.is_ready());
        let (level, text) = gate.banner().unwrap();
        assert_eq!(level, BannerLevel::Warning);
        assert_eq!(text, catalog::CHECKS_PENDING_MESSAGE);
        assert_eq!(gate.hints(), vec![CheckItem::EasyExpression.hint()]);

        assert_eq!(declined.sections(), ready.sections());
        assert_eq!(declined.selected_character(), ready.selected_character());
        assert_eq!(declined.event_description(), ready.event_description());
    }

    #[test]
    fn test_full_flow_missing_writer_name_is_reported() {
        let session = reduce(
            &complete_full(),
            Action::SetSection(Section::WriterName, String::new()),
        )
        .unwrap();
        assert_eq!(
            evaluate(&session),
            Gate::Incomplete {
                missing: vec![Requirement::Section(Section::WriterName)]
            }
        );
        let (_, text) = evaluate(&session).banner().unwrap();
        assert!(text.contains("글을 쓴 사람"));
    }

    #[test]
    fn test_whitespace_only_answer_counts_as_empty() {
        let session = reduce(&complete_full(), Action::SetEvent("   ".to_string())).unwrap();
        assert_eq!(
            evaluate(&session),
            Gate::Incomplete {
                missing: vec![Requirement::Event]
            }
        );
    }
}
