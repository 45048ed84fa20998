//! Tests for the wizard screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use super::*;
use crate::wizard::catalog::{CHECKS_PENDING_MESSAGE, SAVED_MESSAGE, UNTOUCHED_LETTER_MESSAGE};
use crate::wizard::{reduce, CheckAnswer, CheckItem, Section};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Drive the screen the way the app does: dispatch, then sync
fn press(screen: &mut WizardScreen, session: &mut Session, event: KeyEvent) -> ScreenEvent {
    let outcome = screen.handle_key(event);
    if let ScreenEvent::Dispatch(action) = &outcome {
        if let Ok(next) = reduce(session, action.clone()) {
            *session = next;
        }
        screen.sync(session);
    }
    outcome
}

fn type_text(screen: &mut WizardScreen, session: &mut Session, text: &str) {
    for c in text.chars() {
        press(screen, session, key(KeyCode::Char(c)));
    }
}

fn rendered(screen: &mut WizardScreen) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
    terminal.draw(|f| screen.render(f)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect::<String>()
}

/// Wide glyphs leave blank cells behind them, so compare without spaces
fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn ready_short_at_letter() -> Session {
    [
        Action::SetRecipient("아랑".to_string()),
        Action::SetEvent("테스트".to_string()),
        Action::Jump(4),
    ]
    .into_iter()
    .fold(Session::new(Variant::Short), |s, a| reduce(&s, a).unwrap())
}

#[test]
fn test_new_screen_mirrors_session() {
    let session = Session::new(Variant::Full);
    let screen = WizardScreen::new(&session, None);
    assert_eq!(screen.step(), Step::Writer);
    assert_eq!(screen.step_index(), 1);
    assert!(screen.notice().is_none());
    assert!(!screen.export_available());
}

#[test]
fn test_page_down_advances_and_rebuilds_form() {
    let mut session = Session::new(Variant::Full);
    let mut screen = WizardScreen::new(&session, None);

    let event = press(&mut screen, &mut session, key(KeyCode::PageDown));
    assert_eq!(event, ScreenEvent::Dispatch(Action::Advance));
    assert_eq!(screen.step(), Step::Recipient);
    assert_eq!(
        screen.form().entries[0].target,
        FieldTarget::Recipient
    );
}

#[test]
fn test_selecting_writer_dispatches_set_writer() {
    let mut session = Session::new(Variant::Full);
    let mut screen = WizardScreen::new(&session, None);

    let event = press(&mut screen, &mut session, key(KeyCode::Enter));
    assert!(matches!(event, ScreenEvent::Dispatch(Action::SetWriter(_))));
    assert!(!session.writer_character().is_empty());
}

#[test]
fn test_moving_highlight_stores_no_writer() {
    let mut session = Session::new(Variant::Full);
    let mut screen = WizardScreen::new(&session, None);

    assert_eq!(press(&mut screen, &mut session, key(KeyCode::Down)), ScreenEvent::Idle);
    assert_eq!(press(&mut screen, &mut session, key(KeyCode::Char('j'))), ScreenEvent::Idle);
    assert!(session.writer_character().is_empty());

    let event = press(&mut screen, &mut session, key(KeyCode::Enter));
    assert!(matches!(event, ScreenEvent::Dispatch(Action::SetWriter(_))));
    assert_eq!(
        session.writer_character(),
        crate::wizard::catalog::WRITER_CHARACTERS[2]
    );
}

#[test]
fn test_rerender_without_input_is_idempotent() {
    let mut session = Session::new(Variant::Full);
    let mut screen = WizardScreen::new(&session, None);
    press(&mut screen, &mut session, key(KeyCode::F(3)));
    type_text(&mut screen, &mut session, "낱말 카드");
    press(&mut screen, &mut session, key(KeyCode::Tab));
    press(&mut screen, &mut session, key(KeyCode::Char(' ')));

    let before = screen.form().values();
    let first = rendered(&mut screen);
    let second = rendered(&mut screen);
    assert_eq!(first, second);
    assert_eq!(screen.form().values(), before);

    // leaving and coming back rebuilds the same values from the session
    press(&mut screen, &mut session, key(KeyCode::PageDown));
    press(&mut screen, &mut session, key(KeyCode::PageUp));
    assert_eq!(screen.step(), Step::Event);
    assert_eq!(screen.form().values(), before);
}

#[test]
fn test_emotion_toggles_dispatch_in_pick_order() {
    let mut session = Session::new(Variant::Short);
    let mut screen = WizardScreen::new(&session, None);
    press(&mut screen, &mut session, key(KeyCode::F(2)));
    press(&mut screen, &mut session, key(KeyCode::Tab));

    press(&mut screen, &mut session, key(KeyCode::Down));
    let event = press(&mut screen, &mut session, key(KeyCode::Char(' ')));
    assert_eq!(event, ScreenEvent::Dispatch(Action::ToggleEmotion("슬프다".to_string())));
    press(&mut screen, &mut session, key(KeyCode::Up));
    press(&mut screen, &mut session, key(KeyCode::Char(' ')));

    let labels: Vec<&str> = session
        .selected_emojis()
        .iter()
        .map(|t| t.label.as_str())
        .collect();
    assert_eq!(labels, vec!["슬프다", "무섭다"]);
}

#[test]
fn test_untouched_letter_shows_info_banner_not_export() {
    let mut session = ready_short_at_letter();
    let mut screen = WizardScreen::new(&session, None);
    assert_eq!(screen.step(), Step::Letter);
    assert!(!screen.export_available());
    assert_eq!(press(&mut screen, &mut session, ctrl('p')), ScreenEvent::Idle);

    assert!(compact(&rendered(&mut screen)).contains(&compact(UNTOUCHED_LETTER_MESSAGE)));
}

#[test]
fn test_editing_letter_opens_export() {
    let mut session = ready_short_at_letter();
    let mut screen = WizardScreen::new(&session, None);

    type_text(&mut screen, &mut session, "안녕");
    assert!(session.letter_touched());
    assert!(screen.export_available());
    assert_eq!(press(&mut screen, &mut session, ctrl('p')), ScreenEvent::Export);
}

#[test]
fn test_save_only_on_final_step() {
    let mut session = Session::new(Variant::Short);
    let mut screen = WizardScreen::new(&session, None);
    assert_ne!(press(&mut screen, &mut session, ctrl('s')), ScreenEvent::Save);

    let mut session = ready_short_at_letter();
    let mut screen = WizardScreen::new(&session, None);
    assert_eq!(press(&mut screen, &mut session, ctrl('s')), ScreenEvent::Save);
    screen.notify(Notice::new(NoticeLevel::Success, SAVED_MESSAGE));
    assert_eq!(screen.notice().unwrap().text, SAVED_MESSAGE);

    // notices do not outlive the step
    press(&mut screen, &mut session, key(KeyCode::PageUp));
    assert!(screen.notice().is_none());
}

#[test]
fn test_declined_check_hides_export_and_warns() {
    let mut session = [
        Action::SetWriter("나".to_string()),
        Action::SetRecipient("아랑".to_string()),
        Action::SetEvent("낱말 카드".to_string()),
        Action::SetSharedFeelings("칭찬".to_string()),
        Action::SetSection(Section::Intro, "안녕".to_string()),
        Action::SetSection(Section::EventDetail, "카드".to_string()),
        Action::SetSection(Section::Thoughts, "멋져".to_string()),
        Action::SetSection(Section::FeelingsDetail, "고마워".to_string()),
        Action::SetSection(Section::Closing, "안녕".to_string()),
        Action::SetSection(Section::WriterName, "나".to_string()),
        Action::SetCheck(CheckItem::EventDetail, CheckAnswer::Yes),
        Action::SetCheck(CheckItem::ExpressFeelings, CheckAnswer::Yes),
        Action::SetCheck(CheckItem::EasyExpression, CheckAnswer::Yes),
        Action::Jump(5),
    ]
    .into_iter()
    .fold(Session::new(Variant::Full), |s, a| reduce(&s, a).unwrap());
    let mut screen = WizardScreen::new(&session, None);
    assert!(screen.export_available());

    // focus the first check and answer "아니오"
    while !matches!(
        screen.form().focused().map(|e| e.target),
        Some(FieldTarget::Check(CheckItem::EventDetail))
    ) {
        press(&mut screen, &mut session, key(KeyCode::Tab));
    }
    let before = session.sections().clone();
    let event = press(&mut screen, &mut session, key(KeyCode::Right));
    assert_eq!(
        event,
        ScreenEvent::Dispatch(Action::SetCheck(CheckItem::EventDetail, CheckAnswer::No))
    );

    assert!(!screen.export_available());
    assert_eq!(session.sections(), &before);
    let (level, text) = screen.gate().banner().unwrap();
    assert_eq!(level, BannerLevel::Warning);
    assert_eq!(text, CHECKS_PENDING_MESSAGE);
}

#[test]
fn test_font_warning_is_rendered() {
    let session = Session::new(Variant::Short);
    let mut screen = WizardScreen::new(&session, Some("font missing".to_string()));
    assert!(rendered(&mut screen).contains("font missing"));
}

#[test]
fn test_escape_quits() {
    let mut session = Session::new(Variant::Full);
    let mut screen = WizardScreen::new(&session, None);
    assert_eq!(press(&mut screen, &mut session, key(KeyCode::Esc)), ScreenEvent::Quit);
}
