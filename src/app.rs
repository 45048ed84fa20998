//! Application loop: terminal events in, reducer and exporter behind

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

use crate::config::Config;
use crate::export::{export_session, LetterFont, PdfExporter};
use crate::letter::LetterAssembler;
use crate::ui::{Notice, NoticeLevel, ScreenEvent, TerminalGuard, WizardScreen};
use crate::wizard::catalog::SAVED_MESSAGE;
use crate::wizard::{reduce, Action, Session, Variant};

const TICK_RATE: Duration = Duration::from_millis(250);

pub struct App {
    config: Config,
    session: Session,
    screen: WizardScreen,
    assembler: LetterAssembler,
    exporter: PdfExporter,
    should_quit: bool,
}

impl App {
    /// Start a fresh session, loading the letter font once
    pub fn new(config: Config, variant: Variant) -> Result<Self> {
        let font = LetterFont::load(&config.font_path());
        Self::with_session(config, Session::new(variant), PdfExporter::new(font))
    }

    pub fn with_session(config: Config, session: Session, exporter: PdfExporter) -> Result<Self> {
        let assembler = LetterAssembler::new().context("Failed to compile letter templates")?;
        let screen = WizardScreen::new(&session, exporter.font().warning());
        tracing::info!(
            variant = ?session.variant(),
            steps = session.variant().step_count(),
            "Wizard started"
        );
        Ok(Self {
            config,
            session,
            screen,
            assembler,
            exporter,
            should_quit: false,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> &WizardScreen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self) -> Result<()> {
        let mut guard = TerminalGuard::enter()?;

        while !self.should_quit {
            guard.terminal().draw(|f| self.screen.render(f))?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        guard.restore();
        tracing::info!("Wizard closed");
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen.handle_key(key) {
            ScreenEvent::Idle => {}
            ScreenEvent::Dispatch(action) => self.dispatch(action),
            ScreenEvent::Save => {
                tracing::info!(step = self.session.current_step(), "Letter saved in session");
                self.screen
                    .notify(Notice::new(NoticeLevel::Success, SAVED_MESSAGE));
            }
            ScreenEvent::Export => self.export(),
            ScreenEvent::Quit => self.should_quit = true,
        }
    }

    fn dispatch(&mut self, action: Action) {
        let navigation = action.is_navigation();
        match reduce(&self.session, action) {
            Ok(next) => {
                self.session = next;
                if navigation {
                    tracing::debug!(step = self.session.current_step(), "Moved");
                }
            }
            // rejected transitions leave the session as it was
            Err(e) => tracing::debug!(error = %e, "Action rejected"),
        }
        self.screen.sync(&self.session);
    }

    fn export(&mut self) {
        let output_dir = self.config.output_dir();
        let result = export_session(&self.session, &self.assembler, &self.exporter)
            .and_then(|artifact| artifact.save_into(&output_dir));

        let notice = match result {
            Ok(path) => Notice::new(
                NoticeLevel::Success,
                format!("PDF를 저장했습니다: {}", path.display()),
            ),
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                Notice::new(NoticeLevel::Error, format!("PDF 출력 실패: {e}"))
            }
        };
        self.screen.notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;

    fn test_app(temp_dir: &TempDir, variant: Variant) -> App {
        let mut config = Config::default();
        config.export.output_dir = temp_dir.path().join("out").to_string_lossy().to_string();
        App::with_session(
            config,
            Session::new(variant),
            PdfExporter::new(LetterFont::builtin()),
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_builtin_font_surfaces_warning() {
        let temp_dir = TempDir::new().unwrap();
        let app = test_app(&temp_dir, Variant::Full);
        assert!(app.screen().font_warning.is_some());
    }

    #[test]
    fn test_rejected_transition_keeps_session() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir, Variant::Short);
        let before = app.session().clone();
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.session(), &before);
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.session(), &before);
    }

    #[test]
    fn test_short_flow_exports_into_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir, Variant::Short);

        // recipient: first character in the list
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::PageDown);
        for c in "테스트".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::F(4));
        ctrl(&mut app, 'p');
        assert!(std::fs::read_dir(temp_dir.path().join("out")).is_err());

        press(&mut app, KeyCode::Char('!'));
        ctrl(&mut app, 'p');

        let recipient = app.session().selected_character().to_string();
        let path = temp_dir
            .path()
            .join("out")
            .join(format!("{recipient}_편지.pdf"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(app.screen().notice().unwrap().level, NoticeLevel::Success);
    }

    #[test]
    fn test_save_shows_notice_and_keeps_session() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir, Variant::Full);
        press(&mut app, KeyCode::F(5));
        let before = app.session().clone();
        ctrl(&mut app, 's');
        assert_eq!(app.session(), &before);
        assert_eq!(app.screen().notice().unwrap().text, SAVED_MESSAGE);
    }

    #[test]
    fn test_escape_requests_quit() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir, Variant::Full);
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }
}
