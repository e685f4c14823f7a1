//! TUI application state and logic

use super::keyboard;
use crate::game::{GameState, Keystroke, Transition};
use crate::service::ScoringService;
use crate::settings::{Session, Theme};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, layout::Rect};
use std::io;
use tracing::{debug, info};

/// What a physical key asks the client to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Key(Keystroke),
    ToggleTheme,
    Quit,
}

/// Application state
pub struct App {
    pub state: GameState,
    service: Box<dyn ScoringService>,
    pub session: Session,
    /// Where the on-screen keyboard was last drawn
    pub keyboard_area: Rect,
    /// A guess is with the scoring service
    pub submitting: bool,
    pub should_quit: bool,
}

impl App {
    /// Seed the game from `service` and wrap it for the terminal
    #[must_use]
    pub fn new(service: Box<dyn ScoringService>, session: Session) -> Self {
        let state = GameState::hydrate(service.as_ref());
        Self {
            state,
            service,
            session,
            keyboard_area: Rect::default(),
            submitting: false,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.session.theme()
    }

    /// Forward a keystroke to the game
    ///
    /// Input is dropped once the game is over, matching the dimmed keyboard.
    pub fn dispatch(&mut self, key: Keystroke) -> Transition {
        if !self.state.accepts_input() {
            return Transition::Ignored;
        }
        let transition = self.state.apply(key, self.service.as_ref());
        debug!(%key, ?transition, "keystroke applied");
        transition
    }

    /// Handle a non-keystroke command
    pub fn run_command(&mut self, command: Command) -> Option<Keystroke> {
        match command {
            Command::Key(key) => return Some(key),
            Command::ToggleTheme => {
                let theme = self.session.toggle_theme();
                info!(%theme, "theme toggled");
            }
            Command::Quit => self.should_quit = true,
        }
        None
    }

    /// Map a mouse click to the on-screen key under it
    #[must_use]
    pub fn click(&self, column: u16, row: u16) -> Option<Keystroke> {
        keyboard::hit_test(self.keyboard_area, column, row).map(keyboard::OnScreenKey::keystroke)
    }

    /// Check if this keystroke will block on the scoring service
    #[must_use]
    pub fn will_submit(&self, key: Keystroke) -> bool {
        key == Keystroke::Submit && self.state.can_submit()
    }
}

/// Translate a physical key press into a command
///
/// Letters are uppercased; Enter submits, Backspace erases, Tab toggles the
/// theme, Esc or Ctrl+C quits.
#[must_use]
pub fn translate_key(key: &KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(c) => Keystroke::letter(c).map(Command::Key),
        KeyCode::Enter => Some(Command::Key(Keystroke::Submit)),
        KeyCode::Backspace => Some(Command::Key(Keystroke::Backspace)),
        KeyCode::Tab => Some(Command::ToggleTheme),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Run the TUI application
///
/// Returns the settings session so the caller can close it. On failure the
/// session is closed here before the error is returned.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Session> {
    let mut app = app;

    // Setup terminal
    let setup = enable_raw_mode().and_then(|()| {
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Terminal::new(ratatui::backend::CrosstermBackend::new(io::stdout()))
    });
    let mut terminal = match setup {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = disable_raw_mode();
            return finish(app.session, Err(err.into()));
        }
    };

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    let restored = disable_raw_mode()
        .and_then(|()| {
            execute!(
                terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            )
        })
        .and_then(|()| terminal.show_cursor());

    finish(app.session, res.and(restored.map_err(Into::into)))
}

/// Hand the session back, or close it if the run failed
fn finish(session: Session, outcome: Result<()>) -> Result<Session> {
    match outcome {
        Ok(()) => Ok(session),
        Err(err) => {
            session.close();
            Err(err)
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        draw(terminal, app)?;

        let keystroke = match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                translate_key(&key).and_then(|command| app.run_command(command))
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(mouse.column, mouse.row)
            }
            _ => None,
        };

        if let Some(key) = keystroke {
            if app.will_submit(key) {
                // Show the pending banner before blocking on the service
                app.submitting = true;
                draw(terminal, app)?;
            }
            app.dispatch(key);
            app.submitting = false;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut keyboard_area = app.keyboard_area;
    terminal.draw(|f| keyboard_area = super::rendering::ui(f, app))?;
    app.keyboard_area = keyboard_area;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;
    use crate::service::OfflineService;

    fn offline_app() -> App {
        App::new(Box::new(OfflineService), Session::ephemeral(Theme::Light))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_are_uppercased() {
        assert_eq!(
            translate_key(&press(KeyCode::Char('q'))),
            Some(Command::Key(Keystroke::Letter('Q')))
        );
        assert_eq!(
            translate_key(&press(KeyCode::Char('Z'))),
            Some(Command::Key(Keystroke::Letter('Z')))
        );
    }

    #[test]
    fn control_keys_map_to_game_keys() {
        assert_eq!(
            translate_key(&press(KeyCode::Enter)),
            Some(Command::Key(Keystroke::Submit))
        );
        assert_eq!(
            translate_key(&press(KeyCode::Backspace)),
            Some(Command::Key(Keystroke::Backspace))
        );
        assert_eq!(translate_key(&press(KeyCode::Tab)), Some(Command::ToggleTheme));
        assert_eq!(translate_key(&press(KeyCode::Esc)), Some(Command::Quit));
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate_key(&ctrl_c), Some(Command::Quit));
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(translate_key(&ctrl_a), None);
    }

    #[test]
    fn non_letters_are_ignored() {
        assert_eq!(translate_key(&press(KeyCode::Char('1'))), None);
        assert_eq!(translate_key(&press(KeyCode::Left)), None);
    }

    #[test]
    fn app_starts_offline_when_unreachable() {
        let app = offline_app();
        assert_eq!(app.state.status(), GameStatus::InProgress);
        assert!(app.state.attempts().is_empty());
    }

    #[test]
    fn typing_and_submitting_through_app() {
        let mut app = offline_app();
        for ch in "ABCDEF".chars() {
            app.dispatch(Keystroke::Letter(ch));
        }
        assert!(app.will_submit(Keystroke::Submit));
        app.dispatch(Keystroke::Submit);

        assert_eq!(app.state.attempts_used(), 1);
        assert_eq!(app.state.current_input(), "");
        assert!(!app.will_submit(Keystroke::Submit));
    }

    #[test]
    fn theme_toggle_command() {
        let mut app = offline_app();
        assert_eq!(app.run_command(Command::ToggleTheme), None);
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.run_command(Command::Quit), None);
        assert!(app.should_quit);
    }

    #[test]
    fn failed_run_still_saves_settings() {
        use crate::settings::SettingsStore;

        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));
        let session = Session::open(Some(store.clone()), Some(Theme::Dark));

        let outcome = finish(session, Err(anyhow::anyhow!("terminal went away")));

        assert!(outcome.is_err());
        assert_eq!(store.load().theme, Theme::Dark);
    }

    #[test]
    fn successful_run_returns_session() {
        let session = Session::ephemeral(Theme::Dark);
        let session = finish(session, Ok(())).unwrap();
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn click_maps_through_keyboard_layout() {
        let mut app = offline_app();
        app.keyboard_area = Rect::new(0, 20, 80, keyboard::KEYBOARD_HEIGHT);
        assert_eq!(app.click(10, 20), Some(Keystroke::Letter('Q')));
        assert_eq!(app.click(0, 0), None);
    }
}
