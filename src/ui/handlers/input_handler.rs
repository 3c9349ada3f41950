//! Keyboard input dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{app::App, types::Screen};
use super::RoundHandler;

/// Helper struct for mapping keys onto round actions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.app.log("Exit requested");
            return true;
        }

        match self.app.screen {
            Screen::Quiz => match key.code {
                KeyCode::Char('y' | 'Y') => RoundHandler::new(self.app).submit_answer(true),
                KeyCode::Char('n' | 'N') => RoundHandler::new(self.app).submit_answer(false),
                _ => {}
            },
            Screen::Results => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.app.log("Starting next round");
                    RoundHandler::new(self.app).start_round();
                }
            }
            Screen::LoadFailed => {
                if matches!(key.code, KeyCode::Char('r' | 'R') | KeyCode::Enter) {
                    self.app.log("Retrying question load");
                    RoundHandler::new(self.app).start_round();
                }
            }
        }

        false
    }
}
