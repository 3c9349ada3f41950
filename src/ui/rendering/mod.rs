mod error;
mod logs;
mod question;
mod summary;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(14),   // Active screen
                Constraint::Length(6), // Log panel
            ])
            .split(f.area());

        match self.screen {
            Screen::Quiz => self.draw_quiz(f, layout[0]),
            Screen::Results => self.draw_summary(f, layout[0]),
            Screen::LoadFailed => self.draw_load_failed(f, layout[0]),
        }

        self.draw_logs(f, layout[1]);
    }
}
