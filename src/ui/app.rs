use std::{fmt::Display, io::Stdout, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    questions::QuestionSource,
    session::QuizSession,
    statistics::{GameRecord, StatisticsTracker},
};

use super::types::{AnswerFlash, LogBuffer, Screen};

/// Main application state container.
pub struct App {
    pub(in crate::ui) source: Box<dyn QuestionSource>,
    pub(in crate::ui) session: QuizSession,
    pub(in crate::ui) stats: StatisticsTracker,
    pub(in crate::ui) total: usize,
    pub(in crate::ui) screen: Screen,
    pub(in crate::ui) flash: Option<AnswerFlash>,
    pub(in crate::ui) last_result: Option<GameRecord>,
    pub(in crate::ui) load_error: Option<String>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(
        source: Box<dyn QuestionSource>,
        stats: StatisticsTracker,
        total: usize,
        logs: LogBuffer,
    ) -> Self {
        Self {
            source,
            session: QuizSession::new(),
            stats,
            total,
            screen: Screen::Quiz,
            flash: None,
            last_result: None,
            load_error: None,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        super::handlers::RoundHandler::new(self).start_round();

        loop {
            // Move past the answer feedback once its delay has elapsed.
            super::handlers::RoundHandler::new(self).advance_if_due();

            terminal.draw(|f| self.draw(f))?;

            // Short poll so the feedback timer fires without a keypress.
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if super::handlers::InputHandler::new(self).handle_key(key) {
                        return Ok(());
                    }
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
