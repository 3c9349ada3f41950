mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{LogBuffer, Screen};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use crate::{questions::QuestionSource, statistics::StatisticsTracker};

/// Entry point for running the UI.
pub fn run_ui(
    source: Box<dyn QuestionSource>,
    stats: StatisticsTracker,
    total: usize,
) -> Result<()> {
    let logs = LogBuffer::new();
    let mut app = App::new(source, stats, total, logs);

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
