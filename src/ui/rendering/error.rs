use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_load_failed(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let message = self
            .load_error
            .as_deref()
            .unwrap_or("Something went wrong");

        let text = format!("{message}\n\nPress R to try again | Ctrl+Q: quit");

        f.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title("Error")),
            area,
        );
    }
}
