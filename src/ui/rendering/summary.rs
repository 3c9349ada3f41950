use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_summary(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut lines = vec!["This round is over!".to_string(), String::new()];

        if let Some(result) = &self.last_result {
            lines.push(format!("Your result: {}/{}", result.correct, result.total));
        }
        lines.push(format!("Quizzes played: {}", self.stats.games_count()));

        match self.stats.best_game() {
            Ok(best) => lines.push(format!(
                "Record: {}/{} ({})",
                best.correct,
                best.total,
                best.date.format("%d.%m.%y %H:%M")
            )),
            Err(_) => lines.push("Record: -".to_string()),
        }

        lines.push(format!("Average accuracy: {:.2}%", self.stats.total_accuracy()));
        lines.push(String::new());
        lines.push("Press Enter to play again | Ctrl+Q: quit".to_string());

        f.render_widget(
            Paragraph::new(lines.join("\n"))
                .style(Style::default().fg(Color::Green))
                .block(Block::default().borders(Borders::ALL).title("Results")),
            area,
        );
    }
}
