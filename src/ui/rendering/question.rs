use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_quiz(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Counter
                Constraint::Min(6),    // Poster
                Constraint::Length(4), // Question text
                Constraint::Length(3), // Key hints
            ])
            .split(area);

        // While feedback is on screen the answered question stays visible,
        // even though the session has already moved on.
        let (question_text, question_number, poster_len) = match &self.flash {
            Some(flash) => (
                flash.question_text.clone(),
                flash.question_number,
                flash.poster_len,
            ),
            None => match self.session.current_question() {
                Ok(question) => (
                    question.text.clone(),
                    self.session.question_number(),
                    question.image.len(),
                ),
                Err(_) => ("Loading...".to_string(), 0, 0),
            },
        };

        let counter_text = match &self.flash {
            Some(flash) if flash.was_correct => {
                format!("Question {}/{} | Correct!", question_number, self.total)
            }
            Some(_) => format!("Question {}/{} | Wrong!", question_number, self.total),
            None => format!("Question {}/{}", question_number, self.total),
        };

        f.render_widget(
            Paragraph::new(counter_text)
                .block(Block::default().borders(Borders::ALL).title("Movie Quiz")),
            layout[0],
        );

        // The original highlights the poster border green/red after an answer.
        let border_color = match &self.flash {
            Some(flash) if flash.was_correct => Color::Green,
            Some(_) => Color::Red,
            None => Color::White,
        };

        let poster_text = if poster_len == 0 {
            "(no poster data)".to_string()
        } else {
            format!("poster: {:.1} KB", poster_len as f64 / 1024.0)
        };

        f.render_widget(
            Paragraph::new(poster_text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title("Poster"),
            ),
            layout[1],
        );

        f.render_widget(
            Paragraph::new(question_text)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Question")),
            layout[2],
        );

        f.render_widget(
            Paragraph::new("Y: yes | N: no | Ctrl+Q: quit")
                .block(Block::default().borders(Borders::ALL).title("Keys")),
            layout[3],
        );
    }
}
