use ratatui::{
    Frame,
    widgets::{Block, Borders, List, ListItem},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let lines = self.logs.lines();
        let start = lines.len().saturating_sub(visible);

        let items: Vec<ListItem> = lines[start..]
            .iter()
            .map(|line| ListItem::new(line.clone()))
            .collect();

        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title("Log")),
            area,
        );
    }
}
