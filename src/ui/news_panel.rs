//! News feed cards on the Home tab.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::lobby::LobbyState;

pub fn draw_news_panel(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let news = state.news();
    let constraints: Vec<Constraint> = news
        .iter()
        .map(|_| Constraint::Ratio(1, news.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (item, chunk) in news.iter().zip(chunks.iter()) {
        let block = Block::default()
            .title(" News ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);

        let lines = vec![
            Line::from(Span::styled(item.title, Style::default().fg(Color::White))),
            Line::from(Span::styled(
                item.excerpt,
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(item.time, Style::default().fg(Color::DarkGray))),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}
