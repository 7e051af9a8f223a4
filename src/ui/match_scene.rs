//! Fruit-matching board rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::fruit_match::GamePhase;
use crate::lobby::LobbyState;

/// Render the fruit-matching game pane: board on the left, info panel on
/// the right.
pub fn render_match(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(28),    // Board
            Constraint::Length(24), // Info panel
        ])
        .split(area);

    render_board(frame, chunks[0], state);
    render_info_panel(frame, chunks[1], state);
}

fn render_board(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let game = &state.match_game;
    let border_color = if state.in_match {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Fruit Matching ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Each cell renders 3 wide (double-width emoji + pad), 1 tall.
    let board_width = (game.board.size * 3) as u16;
    let board_height = game.board.size as u16;
    let x_offset = inner.x + (inner.width.saturating_sub(board_width)) / 2;
    let y_offset = inner.y + (inner.height.saturating_sub(board_height)) / 2;

    for row in 0..game.board.size {
        let mut spans = Vec::new();
        for col in 0..game.board.size {
            let mut style = Style::default();
            if game.selection == Some((row, col)) {
                style = style.bg(Color::Blue);
            } else if state.in_match && game.cursor == (row, col) {
                style = style.bg(Color::DarkGray);
            }
            let text = match game.board.fruit_at(row, col) {
                Some(kind) => format!("{} ", kind.symbol()),
                None => "   ".to_string(),
            };
            spans.push(Span::styled(text, style));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, y_offset + row as u16, board_width.min(inner.width), 1),
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let game = &state.match_game;
    let block = Block::default()
        .title(" Score ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Moves: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", game.moves), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
    ];

    let status = if !state.in_match {
        Span::styled("[Enter] to play", Style::default().fg(Color::DarkGray))
    } else {
        match game.phase() {
            GamePhase::Idle => Span::styled("Pick a tile", Style::default().fg(Color::Green)),
            GamePhase::Selecting => {
                Span::styled("Pick a neighbor", Style::default().fg(Color::Yellow))
            }
            GamePhase::Resolving => {
                Span::styled("Cascading...", Style::default().fg(Color::LightMagenta))
            }
        }
    };
    lines.push(Line::from(status));

    if !game.generation_clean {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Board unsettled",
            Style::default().fg(Color::LightRed),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
