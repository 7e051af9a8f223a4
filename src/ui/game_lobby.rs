//! Game-select grid, mode list, and ready bar for the Play tab.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::lobby::{LobbyState, GAMES};

pub fn draw_game_lobby(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let block = Block::default()
        .title(" Game Lobby ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(18)])
        .split(inner);

    draw_game_grid(frame, chunks[0], state);
    draw_mode_list(frame, chunks[1], state);
}

fn draw_game_grid(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Select Game  [\u{2190}\u{2192}]",
        Style::default().fg(Color::Gray),
    ))];

    // Three games per row.
    for chunk in GAMES.chunks(3) {
        let mut spans: Vec<Span> = Vec::new();
        for game in chunk {
            let index = GAMES.iter().position(|g| g.id == game.id).unwrap_or(0);
            let style = if index == state.selected_game {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(
                format!("{} {:<18}", game.icon, game.name),
                style,
            ));
        }
        lines.push(Line::from(spans));
    }

    let ready = if state.ready {
        Span::styled(
            "\u{2714} Ready",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("\u{25CB} Not Ready [Space]", Style::default().fg(Color::Gray))
    };
    let find_match = if state.ready {
        Span::styled(
            "   \u{25B6} Find Match",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("   Find Match", Style::default().fg(Color::DarkGray))
    };
    lines.push(Line::from(vec![
        ready,
        find_match,
        Span::styled(
            "   Region: Auto \u{2022} Est. 2\u{2013}4 min",
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_mode_list(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let game = state.selected_game_info();
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Mode  [m]",
        Style::default().fg(Color::Gray),
    ))];
    for (i, mode) in game.modes.iter().enumerate() {
        let style = if i == state.selected_mode {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(format!("  {}", mode), style)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
