//! Friends list and per-friend chat rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::lobby::friends::filter_friends;
use crate::lobby::{Focus, LobbyState, Presence};

fn presence_color(status: Presence) -> Color {
    match status {
        Presence::Online => Color::Green,
        Presence::Away => Color::Yellow,
        Presence::Offline => Color::DarkGray,
    }
}

pub fn draw_friends_panel(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let border_color = if state.focus == Focus::Friends {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Friends ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter line
            Constraint::Length(7), // Friend list
            Constraint::Min(4),    // Chat
            Constraint::Length(1), // Compose line
        ])
        .split(inner);

    draw_filter_line(frame, chunks[0], state);

    let visible = filter_friends(&state.friends, &state.friend_filter);
    let selected = if visible.is_empty() {
        None
    } else {
        Some(state.selected_friend.min(visible.len() - 1))
    };

    draw_friend_list(frame, chunks[1], state, &visible, selected);
    draw_chat(frame, chunks[2], state, &visible, selected);
    draw_compose_line(frame, chunks[3], state);
}

fn draw_filter_line(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let style = if state.filter_editing {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if state.friend_filter.is_empty() && !state.filter_editing {
        "\u{1F50D} Search friends [/]".to_string()
    } else {
        format!("\u{1F50D} {}", state.friend_filter)
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), area);
}

fn draw_friend_list(
    frame: &mut Frame,
    area: Rect,
    state: &LobbyState,
    visible: &[usize],
    selected: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::new();
    for (pos, &idx) in visible.iter().enumerate() {
        let friend = &state.friends[idx];
        let is_selected = selected == Some(pos);
        let name_style = if is_selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled("\u{25CF} ", Style::default().fg(presence_color(friend.status))),
            Span::raw(format!("{} ", friend.avatar)),
            Span::styled(friend.name, name_style),
            Span::styled(
                format!("  {}", friend.game),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No friends found",
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_chat(
    frame: &mut Frame,
    area: Rect,
    state: &LobbyState,
    visible: &[usize],
    selected: Option<usize>,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(pos) = selected else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Select a friend to chat",
                Style::default().fg(Color::DarkGray),
            ))),
            inner,
        );
        return;
    };

    let friend = &state.friends[visible[pos]];
    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::raw(format!("{} ", friend.avatar)),
        Span::styled(
            friend.name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", friend.status.name()),
            Style::default().fg(presence_color(friend.status)),
        ),
    ])];

    let history = state.chats.get(friend.id).map(Vec::as_slice).unwrap_or(&[]);
    // Show only what fits; newest messages win.
    let capacity = inner.height.saturating_sub(1) as usize;
    let start = history.len().saturating_sub(capacity);
    for msg in &history[start..] {
        let (prefix, color) = if msg.from_me {
            ("you", Color::LightBlue)
        } else {
            (friend.name, Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", msg.time), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}: ", prefix), Style::default().fg(color)),
            Span::raw(msg.text.clone()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_compose_line(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let line = match &state.compose {
        Some(buffer) => Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::LightBlue)),
            Span::styled(buffer.clone(), Style::default().fg(Color::White)),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled(
            "[Enter] to message",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
