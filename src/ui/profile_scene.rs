//! Profile tab: identity card, win/loss stats, recent matches.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::lobby::LobbyState;

pub fn draw_profile(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(6)])
        .split(area);

    draw_identity_card(frame, chunks[0], state);
    draw_recent_matches(frame, chunks[1], state);
}

fn draw_identity_card(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let profile = &state.profile;
    let lines = vec![
        Line::from(vec![
            Span::raw("\u{1F981} "),
            Span::styled(
                state.settings.display_name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {} \u{2022} Level {}",
                    state.settings.tagline, profile.level
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Wins: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", profile.wins), Style::default().fg(Color::Green)),
            Span::styled("   Losses: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", profile.losses), Style::default().fg(Color::Red)),
            Span::styled("   WR: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}%", profile.win_rate_percent()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_recent_matches(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let block = Block::default()
        .title(" Recent Matches ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for m in state.profile.recent_matches() {
        let (label, color) = if m.won {
            ("Win ", Color::Green)
        } else {
            ("Loss", Color::Red)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("#{}  ", m.number), Style::default().fg(Color::DarkGray)),
            Span::styled(label, Style::default().fg(color)),
            Span::styled(
                format!("  KDA {:.1}", m.kda),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
