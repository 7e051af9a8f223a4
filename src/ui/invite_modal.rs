//! Invite-friends modal overlay: online friends only, filtered by search.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::lobby::friends::filter_invitable;
use crate::lobby::LobbyState;

pub fn draw_invite_modal(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let width = 40u16.min(area.width);
    let height = 12u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let modal_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal_area);
    let block = Block::default()
        .title(" Invite Friends ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::styled("\u{1F50D} ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            if state.invite_filter.is_empty() {
                "Search online friends".to_string()
            } else {
                state.invite_filter.clone()
            },
            Style::default().fg(Color::White),
        ),
    ])];
    lines.push(Line::from(""));

    let invitable = filter_invitable(&state.friends, &state.invite_filter);
    if invitable.is_empty() {
        lines.push(Line::from(Span::styled(
            "No online friends found",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let selected = state.invite_selected.min(invitable.len() - 1);
        for (pos, &idx) in invitable.iter().enumerate() {
            let friend = &state.friends[idx];
            let style = if pos == selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", friend.avatar)),
                Span::styled(friend.name, style),
                Span::styled(
                    format!("  {}", friend.game),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[\u{2191}\u{2193}] Select  [Enter] Invite  [Esc] Close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
