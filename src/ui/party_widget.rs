//! Party roster strip shown at the top of the Play tab.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::lobby::{LobbyState, PartyRole};

pub fn draw_party_widget(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let block = Block::default()
        .title(" Party ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans: Vec<Span> = Vec::new();
    for (i, member) in state.party.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::raw(format!("{} ", member.avatar)));
        spans.push(Span::styled(
            member.name.clone(),
            Style::default().fg(Color::White),
        ));
        let role_style = match member.role {
            PartyRole::Leader => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            PartyRole::Member => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(
            format!(" [{}]", member.role.name()),
            role_style,
        ));
    }
    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        "[i] Invite Friends",
        Style::default().fg(Color::DarkGray),
    ));

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            "All party members must ready up.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
