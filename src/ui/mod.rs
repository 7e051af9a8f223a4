//! Terminal UI for the lobby. Pure rendering: every scene reads
//! `LobbyState` and draws; no mutation happens here.

pub mod friends_panel;
pub mod game_lobby;
pub mod invite_modal;
pub mod match_scene;
pub mod news_panel;
pub mod party_widget;
pub mod profile_scene;
pub mod settings_modal;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::lobby::{Focus, LobbyState, Overlay, Tab};

/// Root draw function called every frame.
pub fn draw_ui(frame: &mut Frame, state: &LobbyState) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Top bar
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(size);

    draw_top_bar(frame, v_chunks[0], state);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Left nav
            Constraint::Min(40),    // Center column
            Constraint::Length(36), // Friends panel
        ])
        .split(v_chunks[1]);

    draw_left_nav(frame, h_chunks[0], state);
    draw_center(frame, h_chunks[1], state);
    friends_panel::draw_friends_panel(frame, h_chunks[2], state);

    draw_footer(frame, v_chunks[2], state);

    // Overlays draw last, over everything.
    match state.overlay {
        Overlay::Settings => settings_modal::draw_settings_modal(frame, size, state),
        Overlay::Invite => invite_modal::draw_invite_modal(frame, size, state),
        Overlay::None => {}
    }
}

fn draw_center(frame: &mut Frame, area: Rect, state: &LobbyState) {
    match state.tab {
        Tab::Home => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(12), Constraint::Length(8)])
                .split(area);
            draw_game_view(frame, chunks[0], state);
            news_panel::draw_news_panel(frame, chunks[1], state);
        }
        Tab::Play => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5), // Party
                    Constraint::Length(9), // Game lobby
                    Constraint::Min(12),   // Game view
                ])
                .split(area);
            party_widget::draw_party_widget(frame, chunks[0], state);
            game_lobby::draw_game_lobby(frame, chunks[1], state);
            draw_game_view(frame, chunks[2], state);
        }
        Tab::Profile => profile_scene::draw_profile(frame, area, state),
    }
}

/// The embedded game pane: the fruit board when Fruit Matching is selected,
/// a placeholder card for everything else.
fn draw_game_view(frame: &mut Frame, area: Rect, state: &LobbyState) {
    if state.fruit_match_selected() {
        match_scene::render_match(frame, area, state);
        return;
    }

    let game = state.selected_game_info();
    let block = Block::default()
        .title(format!(" {} ", game.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(game.icon),
        Line::from(Span::styled(
            game.name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            game.description,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("Maps: {}", game.maps.join(" \u{2022} ")),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Game view placeholder",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let text = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(text, inner);
}

fn draw_top_bar(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bell = if state.unread_notifications > 0 {
        Span::styled(
            format!("\u{1F514} {}", state.unread_notifications),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled("\u{1F514}", Style::default().fg(Color::DarkGray))
    };

    let line = Line::from(vec![
        Span::styled(
            "GameHub",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}{}", state.settings.display_name, state.settings.tagline),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("   "),
        bell,
        Span::raw("   "),
        Span::styled(
            format!("Region: {}", state.settings.region.name()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   "),
        Span::styled(state.tab.name(), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled("[4] Settings  [q] Sign out", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn draw_left_nav(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = [
        (Tab::Home, "[1] Home"),
        (Tab::Play, "[2] Play"),
        (Tab::Profile, "[3] Profile"),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (tab, label) in entries {
        let style = if state.tab == tab && state.focus == Focus::Content {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if state.tab == tab {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(label, style)));
    }
    lines.push(Line::from(Span::styled(
        "[4] Settings",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("v{} demo", env!("CARGO_PKG_VERSION")),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hints = if state.in_match {
        "[Arrows] Move  [Enter] Select/Swap  [n] New board  [Esc] Back"
    } else if state.focus == Focus::Friends {
        "[\u{2191}\u{2193}] Select  [Enter] Chat  [/] Filter  [i] Invite  [Tab] Back  [q] Quit"
    } else {
        "[1-4] Nav  [\u{2190}\u{2192}] Game  [m] Mode  [Space] Ready  [i] Invite  [Enter] Play  [Tab] Friends  [q] Quit"
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if let Some(latest) = state.activity.front() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("\u{2022} {}", latest),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
