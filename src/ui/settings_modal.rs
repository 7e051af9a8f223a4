//! Settings modal overlay.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::lobby::LobbyState;
use crate::settings::{Settings, SettingsRow};

/// Section header shown above the first row of each group.
fn section_for(row: SettingsRow) -> Option<&'static str> {
    match row {
        SettingsRow::DisplayMode => Some("Video"),
        SettingsRow::MasterVolume => Some("Audio"),
        SettingsRow::Region => Some("Account"),
        SettingsRow::DarkTheme => Some("Appearance"),
        SettingsRow::Save => Some(""),
        _ => None,
    }
}

fn value_for(settings: &Settings, row: SettingsRow) -> String {
    match row {
        SettingsRow::DisplayMode => settings.display_mode.name().to_string(),
        SettingsRow::FpsLimit => settings.fps_label(),
        SettingsRow::Vsync => checkbox(settings.vsync),
        SettingsRow::ShowFps => checkbox(settings.show_fps),
        SettingsRow::MasterVolume => volume_bar(settings.master_volume),
        SettingsRow::SfxVolume => volume_bar(settings.sfx_volume),
        SettingsRow::VoiceVolume => volume_bar(settings.voice_volume),
        SettingsRow::MuteUnfocused => checkbox(settings.mute_unfocused),
        SettingsRow::Region => settings.region.name().to_string(),
        SettingsRow::DisplayName => settings.display_name.clone(),
        SettingsRow::Tagline => settings.tagline.clone(),
        SettingsRow::DarkTheme => {
            if settings.dark_theme {
                "\u{1F319} Dark".to_string()
            } else {
                "\u{2600} Light".to_string()
            }
        }
        SettingsRow::CompactUi => checkbox(settings.compact_ui),
        SettingsRow::Notifications => checkbox(settings.notifications),
        SettingsRow::AutoAcceptParty => checkbox(settings.auto_accept_party),
        SettingsRow::Save | SettingsRow::Cancel | SettingsRow::ResetDefaults => String::new(),
    }
}

fn checkbox(on: bool) -> String {
    if on {
        "[x]".to_string()
    } else {
        "[ ]".to_string()
    }
}

fn volume_bar(value: u8) -> String {
    let filled = (value as usize) / 10;
    format!("{}{} {:>3}", "\u{2588}".repeat(filled), "\u{2591}".repeat(10 - filled), value)
}

pub fn draw_settings_modal(frame: &mut Frame, area: Rect, state: &LobbyState) {
    let width = 54u16.min(area.width);
    let height = 28u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let modal_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal_area);
    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let mut lines: Vec<Line> = Vec::new();
    for (index, row) in SettingsRow::ALL.iter().enumerate() {
        if let Some(section) = section_for(*row) {
            if section.is_empty() {
                lines.push(Line::from(""));
            } else {
                lines.push(Line::from(Span::styled(
                    section,
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }

        let selected = index == state.settings_cursor;
        let marker = if selected { "\u{25B8} " } else { "  " };
        let label_style = if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if row.is_button() {
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("[ {} ]", row.label()), label_style),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<26}", row.label()), label_style),
                Span::styled(
                    value_for(&state.settings_draft, *row),
                    Style::default().fg(Color::White),
                ),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[\u{2191}\u{2193}] Row  [\u{2190}\u{2192}] Adjust  [Enter] Toggle/Apply  [Esc] Cancel",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
