//! Player settings: video, audio, account, and appearance preferences.
//!
//! Persisted as JSON in ~/.parlor/settings.json. Loading falls back to
//! defaults on a missing or corrupt file so the lobby always starts.

use serde::{Deserialize, Serialize};
use std::io;

use crate::utils::persistence;

pub const SETTINGS_FILE: &str = "settings.json";

/// FPS limit choices cycled by the settings modal. 0 means unlimited.
pub const FPS_CHOICES: [u32; 6] = [30, 60, 120, 144, 240, 0];

/// Volume slider step per keypress.
const VOLUME_STEP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    Windowed,
    Borderless,
    Fullscreen,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [
        DisplayMode::Windowed,
        DisplayMode::Borderless,
        DisplayMode::Fullscreen,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::Windowed => "Windowed",
            DisplayMode::Borderless => "Borderless",
            DisplayMode::Fullscreen => "Fullscreen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Jp,
    Na,
    Euw,
    Eune,
    Kr,
    Oce,
    Br,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Jp,
        Region::Na,
        Region::Euw,
        Region::Eune,
        Region::Kr,
        Region::Oce,
        Region::Br,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Jp => "JP",
            Region::Na => "NA",
            Region::Euw => "EUW",
            Region::Eune => "EUNE",
            Region::Kr => "KR",
            Region::Oce => "OCE",
            Region::Br => "BR",
        }
    }
}

/// All player-tunable preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Video
    pub display_mode: DisplayMode,
    pub fps_limit: u32,
    pub vsync: bool,
    pub show_fps: bool,
    // Audio
    pub master_volume: u8,
    pub sfx_volume: u8,
    pub voice_volume: u8,
    pub mute_unfocused: bool,
    // Account
    pub region: Region,
    pub display_name: String,
    pub tagline: String,
    // Appearance
    pub dark_theme: bool,
    pub compact_ui: bool,
    pub notifications: bool,
    pub auto_accept_party: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Windowed,
            fps_limit: 60,
            vsync: true,
            show_fps: false,
            master_volume: 70,
            sfx_volume: 80,
            voice_volume: 65,
            mute_unfocused: false,
            region: Region::Jp,
            display_name: "Kayden".to_string(),
            tagline: "#JP".to_string(),
            dark_theme: true,
            compact_ui: false,
            notifications: true,
            auto_accept_party: false,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        persistence::load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) -> io::Result<()> {
        persistence::save_json(SETTINGS_FILE, self)
    }

    pub fn fps_label(&self) -> String {
        if self.fps_limit == 0 {
            "Unlimited".to_string()
        } else {
            self.fps_limit.to_string()
        }
    }
}

/// One selectable row of the settings modal, in display order. The last
/// three are action buttons rather than fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    DisplayMode,
    FpsLimit,
    Vsync,
    ShowFps,
    MasterVolume,
    SfxVolume,
    VoiceVolume,
    MuteUnfocused,
    Region,
    DisplayName,
    Tagline,
    DarkTheme,
    CompactUi,
    Notifications,
    AutoAcceptParty,
    Save,
    Cancel,
    ResetDefaults,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 18] = [
        SettingsRow::DisplayMode,
        SettingsRow::FpsLimit,
        SettingsRow::Vsync,
        SettingsRow::ShowFps,
        SettingsRow::MasterVolume,
        SettingsRow::SfxVolume,
        SettingsRow::VoiceVolume,
        SettingsRow::MuteUnfocused,
        SettingsRow::Region,
        SettingsRow::DisplayName,
        SettingsRow::Tagline,
        SettingsRow::DarkTheme,
        SettingsRow::CompactUi,
        SettingsRow::Notifications,
        SettingsRow::AutoAcceptParty,
        SettingsRow::Save,
        SettingsRow::Cancel,
        SettingsRow::ResetDefaults,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(SettingsRow::Save)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsRow::DisplayMode => "Display Mode",
            SettingsRow::FpsLimit => "FPS Limit",
            SettingsRow::Vsync => "V-Sync",
            SettingsRow::ShowFps => "Show FPS Counter",
            SettingsRow::MasterVolume => "Master",
            SettingsRow::SfxVolume => "SFX",
            SettingsRow::VoiceVolume => "Voice",
            SettingsRow::MuteUnfocused => "Mute when unfocused",
            SettingsRow::Region => "Region",
            SettingsRow::DisplayName => "Display Name",
            SettingsRow::Tagline => "Tagline",
            SettingsRow::DarkTheme => "Theme",
            SettingsRow::CompactUi => "Compact UI",
            SettingsRow::Notifications => "Notifications",
            SettingsRow::AutoAcceptParty => "Auto-accept party invites",
            SettingsRow::Save => "Save",
            SettingsRow::Cancel => "Cancel",
            SettingsRow::ResetDefaults => "Reset to Defaults",
        }
    }

    /// Rows edited by typing rather than cycling.
    pub fn is_text(&self) -> bool {
        matches!(self, SettingsRow::DisplayName | SettingsRow::Tagline)
    }

    pub fn is_button(&self) -> bool {
        matches!(
            self,
            SettingsRow::Save | SettingsRow::Cancel | SettingsRow::ResetDefaults
        )
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, delta: i32) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0) as i32;
    let len = all.len() as i32;
    all[((idx + delta).rem_euclid(len)) as usize]
}

/// Apply a left/right adjustment to a field row. Text rows and buttons are
/// untouched.
pub fn adjust_row(settings: &mut Settings, row: SettingsRow, delta: i32) {
    match row {
        SettingsRow::DisplayMode => {
            settings.display_mode = cycle(&DisplayMode::ALL, settings.display_mode, delta);
        }
        SettingsRow::FpsLimit => {
            settings.fps_limit = cycle(&FPS_CHOICES, settings.fps_limit, delta);
        }
        SettingsRow::Region => {
            settings.region = cycle(&Region::ALL, settings.region, delta);
        }
        SettingsRow::MasterVolume => {
            settings.master_volume = step_volume(settings.master_volume, delta);
        }
        SettingsRow::SfxVolume => {
            settings.sfx_volume = step_volume(settings.sfx_volume, delta);
        }
        SettingsRow::VoiceVolume => {
            settings.voice_volume = step_volume(settings.voice_volume, delta);
        }
        SettingsRow::Vsync
        | SettingsRow::ShowFps
        | SettingsRow::MuteUnfocused
        | SettingsRow::DarkTheme
        | SettingsRow::CompactUi
        | SettingsRow::Notifications
        | SettingsRow::AutoAcceptParty => toggle_row(settings, row),
        _ => {}
    }
}

/// Flip a boolean row. Non-boolean rows are untouched.
pub fn toggle_row(settings: &mut Settings, row: SettingsRow) {
    match row {
        SettingsRow::Vsync => settings.vsync = !settings.vsync,
        SettingsRow::ShowFps => settings.show_fps = !settings.show_fps,
        SettingsRow::MuteUnfocused => settings.mute_unfocused = !settings.mute_unfocused,
        SettingsRow::DarkTheme => settings.dark_theme = !settings.dark_theme,
        SettingsRow::CompactUi => settings.compact_ui = !settings.compact_ui,
        SettingsRow::Notifications => settings.notifications = !settings.notifications,
        SettingsRow::AutoAcceptParty => {
            settings.auto_accept_party = !settings.auto_accept_party;
        }
        _ => {}
    }
}

fn step_volume(current: u8, delta: i32) -> u8 {
    if delta >= 0 {
        current.saturating_add(VOLUME_STEP).min(100)
    } else {
        current.saturating_sub(VOLUME_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_values() {
        let s = Settings::default();
        assert_eq!(s.display_name, "Kayden");
        assert_eq!(s.tagline, "#JP");
        assert_eq!(s.region, Region::Jp);
        assert_eq!(s.display_mode, DisplayMode::Windowed);
        assert_eq!(s.fps_limit, 60);
        assert_eq!(s.master_volume, 70);
        assert_eq!(s.sfx_volume, 80);
        assert_eq!(s.voice_volume, 65);
        assert!(s.dark_theme);
        assert!(s.vsync);
        assert!(s.notifications);
        assert!(!s.compact_ui);
        assert!(!s.mute_unfocused);
        assert!(!s.auto_accept_party);
        assert!(!s.show_fps);
    }

    #[test]
    fn test_cycle_display_mode_wraps() {
        let mut s = Settings::default();
        adjust_row(&mut s, SettingsRow::DisplayMode, 1);
        assert_eq!(s.display_mode, DisplayMode::Borderless);
        adjust_row(&mut s, SettingsRow::DisplayMode, 1);
        assert_eq!(s.display_mode, DisplayMode::Fullscreen);
        adjust_row(&mut s, SettingsRow::DisplayMode, 1);
        assert_eq!(s.display_mode, DisplayMode::Windowed);
        adjust_row(&mut s, SettingsRow::DisplayMode, -1);
        assert_eq!(s.display_mode, DisplayMode::Fullscreen);
    }

    #[test]
    fn test_fps_cycle_reaches_unlimited() {
        let mut s = Settings::default();
        for _ in 0..4 {
            adjust_row(&mut s, SettingsRow::FpsLimit, 1);
        }
        assert_eq!(s.fps_limit, 0);
        assert_eq!(s.fps_label(), "Unlimited");
        adjust_row(&mut s, SettingsRow::FpsLimit, 1);
        assert_eq!(s.fps_limit, 30);
    }

    #[test]
    fn test_volume_clamps_at_bounds() {
        let mut s = Settings::default();
        s.master_volume = 98;
        adjust_row(&mut s, SettingsRow::MasterVolume, 1);
        assert_eq!(s.master_volume, 100);

        s.sfx_volume = 3;
        adjust_row(&mut s, SettingsRow::SfxVolume, -1);
        assert_eq!(s.sfx_volume, 0);
    }

    #[test]
    fn test_toggle_rows() {
        let mut s = Settings::default();
        toggle_row(&mut s, SettingsRow::Vsync);
        assert!(!s.vsync);
        toggle_row(&mut s, SettingsRow::DarkTheme);
        assert!(!s.dark_theme);
        // Toggling a non-boolean row does nothing.
        let before = s.clone();
        toggle_row(&mut s, SettingsRow::Region);
        assert_eq!(s, before);
    }

    #[test]
    fn test_adjust_ignores_text_and_buttons() {
        let mut s = Settings::default();
        let before = s.clone();
        adjust_row(&mut s, SettingsRow::DisplayName, 1);
        adjust_row(&mut s, SettingsRow::Save, 1);
        assert_eq!(s, before);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = Settings::default();
        s.region = Region::Oce;
        s.fps_limit = 144;
        s.display_name = "Aki".to_string();

        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        // Older settings files with missing fields still load.
        let back: Settings = serde_json::from_str(r#"{"fps_limit": 240}"#).unwrap();
        assert_eq!(back.fps_limit, 240);
        assert_eq!(back.display_name, "Kayden");
    }
}
