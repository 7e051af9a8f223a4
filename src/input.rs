//! Keyboard dispatch for the lobby.
//!
//! A priority chain: overlays first, then text-entry modes, then the fruit
//! board, then the focused pane.

use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

use crate::fruit_match;
use crate::lobby::friends::{filter_friends, filter_invitable};
use crate::lobby::{Focus, LobbyState, Overlay, Tab};
use crate::settings::{adjust_row, toggle_row, Settings, SettingsRow};

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Exit,
}

/// Main dispatcher. `rng` feeds the fruit engine's refills.
pub fn handle_key<R: Rng>(state: &mut LobbyState, key: KeyEvent, rng: &mut R) -> InputResult {
    // 1. Overlays swallow everything.
    match state.overlay {
        Overlay::Settings => {
            handle_settings_key(state, key);
            return InputResult::Continue;
        }
        Overlay::Invite => {
            handle_invite_key(state, key);
            return InputResult::Continue;
        }
        Overlay::None => {}
    }

    // 2. Chat compose.
    if state.compose.is_some() {
        handle_compose_key(state, key);
        return InputResult::Continue;
    }

    // 3. Friend-filter entry.
    if state.filter_editing {
        handle_filter_key(state, key);
        return InputResult::Continue;
    }

    // 4. The fruit board, while it has focus.
    if state.in_match {
        handle_match_key(state, key, rng);
        return InputResult::Continue;
    }

    // 5. Focused pane.
    match state.focus {
        Focus::Friends => handle_friends_key(state, key),
        Focus::Content => handle_content_key(state, key),
    }
}

fn handle_settings_key(state: &mut LobbyState, key: KeyEvent) {
    let row = SettingsRow::from_index(state.settings_cursor);
    match key.code {
        KeyCode::Esc => state.overlay = Overlay::None,
        KeyCode::Up => {
            state.settings_cursor = state.settings_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            state.settings_cursor = (state.settings_cursor + 1).min(SettingsRow::ALL.len() - 1);
        }
        KeyCode::Left => adjust_row(&mut state.settings_draft, row, -1),
        KeyCode::Right => adjust_row(&mut state.settings_draft, row, 1),
        KeyCode::Enter => match row {
            SettingsRow::Save => {
                state.settings = state.settings_draft.clone();
                // The party leader carries the display name.
                if let Some(leader) = state.party.first_mut() {
                    leader.name = state.settings.display_name.clone();
                }
                match state.settings.save() {
                    Ok(()) => state.log_activity("Settings saved"),
                    Err(e) => state.log_activity(format!("Could not save settings: {}", e)),
                }
                state.overlay = Overlay::None;
            }
            SettingsRow::Cancel => state.overlay = Overlay::None,
            SettingsRow::ResetDefaults => state.settings_draft = Settings::default(),
            _ => toggle_row(&mut state.settings_draft, row),
        },
        KeyCode::Backspace if row.is_text() => {
            if let Some(field) = text_field_mut(&mut state.settings_draft, row) {
                field.pop();
            }
        }
        KeyCode::Char(c) if row.is_text() => {
            if let Some(field) = text_field_mut(&mut state.settings_draft, row) {
                field.push(c);
            }
        }
        _ => {}
    }
}

fn text_field_mut(settings: &mut Settings, row: SettingsRow) -> Option<&mut String> {
    match row {
        SettingsRow::DisplayName => Some(&mut settings.display_name),
        SettingsRow::Tagline => Some(&mut settings.tagline),
        _ => None,
    }
}

fn handle_invite_key(state: &mut LobbyState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.overlay = Overlay::None,
        KeyCode::Up => state.invite_selected = state.invite_selected.saturating_sub(1),
        KeyCode::Down => state.invite_selected += 1, // clamped on use/draw
        KeyCode::Enter => {
            let invitable = filter_invitable(&state.friends, &state.invite_filter);
            if invitable.is_empty() {
                return;
            }
            let pick = state.invite_selected.min(invitable.len() - 1);
            let friend_id = state.friends[invitable[pick]].id.to_string();
            state.invite_to_party(&friend_id);
            state.overlay = Overlay::None;
        }
        KeyCode::Backspace => {
            state.invite_filter.pop();
            state.invite_selected = 0;
        }
        KeyCode::Char(c) => {
            state.invite_filter.push(c);
            state.invite_selected = 0;
        }
        _ => {}
    }
}

fn handle_compose_key(state: &mut LobbyState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.compose = None,
        KeyCode::Enter => {
            let text = state.compose.take().unwrap_or_default();
            if let Some(friend_id) = selected_friend_id(state) {
                state.send_chat(&friend_id, text);
            }
            // Stay in compose so the conversation can continue.
            state.compose = Some(String::new());
        }
        KeyCode::Backspace => {
            if let Some(buffer) = state.compose.as_mut() {
                buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(buffer) = state.compose.as_mut() {
                buffer.push(c);
            }
        }
        _ => {}
    }
}

fn handle_filter_key(state: &mut LobbyState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => state.filter_editing = false,
        KeyCode::Backspace => {
            state.friend_filter.pop();
            state.selected_friend = 0;
        }
        KeyCode::Char(c) => {
            state.friend_filter.push(c);
            state.selected_friend = 0;
        }
        _ => {}
    }
}

fn handle_match_key<R: Rng>(state: &mut LobbyState, key: KeyEvent, rng: &mut R) {
    match key.code {
        KeyCode::Esc => state.leave_match(),
        KeyCode::Up => state.match_game.move_cursor(-1, 0),
        KeyCode::Down => state.match_game.move_cursor(1, 0),
        KeyCode::Left => state.match_game.move_cursor(0, -1),
        KeyCode::Right => state.match_game.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let (row, col) = state.match_game.cursor;
            fruit_match::handle_tile_click(&mut state.match_game, row, col, rng);
        }
        KeyCode::Char('n') => state.reset_match(rng),
        _ => {}
    }
}

fn selected_friend_id(state: &LobbyState) -> Option<String> {
    let visible = filter_friends(&state.friends, &state.friend_filter);
    if visible.is_empty() {
        return None;
    }
    let pick = state.selected_friend.min(visible.len() - 1);
    Some(state.friends[visible[pick]].id.to_string())
}

fn handle_friends_key(state: &mut LobbyState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Tab | KeyCode::Esc => state.focus = Focus::Content,
        KeyCode::Up => state.selected_friend = state.selected_friend.saturating_sub(1),
        KeyCode::Down => {
            let visible = filter_friends(&state.friends, &state.friend_filter).len();
            if visible > 0 {
                state.selected_friend = (state.selected_friend + 1).min(visible - 1);
            }
        }
        KeyCode::Enter => {
            if selected_friend_id(state).is_some() {
                state.compose = Some(String::new());
                state.mark_chats_read();
            }
        }
        KeyCode::Char('/') => {
            state.filter_editing = true;
        }
        KeyCode::Char('i') => {
            if let Some(friend_id) = selected_friend_id(state) {
                state.chat_invite(&friend_id);
                state.log_activity("Party invite sent");
            }
        }
        KeyCode::Char('q') => return InputResult::Exit,
        _ => {}
    }
    InputResult::Continue
}

fn handle_content_key(state: &mut LobbyState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Char('q') => return InputResult::Exit,
        KeyCode::Tab => {
            state.focus = Focus::Friends;
            state.mark_chats_read();
        }
        KeyCode::Char('1') => state.tab = Tab::Home,
        KeyCode::Char('2') => state.tab = Tab::Play,
        KeyCode::Char('3') => state.tab = Tab::Profile,
        KeyCode::Char('4') | KeyCode::Char('o') => {
            state.settings_draft = state.settings.clone();
            state.settings_cursor = 0;
            state.overlay = Overlay::Settings;
        }
        KeyCode::Left => state.cycle_game(-1),
        KeyCode::Right => state.cycle_game(1),
        KeyCode::Char('m') if state.tab == Tab::Play => state.cycle_mode(),
        KeyCode::Char(' ') if state.tab == Tab::Play => state.ready = !state.ready,
        KeyCode::Char('i') if state.tab == Tab::Play => {
            state.invite_filter.clear();
            state.invite_selected = 0;
            state.overlay = Overlay::Invite;
        }
        KeyCode::Char('x') if state.tab == Tab::Play => state.remove_last_party_member(),
        KeyCode::Enter => state.enter_match(),
        _ => {}
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_state() -> (LobbyState, StdRng) {
        let mut rng = StdRng::seed_from_u64(30);
        let state = LobbyState::new(Settings::default(), &mut rng);
        (state, rng)
    }

    #[test]
    fn test_quit_key_exits() {
        let (mut state, mut rng) = make_state();
        assert_eq!(
            handle_key(&mut state, press(KeyCode::Char('q')), &mut rng),
            InputResult::Exit
        );
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let (mut state, mut rng) = make_state();
        handle_key(&mut state, press(KeyCode::Char('1')), &mut rng);
        assert_eq!(state.tab, Tab::Home);
        handle_key(&mut state, press(KeyCode::Char('3')), &mut rng);
        assert_eq!(state.tab, Tab::Profile);
        handle_key(&mut state, press(KeyCode::Char('2')), &mut rng);
        assert_eq!(state.tab, Tab::Play);
    }

    #[test]
    fn test_tab_key_toggles_focus() {
        let (mut state, mut rng) = make_state();
        assert_eq!(state.focus, Focus::Content);
        handle_key(&mut state, press(KeyCode::Tab), &mut rng);
        assert_eq!(state.focus, Focus::Friends);
        handle_key(&mut state, press(KeyCode::Tab), &mut rng);
        assert_eq!(state.focus, Focus::Content);
    }

    #[test]
    fn test_enter_match_and_board_keys() {
        let (mut state, mut rng) = make_state();
        while !state.fruit_match_selected() {
            state.cycle_game(1);
        }
        handle_key(&mut state, press(KeyCode::Enter), &mut rng);
        assert!(state.in_match);

        let cursor = state.match_game.cursor;
        handle_key(&mut state, press(KeyCode::Down), &mut rng);
        assert_eq!(state.match_game.cursor, (cursor.0 + 1, cursor.1));

        handle_key(&mut state, press(KeyCode::Enter), &mut rng);
        assert!(state.match_game.selection.is_some());

        handle_key(&mut state, press(KeyCode::Esc), &mut rng);
        assert!(!state.in_match);
        assert!(!state.match_game.active);
    }

    #[test]
    fn test_board_reset_key() {
        let (mut state, mut rng) = make_state();
        while !state.fruit_match_selected() {
            state.cycle_game(1);
        }
        handle_key(&mut state, press(KeyCode::Enter), &mut rng);
        state.match_game.score = 120;
        handle_key(&mut state, press(KeyCode::Char('n')), &mut rng);
        assert_eq!(state.match_game.score, 0);
        assert!(state.match_game.active);
    }

    #[test]
    fn test_compose_flow_sends_message() {
        let (mut state, mut rng) = make_state();
        handle_key(&mut state, press(KeyCode::Tab), &mut rng); // friends focus
        handle_key(&mut state, press(KeyCode::Enter), &mut rng); // open compose
        assert!(state.compose.is_some());

        for c in "yo".chars() {
            handle_key(&mut state, press(KeyCode::Char(c)), &mut rng);
        }
        handle_key(&mut state, press(KeyCode::Enter), &mut rng); // send

        let chat = state.chats.get("f1").unwrap();
        assert_eq!(chat.last().unwrap().text, "yo");
        assert!(chat.last().unwrap().from_me);
        // Buffer cleared but still composing.
        assert_eq!(state.compose.as_deref(), Some(""));

        handle_key(&mut state, press(KeyCode::Esc), &mut rng);
        assert!(state.compose.is_none());
    }

    #[test]
    fn test_friend_filter_narrows_selection() {
        let (mut state, mut rng) = make_state();
        handle_key(&mut state, press(KeyCode::Tab), &mut rng);
        handle_key(&mut state, press(KeyCode::Char('/')), &mut rng);
        assert!(state.filter_editing);

        for c in "maya".chars() {
            handle_key(&mut state, press(KeyCode::Char(c)), &mut rng);
        }
        handle_key(&mut state, press(KeyCode::Enter), &mut rng);
        assert!(!state.filter_editing);

        // Compose now targets Maya.
        handle_key(&mut state, press(KeyCode::Enter), &mut rng);
        for c in "hi".chars() {
            handle_key(&mut state, press(KeyCode::Char(c)), &mut rng);
        }
        handle_key(&mut state, press(KeyCode::Enter), &mut rng);
        assert!(state.chats.get("f3").is_some());
    }

    #[test]
    fn test_invite_overlay_adds_party_member() {
        let (mut state, mut rng) = make_state();
        handle_key(&mut state, press(KeyCode::Char('i')), &mut rng);
        assert_eq!(state.overlay, Overlay::Invite);

        for c in "leo".chars() {
            handle_key(&mut state, press(KeyCode::Char(c)), &mut rng);
        }
        handle_key(&mut state, press(KeyCode::Enter), &mut rng);
        assert_eq!(state.overlay, Overlay::None);
        assert_eq!(state.party.len(), 2);
        assert_eq!(state.party[1].name, "Leo");
    }

    #[test]
    fn test_settings_modal_save_and_cancel() {
        let (mut state, mut rng) = make_state();
        handle_key(&mut state, press(KeyCode::Char('o')), &mut rng);
        assert_eq!(state.overlay, Overlay::Settings);

        // First row is DisplayMode; cycle it right.
        handle_key(&mut state, press(KeyCode::Right), &mut rng);
        assert_ne!(state.settings_draft.display_mode, state.settings.display_mode);

        // Esc discards the draft.
        handle_key(&mut state, press(KeyCode::Esc), &mut rng);
        assert_eq!(state.overlay, Overlay::None);
        assert_eq!(state.settings, Settings::default());

        // Reopen: draft starts from saved settings again.
        handle_key(&mut state, press(KeyCode::Char('o')), &mut rng);
        assert_eq!(state.settings_draft, state.settings);
    }

    #[test]
    fn test_settings_text_editing() {
        let (mut state, mut rng) = make_state();
        handle_key(&mut state, press(KeyCode::Char('o')), &mut rng);

        // Move to the DisplayName row.
        let name_index = SettingsRow::ALL
            .iter()
            .position(|r| *r == SettingsRow::DisplayName)
            .unwrap();
        for _ in 0..name_index {
            handle_key(&mut state, press(KeyCode::Down), &mut rng);
        }
        for _ in 0..3 {
            handle_key(&mut state, press(KeyCode::Backspace), &mut rng);
        }
        assert_eq!(state.settings_draft.display_name, "Kay");
        handle_key(&mut state, press(KeyCode::Char('a')), &mut rng);
        assert_eq!(state.settings_draft.display_name, "Kaya");
    }

    #[test]
    fn test_ready_toggle_on_play_tab() {
        let (mut state, mut rng) = make_state();
        assert!(!state.ready);
        handle_key(&mut state, press(KeyCode::Char(' ')), &mut rng);
        assert!(state.ready);
        handle_key(&mut state, press(KeyCode::Char(' ')), &mut rng);
        assert!(!state.ready);
    }
}
