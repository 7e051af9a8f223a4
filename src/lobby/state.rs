//! Central lobby state: navigation, social panels, settings modal, and the
//! embedded fruit-matching session.
//!
//! Everything mutates through methods here or through the input dispatcher;
//! the UI layer only reads.

use std::collections::{HashMap, VecDeque};

use rand::Rng;

use super::catalog::{GameInfo, FRUIT_MATCH_ID, GAMES};
use super::friends::{
    mock_roster, ChatMessage, Friend, Presence, CANNED_REPLY, REPLY_DELAY_MS,
};
use super::news::{NewsItem, MOCK_NEWS};
use super::party::{self, PartyMember};
use super::profile::Profile;
use crate::fruit_match::{self, CascadePacing, FruitMatchGame};
use crate::settings::Settings;

/// Max entries kept in the activity feed.
const MAX_ACTIVITY_ENTRIES: usize = 50;

/// Main content tabs, mirroring the left nav.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Play,
    Profile,
}

impl Tab {
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Play => "Play",
            Tab::Profile => "Profile",
        }
    }
}

/// Which pane keyboard input goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Content,
    Friends,
}

/// At most one overlay is open at a time; overlays take input priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Settings,
    Invite,
}

/// A canned chat reply scheduled on the tick loop.
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub friend_id: String,
    pub remaining_ms: u64,
}

pub struct LobbyState {
    pub tab: Tab,
    pub focus: Focus,
    pub overlay: Overlay,

    // Friends panel
    pub friends: Vec<Friend>,
    pub chats: HashMap<String, Vec<ChatMessage>>,
    /// Index into the filtered friend list.
    pub selected_friend: usize,
    pub friend_filter: String,
    /// True while the filter line has keyboard focus.
    pub filter_editing: bool,
    /// Chat compose buffer; `Some` while typing a message.
    pub compose: Option<String>,

    // Play tab
    pub party: Vec<PartyMember>,
    pub selected_game: usize,
    pub selected_mode: usize,
    pub ready: bool,
    /// True while the fruit board has keyboard focus.
    pub in_match: bool,
    pub match_game: FruitMatchGame,

    // Invite overlay
    pub invite_filter: String,
    pub invite_selected: usize,

    // Settings overlay
    pub settings: Settings,
    pub settings_draft: Settings,
    pub settings_cursor: usize,

    pub profile: Profile,
    /// In-app activity feed, newest first.
    pub activity: VecDeque<String>,
    pub pending_replies: Vec<PendingReply>,
    /// Unread chat replies, shown on the top-bar bell.
    pub unread_notifications: u32,
}

impl LobbyState {
    pub fn new<R: Rng>(settings: Settings, rng: &mut R) -> Self {
        let friends = mock_roster();

        // Seeded conversation with the first friend.
        let mut chats: HashMap<String, Vec<ChatMessage>> = HashMap::new();
        chats.insert(
            friends[0].id.to_string(),
            vec![
                ChatMessage::new(false, "Want to play some games? \u{1F3AE}"),
                ChatMessage::new(true, "Sure! What game are you thinking?"),
            ],
        );

        let party = party::solo_party(&settings.display_name);
        let match_game = fruit_match::new_game(CascadePacing::staggered(), rng);

        let mut state = Self {
            tab: Tab::Play,
            focus: Focus::Content,
            overlay: Overlay::None,
            friends,
            chats,
            selected_friend: 0,
            friend_filter: String::new(),
            filter_editing: false,
            compose: None,
            party,
            selected_game: 0,
            selected_mode: 0,
            ready: false,
            in_match: false,
            match_game,
            invite_filter: String::new(),
            invite_selected: 0,
            settings_draft: settings.clone(),
            settings,
            settings_cursor: 0,
            profile: Profile::new(),
            activity: VecDeque::new(),
            pending_replies: Vec::new(),
            unread_notifications: 0,
        };
        state.report_generation();
        state
    }

    pub fn log_activity(&mut self, message: impl Into<String>) {
        if self.activity.len() >= MAX_ACTIVITY_ENTRIES {
            self.activity.pop_back();
        }
        self.activity.push_front(message.into());
    }

    /// Advance scheduled work. Returns true if anything observable changed.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        let mut due: Vec<String> = Vec::new();
        self.pending_replies.retain_mut(|reply| {
            if reply.remaining_ms > dt_ms {
                reply.remaining_ms -= dt_ms;
                true
            } else {
                due.push(reply.friend_id.clone());
                false
            }
        });

        let changed = !due.is_empty();
        for friend_id in due {
            self.chats
                .entry(friend_id)
                .or_default()
                .push(ChatMessage::new(false, CANNED_REPLY));
            if self.settings.notifications {
                self.unread_notifications += 1;
            }
        }
        changed
    }

    // ---- Friends & chat ----

    pub fn friend_by_id(&self, friend_id: &str) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == friend_id)
    }

    /// Send a chat message to a friend and schedule the canned reply.
    pub fn send_chat(&mut self, friend_id: &str, text: String) {
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.chats
            .entry(friend_id.to_string())
            .or_default()
            .push(ChatMessage::new(true, text));
        self.pending_replies.push(PendingReply {
            friend_id: friend_id.to_string(),
            remaining_ms: REPLY_DELAY_MS,
        });
    }

    /// Post the party-invite notice into a friend's chat.
    pub fn chat_invite(&mut self, friend_id: &str) {
        self.chats
            .entry(friend_id.to_string())
            .or_default()
            .push(ChatMessage::new(true, "\u{1F4E8} Party invite sent."));
    }

    /// Invite a friend to the party: adds them as a member (deduplicated,
    /// online only) and posts the invite notice to their chat.
    pub fn invite_to_party(&mut self, friend_id: &str) {
        let Some(friend) = self.friend_by_id(friend_id).cloned() else {
            return;
        };
        if friend.status == Presence::Offline {
            return;
        }
        if party::add_member(&mut self.party, &friend) {
            self.log_activity(format!("{} joined the party", friend.name));
        }
        self.chat_invite(friend_id);
    }

    pub fn mark_chats_read(&mut self) {
        self.unread_notifications = 0;
    }

    /// Kick the most recently added party member. The leader always stays.
    pub fn remove_last_party_member(&mut self) {
        let Some(member) = self
            .party
            .iter()
            .rev()
            .find(|m| m.role == party::PartyRole::Member)
            .cloned()
        else {
            return;
        };
        if party::remove_member(&mut self.party, &member.id) {
            self.log_activity(format!("{} left the party", member.name));
        }
    }

    // ---- Play tab ----

    pub fn selected_game_info(&self) -> &'static GameInfo {
        &GAMES[self.selected_game.min(GAMES.len() - 1)]
    }

    pub fn fruit_match_selected(&self) -> bool {
        self.selected_game_info().id == FRUIT_MATCH_ID
    }

    pub fn cycle_game(&mut self, delta: i32) {
        let len = GAMES.len() as i32;
        self.selected_game = ((self.selected_game as i32 + delta).rem_euclid(len)) as usize;
        self.selected_mode = 0;
    }

    pub fn cycle_mode(&mut self) {
        let modes = self.selected_game_info().modes.len();
        self.selected_mode = (self.selected_mode + 1) % modes;
    }

    /// Give the fruit board keyboard focus and unpause the session.
    pub fn enter_match(&mut self) {
        if !self.fruit_match_selected() {
            return;
        }
        self.in_match = true;
        self.match_game.active = true;
    }

    /// Return focus to the lobby. The session stays around, paused.
    pub fn leave_match(&mut self) {
        self.in_match = false;
        self.match_game.active = false;
    }

    /// Start a fresh fruit-match session, discarding any in-flight cascade.
    pub fn reset_match<R: Rng>(&mut self, rng: &mut R) {
        fruit_match::reset_game(&mut self.match_game, rng);
        self.match_game.active = self.in_match;
        self.report_generation();
    }

    /// Surface the generator's soft ceiling condition in the activity feed.
    fn report_generation(&mut self) {
        if !self.match_game.generation_clean {
            self.log_activity(format!(
                "Fruit board still unsettled after {} repairs",
                self.match_game.generation_attempts
            ));
        }
    }

    pub fn news(&self) -> &'static [NewsItem] {
        MOCK_NEWS
    }
}
