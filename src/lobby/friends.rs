//! Friends roster and per-friend chat.
//!
//! All social data is mock/in-memory; chat replies are canned and scheduled
//! on the lobby tick loop.

use chrono::Local;

/// Milliseconds between sending a chat message and the canned reply.
pub const REPLY_DELAY_MS: u64 = 600;

/// The canned reply every friend sends back.
pub const CANNED_REPLY: &str = "Let's game together!";

/// Presence state shown as a colored badge next to each friend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Online,
    Away,
    Offline,
}

impl Presence {
    pub fn name(&self) -> &'static str {
        match self {
            Presence::Online => "Online",
            Presence::Away => "Away",
            Presence::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Friend {
    pub id: &'static str,
    pub name: &'static str,
    pub status: Presence,
    /// What the friend is currently playing; "—" when offline.
    pub game: &'static str,
    pub avatar: &'static str,
}

/// One chat message in a friend's conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub from_me: bool,
    pub text: String,
    /// HH:MM wall-clock stamp at send time.
    pub time: String,
}

impl ChatMessage {
    pub fn new(from_me: bool, text: impl Into<String>) -> Self {
        Self {
            from_me,
            text: text.into(),
            time: timestamp_now(),
        }
    }
}

/// Current local time as HH:MM for chat bubbles.
pub fn timestamp_now() -> String {
    Local::now().format("%H:%M").to_string()
}

/// The mock roster every session starts with.
pub fn mock_roster() -> Vec<Friend> {
    vec![
        Friend {
            id: "f1",
            name: "Aki",
            status: Presence::Online,
            game: "Tactical Shooter",
            avatar: "\u{1F98A}", // 🦊
        },
        Friend {
            id: "f2",
            name: "Noah",
            status: Presence::Away,
            game: "Battle Royale",
            avatar: "\u{1F43C}", // 🐼
        },
        Friend {
            id: "f3",
            name: "Maya",
            status: Presence::Online,
            game: "MOBA",
            avatar: "\u{1F431}", // 🐱
        },
        Friend {
            id: "f4",
            name: "Rin",
            status: Presence::Offline,
            game: "\u{2014}",
            avatar: "\u{1F427}", // 🐧
        },
        Friend {
            id: "f5",
            name: "Leo",
            status: Presence::Online,
            game: "RTS",
            avatar: "\u{1F42F}", // 🐯
        },
    ]
}

/// Indices of roster entries whose name contains `filter`
/// (case-insensitive). An empty filter matches everyone.
pub fn filter_friends(friends: &[Friend], filter: &str) -> Vec<usize> {
    let needle = filter.to_lowercase();
    friends
        .iter()
        .enumerate()
        .filter(|(_, f)| f.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of non-offline roster entries matching `filter`, for the party
/// invite picker.
pub fn filter_invitable(friends: &[Friend], filter: &str) -> Vec<usize> {
    let needle = filter.to_lowercase();
    friends
        .iter()
        .enumerate()
        .filter(|(_, f)| f.status != Presence::Offline && f.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_roster_shape() {
        let roster = mock_roster();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster[0].name, "Aki");
        assert_eq!(roster[3].status, Presence::Offline);
        // Ids are unique
        let mut ids: Vec<_> = roster.iter().map(|f| f.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let roster = mock_roster();
        assert_eq!(filter_friends(&roster, "aki"), vec![0]);
        assert_eq!(filter_friends(&roster, "AKI"), vec![0]);
        assert_eq!(filter_friends(&roster, ""), vec![0, 1, 2, 3, 4]);
        assert!(filter_friends(&roster, "zzz").is_empty());
    }

    #[test]
    fn test_invitable_excludes_offline() {
        let roster = mock_roster();
        let invitable = filter_invitable(&roster, "");
        assert_eq!(invitable, vec![0, 1, 2, 4]); // Rin (offline) excluded
        assert!(filter_invitable(&roster, "rin").is_empty());
    }

    #[test]
    fn test_chat_message_timestamp_format() {
        let msg = ChatMessage::new(true, "hello");
        assert!(msg.from_me);
        assert_eq!(msg.time.len(), 5);
        assert_eq!(&msg.time[2..3], ":");
    }
}
