//! Lobby shell: navigation, friends/chat, party, news, profile, and the
//! state object tying them to the embedded fruit-matching game.

pub mod catalog;
pub mod friends;
pub mod news;
pub mod party;
pub mod profile;
pub mod state;

#[allow(unused_imports)]
pub use catalog::{GameInfo, FRUIT_MATCH_ID, GAMES};
#[allow(unused_imports)]
pub use friends::{ChatMessage, Friend, Presence};
#[allow(unused_imports)]
pub use party::{PartyMember, PartyRole};
#[allow(unused_imports)]
pub use profile::Profile;
pub use state::{Focus, LobbyState, Overlay, Tab};
