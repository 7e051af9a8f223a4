//! Party roster: the player plus invited friends.

use super::friends::Friend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
    Leader,
    Member,
}

impl PartyRole {
    pub fn name(&self) -> &'static str {
        match self {
            PartyRole::Leader => "Leader",
            PartyRole::Member => "Member",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PartyMember {
    pub id: String,
    pub name: String,
    pub role: PartyRole,
    pub avatar: String,
}

/// A fresh party: just the player, as leader.
pub fn solo_party(player_name: &str) -> Vec<PartyMember> {
    vec![PartyMember {
        id: "me".to_string(),
        name: player_name.to_string(),
        role: PartyRole::Leader,
        avatar: "\u{1F981}".to_string(), // 🦁
    }]
}

/// Add a friend to the party as a member. Deduplicates by name; returns
/// false if they were already in.
pub fn add_member(party: &mut Vec<PartyMember>, friend: &Friend) -> bool {
    if party.iter().any(|m| m.name == friend.name) {
        return false;
    }
    party.push(PartyMember {
        id: friend.id.to_string(),
        name: friend.name.to_string(),
        role: PartyRole::Member,
        avatar: friend.avatar.to_string(),
    });
    true
}

/// Remove a member by id. The leader cannot be removed.
pub fn remove_member(party: &mut Vec<PartyMember>, member_id: &str) -> bool {
    if let Some(pos) = party
        .iter()
        .position(|m| m.id == member_id && m.role != PartyRole::Leader)
    {
        party.remove(pos);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lobby::friends::mock_roster;

    #[test]
    fn test_solo_party_has_leader() {
        let party = solo_party("Kayden");
        assert_eq!(party.len(), 1);
        assert_eq!(party[0].role, PartyRole::Leader);
        assert_eq!(party[0].name, "Kayden");
    }

    #[test]
    fn test_add_member_deduplicates_by_name() {
        let roster = mock_roster();
        let mut party = solo_party("Kayden");

        assert!(add_member(&mut party, &roster[0]));
        assert_eq!(party.len(), 2);
        assert_eq!(party[1].role, PartyRole::Member);

        // Second invite of the same friend is a no-op.
        assert!(!add_member(&mut party, &roster[0]));
        assert_eq!(party.len(), 2);
    }

    #[test]
    fn test_remove_member() {
        let roster = mock_roster();
        let mut party = solo_party("Kayden");
        add_member(&mut party, &roster[0]);
        add_member(&mut party, &roster[2]);

        assert!(remove_member(&mut party, "f1"));
        assert_eq!(party.len(), 2);
        assert!(party.iter().all(|m| m.name != "Aki"));

        // Unknown id
        assert!(!remove_member(&mut party, "f9"));
    }

    #[test]
    fn test_leader_cannot_be_removed() {
        let mut party = solo_party("Kayden");
        assert!(!remove_member(&mut party, "me"));
        assert_eq!(party.len(), 1);
    }
}
