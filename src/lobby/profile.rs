//! Player profile shown on the Profile tab. Mock stats only.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: String,
    pub level: u32,
    pub wins: u32,
    pub losses: u32,
}

/// One entry of the mock recent-match list.
#[derive(Debug, Clone)]
pub struct RecentMatch {
    pub number: u32,
    pub won: bool,
    pub kda: f64,
}

impl Profile {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            level: 42,
            wins: 128,
            losses: 111,
        }
    }

    /// Win rate as a whole percentage, rounded down.
    pub fn win_rate_percent(&self) -> u32 {
        let total = self.wins + self.losses;
        if total == 0 {
            return 0;
        }
        self.wins * 100 / total
    }

    /// Ten mock recent matches, alternating win/loss.
    pub fn recent_matches(&self) -> Vec<RecentMatch> {
        (0..10)
            .map(|i| RecentMatch {
                number: 1024 + i,
                won: i % 2 == 1,
                kda: 1.0 + (i as f64 * 0.4) % 4.0,
            })
            .collect()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let profile = Profile::new();
        assert_eq!(profile.level, 42);
        assert_eq!(profile.wins, 128);
        assert_eq!(profile.losses, 111);
        assert!(!profile.id.is_empty());
    }

    #[test]
    fn test_win_rate() {
        let profile = Profile::new();
        assert_eq!(profile.win_rate_percent(), 53);

        let empty = Profile {
            wins: 0,
            losses: 0,
            ..Profile::new()
        };
        assert_eq!(empty.win_rate_percent(), 0);
    }

    #[test]
    fn test_recent_matches_alternate() {
        let matches = Profile::new().recent_matches();
        assert_eq!(matches.len(), 10);
        assert!(!matches[0].won);
        assert!(matches[1].won);
        assert_eq!(matches[0].number, 1024);
    }
}
