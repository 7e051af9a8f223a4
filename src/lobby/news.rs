//! Static news feed shown on the Home tab.

#[derive(Debug, Clone, Copy)]
pub struct NewsItem {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub time: &'static str,
}

pub const MOCK_NEWS: &[NewsItem] = &[
    NewsItem {
        title: "Patch 12.7 \u{2014} Support Items Rework",
        excerpt: "Gold flow and warding trinkets adjusted. Expect slower lane snowballs.",
        time: "2h ago",
    },
    NewsItem {
        title: "New Map Variant: Nightfall Rift",
        excerpt: "Dynamic fog-of-war pockets arrive in rotating queues this weekend.",
        time: "1d ago",
    },
    NewsItem {
        title: "Ranked Split Ends Aug 31",
        excerpt: "Climb now to secure your split emote and banner trims.",
        time: "3d ago",
    },
];
