//! Badge definitions and unlock rules
//!
//! Badges are permanent. The checker only ever returns badges that are
//! not yet held, so evaluating it any number of times is safe.

use serde::{Deserialize, Serialize};

use crate::config::Rules;

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Page Turner")]
    PageTurner,
    #[serde(rename = "Side Quest Hero")]
    SideQuestHero,
}

impl Badge {
    /// Display name, also used as the badge identifier in snapshots
    pub fn name(&self) -> &'static str {
        match self {
            Self::PageTurner => "Page Turner",
            Self::SideQuestHero => "Side Quest Hero",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Page Turner" => Some(Self::PageTurner),
            "Side Quest Hero" => Some(Self::SideQuestHero),
            _ => None,
        }
    }

    pub fn definition(&self) -> &'static BadgeDefinition {
        match self {
            Self::PageTurner => &BADGES[0],
            Self::SideQuestHero => &BADGES[1],
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a badge is unlocked by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRule {
    /// Total XP reaches `Rules::page_turner_xp`
    TotalXp,
    /// Completed side quests reach `Rules::side_quest_hero_count`
    SideQuests,
}

/// Badge definition with display metadata
#[derive(Debug, Clone)]
pub struct BadgeDefinition {
    pub badge: Badge,
    pub description: &'static str,
    pub icon: &'static str,
    pub rule: BadgeRule,
}

/// All badge definitions
pub static BADGES: &[BadgeDefinition] = &[
    BadgeDefinition {
        badge: Badge::PageTurner,
        description: "Earn 100 XP",
        icon: "📖",
        rule: BadgeRule::TotalXp,
    },
    BadgeDefinition {
        badge: Badge::SideQuestHero,
        description: "Complete 50 side quests",
        icon: "🗡️",
        rule: BadgeRule::SideQuests,
    },
];

impl BadgeDefinition {
    fn is_met(&self, xp: u32, side_quests: u32, rules: &Rules) -> bool {
        match self.rule {
            BadgeRule::TotalXp => xp >= rules.page_turner_xp,
            BadgeRule::SideQuests => side_quests >= rules.side_quest_hero_count,
        }
    }
}

/// Badges whose rule holds but which are not in `held`, in definition order
pub fn check_badges(xp: u32, side_quests: u32, held: &[Badge], rules: &Rules) -> Vec<Badge> {
    BADGES
        .iter()
        .filter(|def| !held.contains(&def.badge) && def.is_met(xp, side_quests, rules))
        .map(|def| def.badge)
        .collect()
}
