//! Tunable progression constants

use serde::{Deserialize, Serialize};

/// Progression rule constants
///
/// Defaults are the stock Scholar Quest values. A partial `[rules]` table
/// only overrides the keys it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Width of each level band
    #[serde(default = "default_xp_per_level")]
    pub xp_per_level: u32,

    /// Crossing a multiple of this fires the reward notification
    #[serde(default = "default_reward_milestone")]
    pub reward_milestone: u32,

    /// How long the reward notification stays up
    #[serde(default = "default_reward_display_secs")]
    pub reward_display_secs: u32,

    /// Streak length at which the bonus becomes claimable
    #[serde(default = "default_streak_bonus_threshold")]
    pub streak_bonus_threshold: u32,

    #[serde(default = "default_streak_bonus_xp")]
    pub streak_bonus_xp: u32,

    #[serde(default = "default_challenge_xp")]
    pub challenge_xp: u32,

    /// Awarded on submit for Happy or Motivated
    #[serde(default = "default_mood_xp")]
    pub mood_xp: u32,

    #[serde(default = "default_quick_task_xp")]
    pub quick_task_xp: u32,

    /// Timed tasks finished within this window earn the quick-task XP
    #[serde(default = "default_quick_task_window_mins")]
    pub quick_task_window_mins: u32,

    #[serde(default = "default_side_quest_xp")]
    pub side_quest_xp: u32,

    /// XP needed for "Page Turner"
    #[serde(default = "default_page_turner_xp")]
    pub page_turner_xp: u32,

    /// Side quests needed for "Side Quest Hero"
    #[serde(default = "default_side_quest_hero_count")]
    pub side_quest_hero_count: u32,
}

fn default_xp_per_level() -> u32 {
    700
}

fn default_reward_milestone() -> u32 {
    100
}

fn default_reward_display_secs() -> u32 {
    5
}

fn default_streak_bonus_threshold() -> u32 {
    7
}

fn default_streak_bonus_xp() -> u32 {
    50
}

fn default_challenge_xp() -> u32 {
    25
}

fn default_mood_xp() -> u32 {
    10
}

fn default_quick_task_xp() -> u32 {
    10
}

fn default_quick_task_window_mins() -> u32 {
    30
}

fn default_side_quest_xp() -> u32 {
    15
}

fn default_page_turner_xp() -> u32 {
    100
}

fn default_side_quest_hero_count() -> u32 {
    50
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            xp_per_level: default_xp_per_level(),
            reward_milestone: default_reward_milestone(),
            reward_display_secs: default_reward_display_secs(),
            streak_bonus_threshold: default_streak_bonus_threshold(),
            streak_bonus_xp: default_streak_bonus_xp(),
            challenge_xp: default_challenge_xp(),
            mood_xp: default_mood_xp(),
            quick_task_xp: default_quick_task_xp(),
            quick_task_window_mins: default_quick_task_window_mins(),
            side_quest_xp: default_side_quest_xp(),
            page_turner_xp: default_page_turner_xp(),
            side_quest_hero_count: default_side_quest_hero_count(),
        }
    }
}

impl Rules {
    /// Level band width, never zero
    fn band(&self) -> u32 {
        self.xp_per_level.max(1)
    }

    /// Level for `xp` under this band width (1-based)
    pub fn level_for(&self, xp: u32) -> u32 {
        xp / self.band() + 1
    }

    /// Fraction of the current band completed, in `0.0..1.0`
    pub fn progress_for(&self, xp: u32) -> f64 {
        f64::from(xp % self.band()) / f64::from(self.band())
    }

    /// Reward milestone bucket for `xp`; the notification fires when this grows
    pub fn milestone_bucket(&self, xp: u32) -> u32 {
        xp / self.reward_milestone.max(1)
    }
}
