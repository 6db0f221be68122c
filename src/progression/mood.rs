//! Mood check-in

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Rules;

/// Self-reported mood. "Unset" is `Option::None` on the engine side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Motivated,
    Neutral,
    Sad,
}

impl Mood {
    pub fn all() -> &'static [Mood] {
        &[Self::Happy, Self::Motivated, Self::Neutral, Self::Sad]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Motivated => "Motivated",
            Self::Neutral => "Neutral",
            Self::Sad => "Sad",
        }
    }

    /// XP that submitting this mood is worth
    pub fn xp(&self, rules: &Rules) -> u32 {
        match self {
            Self::Happy | Self::Motivated => rules.mood_xp,
            Self::Neutral | Self::Sad => 0,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::all()
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown mood: {s}"))
    }
}
