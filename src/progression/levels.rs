//! XP and Level system
//!
//! Levels are fixed-width bands: every [`XP_PER_LEVEL`] XP is one level.
//! Level and progress are always derived from total XP, never stored.

use serde::Serialize;

use crate::config::Rules;

/// Width of each level band
pub const XP_PER_LEVEL: u32 = 700;

/// Level for given XP (1-based)
pub fn level(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// Progress through the current level (0.0 - 1.0, exclusive)
pub fn progress(xp: u32) -> f64 {
    f64::from(xp % XP_PER_LEVEL) / f64::from(XP_PER_LEVEL)
}

/// Progress through the current level as a percentage (0.0 - 100.0, exclusive)
pub fn progress_percent(xp: u32) -> f64 {
    progress(xp) * 100.0
}

/// Derived level view of a total XP value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelProgress {
    pub total_xp: u32,
    pub level: u32,
    /// XP earned inside the current band
    pub xp_into_level: u32,
    /// XP still missing for the next level
    pub xp_to_next: u32,
    pub progress_percent: f64,
}

impl LevelProgress {
    pub fn new(total_xp: u32, rules: &Rules) -> Self {
        let band = rules.xp_per_level.max(1);
        let xp_into_level = total_xp % band;

        Self {
            total_xp,
            level: rules.level_for(total_xp),
            xp_into_level,
            xp_to_next: band - xp_into_level,
            progress_percent: rules.progress_for(total_xp) * 100.0,
        }
    }
}
