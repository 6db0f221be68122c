//! Daily streak tracking
//!
//! Days are compared by local calendar date, midnight to midnight, so
//! 23:50 yesterday and 00:10 today are one day apart.

use chrono::{DateTime, Local, NaiveDate};

use crate::config::Rules;

/// Outcome of one streak evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTransition {
    /// Same calendar day as the last active date
    Unchanged,
    /// Consecutive day; carries the new streak length
    Extended(u32),
    /// Gap of two or more days, or a last active date in the future
    Reset,
}

/// Whole calendar days from `last` to `today` (negative if `last` is later)
pub fn days_between(last: NaiveDate, today: NaiveDate) -> i64 {
    (today - last).num_days()
}

/// Streak length and the date it was last advanced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakTracker {
    days: u32,
    last_active: DateTime<Local>,
}

impl StreakTracker {
    /// Fresh tracker; a session always starts at a one-day streak
    pub fn new(last_active: DateTime<Local>) -> Self {
        Self {
            days: 1,
            last_active,
        }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn last_active(&self) -> DateTime<Local> {
        self.last_active
    }

    /// Advance the streak against `now`.
    ///
    /// Any transition other than [`StreakTransition::Unchanged`] moves the
    /// last active date to `now`; the caller persists it.
    pub fn evaluate(&mut self, now: DateTime<Local>) -> StreakTransition {
        let today = now.date_naive();
        let last = self.last_active.date_naive();

        if today == last {
            return StreakTransition::Unchanged;
        }

        let transition = if days_between(last, today) == 1 {
            self.days = self.days.saturating_add(1);
            StreakTransition::Extended(self.days)
        } else {
            self.days = 1;
            StreakTransition::Reset
        };

        self.last_active = now;
        transition
    }

    /// XP currently claimable for the streak (0 below the threshold).
    ///
    /// Not consumed by claiming: it stays on offer for as long as the
    /// streak stays at or above the threshold.
    pub fn bonus_available(&self, rules: &Rules) -> u32 {
        if self.days >= rules.streak_bonus_threshold {
            rules.streak_bonus_xp
        } else {
            0
        }
    }
}
