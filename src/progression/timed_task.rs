//! Timed task tracking
//!
//! One task may run at a time. Starting again replaces the running start.

use chrono::{DateTime, Duration, Local};

use crate::config::Rules;

/// How a timed task ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Finished inside the quick-task window
    Quick(Duration),
    /// Finished, but too late for the bonus
    Slow(Duration),
    /// Finish time precedes the start (clock moved backwards)
    ClockSkew,
    /// Nothing was running
    NotStarted,
}

impl TaskOutcome {
    pub fn earns_bonus(&self) -> bool {
        matches!(self, Self::Quick(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimedTask {
    started_at: Option<DateTime<Local>>,
}

impl TimedTask {
    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// Start timing at `now`; returns the start this replaced, if any
    pub fn start(&mut self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        self.started_at.replace(now)
    }

    /// Stop timing and classify the elapsed time. Always clears the start.
    pub fn finish(&mut self, now: DateTime<Local>, rules: &Rules) -> TaskOutcome {
        let Some(started_at) = self.started_at.take() else {
            return TaskOutcome::NotStarted;
        };

        let elapsed = now - started_at;
        let window = Duration::minutes(i64::from(rules.quick_task_window_mins));

        if elapsed < Duration::zero() {
            TaskOutcome::ClockSkew
        } else if elapsed <= window {
            TaskOutcome::Quick(elapsed)
        } else {
            TaskOutcome::Slow(elapsed)
        }
    }
}
