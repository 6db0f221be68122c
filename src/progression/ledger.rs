//! XP ledger: the running total and the append-only award log

use chrono::{DateTime, Local};
use serde::Serialize;

/// One XP award
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XpEvent {
    pub label: String,
    pub amount: u32,
    pub timestamp: DateTime<Local>,
}

/// Result of crediting the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credit {
    pub old_xp: u32,
    pub new_xp: u32,
}

/// XP total plus every award in insertion order.
///
/// The log is never pruned, so it grows with every award for the life of
/// the session.
#[derive(Debug, Clone, Default)]
pub struct XpLedger {
    xp: u32,
    log: Vec<XpEvent>,
}

impl XpLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn log(&self) -> &[XpEvent] {
        &self.log
    }

    /// Credit `amount` XP. Zero is refused and leaves the ledger untouched.
    pub fn credit(&mut self, amount: u32, label: &str, at: DateTime<Local>) -> Option<Credit> {
        if amount == 0 {
            return None;
        }

        let old_xp = self.xp;
        self.xp = self.xp.saturating_add(amount);
        self.log.push(XpEvent {
            label: label.to_string(),
            amount,
            timestamp: at,
        });

        Some(Credit {
            old_xp,
            new_xp: self.xp,
        })
    }

    /// Most recent `n` awards, oldest first
    pub fn recent(&self, n: usize) -> &[XpEvent] {
        let start = self.log.len().saturating_sub(n);
        &self.log[start..]
    }
}
