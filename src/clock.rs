//! Wall clock and virtual-time timers
//!
//! The engine never reads the system time directly. It asks a [`Clock`],
//! which is [`SystemClock`] in the binary and [`ManualClock`] in tests.
//! Delayed work (clearing the reward notification) goes through [`Timers`],
//! which only fires when the owner calls [`Timers::take_due`] with the
//! current time. Nothing sleeps.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Duration, Local};

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the operating system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Hand-driven clock for tests and replays
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and give another to the engine.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, at: DateTime<Local>) {
        self.now.set(at);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

/// Work that can be scheduled for later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Hide the reward notification
    ClearRewardNotification,
}

/// Handle returned by [`Timers::schedule`], used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct ScheduledTimer {
    handle: TimerHandle,
    due: DateTime<Local>,
    action: TimerAction,
}

/// Pending timers, fired in due order
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<ScheduledTimer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire once `due` is reached
    pub fn schedule(&mut self, due: DateTime<Local>, action: TimerAction) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push(ScheduledTimer {
            handle,
            due,
            action,
        });
        handle
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    /// Remove and return every action due at or before `now`, earliest first.
    /// Timers due at the same instant keep scheduling order.
    pub fn take_due(&mut self, now: DateTime<Local>) -> Vec<TimerAction> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = pending;
        due.sort_by_key(|t| (t.due, t.handle.0));
        due.into_iter().map(|t| t.action).collect()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|t| t.handle == handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Earliest pending due time, if any
    pub fn next_due(&self) -> Option<DateTime<Local>> {
        self.pending.iter().map(|t| t.due).min()
    }
}
