//! Progression Engine - core gamification logic
//!
//! Owns the whole session state and applies every rule: XP awards, reward
//! notifications, badges, streaks, the daily challenge, mood check-ins,
//! timed tasks and side quests. Each mutating operation returns the
//! [`ProgressionEvent`]s it produced, in order.

use chrono::{DateTime, Duration, Local};
use rand::RngCore;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::badges::{Badge, check_badges};
use super::challenges::pick_daily_challenge;
use super::ledger::{XpEvent, XpLedger};
use super::levels::LevelProgress;
use super::mood::Mood;
use super::side_quest::SideQuests;
use super::streaks::{StreakTracker, StreakTransition};
use super::tasks::Task;
use super::timed_task::{TaskOutcome, TimedTask};
use crate::clock::{Clock, TimerAction, TimerHandle, Timers};
use crate::config::Rules;
use crate::store::{self, KvStore};

/// Number of log entries carried in a [`Snapshot`]
const SNAPSHOT_LOG_LEN: usize = 5;

/// Things that happened while applying an operation
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressionEvent {
    XpAwarded {
        amount: u32,
        label: String,
        total: u32,
    },
    LevelUp {
        level: u32,
    },
    /// XP crossed a reward milestone; the notification is now showing
    RewardNotification {
        milestone: u32,
    },
    RewardNotificationCleared,
    BadgeUnlocked(Badge),
    StreakExtended {
        days: u32,
    },
    StreakReset,
    StreakBonusAvailable {
        xp: u32,
    },
    ChallengeCompleted {
        challenge: &'static str,
    },
    TaskStarted {
        replaced: bool,
    },
    TaskCompleted {
        outcome: TaskOutcome,
    },
    SideQuestCompleted {
        count: u32,
        text: String,
    },
}

/// Read-only view of the session for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub xp: u32,
    pub level: u32,
    pub progress_percent: f64,
    pub xp_to_next_level: u32,
    pub streak_days: u32,
    pub last_active_date: DateTime<Local>,
    pub streak_bonus_available: u32,
    pub badges: Vec<Badge>,
    pub daily_challenge: &'static str,
    pub reward_notification_active: bool,
    pub mood: Option<Mood>,
    pub pending_mood_xp: u32,
    pub side_quest_text: String,
    pub side_quest_count: u32,
    pub task_started_at: Option<DateTime<Local>>,
    pub recent_log: Vec<XpEvent>,
}

/// Single owner of all progression state
pub struct ProgressionEngine {
    rules: Rules,
    clock: Box<dyn Clock>,
    store: Box<dyn KvStore>,
    timers: Timers,
    reward_timers: Vec<TimerHandle>,
    reward_notification: bool,
    ledger: XpLedger,
    streak: StreakTracker,
    badges: Vec<Badge>,
    daily_challenge: &'static str,
    mood: Option<Mood>,
    pending_mood_xp: u32,
    timed_task: TimedTask,
    side_quests: SideQuests,
}

impl ProgressionEngine {
    /// Start a session.
    ///
    /// Reads the last active date from `store` (falling back to now when
    /// absent or unreadable), picks the daily challenge from `rng`, and runs
    /// the first streak evaluation. Returns the events of that evaluation.
    pub fn start(
        rules: Rules,
        clock: Box<dyn Clock>,
        store: Box<dyn KvStore>,
        rng: &mut dyn RngCore,
    ) -> (Self, Vec<ProgressionEvent>) {
        let now = clock.now();
        let last_active = match store::load_last_active(store.as_ref()) {
            Ok(Some(at)) => at,
            Ok(None) => {
                debug!("No last active date stored, starting from now");
                now
            }
            Err(e) => {
                warn!("Ignoring stored last active date: {}", e);
                now
            }
        };

        let daily_challenge = pick_daily_challenge(rng);
        info!(challenge = daily_challenge, "Session started");

        let mut engine = Self {
            rules,
            clock,
            store,
            timers: Timers::new(),
            reward_timers: Vec::new(),
            reward_notification: false,
            ledger: XpLedger::new(),
            streak: StreakTracker::new(last_active),
            badges: Vec::new(),
            daily_challenge,
            mood: None,
            pending_mood_xp: 0,
            timed_task: TimedTask::default(),
            side_quests: SideQuests::default(),
        };

        let events = engine.evaluate_streak();
        (engine, events)
    }

    // ========================================
    // XP LEDGER
    // ========================================

    /// Award `amount` XP under `label`.
    ///
    /// Zero is a no-op. Otherwise the award is logged, and the reward
    /// notification fires when the total crosses a reward milestone.
    pub fn award_xp(&mut self, amount: u32, label: &str) -> Vec<ProgressionEvent> {
        let now = self.clock.now();
        let Some(credit) = self.ledger.credit(amount, label, now) else {
            debug!(label, "Ignoring zero XP award");
            return Vec::new();
        };

        info!(amount, label, total = credit.new_xp, "XP awarded");
        let mut events = vec![ProgressionEvent::XpAwarded {
            amount,
            label: label.to_string(),
            total: credit.new_xp,
        }];

        let old_level = self.rules.level_for(credit.old_xp);
        let new_level = self.rules.level_for(credit.new_xp);
        if new_level > old_level {
            info!(level = new_level, "Level up");
            events.push(ProgressionEvent::LevelUp { level: new_level });
        }

        let new_bucket = self.rules.milestone_bucket(credit.new_xp);
        if new_bucket > self.rules.milestone_bucket(credit.old_xp) {
            events.push(self.show_reward_notification(now, new_bucket));
        }

        events.extend(self.unlock_badges());
        events
    }

    /// Award a catalog task's XP under its label
    pub fn complete_catalog_task(&mut self, task: &Task) -> Vec<ProgressionEvent> {
        self.award_xp(task.xp, task.label)
    }

    pub fn xp(&self) -> u32 {
        self.ledger.xp()
    }

    pub fn level(&self) -> u32 {
        self.rules.level_for(self.ledger.xp())
    }

    pub fn progress_percent(&self) -> f64 {
        self.rules.progress_for(self.ledger.xp()) * 100.0
    }

    /// Every award this session, oldest first
    pub fn xp_log(&self) -> &[XpEvent] {
        self.ledger.log()
    }

    // ========================================
    // REWARD NOTIFICATION
    // ========================================

    fn show_reward_notification(&mut self, now: DateTime<Local>, bucket: u32) -> ProgressionEvent {
        self.reward_notification = true;
        let due = now + Duration::seconds(i64::from(self.rules.reward_display_secs));
        let handle = self
            .timers
            .schedule(due, TimerAction::ClearRewardNotification);
        self.reward_timers.push(handle);

        let milestone = bucket.saturating_mul(self.rules.reward_milestone);
        info!(milestone, "Reward notification shown");
        ProgressionEvent::RewardNotification { milestone }
    }

    pub fn reward_notification_active(&self) -> bool {
        self.reward_notification
    }

    /// Hide the notification now and drop its pending clear timers
    pub fn dismiss_reward_notification(&mut self) -> Vec<ProgressionEvent> {
        for handle in self.reward_timers.drain(..) {
            self.timers.cancel(handle);
        }
        self.clear_reward_notification()
    }

    fn clear_reward_notification(&mut self) -> Vec<ProgressionEvent> {
        if !self.reward_notification {
            return Vec::new();
        }
        self.reward_notification = false;
        debug!("Reward notification cleared");
        vec![ProgressionEvent::RewardNotificationCleared]
    }

    /// Fire due timers and re-check the streak against the clock.
    ///
    /// Call periodically; it is cheap and idempotent within a day.
    pub fn tick(&mut self) -> Vec<ProgressionEvent> {
        let now = self.clock.now();
        let mut events = Vec::new();

        for action in self.timers.take_due(now) {
            match action {
                TimerAction::ClearRewardNotification => {
                    events.extend(self.clear_reward_notification());
                }
            }
        }
        let timers = &self.timers;
        self.reward_timers.retain(|h| timers.is_pending(*h));

        events.extend(self.evaluate_streak());
        events
    }

    // ========================================
    // BADGES
    // ========================================

    fn unlock_badges(&mut self) -> Vec<ProgressionEvent> {
        let unlocked = check_badges(
            self.ledger.xp(),
            self.side_quests.completed(),
            &self.badges,
            &self.rules,
        );

        unlocked
            .into_iter()
            .map(|badge| {
                info!(badge = badge.name(), "Badge unlocked");
                self.badges.push(badge);
                ProgressionEvent::BadgeUnlocked(badge)
            })
            .collect()
    }

    /// Unlocked badges in unlock order
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    // ========================================
    // STREAKS
    // ========================================

    /// Compare today with the last active date and advance the streak.
    ///
    /// A changed date is written to the store; a store failure is logged
    /// and the in-memory transition stands.
    pub fn evaluate_streak(&mut self) -> Vec<ProgressionEvent> {
        let now = self.clock.now();
        let transition = self.streak.evaluate(now);

        let mut events = match transition {
            StreakTransition::Unchanged => return Vec::new(),
            StreakTransition::Extended(days) => {
                info!(days, "Streak extended");
                vec![ProgressionEvent::StreakExtended { days }]
            }
            StreakTransition::Reset => {
                info!("Streak reset");
                vec![ProgressionEvent::StreakReset]
            }
        };

        if let Err(e) = store::save_last_active(self.store.as_mut(), self.streak.last_active()) {
            warn!("Failed to persist last active date: {}", e);
        }

        let bonus = self.streak.bonus_available(&self.rules);
        if bonus > 0 {
            events.push(ProgressionEvent::StreakBonusAvailable { xp: bonus });
        }
        events
    }

    pub fn streak_days(&self) -> u32 {
        self.streak.days()
    }

    pub fn last_active(&self) -> DateTime<Local> {
        self.streak.last_active()
    }

    /// Streak bonus currently on offer (0 if none)
    pub fn streak_bonus_available(&self) -> u32 {
        self.streak.bonus_available(&self.rules)
    }

    /// Award the streak bonus if one is on offer.
    ///
    /// The offer is not consumed, so it can be claimed again for as long as
    /// the streak stays at or above the threshold.
    pub fn claim_streak_bonus(&mut self) -> Vec<ProgressionEvent> {
        let bonus = self.streak_bonus_available();
        self.award_xp(bonus, "Streak bonus")
    }

    // ========================================
    // DAILY CHALLENGE
    // ========================================

    pub fn daily_challenge(&self) -> &'static str {
        self.daily_challenge
    }

    /// Award the challenge XP. Every call awards again.
    pub fn complete_challenge(&mut self) -> Vec<ProgressionEvent> {
        let challenge = self.daily_challenge;
        let mut events = vec![ProgressionEvent::ChallengeCompleted { challenge }];
        events.extend(self.award_xp(
            self.rules.challenge_xp,
            &format!("Daily challenge: {challenge}"),
        ));
        events
    }

    // ========================================
    // MOOD
    // ========================================

    /// Record a mood and work out what submitting it is worth
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = Some(mood);
        self.pending_mood_xp = mood.xp(&self.rules);
        debug!(mood = mood.as_str(), pending = self.pending_mood_xp, "Mood set");
    }

    /// Award the pending mood XP. The mood is kept, so submitting again
    /// awards again.
    pub fn submit_mood(&mut self) -> Vec<ProgressionEvent> {
        let Some(mood) = self.mood else {
            return Vec::new();
        };
        self.award_xp(self.pending_mood_xp, &format!("Mood: {mood}"))
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn pending_mood_xp(&self) -> u32 {
        self.pending_mood_xp
    }

    // ========================================
    // TIMED TASKS
    // ========================================

    /// Start timing a task, replacing any task already running
    pub fn start_task(&mut self) -> Vec<ProgressionEvent> {
        let replaced = self.timed_task.start(self.clock.now()).is_some();
        if replaced {
            debug!("Timed task restarted, previous start discarded");
        }
        vec![ProgressionEvent::TaskStarted { replaced }]
    }

    /// Finish the running task; quick finishes earn XP.
    /// With nothing running this awards nothing.
    pub fn complete_task(&mut self) -> Vec<ProgressionEvent> {
        let outcome = self.timed_task.finish(self.clock.now(), &self.rules);
        match outcome {
            TaskOutcome::NotStarted => debug!("Timed task completed without a start"),
            TaskOutcome::ClockSkew => warn!("Timed task finished before it started"),
            _ => {}
        }

        let mut events = vec![ProgressionEvent::TaskCompleted { outcome }];
        if outcome.earns_bonus() {
            events.extend(self.award_xp(self.rules.quick_task_xp, "Quick task"));
        }
        events
    }

    pub fn active_task_start(&self) -> Option<DateTime<Local>> {
        self.timed_task.started_at()
    }

    // ========================================
    // SIDE QUESTS
    // ========================================

    pub fn set_side_quest_text(&mut self, text: impl Into<String>) {
        self.side_quests.set_text(text);
    }

    /// Count a side quest, clear its text and award the side-quest XP
    pub fn complete_side_quest(&mut self) -> Vec<ProgressionEvent> {
        let text = self.side_quests.complete();
        let count = self.side_quests.completed();
        debug!(count, "Side quest completed");

        let mut events = vec![ProgressionEvent::SideQuestCompleted { count, text }];
        events.extend(self.award_xp(self.rules.side_quest_xp, "Side quest"));
        events.extend(self.unlock_badges());
        events
    }

    pub fn side_quest_count(&self) -> u32 {
        self.side_quests.completed()
    }

    // ========================================
    // SNAPSHOT
    // ========================================

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn snapshot(&self) -> Snapshot {
        let level = LevelProgress::new(self.ledger.xp(), &self.rules);

        Snapshot {
            xp: level.total_xp,
            level: level.level,
            progress_percent: level.progress_percent,
            xp_to_next_level: level.xp_to_next,
            streak_days: self.streak.days(),
            last_active_date: self.streak.last_active(),
            streak_bonus_available: self.streak_bonus_available(),
            badges: self.badges.clone(),
            daily_challenge: self.daily_challenge,
            reward_notification_active: self.reward_notification,
            mood: self.mood,
            pending_mood_xp: self.pending_mood_xp,
            side_quest_text: self.side_quests.pending_text().to_string(),
            side_quest_count: self.side_quests.completed(),
            task_started_at: self.timed_task.started_at(),
            recent_log: self.ledger.recent(SNAPSHOT_LOG_LEN).to_vec(),
        }
    }
}
