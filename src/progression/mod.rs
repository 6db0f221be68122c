//! Progression system: XP, levels, streaks, badges and bonus rules
//!
//! [`ProgressionEngine`] owns the session; the other modules hold the
//! individual rules and are usable on their own.
//!
//! # Usage
//!
//! ```ignore
//! let (mut engine, _) = ProgressionEngine::start(
//!     Rules::default(),
//!     Box::new(SystemClock),
//!     Box::new(SqliteStore::open(&path)?),
//!     &mut StdRng::from_entropy(),
//! );
//!
//! engine.complete_catalog_task(tasks::find("Teaching someone").unwrap());
//! let snapshot = engine.snapshot();
//! ```

pub mod badges;
pub mod challenges;
mod engine;
pub mod ledger;
pub mod levels;
pub mod mood;
pub mod side_quest;
pub mod streaks;
pub mod tasks;
pub mod timed_task;

pub use badges::{BADGES, Badge, BadgeDefinition};
pub use challenges::DAILY_CHALLENGES;
pub use engine::{ProgressionEngine, ProgressionEvent, Snapshot};
pub use ledger::XpEvent;
pub use levels::{LevelProgress, XP_PER_LEVEL, level, progress, progress_percent};
pub use mood::Mood;
pub use streaks::StreakTransition;
pub use tasks::{CATALOG, Task, TaskCategory};
pub use timed_task::TaskOutcome;
