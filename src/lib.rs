//! Scholar Quest - study progression tracker
//!
//! Awards experience points for study actions, keeps a daily streak,
//! hands out badges and derives a level from total XP. The only state that
//! survives a session is the last active date, kept in a small key-value
//! store.
//!
//! ## Layout
//!
//! - [`progression`]: the rules engine and its snapshot
//! - [`clock`]: injectable time and virtual-time timers
//! - [`store`]: last-active-date storage
//! - [`config`]: TOML configuration and tunable rule constants

pub mod clock;
pub mod config;
pub mod progression;
pub mod store;

pub use progression::{ProgressionEngine, ProgressionEvent, Snapshot};
