//! Shared helpers for progression scenario tests

use chrono::{DateTime, Local, TimeZone};
use rand::SeedableRng;
use rand::rngs::StdRng;

use scholar_quest::clock::ManualClock;
use scholar_quest::config::Rules;
use scholar_quest::store::{self, MemoryStore};
use scholar_quest::{ProgressionEngine, ProgressionEvent};

/// Local wall-clock time helper
pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
}

/// A started session plus handles to its clock and store
pub struct Harness {
    pub engine: ProgressionEngine,
    pub clock: ManualClock,
    pub store: MemoryStore,
    pub start_events: Vec<ProgressionEvent>,
}

/// Start a session at `now`, optionally with a stored last active date
pub fn start_session(now: DateTime<Local>, last_active: Option<DateTime<Local>>) -> Harness {
    start_session_with(now, last_active, Rules::default())
}

pub fn start_session_with(
    now: DateTime<Local>,
    last_active: Option<DateTime<Local>>,
    rules: Rules,
) -> Harness {
    let clock = ManualClock::new(now);
    let mut store = MemoryStore::new();
    if let Some(at) = last_active {
        store::save_last_active(&mut store, at).expect("memory store never fails");
    }

    let (engine, start_events) = ProgressionEngine::start(
        rules,
        Box::new(clock.clone()),
        Box::new(store.clone()),
        &mut StdRng::seed_from_u64(2024),
    );

    Harness {
        engine,
        clock,
        store,
        start_events,
    }
}
