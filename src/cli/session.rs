//! Session setup shared by the commands

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use scholar_quest::clock::SystemClock;
use scholar_quest::config::Config;
use scholar_quest::store::SqliteStore;
use scholar_quest::{ProgressionEngine, ProgressionEvent};

/// Open the state store and start a session on the system clock.
///
/// `seed` wins over `[session] seed` from the config.
pub fn open_session(
    config: &Config,
    seed: Option<u64>,
) -> Result<(ProgressionEngine, Vec<ProgressionEvent>)> {
    let db_path = config.state_db_path();
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("Failed to open state store: {}", db_path.display()))?;

    let mut rng = match seed.or(config.session.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Ok(ProgressionEngine::start(
        config.rules.clone(),
        Box::new(SystemClock),
        Box::new(store),
        &mut rng,
    ))
}
