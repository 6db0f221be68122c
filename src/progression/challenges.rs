//! Daily challenge catalog and selection

use rand::Rng;

/// Fixed pool of daily challenges
pub static DAILY_CHALLENGES: &[&str] = &[
    "Read 10 pages today",
    "Reflect on your progress for 10 minutes",
    "Take notes on your learning",
    "Try a new study technique",
];

/// Pick one challenge uniformly at random
pub fn pick_daily_challenge<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    DAILY_CHALLENGES[rng.gen_range(0..DAILY_CHALLENGES.len())]
}
