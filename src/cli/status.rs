//! Status command implementation

use anyhow::{Context, Result};

use scholar_quest::config::Config;

use super::render;
use super::session::open_session;

/// Start a session, run the streak check and print the dashboard
pub fn status_command(config: &Config, json: bool) -> Result<()> {
    let (engine, events) = open_session(config, None)?;
    let snapshot = engine.snapshot();

    if json {
        let out = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize snapshot")?;
        println!("{out}");
        return Ok(());
    }

    for event in &events {
        println!("{}", render::format_event(event));
    }
    for line in render::snapshot_lines(&snapshot) {
        println!("{line}");
    }
    Ok(())
}
