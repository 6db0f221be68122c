//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;

use scholar_quest::config::Config;

/// Write the default configuration to `config_path`
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::default().save_to_file(config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
