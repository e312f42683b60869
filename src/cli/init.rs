//! `aion-timer init` - write a default settings file

use std::path::Path;

use aion_timer_core::TimerSettings;
use anyhow::{bail, Result};

use super::settings_file;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "settings file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    settings_file::save(path, &TimerSettings::default())?;

    println!("Settings written to {}", path.display());
    println!("Enable contents and pick options there, then start with `aion-timer run`.");
    Ok(())
}
