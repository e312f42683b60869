//! `aion-timer run` - the reminder loop
//!
//! Loads the settings file, arms the scheduler, and prints alarms to the
//! terminal until Ctrl-C.

use std::path::Path;
use std::sync::Arc;

use aion_timer_core::{AlarmNotice, AlarmScheduler, AlarmSink};
use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::settings_file;

/// Terminal bell; how it sounds is up to the terminal emulator.
const BELL: char = '\u{7}';

pub async fn run(path: &Path) -> Result<()> {
    let settings = settings_file::load(path)?;

    for content in settings.inert_contents() {
        warn!(content = %content, "content is enabled but has no options selected; it will never fire");
    }
    if !settings
        .contents
        .values()
        .any(|c| c.enabled && !c.options.is_empty())
    {
        warn!(
            "no content is armed; edit {} and restart",
            path.display()
        );
    }

    // The sender stays alive for the whole loop so later settings updates
    // could be pushed without restarting the scheduler.
    let (_settings_tx, settings_rx) = tokio::sync::watch::channel(settings);
    let sink: AlarmSink = Arc::new(print_alarm);

    let shutdown = CancellationToken::new();
    let handle = tokio::spawn(AlarmScheduler::new(settings_rx, sink).run(shutdown.clone()));

    info!("reminder loop running; press Ctrl-C to stop");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;

    shutdown.cancel();
    handle.await.context("scheduler task panicked")?;
    Ok(())
}

fn print_alarm(notice: AlarmNotice) -> aion_timer_core::Result<()> {
    let stamp = chrono::Local::now().format("%H:%M:%S");
    let kind = if notice.is_advance { "notice" } else { "ALARM" };
    println!("{BELL}[{stamp}] {kind}: {}", notice.message);
    info!(content = %notice.content, is_advance = notice.is_advance, "alarm fired");
    Ok(())
}
