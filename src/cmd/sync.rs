//! Pipeline commands: `grind sync`, `grind index`, `grind progress`.

use anyhow::{Context, Result};

use grind::config::Config;
use grind::progress::TrackProgress;
use grind::sync::{rebuild_index, refresh_progress, sync_all};
use grind::ui::icons::{CHECK, FILE_NEW, PROGRESS};

fn print_progress(tracks: &[TrackProgress]) {
    println!("{}Progress", PROGRESS);
    for track in tracks {
        println!("  {}", track.line());
    }
}

pub fn cmd_sync(config: &Config) -> Result<()> {
    let report = sync_all(config).context("Sync failed")?;

    println!();
    print_progress(&report.tracks);
    println!();
    println!(
        "{}Wrote {} ({} items)",
        FILE_NEW,
        config.display_relative(&report.index_file),
        report.index_items
    );
    println!("{}{}", CHECK, console::style("Sync complete").green().bold());
    println!();
    Ok(())
}

pub fn cmd_index(config: &Config) -> Result<()> {
    let count = rebuild_index(config).context("Failed to rebuild index")?;

    println!(
        "{}Wrote {} ({} items)",
        FILE_NEW,
        config.display_relative(&config.index_file),
        count
    );
    Ok(())
}

pub fn cmd_progress(config: &Config) -> Result<()> {
    let tracks = refresh_progress(config).context("Failed to refresh progress")?;

    print_progress(&tracks);
    println!(
        "{}Updated {}",
        CHECK,
        config.display_relative(&config.readme_file)
    );
    Ok(())
}
