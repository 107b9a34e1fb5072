//! JSON import and export.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use yearcal_core::store::EventStore;

pub fn import(store: &mut EventStore, path: &Path) -> Result<()> {
    let count = store
        .import(path)
        .with_context(|| format!("Could not import {}; existing events were kept", path.display()))?;

    println!(
        "Imported {} {} from {}",
        count,
        if count == 1 { "event" } else { "events" },
        path.display().dimmed()
    );

    Ok(())
}

pub fn export(store: &EventStore, path: &Path) -> Result<()> {
    store
        .export(path)
        .with_context(|| format!("Could not write {}", path.display()))?;

    let count = store.events().len();
    println!(
        "Exported {} {} to {}",
        count,
        if count == 1 { "event" } else { "events" },
        path.display().dimmed()
    );

    Ok(())
}
