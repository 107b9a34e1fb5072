use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use yearcal_core::config::YearCalConfig;
use yearcal_core::store::EventStore;

pub fn run(
    mut config: YearCalConfig,
    store: &EventStore,
    year: Option<i32>,
    data_file: Option<PathBuf>,
) -> Result<()> {
    if apply(&mut config, year, data_file) {
        config.save().context("Failed to save configuration")?;
        println!("{}", "Configuration saved".green());
    }

    println!("{} {}", "config:".dimmed(), YearCalConfig::config_path()?.display());
    println!("{} {}", "data_file:".dimmed(), config.data_file.display());
    println!("{} {}", "year:".dimmed(), config.default_year());
    println!("{} {}", "in use:".dimmed(), store.path().display());

    Ok(())
}

/// Returns true if anything changed.
fn apply(config: &mut YearCalConfig, year: Option<i32>, data_file: Option<PathBuf>) -> bool {
    let before = config.clone();
    if let Some(year) = year {
        config.year = Some(year);
    }
    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }
    *config != before
}
