use anyhow::Result;
use owo_colors::OwoColorize;
use yearcal_core::store::EventStore;

use crate::render::Render;

pub fn run(store: &mut EventStore, id: i64) -> Result<()> {
    let removed = store.delete(id)?;

    println!("{} {}", "Deleted".red(), removed.render());

    Ok(())
}
