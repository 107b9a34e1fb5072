use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use yearcal_core::event::{EventColor, EventDraft};
use yearcal_core::store::EventStore;

use crate::render::Render;

pub fn run(
    store: &mut EventStore,
    title: String,
    start: NaiveDate,
    end: Option<NaiveDate>,
    color: EventColor,
) -> Result<()> {
    let draft = EventDraft::new(title, start, end.unwrap_or(start)).with_color(color);
    let event = store.add(draft)?;

    println!("{} {}", "Created".green(), event.render());

    Ok(())
}
