use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use yearcal_core::event::{EventColor, EventDraft};
use yearcal_core::store::EventStore;

use crate::render::Render;

/// Fields given on the command line; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub color: Option<EventColor>,
}

impl EventChanges {
    fn apply(self, mut draft: EventDraft) -> EventDraft {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(start) = self.start {
            draft.start = start;
        }
        if let Some(end) = self.end {
            draft.end = end;
        }
        if let Some(color) = self.color {
            draft.color = color;
        }
        draft
    }
}

pub fn run(store: &mut EventStore, id: i64, changes: EventChanges) -> Result<()> {
    let current = store
        .get(id)
        .with_context(|| format!("Event #{} not found", id))?
        .draft();

    let event = store.update(id, changes.apply(current))?;

    println!("{} {}", "Updated".yellow(), event.render());

    Ok(())
}
