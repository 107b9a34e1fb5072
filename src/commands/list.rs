use anyhow::Result;
use chrono::Datelike;
use owo_colors::OwoColorize;
use yearcal_core::constants::MONTHS;
use yearcal_core::store::EventStore;

use crate::render::Render;

pub fn run(store: &EventStore) -> Result<()> {
    let mut events: Vec<_> = store.events().iter().collect();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    events.sort_by_key(|e| (e.start, e.end, e.id));

    // Group events by start month and print
    let mut current: Option<(i32, u32)> = None;

    for event in events {
        let key = (event.start.year(), event.start.month0());

        if current != Some(key) {
            if current.is_some() {
                println!();
            }
            println!("{}", format!("{} {}", MONTHS[key.1 as usize], key.0).bold());
            current = Some(key);
        }

        println!("  {}", event.render());
    }

    let count = store.events().len();
    let footer = format!(
        "{} {} in {}",
        count,
        if count == 1 { "event" } else { "events" },
        store.path().display()
    );
    println!("\n{}", footer.dimmed());

    Ok(())
}
