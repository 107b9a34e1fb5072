use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use yearcal_core::store::EventStore;

use crate::render::{MonthView, Render};

pub fn run(store: &EventStore, month: u32, year: i32, json: bool) -> Result<()> {
    let view = MonthView::new(store.events(), month, year)
        .with_context(|| format!("No such month: {} in {}", month + 1, year))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view.layout)?);
        return Ok(());
    }

    println!("{}", view.render());

    // Legend: every event drawn in this month, in lane order.
    let mut shown = Vec::new();
    for info in &view.layout.event_layouts {
        if let Some(event) = view.layout.events_on(info.start_day).iter().find(|e| e.id == info.event_id) {
            shown.push(event);
        }
    }
    if !shown.is_empty() {
        println!();
        for event in shown {
            println!("  {}", event.render());
        }
    }

    let hidden: u32 = view.layout.overflow_counts.values().sum();
    if hidden > 0 {
        println!(
            "\n  {}",
            "Some days have more events than fit; use `yearcal day <date>` to see them all".dimmed()
        );
    }

    Ok(())
}
