use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use yearcal_core::event::CalendarEvent;
use yearcal_core::layout::MonthLayoutResult;
use yearcal_core::store::EventStore;

use crate::render::{MonthView, Render};

pub fn run(store: &EventStore, date: NaiveDate) -> Result<()> {
    let view = MonthView::new(store.events(), date.month0(), date.year())
        .with_context(|| format!("Date out of range: {}", date))?;

    println!("{}", date.format("%A, %B %-d %Y").bold());

    let events = view.layout.events_on(date.day());
    let outside = outside_grid(store.events(), events, date);

    if events.is_empty() && outside.is_empty() {
        println!("  {}", "No events".dimmed());
        return Ok(());
    }

    for event in events {
        let label = placement_label(&view.layout, event.id);
        println!("  {} {}", event.render(), format!("[{}]", label).dimmed());
    }
    for event in outside {
        println!("  {} {}", event.render(), "[outside grid]".dimmed());
    }

    Ok(())
}

/// "lane N" (1-based) for a visible event, "hidden" for one counted as overflow.
fn placement_label(layout: &MonthLayoutResult, id: i64) -> String {
    layout
        .event_layouts
        .iter()
        .find(|l| l.event_id == id)
        .map(|l| format!("lane {}", l.lane + 1))
        .unwrap_or_else(|| "hidden".to_string())
}

/// Events covering `date` that the month grid does not draw at all, such as
/// a span that started in the previous year.
fn outside_grid<'a>(
    all: &'a [CalendarEvent],
    in_grid: &[CalendarEvent],
    date: NaiveDate,
) -> Vec<&'a CalendarEvent> {
    all.iter()
        .filter(|e| e.touches(date) && !in_grid.iter().any(|g| g.id == e.id))
        .collect()
}
