use anyhow::Result;
use owo_colors::OwoColorize;
use yearcal_core::store::EventStore;

use crate::render::MonthView;

pub fn run(store: &EventStore, year: i32) -> Result<()> {
    println!("{}", year.bold());

    for month in 0..12 {
        let Some(view) = MonthView::new(store.events(), month, year) else {
            anyhow::bail!("Year {} is out of range", year);
        };
        for row in view.year_rows() {
            println!("{}", row);
        }
    }

    Ok(())
}
