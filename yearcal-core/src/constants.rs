use chrono::NaiveDate;

use crate::event::{CalendarEvent, EventColor};

/// Number of lanes a month row can show before events spill into "+N more".
pub const MAX_VISIBLE_LANES: usize = 3;

/// Envelope version written to calendar files.
pub const FILE_VERSION: u32 = 1;

/// Envelope `app` tag written to calendar files.
pub const FILE_APP: &str = "yearly-calendar";

/// Three-letter month labels, indexed by 0-based month.
pub const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Events shown before anything has been saved.
pub fn default_events() -> Vec<CalendarEvent> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
        CalendarEvent {
            id: 1,
            title: "Project Kickoff".to_string(),
            start: date(2026, 2, 10),
            end: date(2026, 2, 12),
            color: EventColor::Blue,
        },
        CalendarEvent {
            id: 2,
            title: "Holiday".to_string(),
            start: date(2026, 5, 1),
            end: date(2026, 5, 3),
            color: EventColor::Red,
        },
        CalendarEvent {
            id: 3,
            title: "Conference".to_string(),
            start: date(2026, 8, 15),
            end: date(2026, 8, 15),
            color: EventColor::Purple,
        },
    ]
}
