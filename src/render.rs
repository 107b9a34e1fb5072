//! Terminal rendering for yearcal.
//!
//! Month rows are drawn on a fixed grid of `CELL_WIDTH` columns per day so
//! that lane bars line up with the day header.

use chrono::{Datelike, NaiveDate};
use owo_colors::{OwoColorize, Rgb};
use yearcal_core::constants::MONTHS;
use yearcal_core::event::{CalendarEvent, EventColor};
use yearcal_core::layout::{EventLayoutInfo, MonthLayoutResult, compute_month_layout, days_in_month};

/// Columns per day in the month view.
pub const CELL_WIDTH: usize = 3;

/// Marker for an event continuing from the previous month.
const CONTINUES_LEFT: char = '‹';
/// Marker for an event continuing into the next month.
const CONTINUES_RIGHT: char = '›';

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

pub fn rgb(color: EventColor) -> Rgb {
    match color {
        EventColor::Red => Rgb(239, 68, 68),
        EventColor::Orange => Rgb(249, 115, 22),
        EventColor::Yellow => Rgb(234, 179, 8),
        EventColor::Green => Rgb(34, 197, 94),
        EventColor::Blue => Rgb(59, 130, 246),
        EventColor::Purple => Rgb(168, 85, 247),
        EventColor::Gray => Rgb(107, 114, 128),
    }
}

/// "Aug 15" or "Feb 10 - Feb 12"
pub fn format_span(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        start.format("%b %-d").to_string()
    } else if start.year() != end.year() {
        format!("{} - {}", start.format("%b %-d %Y"), end.format("%b %-d %Y"))
    } else {
        format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let id = format!("#{}", self.id);
        format!(
            "{} {}  {} {}",
            "●".color(rgb(self.color)),
            self.title,
            format_span(self.start, self.end).dimmed(),
            id.dimmed()
        )
    }
}

/// A month's layout together with what is needed to draw it.
pub struct MonthView {
    pub month_index: u32,
    pub year: i32,
    pub days: u32,
    pub layout: MonthLayoutResult,
}

impl MonthView {
    pub fn new(events: &[CalendarEvent], month_index: u32, year: i32) -> Option<Self> {
        let days = days_in_month(year, month_index)?;
        Some(MonthView {
            month_index,
            year,
            days,
            layout: compute_month_layout(events, month_index, year),
        })
    }

    pub fn label(&self) -> &'static str {
        MONTHS[self.month_index as usize]
    }

    /// Visible events are listed in `day_events` on every day they cover,
    /// so the first day is enough to find them.
    fn event_for(&self, info: &EventLayoutInfo) -> Option<&CalendarEvent> {
        self.layout
            .events_on(info.start_day)
            .iter()
            .find(|e| e.id == info.event_id)
    }

    fn lane_placements(&self, lane: usize) -> Vec<&EventLayoutInfo> {
        let mut placements: Vec<_> = self.layout.lane(lane).collect();
        placements.sort_by_key(|info| info.start_day);
        placements
    }

    pub fn header(&self) -> String {
        (1..=self.days)
            .map(|day| format!("{:<width$}", day, width = CELL_WIDTH))
            .collect()
    }

    /// One lane of the month grid, with titles written inside the bars.
    pub fn lane_line(&self, lane: usize) -> String {
        let mut line = String::new();
        let mut cursor = 1;

        for info in self.lane_placements(lane) {
            if info.start_day > cursor {
                line.push_str(&" ".repeat((info.start_day - cursor) as usize * CELL_WIDTH));
            }
            let width = (info.end_day - info.start_day + 1) as usize * CELL_WIDTH;
            let (title, color) = match self.event_for(info) {
                Some(event) => (event.title.as_str(), event.color),
                None => ("", EventColor::Gray),
            };
            let text = bar_text(title, info, width);
            line.push_str(&text.black().on_color(rgb(color)).to_string());
            cursor = info.end_day + 1;
        }

        line
    }

    pub fn overflow_line(&self) -> Option<String> {
        if self.layout.overflow_counts.is_empty() {
            return None;
        }

        let line = (1..=self.days)
            .map(|day| match self.layout.overflow_on(day) {
                0 => " ".repeat(CELL_WIDTH),
                n => format!("{:<width$}", format!("+{}", n), width = CELL_WIDTH),
            })
            .collect::<String>();
        Some(line.trim_end().to_string())
    }

    /// Compressed row for the year view: one character per day, one line per lane.
    pub fn year_rows(&self) -> Vec<String> {
        let lanes = self.layout.visible_lanes().max(1);
        let mut rows = Vec::with_capacity(lanes);

        for lane in 0..lanes {
            let placements = self.lane_placements(lane);
            let mut row = String::new();

            for day in 1..=self.days {
                match placements.iter().find(|info| info.covers(day)) {
                    Some(info) => {
                        let color = self.event_for(info).map(|e| e.color).unwrap_or_default();
                        row.push_str(&"━".color(rgb(color)).to_string());
                    }
                    None => row.push_str(&"·".dimmed().to_string()),
                }
            }

            let prefix = if lane == 0 { self.label() } else { "   " };
            rows.push(format!("{} {}", prefix.bold(), row));
        }

        if let Some(max) = self.layout.overflow_counts.values().max() {
            let days = self.layout.overflow_counts.len();
            let note = format!(" +{} more on {} {}", max, days, pluralize("day", days));
            if let Some(last) = rows.last_mut() {
                last.push_str(&note.yellow().to_string());
            }
        }

        rows
    }
}

impl Render for MonthView {
    fn render(&self) -> String {
        let mut lines = vec![format!("{} {}", self.label(), self.year).bold().to_string()];

        if self.layout.is_empty() {
            lines.push("   No events".dimmed().to_string());
            return lines.join("\n");
        }

        lines.push(self.header().dimmed().to_string());
        for lane in 0..self.layout.visible_lanes() {
            lines.push(self.lane_line(lane));
        }
        if let Some(overflow) = self.overflow_line() {
            lines.push(overflow.yellow().to_string());
        }

        lines.join("\n")
    }
}

/// Title padded or cut to exactly `width` characters, with continuation markers.
fn bar_text(title: &str, info: &EventLayoutInfo, width: usize) -> String {
    let mut text = String::with_capacity(width);
    if !info.starts_in_month {
        text.push(CONTINUES_LEFT);
    }
    text.push_str(title);

    let right = usize::from(!info.ends_in_month);
    let room = width.saturating_sub(right);
    let mut text: String = text.chars().take(room).collect();
    let len = text.chars().count();
    text.push_str(&" ".repeat(room - len));
    if right == 1 && width > 0 {
        text.push(CONTINUES_RIGHT);
    }
    text
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
