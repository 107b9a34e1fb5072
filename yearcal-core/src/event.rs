//! Calendar event types.
//!
//! Events are whole-day ranges with no time-of-day component. The JSON shape
//! matches files written by the yearly-calendar web app, so `start`/`end`
//! serialize as `YYYY-MM-DD` strings and `color` as a lowercase tag.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{YearCalError, YearCalResult};

/// A date-ranged calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color: EventColor,
}

impl CalendarEvent {
    /// Inclusive number of days the event covers.
    /// An inverted range (`end < start`) counts as a single day.
    pub fn duration_days(&self) -> i64 {
        if self.is_inverted() {
            return 1;
        }
        (self.end - self.start).num_days() + 1
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// End date with inverted ranges collapsed onto `start`.
    pub fn effective_end(&self) -> NaiveDate {
        self.end.max(self.start)
    }

    /// Whether the event covers the given date.
    pub fn touches(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.effective_end()
    }

    pub fn draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            start: self.start,
            end: self.end,
            color: self.color,
        }
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Event payload before an id has been assigned (create/update input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color: EventColor,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        EventDraft {
            title: title.into(),
            start,
            end,
            color: EventColor::default(),
        }
    }

    pub fn with_color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    /// Reject drafts the layout engine should never see.
    pub fn validate(&self) -> YearCalResult<()> {
        if self.title.trim().is_empty() {
            return Err(YearCalError::InvalidEvent("title must not be empty".into()));
        }
        if self.start > self.end {
            return Err(YearCalError::InvalidEvent(format!(
                "end date {} is before start date {}",
                self.end, self.start
            )));
        }
        Ok(())
    }

    pub fn into_event(self, id: i64) -> CalendarEvent {
        CalendarEvent {
            id,
            title: self.title,
            start: self.start,
            end: self.end,
            color: self.color,
        }
    }
}

/// Display color tag. Unknown tags in a file read as `Gray`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    #[serde(other)]
    Gray,
}

impl EventColor {
    pub const ALL: [EventColor; 7] = [
        EventColor::Red,
        EventColor::Orange,
        EventColor::Yellow,
        EventColor::Green,
        EventColor::Blue,
        EventColor::Purple,
        EventColor::Gray,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventColor::Red => "red",
            EventColor::Orange => "orange",
            EventColor::Yellow => "yellow",
            EventColor::Green => "green",
            EventColor::Blue => "blue",
            EventColor::Purple => "purple",
            EventColor::Gray => "gray",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventColor {
    type Err = YearCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        EventColor::ALL
            .into_iter()
            .find(|c| c.name() == needle || (needle == "grey" && *c == EventColor::Gray))
            .ok_or_else(|| {
                let names: Vec<_> = EventColor::ALL.iter().map(|c| c.name()).collect();
                YearCalError::InvalidEvent(format!(
                    "unknown color '{}'. Available: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}
