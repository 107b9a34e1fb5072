//! Calendar file envelope.
//!
//! Files are written as a versioned envelope:
//!
//! ```json
//! { "version": 1, "app": "yearly-calendar", "lastModified": "...", "events": [...] }
//! ```
//!
//! A bare array of events is also accepted when reading.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::constants::{FILE_APP, FILE_VERSION};
use crate::error::{YearCalError, YearCalResult};
use crate::event::CalendarEvent;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarFile {
    pub version: u32,
    pub app: String,
    pub last_modified: DateTime<Utc>,
    pub events: Vec<CalendarEvent>,
}

impl CalendarFile {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        CalendarFile {
            version: FILE_VERSION,
            app: FILE_APP.to_string(),
            last_modified: Utc::now(),
            events,
        }
    }
}

/// Parse file contents into events.
///
/// Events whose end is before their start are kept (layout shows them on
/// their start day) but logged.
pub fn parse_events(content: &str) -> YearCalResult<Vec<CalendarEvent>> {
    let events: Vec<CalendarEvent> = match serde_json::from_str::<Value>(content)? {
        events @ Value::Array(_) => serde_json::from_value(events)?,
        Value::Object(mut map) => match map.remove("events") {
            Some(events @ Value::Array(_)) => serde_json::from_value(events)?,
            _ => return Err(YearCalError::InvalidFileFormat),
        },
        _ => return Err(YearCalError::InvalidFileFormat),
    };

    for event in events.iter().filter(|e| e.is_inverted()) {
        warn!(
            id = event.id,
            start = %event.start,
            end = %event.end,
            "event ends before it starts, showing it on its start day only"
        );
    }

    Ok(events)
}

pub fn read_calendar_file(path: &Path) -> YearCalResult<Vec<CalendarEvent>> {
    let content = std::fs::read_to_string(path)?;
    parse_events(&content)
}

/// Write `events` wrapped in a fresh envelope, creating parent directories.
pub fn write_calendar_file(path: &Path, events: &[CalendarEvent]) -> YearCalResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = CalendarFile::new(events.to_vec());
    let content = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, content)?;

    Ok(())
}
