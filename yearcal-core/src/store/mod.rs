//! JSON-file backed event collection.
//!
//! The store owns the event list and is the only thing that mutates it.
//! Every mutation is written through to disk before returning.

mod file;

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::constants::default_events;
use crate::error::{YearCalError, YearCalResult};
use crate::event::{CalendarEvent, EventDraft};

pub use file::{CalendarFile, parse_events, read_calendar_file, write_calendar_file};

pub struct EventStore {
    path: PathBuf,
    events: Vec<CalendarEvent>,
}

impl EventStore {
    /// Load the store at `path`. A missing file starts from the default
    /// events; nothing is written until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> YearCalResult<Self> {
        let path = path.into();

        let events = if path.exists() {
            let events = read_calendar_file(&path)?;
            debug!(path = %path.display(), count = events.len(), "loaded events");
            events
        } else {
            debug!(path = %path.display(), "no calendar file yet, using defaults");
            default_events()
        };

        Ok(EventStore { path, events })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn get(&self, id: i64) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn save(&self) -> YearCalResult<()> {
        write_calendar_file(&self.path, &self.events)
    }

    /// Add a new event and return it with its assigned id.
    pub fn add(&mut self, draft: EventDraft) -> YearCalResult<CalendarEvent> {
        draft.validate()?;

        let event = draft.into_event(self.next_id());
        let mut next = self.events.clone();
        next.push(event.clone());
        self.commit(next)?;

        info!(id = event.id, title = %event.title, "added event");
        Ok(event)
    }

    /// Replace the fields of event `id`, keeping its id.
    pub fn update(&mut self, id: i64, draft: EventDraft) -> YearCalResult<CalendarEvent> {
        draft.validate()?;

        let index = self.index_of(id)?;
        let updated = draft.into_event(id);
        let mut next = self.events.clone();
        next[index] = updated.clone();
        self.commit(next)?;

        info!(id, title = %updated.title, "updated event");
        Ok(updated)
    }

    pub fn delete(&mut self, id: i64) -> YearCalResult<CalendarEvent> {
        let index = self.index_of(id)?;
        let mut next = self.events.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(id, title = %removed.title, "deleted event");
        Ok(removed)
    }

    /// Replace the whole collection with the events in `path`.
    /// On a read, parse or write error the current collection is left untouched.
    pub fn import(&mut self, path: &Path) -> YearCalResult<usize> {
        let events = read_calendar_file(path)?;
        let count = events.len();
        self.commit(events)?;

        info!(from = %path.display(), count, "imported events");
        Ok(count)
    }

    pub fn export(&self, path: &Path) -> YearCalResult<()> {
        write_calendar_file(path, &self.events)?;
        info!(to = %path.display(), count = self.events.len(), "exported events");
        Ok(())
    }

    /// Write `next` to disk and only then make it the current collection.
    fn commit(&mut self, next: Vec<CalendarEvent>) -> YearCalResult<()> {
        write_calendar_file(&self.path, &next)?;
        self.events = next;
        Ok(())
    }

    fn index_of(&self, id: i64) -> YearCalResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or(YearCalError::EventNotFound(id))
    }

    /// Millisecond timestamp, bumped past existing ids if the clock is behind
    /// or two events are added within the same millisecond.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let max = self.events.iter().map(|e| e.id).max().unwrap_or(0);
        now.max(max.saturating_add(1))
    }
}
