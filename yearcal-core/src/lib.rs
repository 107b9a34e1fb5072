//! Core types for yearcal.
//!
//! This crate provides everything the yearcal front end needs that is not
//! terminal rendering:
//! - `event` types for date-ranged calendar events
//! - `layout`, the month lane-assignment engine
//! - `store`, the JSON-file backed event collection

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod layout;
pub mod store;

pub use event::{CalendarEvent, EventColor, EventDraft};
pub use layout::{EventLayoutInfo, MonthLayoutResult, compute_month_layout};
