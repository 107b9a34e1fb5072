//! Per-month view of a single event.

use std::cmp::Reverse;

use chrono::{Datelike, NaiveDate};

use crate::event::CalendarEvent;

/// Number of days in a 0-based month, or `None` for a month outside 0–11
/// (or a year chrono cannot represent).
pub fn days_in_month(year: i32, month_index: u32) -> Option<u32> {
    if month_index > 11 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month_index + 1, 1)?;
    let next = if month_index == 11 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month_index + 2, 1)?
    };
    u32::try_from((next - first).num_days()).ok()
}

/// An event clipped to one month.
///
/// `start_day`/`end_day` are 1-based days inside the month. `total_duration`
/// is measured on the whole event so a long event ranks the same in every
/// month it touches.
#[derive(Debug, Clone)]
pub(crate) struct EventMonthMeta<'a> {
    pub event: &'a CalendarEvent,
    pub start_day: u32,
    pub end_day: u32,
    pub starts_in_month: bool,
    pub ends_in_month: bool,
    pub total_duration: i64,
}

impl<'a> EventMonthMeta<'a> {
    /// Clip `event` to the month, or `None` if it does not belong there.
    ///
    /// Only events starting in `year` are considered; an event crossing into
    /// the next year is matched against month numbers alone. Its
    /// `ends_in_month` is always false, so it runs to the end of every month
    /// it is shown in. Inverted ranges collapse to a single day on `start`.
    pub fn for_month(
        event: &'a CalendarEvent,
        month_index: u32,
        year: i32,
        days_in_month: u32,
    ) -> Option<Self> {
        let start = event.start;
        let end = event.effective_end();

        if start.year() != year || start.month0() > month_index || end.month0() < month_index {
            return None;
        }

        let starts_in_month = start.month0() == month_index;
        let ends_in_month = end.year() == year && end.month0() == month_index;

        let start_day = if starts_in_month { start.day() } else { 1 };
        let end_day = if ends_in_month { end.day() } else { days_in_month };

        Some(EventMonthMeta {
            event,
            start_day,
            end_day,
            starts_in_month,
            ends_in_month,
            total_duration: event.duration_days(),
        })
    }

    /// Placement order: longest first, then earliest in the month, then id.
    pub fn sort_key(&self) -> (Reverse<i64>, u32, i64) {
        (Reverse(self.total_duration), self.start_day, self.event.id)
    }

    pub fn days(&self) -> std::ops::RangeInclusive<u32> {
        self.start_day..=self.end_day
    }
}
