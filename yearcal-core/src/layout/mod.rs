//! Month event layout.
//!
//! Given the whole event collection, [`compute_month_layout`] decides which
//! events of one month get a display lane, which ones only show up as a
//! "+N more" count, and which events touch each day. It is a pure function:
//! no I/O, no state between calls, identical output for identical input.
//!
//! The pipeline is filter → sort → day index → first-fit lanes → split.
//! Lane numbers are not capped while assigning so that overflow counts
//! reflect real occupancy; the [`MAX_VISIBLE_LANES`] cut happens afterwards.

mod lanes;
mod meta;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::constants::MAX_VISIBLE_LANES;
use crate::event::CalendarEvent;
use lanes::{DaySet, Lanes};
use meta::EventMonthMeta;

pub use meta::days_in_month;

/// A visible placement of one event in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLayoutInfo {
    pub event_id: i64,
    /// 0-based lane, always below [`MAX_VISIBLE_LANES`].
    pub lane: usize,
    pub start_day: u32,
    pub end_day: u32,
    /// The event's real start date is in this month (otherwise it continues
    /// from the previous one).
    pub starts_in_month: bool,
    /// The event's real end date is in this month.
    pub ends_in_month: bool,
}

impl EventLayoutInfo {
    pub fn days(&self) -> std::ops::RangeInclusive<u32> {
        self.start_day..=self.end_day
    }

    pub fn covers(&self, day: u32) -> bool {
        self.days().contains(&day)
    }
}

/// Layout of one month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLayoutResult {
    pub event_layouts: Vec<EventLayoutInfo>,
    /// Hidden events per day. Only days with at least one hidden event.
    pub overflow_counts: BTreeMap<u32, u32>,
    /// Every event touching a day, visible or not, in placement order.
    pub day_events: BTreeMap<u32, Vec<CalendarEvent>>,
}

impl MonthLayoutResult {
    pub fn is_empty(&self) -> bool {
        self.event_layouts.is_empty() && self.overflow_counts.is_empty() && self.day_events.is_empty()
    }

    pub fn overflow_on(&self, day: u32) -> u32 {
        self.overflow_counts.get(&day).copied().unwrap_or(0)
    }

    pub fn events_on(&self, day: u32) -> &[CalendarEvent] {
        self.day_events.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Visible placements in a given lane, in placement order.
    pub fn lane(&self, lane: usize) -> impl Iterator<Item = &EventLayoutInfo> {
        self.event_layouts.iter().filter(move |l| l.lane == lane)
    }

    /// Number of lanes that have at least one visible event.
    pub fn visible_lanes(&self) -> usize {
        self.event_layouts.iter().map(|l| l.lane + 1).max().unwrap_or(0)
    }
}

/// Lay out the events of `month_index` (0–11) in `year`.
///
/// Events belong to the month if they start in `year` and their month span
/// includes `month_index`. A month index outside 0–11 gives an empty result.
pub fn compute_month_layout(
    events: &[CalendarEvent],
    month_index: u32,
    year: i32,
) -> MonthLayoutResult {
    let Some(days_in_month) = days_in_month(year, month_index) else {
        return MonthLayoutResult::default();
    };

    let mut metas: Vec<EventMonthMeta> = events
        .iter()
        .filter_map(|event| EventMonthMeta::for_month(event, month_index, year, days_in_month))
        .collect();
    metas.sort_by_key(|meta| meta.sort_key());

    let day_events = build_day_index(&metas);

    let mut lanes = Lanes::default();
    let assignments: Vec<(&EventMonthMeta, usize)> = metas
        .iter()
        .map(|meta| (meta, lanes.assign(DaySet::span(meta.start_day, meta.end_day))))
        .collect();

    let mut event_layouts = Vec::new();
    let mut overflow = [0u32; 32];

    for (meta, lane) in assignments {
        if lane < MAX_VISIBLE_LANES {
            event_layouts.push(EventLayoutInfo {
                event_id: meta.event.id,
                lane,
                start_day: meta.start_day,
                end_day: meta.end_day,
                starts_in_month: meta.starts_in_month,
                ends_in_month: meta.ends_in_month,
            });
        } else {
            for day in meta.days() {
                overflow[day as usize] += 1;
            }
        }
    }

    let overflow_counts: BTreeMap<u32, u32> = (1..=days_in_month)
        .filter(|&day| overflow[day as usize] > 0)
        .map(|day| (day, overflow[day as usize]))
        .collect();

    debug!(
        month = month_index,
        year,
        relevant = metas.len(),
        lanes = lanes.len(),
        visible = event_layouts.len(),
        "computed month layout"
    );

    MonthLayoutResult {
        event_layouts,
        overflow_counts,
        day_events,
    }
}

fn build_day_index(metas: &[EventMonthMeta]) -> BTreeMap<u32, Vec<CalendarEvent>> {
    let mut by_day: [Vec<&CalendarEvent>; 32] = Default::default();

    for meta in metas {
        for day in meta.days() {
            by_day[day as usize].push(meta.event);
        }
    }

    by_day
        .iter()
        .enumerate()
        .filter(|(_, events)| !events.is_empty())
        .map(|(day, events)| (day as u32, events.iter().map(|&e| e.clone()).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventColor, EventDraft};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: i64, start: NaiveDate, end: NaiveDate) -> CalendarEvent {
        EventDraft::new(format!("event {id}"), start, end).into_event(id)
    }

    /// Event inside June 2026, by day numbers.
    fn june(id: i64, start_day: u32, end_day: u32) -> CalendarEvent {
        event(id, date(2026, 6, start_day), date(2026, 6, end_day))
    }

    fn ids(events: &[CalendarEvent]) -> Vec<i64> {
        events.iter().map(|e| e.id).collect()
    }

    fn layout_for(result: &MonthLayoutResult, id: i64) -> Option<&EventLayoutInfo> {
        result.event_layouts.iter().find(|l| l.event_id == id)
    }

    /// Small deterministic generator so the property tests need no extra crates.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self, bound: u32) -> u32 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((self.0 >> 33) % bound as u64) as u32
        }
    }

    fn random_events(seed: u64, count: i64) -> Vec<CalendarEvent> {
        let mut rng = Lcg(seed);
        (1..=count)
            .map(|id| {
                let start = date(2026, rng.next(12) + 1, rng.next(28) + 1);
                let end = start + chrono::Duration::days(rng.next(20) as i64);
                let mut e = event(id, start, end);
                e.color = EventColor::ALL[rng.next(7) as usize];
                e
            })
            .collect()
    }

    #[test]
    fn empty_collection_gives_empty_result() {
        let result = compute_month_layout(&[], 3, 2026);
        assert!(result.event_layouts.is_empty());
        assert!(result.overflow_counts.is_empty());
        assert!(result.day_events.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn single_day_event_on_first_day() {
        let events = vec![june(1, 1, 1)];
        let result = compute_month_layout(&events, 5, 2026);

        assert_eq!(
            result.event_layouts,
            vec![EventLayoutInfo {
                event_id: 1,
                lane: 0,
                start_day: 1,
                end_day: 1,
                starts_in_month: true,
                ends_in_month: true,
            }]
        );
        assert!(result.overflow_counts.is_empty());
        assert_eq!(ids(result.events_on(1)), vec![1]);
        assert_eq!(result.day_events.len(), 1);
    }

    #[test]
    fn two_identical_spans_take_two_lanes() {
        let events = vec![june(2, 5, 10), june(1, 5, 10)];
        let result = compute_month_layout(&events, 5, 2026);

        assert_eq!(layout_for(&result, 1).unwrap().lane, 0);
        assert_eq!(layout_for(&result, 2).unwrap().lane, 1);
        assert_eq!(result.visible_lanes(), 2);
        for day in 5..=10 {
            assert_eq!(ids(result.events_on(day)), vec![1, 2]);
        }
        assert!(result.events_on(4).is_empty());
        assert!(result.events_on(11).is_empty());
    }

    #[test]
    fn fourth_and_fifth_event_on_a_day_overflow() {
        let events: Vec<_> = (1..=5).map(|id| june(id, 15, 15)).collect();
        let result = compute_month_layout(&events, 5, 2026);

        let visible: Vec<_> = result.event_layouts.iter().map(|l| (l.event_id, l.lane)).collect();
        assert_eq!(visible, vec![(1, 0), (2, 1), (3, 2)]);
        assert_eq!(result.overflow_counts, BTreeMap::from([(15, 2)]));
        assert_eq!(ids(result.events_on(15)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn event_crossing_into_next_month() {
        let events = vec![event(1, date(2026, 4, 20), date(2026, 5, 5))];

        let april = compute_month_layout(&events, 3, 2026);
        let info = &april.event_layouts[0];
        assert!(info.starts_in_month);
        assert!(!info.ends_in_month);
        assert_eq!((info.start_day, info.end_day), (20, 30));
        assert_eq!(april.day_events.keys().copied().collect::<Vec<_>>(), (20..=30).collect::<Vec<_>>());

        let may = compute_month_layout(&events, 4, 2026);
        let info = &may.event_layouts[0];
        assert!(!info.starts_in_month);
        assert!(info.ends_in_month);
        assert_eq!((info.start_day, info.end_day), (1, 5));
    }

    #[test]
    fn longer_events_claim_lower_lanes() {
        // The short event is listed first and starts earlier, but the long
        // one is placed first.
        let events = vec![june(1, 3, 4), june(2, 4, 20)];
        let result = compute_month_layout(&events, 5, 2026);

        assert_eq!(layout_for(&result, 2).unwrap().lane, 0);
        assert_eq!(layout_for(&result, 1).unwrap().lane, 1);
        assert_eq!(ids(result.events_on(4)), vec![2, 1]);
    }

    #[test]
    fn duration_counts_the_whole_event_not_the_month_part() {
        // Only 2 days of event 1 fall in June, but it is 33 days long.
        let long = event(1, date(2026, 5, 1), date(2026, 6, 2));
        let events = vec![june(2, 1, 10), long];
        let result = compute_month_layout(&events, 5, 2026);

        assert_eq!(layout_for(&result, 1).unwrap().lane, 0);
        assert_eq!(layout_for(&result, 2).unwrap().lane, 1);
    }

    #[test]
    fn equal_duration_breaks_ties_by_start_day_then_id() {
        let events = vec![june(9, 6, 8), june(4, 2, 4), june(3, 6, 8)];
        let result = compute_month_layout(&events, 5, 2026);

        let order: Vec<_> = result.event_layouts.iter().map(|l| l.event_id).collect();
        assert_eq!(order, vec![4, 3, 9]);
        assert_eq!(layout_for(&result, 4).unwrap().lane, 0);
        assert_eq!(layout_for(&result, 3).unwrap().lane, 0);
        assert_eq!(layout_for(&result, 9).unwrap().lane, 1);
    }

    #[test]
    fn first_fit_returns_to_lower_lane_when_free() {
        let events = vec![june(1, 1, 10), june(2, 5, 14), june(3, 11, 20)];
        let result = compute_month_layout(&events, 5, 2026);

        assert_eq!(layout_for(&result, 1).unwrap().lane, 0);
        assert_eq!(layout_for(&result, 2).unwrap().lane, 1);
        assert_eq!(layout_for(&result, 3).unwrap().lane, 0);
    }

    #[test]
    fn long_overflowed_event_counts_on_every_day() {
        let mut events: Vec<_> = (1..=3).map(|id| june(id, 1, 30)).collect();
        events.push(june(4, 10, 12));
        let result = compute_month_layout(&events, 5, 2026);

        assert!(layout_for(&result, 4).is_none());
        assert_eq!(
            result.overflow_counts,
            BTreeMap::from([(10, 1), (11, 1), (12, 1)])
        );
        assert_eq!(result.overflow_on(9), 0);
        assert_eq!(result.events_on(11).len(), 4);
    }

    #[test]
    fn overflow_is_decided_after_unbounded_assignment() {
        // Hidden lanes are packed like visible ones: events 5 and 6 share
        // lane 3, and each still counts on its own days.
        let mut events: Vec<_> = (1..=3).map(|id| june(id, 1, 3)).collect();
        events.push(june(5, 1, 2));
        events.push(june(6, 3, 3));
        let result = compute_month_layout(&events, 5, 2026);

        assert_eq!(result.event_layouts.len(), 3);
        assert_eq!(result.overflow_counts, BTreeMap::from([(1, 1), (2, 1), (3, 1)]));
    }

    #[test]
    fn events_from_other_years_are_ignored() {
        let events = vec![
            event(1, date(2025, 6, 3), date(2025, 6, 5)),
            event(2, date(2027, 6, 3), date(2027, 6, 5)),
            june(3, 4, 4),
        ];
        let result = compute_month_layout(&events, 5, 2026);

        assert_eq!(result.event_layouts.len(), 1);
        assert_eq!(result.event_layouts[0].event_id, 3);
        assert_eq!(ids(result.events_on(4)), vec![3]);
    }

    #[test]
    fn out_of_range_month_is_empty() {
        let events = vec![june(1, 1, 5)];
        assert!(compute_month_layout(&events, 12, 2026).is_empty());
        assert!(compute_month_layout(&events, u32::MAX, 2026).is_empty());
    }

    #[test]
    fn inverted_range_is_laid_out_on_its_start_day() {
        let events = vec![event(1, date(2026, 6, 12), date(2026, 6, 3))];
        let result = compute_month_layout(&events, 5, 2026);

        let info = &result.event_layouts[0];
        assert_eq!((info.start_day, info.end_day), (12, 12));
        assert_eq!(result.day_events.keys().copied().collect::<Vec<_>>(), vec![12]);
    }

    #[test]
    fn leap_february_runs_to_day_29() {
        let events = vec![event(1, date(2028, 1, 30), date(2028, 3, 2))];
        let result = compute_month_layout(&events, 1, 2028);

        assert_eq!(result.event_layouts[0].end_day, 29);
        assert_eq!(result.day_events.len(), 29);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let events = random_events(7, 40);
        let mut reversed = events.clone();
        reversed.reverse();

        for month in 0..12 {
            assert_eq!(
                compute_month_layout(&events, month, 2026),
                compute_month_layout(&reversed, month, 2026)
            );
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let events = random_events(11, 60);
        for month in 0..12 {
            let first = serde_json::to_string(&compute_month_layout(&events, month, 2026)).unwrap();
            let second = serde_json::to_string(&compute_month_layout(&events, month, 2026)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn layout_invariants_hold_for_generated_collections() {
        for seed in 1..=20 {
            let events = random_events(seed, 50);

            for month in 0..12 {
                let days = days_in_month(2026, month).unwrap();
                let result = compute_month_layout(&events, month, 2026);
                let relevant: Vec<_> = events
                    .iter()
                    .filter_map(|e| EventMonthMeta::for_month(e, month, 2026, days))
                    .collect();

                // No two visible placements share a lane and a day.
                for (i, a) in result.event_layouts.iter().enumerate() {
                    assert!(a.lane < MAX_VISIBLE_LANES);
                    for b in &result.event_layouts[i + 1..] {
                        if a.lane == b.lane {
                            assert!(a.end_day < b.start_day || b.end_day < a.start_day);
                        }
                    }
                }

                // Each relevant event is visible once or counted as overflow, never both.
                let mut expected_overflow = BTreeMap::new();
                for meta in &relevant {
                    let placed = result
                        .event_layouts
                        .iter()
                        .filter(|l| l.event_id == meta.event.id)
                        .count();
                    assert!(placed <= 1);
                    if placed == 0 {
                        for day in meta.days() {
                            *expected_overflow.entry(day).or_insert(0) += 1;
                        }
                    }
                }
                assert_eq!(result.overflow_counts, expected_overflow);
                assert!(result
                    .event_layouts
                    .iter()
                    .all(|l| relevant.iter().any(|m| m.event.id == l.event_id)));

                // Day index lists exactly the touching events, in placement order.
                let mut sorted = relevant.clone();
                sorted.sort_by_key(|meta| meta.sort_key());
                for day in 1..=days {
                    let expected: Vec<i64> = sorted
                        .iter()
                        .filter(|m| m.days().contains(&day))
                        .map(|m| m.event.id)
                        .collect();
                    assert_eq!(ids(result.events_on(day)), expected);
                    assert_eq!(result.day_events.contains_key(&day), !expected.is_empty());
                }

                // Visible + hidden on a day equals the number of events on that day.
                for day in 1..=days {
                    let visible = result.event_layouts.iter().filter(|l| l.covers(day)).count() as u32;
                    assert_eq!(visible + result.overflow_on(day), result.events_on(day).len() as u32);
                }
            }
        }
    }
}
