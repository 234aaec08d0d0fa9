//! Date bucketing for the calendar page.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Timelike};
use std::ops::RangeInclusive;

use crate::sample::CalendarEvent;
use crate::view_state::CalendarView;

/// Hours drawn in the day grid, 8 AM through 7 PM.
pub const DAY_HOURS: RangeInclusive<u32> = 8..=19;

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Monday through Sunday of the week containing `date`.
pub fn days_of_week(date: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(date);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Events shown on `date`.
///
/// Sample events are spread across any week by matching the day of month
/// modulo 7, not by their real dates.
pub fn events_for_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|e| e.start.day() % 7 == date.day() % 7)
        .collect()
}

pub fn events_at_hour(events: &[CalendarEvent], date: NaiveDate, hour: u32) -> Vec<&CalendarEvent> {
    events_for_date(events, date)
        .into_iter()
        .filter(|e| e.start.hour() == hour)
        .collect()
}

/// Hours an event block covers in the grid, at most two.
pub fn span_hours(event: &CalendarEvent) -> u32 {
    event.end.hour().saturating_sub(event.start.hour()).min(2)
}

pub fn hour_label(hour: u32, use_24h: bool) -> String {
    if use_24h {
        return format!("{hour:02}:00");
    }
    match hour {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h > 12 => format!("{} PM", h - 12),
        h => format!("{h} AM"),
    }
}

pub fn time_label(event_time: NaiveDateTime, use_24h: bool) -> String {
    if use_24h {
        event_time.format("%H:%M").to_string()
    } else {
        event_time.format("%-I:%M %p").to_string()
    }
}

/// Moves `date` one day, week or month in the direction of `step`.
/// Month moves clamp to the last day of the target month.
pub fn shift(date: NaiveDate, view: CalendarView, step: i32) -> NaiveDate {
    match view {
        CalendarView::Day => date + Duration::days(i64::from(step)),
        CalendarView::Week => date + Duration::weeks(i64::from(step)),
        CalendarView::Month => {
            let months = Months::new(step.unsigned_abs());
            let moved = if step >= 0 {
                date.checked_add_months(months)
            } else {
                date.checked_sub_months(months)
            };
            moved.unwrap_or(date)
        }
    }
}

pub fn range_label(date: NaiveDate, view: CalendarView) -> String {
    match view {
        CalendarView::Day => date.format("%a, %b %-d, %Y").to_string(),
        CalendarView::Week => {
            let days = days_of_week(date);
            format!(
                "{} - {}",
                days[0].format("%b %-d"),
                days[6].format("%b %-d, %Y")
            )
        }
        CalendarView::Month => date.format("%B %Y").to_string(),
    }
}

/// Weeks of the month containing `date`, each Monday-first; days outside
/// the month are `None`.
pub fn month_grid(date: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let Some(first) = date.with_day(1) else {
        return Vec::new();
    };
    let mut weeks = Vec::new();
    let mut cursor = week_start(first);
    while cursor.month() == date.month() || cursor < first {
        let week = std::array::from_fn(|i| {
            let day = cursor + Duration::days(i as i64);
            (day.month() == date.month() && day.year() == date.year()).then_some(day)
        });
        weeks.push(week);
        cursor += Duration::weeks(1);
    }
    weeks
}
