//! Maps calendar dates onto the four-week event rotation.
//!
//! All week arithmetic happens on UTC calendar dates so a user near midnight
//! in any timezone sees the same rotation week as everyone else.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};

use super::models::CycleWeek;

/// Monday of the week containing `date`.
///
/// `None` when that Monday falls before the first representable date.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

/// Resolves dates to cycle weeks relative to a fixed anchor Monday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleResolver {
    anchor: NaiveDate,
}

impl CycleResolver {
    /// `anchor` is normalized to the Monday of its week
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            anchor: week_start(anchor).unwrap_or(anchor),
        }
    }

    /// Monday that starts cycle week 0
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Cycle week of the week containing `date`.
    ///
    /// Callers should resolve once per rendered week (with its Monday) and
    /// apply the result to every day of that week.
    pub fn resolve(&self, date: NaiveDate) -> CycleWeek {
        // Whole-day offsets stay far inside i64 for every NaiveDate
        let monday_offset = date.signed_duration_since(self.anchor).num_days()
            - i64::from(date.weekday().num_days_from_monday());
        CycleWeek::from_week_offset(monday_offset.div_euclid(7))
    }

    /// Cycle week for an instant, using its UTC calendar date
    pub fn resolve_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> CycleWeek {
        self.resolve(at.with_timezone(&Utc).date_naive())
    }
}
