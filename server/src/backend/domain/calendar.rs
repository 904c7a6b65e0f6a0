//! Calendar domain logic for the event schedule.
//!
//! Ties the static event catalog to concrete calendar weeks: laying out
//! single weeks and runs of weeks, building the weekday header cells, and
//! tracking which week the calendar is focused on. The UI only draws what
//! this service hands it.

use chrono::{Datelike, Days, NaiveDate, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

use super::cycle::week_start;
use super::event_catalog::EventCatalog;
use super::models::{CycleWeek, WeekLayout, DAYS_PER_WEEK};
use super::week_layout::layout_week;

/// Monday of the week containing `date`, when all seven days are representable
fn full_week_start(date: NaiveDate) -> Option<NaiveDate> {
    let monday = week_start(date)?;
    monday.checked_add_days(Days::new(6)).map(|_| monday)
}

/// Short weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Header cell for one column of a rendered week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub column: usize,
    pub is_today: bool,
    /// Whether the day falls in the same month as the reference date
    pub is_current_month: bool,
}

impl WeekDay {
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.column]
    }

    /// "month/day" label, e.g. "8/25"
    pub fn short_label(&self) -> String {
        format!("{}/{}", self.date.month(), self.date.day())
    }
}

/// Calendar service that handles all calendar-related business logic
#[derive(Debug, Clone)]
pub struct CalendarService {
    catalog: Arc<EventCatalog>,
    /// Monday of the week the calendar is focused on. In memory only.
    focus_week: Arc<Mutex<NaiveDate>>,
}

impl CalendarService {
    /// Number of weeks shown on the calendar page
    pub const DEFAULT_WEEK_COUNT: usize = 4;

    pub fn new(catalog: Arc<EventCatalog>) -> Self {
        let today = Utc::now().date_naive();
        let focus = week_start(today).unwrap_or(today);
        Self {
            catalog,
            focus_week: Arc::new(Mutex::new(focus)),
        }
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Today's UTC calendar date
    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Today's UTC date and its cycle week, read from a single clock sample
    pub fn current_cycle_week(&self) -> (NaiveDate, CycleWeek) {
        let now = Utc::now();
        (now.date_naive(), self.catalog.resolver().resolve_at(&now))
    }

    pub fn cycle_week(&self, date: NaiveDate) -> CycleWeek {
        self.catalog.resolver().resolve(date)
    }

    /// Lay out the week containing `date`
    pub fn layout_week(&self, date: NaiveDate) -> Option<WeekLayout<'_>> {
        layout_week(&self.catalog, date)
    }

    /// Lay out `count` consecutive weeks, starting with the week containing `start`.
    /// `None` when any of those weeks lies outside the representable calendar.
    pub fn layout_weeks(&self, start: NaiveDate, count: usize) -> Option<Vec<WeekLayout<'_>>> {
        let first = week_start(start)?;
        (0..count as u64)
            .map(|offset| {
                let monday = first.checked_add_days(Days::new(7 * offset))?;
                self.layout_week(monday)
            })
            .collect()
    }

    /// The seven header cells for the week containing `date`.
    ///
    /// `today` marks the highlighted cell and picks the month whose days
    /// are shown at full strength. `None` when part of the week is not
    /// representable.
    pub fn week_days(&self, date: NaiveDate, today: NaiveDate) -> Option<Vec<WeekDay>> {
        let monday = full_week_start(date)?;
        (0..DAYS_PER_WEEK)
            .map(|column| {
                let day = monday.checked_add_days(Days::new(column as u64))?;
                Some(WeekDay {
                    date: day,
                    column,
                    is_today: day == today,
                    is_current_month: day.year() == today.year() && day.month() == today.month(),
                })
            })
            .collect()
    }

    /// Format a date for human-readable display
    pub fn format_date_for_display(&self, date: NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }

    /// Get the Monday of the focused week
    pub fn get_focus_week(&self) -> NaiveDate {
        *self.lock_focus()
    }

    /// Focus the week containing `date`; returns that week's Monday.
    /// The focus is left alone when part of that week is not representable.
    pub fn set_focus_week(&self, date: NaiveDate) -> Option<NaiveDate> {
        let Some(monday) = full_week_start(date) else {
            warn!("No representable week contains {}", date);
            return None;
        };
        *self.lock_focus() = monday;
        info!("Calendar focus set to week of {}", monday);
        Some(monday)
    }

    /// Move the focus back one week
    pub fn navigate_previous_week(&self) -> Option<NaiveDate> {
        self.shift_focus(|focus| focus.checked_sub_days(Days::new(7)))
    }

    /// Move the focus forward one week
    pub fn navigate_next_week(&self) -> Option<NaiveDate> {
        self.shift_focus(|focus| full_week_start(focus.checked_add_days(Days::new(7))?))
    }

    fn shift_focus(&self, shift: impl FnOnce(NaiveDate) -> Option<NaiveDate>) -> Option<NaiveDate> {
        let mut focus = self.lock_focus();
        let Some(shifted) = shift(*focus) else {
            warn!("Cannot move calendar focus past week of {}", *focus);
            return None;
        };
        *focus = shifted;
        Some(shifted)
    }

    // The focus is a plain date, so a poisoned lock still holds a usable value
    fn lock_focus(&self) -> MutexGuard<'_, NaiveDate> {
        self.focus_week.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn service() -> CalendarService {
        CalendarService::new(Arc::new(EventCatalog::builtin().unwrap()))
    }

    #[test]
    fn test_default_focus_is_current_week() {
        let service = service();
        let focus = service.get_focus_week();
        assert_eq!(focus.weekday(), Weekday::Mon);
        assert_eq!(Some(focus), week_start(service.today()));
    }

    #[test]
    fn test_set_focus_week_normalizes_to_monday() {
        let service = service();

        let focus = service.set_focus_week(date(2025, 9, 4));
        assert_eq!(focus, Some(date(2025, 9, 1)));
        assert_eq!(service.get_focus_week(), date(2025, 9, 1));
    }

    #[test]
    fn test_navigate_weeks() {
        let service = service();
        service.set_focus_week(date(2025, 9, 1));

        assert_eq!(service.navigate_next_week(), Some(date(2025, 9, 8)));
        assert_eq!(service.navigate_next_week(), Some(date(2025, 9, 15)));
        assert_eq!(service.navigate_previous_week(), Some(date(2025, 9, 8)));

        // Year rollover
        service.set_focus_week(date(2025, 12, 29));
        assert_eq!(service.navigate_next_week(), Some(date(2026, 1, 5)));
        assert_eq!(service.navigate_previous_week(), Some(date(2025, 12, 29)));
    }

    #[test]
    fn test_focus_unchanged_at_calendar_limits() {
        let service = service();
        service.set_focus_week(date(2025, 9, 1));

        assert_eq!(service.set_focus_week(NaiveDate::MIN), None);
        assert_eq!(service.get_focus_week(), date(2025, 9, 1));

        let near_end = NaiveDate::MAX.checked_sub_days(Days::new(7)).unwrap();
        service.set_focus_week(near_end).unwrap();
        let last_monday = loop {
            let focus = service.get_focus_week();
            if service.navigate_next_week().is_none() {
                break focus;
            }
        };
        assert_eq!(service.get_focus_week(), last_monday);
        assert_eq!(service.navigate_next_week(), None);
        assert_eq!(service.get_focus_week(), last_monday);

        let first_monday = week_start(NaiveDate::MIN + Days::new(7)).unwrap();
        assert_eq!(service.set_focus_week(first_monday), Some(first_monday));
        assert_eq!(service.navigate_previous_week(), None);
        assert_eq!(service.get_focus_week(), first_monday);
    }

    #[test]
    fn test_focus_is_shared_between_clones() {
        let service = service();
        let handle = service.clone();

        handle.set_focus_week(date(2025, 10, 6));
        assert_eq!(service.get_focus_week(), date(2025, 10, 6));
    }

    #[test]
    fn test_layout_weeks_are_consecutive() {
        let service = service();

        let weeks = service
            .layout_weeks(date(2025, 8, 27), CalendarService::DEFAULT_WEEK_COUNT)
            .unwrap();
        let starts: Vec<NaiveDate> = weeks.iter().map(|w| w.week_start).collect();
        assert_eq!(
            starts,
            vec![date(2025, 8, 25), date(2025, 9, 1), date(2025, 9, 8), date(2025, 9, 15)]
        );
        let cycles: Vec<usize> = weeks.iter().map(|w| w.cycle_week.index()).collect();
        assert_eq!(cycles, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_layout_weeks_past_calendar_end() {
        let service = service();

        assert!(service.layout_weeks(NaiveDate::MAX, 1).is_some());
        assert!(service.layout_weeks(NaiveDate::MAX, 2).is_none());
        assert!(service.layout_weeks(NaiveDate::MIN, 1).is_none());
    }

    #[test]
    fn test_week_days_headers() {
        let service = service();
        let today = date(2025, 9, 2);

        let days = service.week_days(date(2025, 8, 28), today).unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, date(2025, 8, 25));
        assert_eq!(days[0].weekday_name(), "Mon");
        assert_eq!(days[0].short_label(), "8/25");
        assert!(!days[0].is_current_month);
        assert!(!days[0].is_today);
        assert_eq!(days[6].weekday_name(), "Sun");
        assert_eq!(days[6].short_label(), "8/31");

        let next = service.week_days(today, today).unwrap();
        assert!(next[1].is_today);
        assert!(next.iter().all(|d| d.is_current_month));
        assert_eq!(next.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_format_date_for_display() {
        let service = service();
        assert_eq!(service.format_date_for_display(date(2025, 8, 5)), "August 5, 2025");
    }

    #[test]
    fn test_week_days_at_calendar_limits() {
        let service = service();
        let today = date(2025, 9, 2);

        assert!(service.week_days(NaiveDate::MIN, today).is_none());
        // The week holding the last representable date may run past it
        let last_week_complete = week_start(NaiveDate::MAX)
            .and_then(|monday| monday.checked_add_days(Days::new(6)))
            .is_some();
        assert_eq!(service.week_days(NaiveDate::MAX, today).is_some(), last_week_complete);
    }

    #[test]
    fn test_current_cycle_week_matches_today() {
        let service = service();
        let (today, cycle_week) = service.current_cycle_week();
        assert_eq!(cycle_week, service.cycle_week(today));
    }

    #[test]
    fn test_cycle_week_lookup() {
        let service = service();
        assert_eq!(service.cycle_week(date(2025, 8, 25)).index(), 0);
        assert_eq!(service.cycle_week(date(2025, 9, 21)).index(), 3);
    }
}
