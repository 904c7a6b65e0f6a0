use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How an event icon should be fitted into its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFit {
    Cover,
    Contain,
}

/// Inclusive weekday column range (0 = Monday, 6 = Sunday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub start: u8,
    pub end: u8,
}

/// A recurring event as listed in the event catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    pub name: String,
    pub color_tag: String,
    /// One entry per cycle week; `None` when the event is off that week
    pub schedule: Vec<Option<ScheduleSlot>>,
    pub group_id: Option<String>,
    pub icon_url: Option<String>,
    pub icon_fit: IconFit,
    pub detail_id: String,
}

/// Response for the full event catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCatalogResponse {
    /// Monday that starts cycle week 0
    pub anchor_date: NaiveDate,
    pub events: Vec<EventInfo>,
}

/// Long-form description of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetailResponse {
    pub detail_id: String,
    /// Every catalog entry that shares this detail id
    pub events: Vec<EventInfo>,
    pub markdown: String,
    /// False when `markdown` is a fallback notice rather than a stored description
    pub has_description: bool,
}

/// One bar on the weekly event calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEventBar {
    /// Group id, or `event-<index>` for events without one
    pub unique_id: String,
    pub name: String,
    pub color_tag: String,
    pub icon_url: Option<String>,
    pub icon_fit: IconFit,
    pub detail_id: String,
    pub start_col: u8,
    pub end_col: u8,
    pub span: u8,
    /// Display row, 0 is the top row
    pub lane: usize,
}

/// Header cell for one column of a calendar week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDayHeader {
    pub date: NaiveDate,
    /// Short "month/day" label, e.g. "8/25"
    pub label: String,
    /// Short weekday name, e.g. "Mon"
    pub weekday: String,
    pub is_today: bool,
    /// False for days that spill over from a neighbouring month
    pub is_current_month: bool,
}

/// A laid-out calendar week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarWeek {
    pub week_start: NaiveDate,
    pub cycle_week: u8,
    /// Number of event rows needed to draw this week
    pub lane_count: usize,
    pub days: Vec<CalendarDayHeader>,
    pub events: Vec<CalendarEventBar>,
}

/// Consecutive calendar weeks, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarWeeksResponse {
    pub weeks: Vec<CalendarWeek>,
}

/// Current date information from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeekResponse {
    pub today: NaiveDate,
    pub formatted_date: String,
    pub week_start: NaiveDate,
    pub cycle_week: u8,
}

/// Week currently focused for calendar navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarFocusWeek {
    pub week_start: NaiveDate,
    pub cycle_week: u8,
}

/// Request to move the calendar focus to the week containing `date`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFocusWeekRequest {
    pub date: NaiveDate,
}

/// Response after changing the calendar focus week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFocusWeekResponse {
    pub focus_week: CalendarFocusWeek,
    pub success_message: String,
}
