//! Static event definitions and the small value types they are built from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Columns in a calendar week, Monday through Sunday
pub const DAYS_PER_WEEK: usize = 7;

/// Number of weeks in the event rotation
pub const CYCLE_LENGTH: usize = 4;

/// Position within the four-week event rotation (0..=3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleWeek(u8);

impl CycleWeek {
    pub const ALL: [CycleWeek; CYCLE_LENGTH] =
        [CycleWeek(0), CycleWeek(1), CycleWeek(2), CycleWeek(3)];

    /// Reduce a signed week offset from the anchor onto the rotation.
    /// Offsets before the anchor wrap around instead of going negative.
    pub fn from_week_offset(weeks: i64) -> Self {
        Self(weeks.rem_euclid(CYCLE_LENGTH as i64) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CycleWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive weekday column range, 0 = Monday .. 6 = Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdaySpan {
    pub start: u8,
    pub end: u8,
}

impl WeekdaySpan {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Number of columns covered. Always at least 1 for a validated span.
    pub fn width(&self) -> u8 {
        self.end.saturating_sub(self.start) + 1
    }

    pub fn columns(&self) -> RangeInclusive<usize> {
        self.start as usize..=self.end as usize
    }

    pub fn overlaps(&self, other: &WeekdaySpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// How an event icon should be fitted into its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFit {
    #[default]
    Cover,
    Contain,
}

/// One entry of the recurring event table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDefinition {
    pub name: String,
    /// Presentation hint, passed through untouched
    pub color_tag: String,
    /// One slot per cycle week; `None` when the event is off that week
    pub schedule: [Option<WeekdaySpan>; CYCLE_LENGTH],
    /// Entries sharing a group id are drawn as one logical event
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub icon_fit: IconFit,
    pub detail_id: String,
}

impl EventDefinition {
    /// Columns this event covers during `cycle_week`, if it runs at all
    pub fn slot(&self, cycle_week: CycleWeek) -> Option<WeekdaySpan> {
        self.schedule[cycle_week.index()]
    }
}

/// Identity used to keep related entries in one calendar lane.
///
/// Entries with a group id share the `Grouped` key; every other entry is
/// keyed by its position in the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKey {
    Standalone(usize),
    Grouped(String),
}

impl EventKey {
    pub fn for_definition(index: usize, definition: &EventDefinition) -> Self {
        match &definition.group_id {
            Some(group_id) => EventKey::Grouped(group_id.clone()),
            None => EventKey::Standalone(index),
        }
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKey::Standalone(index) => write!(f, "event-{}", index),
            EventKey::Grouped(group_id) => f.write_str(group_id),
        }
    }
}
