//! Intermediate and final values produced while laying out one calendar week.

use chrono::NaiveDate;

use super::event::{CycleWeek, EventDefinition, EventKey, WeekdaySpan};

/// An event definition that runs during the week being laid out
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEvent<'a> {
    pub definition: &'a EventDefinition,
    /// Position of `definition` in the catalog
    pub definition_index: usize,
    pub key: EventKey,
    pub span: WeekdaySpan,
}

impl ActiveEvent<'_> {
    pub fn start_col(&self) -> u8 {
        self.span.start
    }

    pub fn end_col(&self) -> u8 {
        self.span.end
    }

    pub fn width(&self) -> u8 {
        self.span.width()
    }
}

/// Active events sharing one key. Placed into a single lane as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGroup<'a> {
    pub key: EventKey,
    pub members: Vec<ActiveEvent<'a>>,
}

impl EventGroup<'_> {
    pub fn max_width(&self) -> u8 {
        self.members.iter().map(ActiveEvent::width).max().unwrap_or(0)
    }

    pub fn min_start(&self) -> u8 {
        self.members.iter().map(ActiveEvent::start_col).min().unwrap_or(0)
    }
}

/// An active event with its assigned display row
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutEvent<'a> {
    pub event: ActiveEvent<'a>,
    pub lane: usize,
}

/// Everything the renderer needs to draw one week of event bars
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout<'a> {
    /// Monday of the week
    pub week_start: NaiveDate,
    pub cycle_week: CycleWeek,
    pub events: Vec<LaidOutEvent<'a>>,
    /// Rows used; zero when nothing runs this week
    pub lane_count: usize,
}
