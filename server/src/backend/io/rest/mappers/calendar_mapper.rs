use shared::{CalendarDayHeader, CalendarEventBar, CalendarFocusWeek, CalendarWeek};

use super::event_mapper::EventMapper;
use crate::backend::domain::models::{CycleWeek, LaidOutEvent, WeekLayout};
use crate::backend::domain::WeekDay;

pub struct CalendarMapper;

impl CalendarMapper {
    /// Convert a laid-out event to the bar the client draws
    pub fn event_bar_to_dto(laid_out: &LaidOutEvent<'_>) -> CalendarEventBar {
        let event = &laid_out.event;
        let definition = event.definition;
        CalendarEventBar {
            unique_id: event.key.to_string(),
            name: definition.name.clone(),
            color_tag: definition.color_tag.clone(),
            icon_url: definition.icon_url.clone(),
            icon_fit: EventMapper::icon_fit_to_dto(definition.icon_fit),
            detail_id: definition.detail_id.clone(),
            start_col: event.start_col(),
            end_col: event.end_col(),
            span: event.width(),
            lane: laid_out.lane,
        }
    }

    pub fn day_header_to_dto(day: &WeekDay) -> CalendarDayHeader {
        CalendarDayHeader {
            date: day.date,
            label: day.short_label(),
            weekday: day.weekday_name().to_string(),
            is_today: day.is_today,
            is_current_month: day.is_current_month,
        }
    }

    /// Combine a week layout with its header cells
    pub fn week_to_dto(layout: &WeekLayout<'_>, days: &[WeekDay]) -> CalendarWeek {
        CalendarWeek {
            week_start: layout.week_start,
            cycle_week: layout.cycle_week.as_u8(),
            lane_count: layout.lane_count,
            days: days.iter().map(Self::day_header_to_dto).collect(),
            events: layout.events.iter().map(Self::event_bar_to_dto).collect(),
        }
    }

    pub fn focus_week_to_dto(
        week_start: chrono::NaiveDate,
        cycle_week: CycleWeek,
    ) -> CalendarFocusWeek {
        CalendarFocusWeek {
            week_start,
            cycle_week: cycle_week.as_u8(),
        }
    }
}
