use shared::{EventInfo, IconFit, ScheduleSlot};

use crate::backend::domain::models::{self, EventDefinition, WeekdaySpan};

pub struct EventMapper;

impl EventMapper {
    /// Convert domain IconFit to shared IconFit
    pub fn icon_fit_to_dto(icon_fit: models::IconFit) -> IconFit {
        match icon_fit {
            models::IconFit::Cover => IconFit::Cover,
            models::IconFit::Contain => IconFit::Contain,
        }
    }

    pub fn slot_to_dto(span: WeekdaySpan) -> ScheduleSlot {
        ScheduleSlot {
            start: span.start,
            end: span.end,
        }
    }

    /// Convert a domain EventDefinition to a shared EventInfo DTO
    pub fn to_dto(definition: &EventDefinition) -> EventInfo {
        EventInfo {
            name: definition.name.clone(),
            color_tag: definition.color_tag.clone(),
            schedule: definition
                .schedule
                .iter()
                .copied()
                .map(|slot| slot.map(Self::slot_to_dto))
                .collect(),
            group_id: definition.group_id.clone(),
            icon_url: definition.icon_url.clone(),
            icon_fit: Self::icon_fit_to_dto(definition.icon_fit),
            detail_id: definition.detail_id.clone(),
        }
    }

    pub fn to_dto_list<'a, I>(definitions: I) -> Vec<EventInfo>
    where
        I: IntoIterator<Item = &'a EventDefinition>,
    {
        definitions.into_iter().map(Self::to_dto).collect()
    }
}
