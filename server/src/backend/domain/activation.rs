//! Picks out the events that run during a given cycle week.

use super::models::{ActiveEvent, CycleWeek, EventDefinition, EventKey};

/// Active events for `cycle_week`, in table order
pub fn activate(definitions: &[EventDefinition], cycle_week: CycleWeek) -> Vec<ActiveEvent<'_>> {
    definitions
        .iter()
        .enumerate()
        .filter_map(|(index, definition)| {
            let span = definition.slot(cycle_week)?;
            Some(ActiveEvent {
                definition,
                definition_index: index,
                key: EventKey::for_definition(index, definition),
                span,
            })
        })
        .collect()
}
