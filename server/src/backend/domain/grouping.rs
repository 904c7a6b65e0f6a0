//! Merges active events that share a key into placement groups.

use std::collections::HashMap;

use super::models::{ActiveEvent, EventGroup, EventKey};

/// Group active events by key and order the groups for lane packing.
///
/// Groups are sorted widest first, then by earliest start column. The sort
/// is stable, so remaining ties keep the order in which each group's first
/// member appeared. Members keep their arrival order inside a group.
pub fn group_events(active: Vec<ActiveEvent<'_>>) -> Vec<EventGroup<'_>> {
    let mut groups: Vec<EventGroup<'_>> = Vec::new();
    let mut group_index: HashMap<EventKey, usize> = HashMap::new();

    for event in active {
        match group_index.get(&event.key) {
            Some(&index) => groups[index].members.push(event),
            None => {
                group_index.insert(event.key.clone(), groups.len());
                groups.push(EventGroup {
                    key: event.key.clone(),
                    members: vec![event],
                });
            }
        }
    }

    groups.sort_by(|a, b| {
        b.max_width()
            .cmp(&a.max_width())
            .then_with(|| a.min_start().cmp(&b.min_start()))
    });

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::activation::activate;
    use crate::backend::domain::models::{CycleWeek, EventDefinition, IconFit, WeekdaySpan};

    fn weekly(name: &str, group_id: Option<&str>, start: u8, end: u8) -> EventDefinition {
        EventDefinition {
            name: name.to_string(),
            color_tag: "yellow".to_string(),
            schedule: [Some(WeekdaySpan::new(start, end)); 4],
            group_id: group_id.map(str::to_string),
            icon_url: None,
            icon_fit: IconFit::Cover,
            detail_id: name.to_lowercase(),
        }
    }

    fn names(groups: &[EventGroup<'_>]) -> Vec<Vec<String>> {
        groups
            .iter()
            .map(|g| g.members.iter().map(|m| m.definition.name.clone()).collect())
            .collect()
    }

    #[test]
    fn test_widest_group_comes_first() {
        let definitions = vec![
            weekly("Short", None, 0, 0),
            weekly("Long", None, 2, 6),
            weekly("Medium", None, 1, 3),
        ];

        let groups = group_events(activate(&definitions, CycleWeek::ALL[0]));
        assert_eq!(
            names(&groups),
            vec![vec!["Long"], vec!["Medium"], vec!["Short"]]
        );
    }

    #[test]
    fn test_equal_width_ties_break_on_start_column() {
        let definitions = vec![
            weekly("Later", None, 4, 5),
            weekly("Earlier", None, 1, 2),
        ];

        let groups = group_events(activate(&definitions, CycleWeek::ALL[0]));
        assert_eq!(names(&groups), vec![vec!["Earlier"], vec!["Later"]]);
    }

    #[test]
    fn test_full_ties_keep_table_order() {
        let definitions = vec![
            weekly("First", None, 1, 3),
            weekly("Second", None, 1, 3),
            weekly("Third", None, 1, 3),
        ];

        let groups = group_events(activate(&definitions, CycleWeek::ALL[0]));
        assert_eq!(
            names(&groups),
            vec![vec!["First"], vec!["Second"], vec!["Third"]]
        );
    }

    #[test]
    fn test_shared_group_id_merges_members() {
        let definitions = vec![
            weekly("Hall A", Some("hall"), 0, 1),
            weekly("Solo", None, 3, 4),
            weekly("Hall B", Some("hall"), 6, 6),
        ];

        let groups = group_events(activate(&definitions, CycleWeek::ALL[0]));
        assert_eq!(groups.len(), 2);

        let hall = &groups[0];
        assert_eq!(hall.key, EventKey::Grouped("hall".to_string()));
        assert_eq!(hall.max_width(), 2);
        assert_eq!(hall.min_start(), 0);
        assert_eq!(names(&groups)[0], vec!["Hall A", "Hall B"]);
    }

    #[test]
    fn test_group_width_uses_widest_member() {
        let definitions = vec![
            weekly("Wide solo", None, 0, 2),
            weekly("Narrow member", Some("g"), 4, 4),
            weekly("Wide member", Some("g"), 0, 3),
        ];

        let groups = group_events(activate(&definitions, CycleWeek::ALL[0]));
        assert_eq!(groups[0].key, EventKey::Grouped("g".to_string()));
        assert_eq!(groups[0].max_width(), 4);
    }
}
