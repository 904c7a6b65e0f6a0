//! Greedy first-fit assignment of event groups to calendar rows.
//!
//! Each lane is a fixed row of seven day slots. Groups arrive already
//! sorted (widest first) and each one takes the lowest lane whose slots
//! under every member are free or already held by that same group.

use tracing::debug;

use super::models::{EventGroup, LaidOutEvent, DAYS_PER_WEEK};

/// Occupant of each day slot, as an index into the packed group list
type LaneRow = [Option<usize>; DAYS_PER_WEEK];

/// Result of packing one week of groups
#[derive(Debug, Clone, PartialEq)]
pub struct LanePacking<'a> {
    /// One entry per group member, in group order
    pub events: Vec<LaidOutEvent<'a>>,
    pub lane_count: usize,
}

/// Assign every group to a lane. Never fails; only the lane count grows.
pub fn pack_lanes(groups: Vec<EventGroup<'_>>) -> LanePacking<'_> {
    let mut lanes: Vec<LaneRow> = Vec::new();
    let mut events = Vec::new();

    for (group_index, group) in groups.into_iter().enumerate() {
        // A fresh lane is empty, so the scan never needs to look past it.
        let lane = lanes
            .iter()
            .position(|row| fits(row, group_index, &group))
            .unwrap_or(lanes.len());
        if lane == lanes.len() {
            lanes.push([None; DAYS_PER_WEEK]);
        }

        for member in &group.members {
            for column in member.span.columns() {
                lanes[lane][column] = Some(group_index);
            }
        }

        debug!(
            "Placed group {} ({} member(s)) in lane {}",
            group.key,
            group.members.len(),
            lane
        );
        events.extend(group.members.into_iter().map(|event| LaidOutEvent { event, lane }));
    }

    LanePacking {
        lane_count: lanes.len(),
        events,
    }
}

/// Members of one group may share slots with each other, never with others
fn fits(row: &LaneRow, group_index: usize, group: &EventGroup<'_>) -> bool {
    group.members.iter().all(|member| {
        member
            .span
            .columns()
            .all(|column| row[column].map_or(true, |occupant| occupant == group_index))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::activation::activate;
    use crate::backend::domain::grouping::group_events;
    use crate::backend::domain::models::{CycleWeek, EventDefinition, IconFit, WeekdaySpan};

    fn weekly(name: &str, group_id: Option<&str>, start: u8, end: u8) -> EventDefinition {
        EventDefinition {
            name: name.to_string(),
            color_tag: "red".to_string(),
            schedule: [Some(WeekdaySpan::new(start, end)); 4],
            group_id: group_id.map(str::to_string),
            icon_url: None,
            icon_fit: IconFit::Cover,
            detail_id: name.to_lowercase(),
        }
    }

    fn pack(definitions: &[EventDefinition]) -> LanePacking<'_> {
        pack_lanes(group_events(activate(definitions, CycleWeek::ALL[0])))
    }

    fn lane_of(packing: &LanePacking<'_>, name: &str) -> usize {
        packing
            .events
            .iter()
            .find(|e| e.event.definition.name == name)
            .map(|e| e.lane)
            .unwrap()
    }

    #[test]
    fn test_empty_week_uses_no_lanes() {
        let packing = pack_lanes(Vec::new());
        assert!(packing.events.is_empty());
        assert_eq!(packing.lane_count, 0);
    }

    #[test]
    fn test_overlapping_events_get_separate_lanes() {
        let definitions = vec![weekly("A", None, 0, 2), weekly("B", None, 1, 3)];

        let packing = pack(&definitions);
        assert_eq!(lane_of(&packing, "A"), 0);
        assert_eq!(lane_of(&packing, "B"), 1);
        assert_eq!(packing.lane_count, 2);
    }

    #[test]
    fn test_disjoint_events_share_lane_zero() {
        let definitions = vec![
            weekly("Mon", None, 0, 0),
            weekly("Tue-Wed", None, 1, 2),
            weekly("Thu-Sat", None, 3, 5),
            weekly("Sun", None, 6, 6),
        ];

        let packing = pack(&definitions);
        assert!(packing.events.iter().all(|e| e.lane == 0));
        assert_eq!(packing.lane_count, 1);
    }

    #[test]
    fn test_lower_lane_is_reused_when_free() {
        let definitions = vec![
            weekly("Wide", None, 0, 3),
            weekly("Overlaps wide", None, 2, 4),
            weekly("Fits after wide", None, 5, 6),
        ];

        let packing = pack(&definitions);
        assert_eq!(lane_of(&packing, "Wide"), 0);
        assert_eq!(lane_of(&packing, "Overlaps wide"), 1);
        assert_eq!(lane_of(&packing, "Fits after wide"), 0);
    }

    #[test]
    fn test_group_members_land_in_one_lane() {
        let definitions = vec![
            weekly("Blocker", None, 1, 5),
            weekly("Hall A", Some("hall"), 0, 1),
            weekly("Hall B", Some("hall"), 6, 6),
            weekly("Fills gap", None, 6, 6),
        ];

        let packing = pack(&definitions);
        // "Hall A" collides with the blocker, so the whole group moves down
        assert_eq!(lane_of(&packing, "Blocker"), 0);
        assert_eq!(lane_of(&packing, "Hall A"), 1);
        assert_eq!(lane_of(&packing, "Hall B"), 1);
        assert_eq!(lane_of(&packing, "Fills gap"), 0);
    }

    #[test]
    fn test_group_may_overlap_itself() {
        let definitions = vec![
            weekly("Part one", Some("g"), 0, 3),
            weekly("Part two", Some("g"), 2, 5),
        ];

        let packing = pack(&definitions);
        assert_eq!(packing.lane_count, 1);
        assert_eq!(lane_of(&packing, "Part one"), 0);
        assert_eq!(lane_of(&packing, "Part two"), 0);
    }

    #[test]
    fn test_distinct_groups_never_overlap_in_a_lane() {
        let definitions = vec![
            weekly("A", None, 0, 6),
            weekly("B", Some("b"), 0, 1),
            weekly("B2", Some("b"), 4, 6),
            weekly("C", None, 1, 4),
            weekly("D", None, 2, 2),
            weekly("E", None, 5, 6),
            weekly("F", None, 3, 3),
        ];

        let packing = pack(&definitions);
        for (i, a) in packing.events.iter().enumerate() {
            for b in packing.events.iter().skip(i + 1) {
                if a.lane == b.lane && a.event.key != b.event.key {
                    assert!(
                        !a.event.span.overlaps(&b.event.span),
                        "{} and {} collide in lane {}",
                        a.event.definition.name,
                        b.event.definition.name,
                        a.lane
                    );
                }
            }
        }
    }
}
