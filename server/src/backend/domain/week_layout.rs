//! Full layout pipeline for one calendar week.

use chrono::NaiveDate;
use tracing::debug;

use super::activation::activate;
use super::cycle::week_start;
use super::event_catalog::EventCatalog;
use super::grouping::group_events;
use super::lane_packer::pack_lanes;
use super::models::WeekLayout;

/// Lay out the week containing `date`.
///
/// The result depends only on the catalog and the week, so repeated calls
/// with the same arguments always agree. `None` when the week starts
/// before the first representable date.
pub fn layout_week(catalog: &EventCatalog, date: NaiveDate) -> Option<WeekLayout<'_>> {
    let week_start = week_start(date)?;
    let cycle_week = catalog.resolver().resolve(week_start);

    let active = activate(catalog.events(), cycle_week);
    let active_count = active.len();
    let packing = pack_lanes(group_events(active));

    debug!(
        "Week of {} (cycle week {}): {} active events in {} lane(s)",
        week_start, cycle_week, active_count, packing.lane_count
    );

    Some(WeekLayout {
        week_start,
        cycle_week,
        events: packing.events,
        lane_count: packing.lane_count,
    })
}
