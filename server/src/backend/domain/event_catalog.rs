//! The validated, read-only table of recurring events.
//!
//! A catalog is checked once when it is built. After that the layout
//! pipeline trusts it completely and never re-validates spans.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use super::cycle::CycleResolver;
use super::models::{CycleWeek, EventDefinition, DAYS_PER_WEEK};

/// Event table compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../../data/events.yaml");

/// Problems found while loading an event catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Event #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("Event '{name}' has an empty detail id")]
    EmptyDetailId { name: String },
    #[error("Event '{name}' has an empty group id")]
    EmptyGroupId { name: String },
    #[error("Event '{name}', cycle week {cycle_week}: start column {start} is after end column {end}")]
    InvertedSpan {
        name: String,
        cycle_week: CycleWeek,
        start: u8,
        end: u8,
    },
    #[error("Event '{name}', cycle week {cycle_week}: column {column} is outside Monday..Sunday (0-6)")]
    ColumnOutOfRange {
        name: String,
        cycle_week: CycleWeek,
        column: u8,
    },
    #[error("Cycle anchor {0} is not a Monday")]
    AnchorNotMonday(NaiveDate),
    #[error("Failed to parse event catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Failed to read event catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    anchor: NaiveDate,
    events: Vec<EventDefinition>,
}

/// Immutable event table plus the Monday that starts cycle week 0
#[derive(Debug, Clone, PartialEq)]
pub struct EventCatalog {
    anchor: NaiveDate,
    events: Vec<EventDefinition>,
}

impl EventCatalog {
    /// Build a catalog, rejecting malformed entries
    pub fn new(anchor: NaiveDate, events: Vec<EventDefinition>) -> Result<Self, CatalogError> {
        if anchor.weekday() != Weekday::Mon {
            return Err(CatalogError::AnchorNotMonday(anchor));
        }
        for (index, event) in events.iter().enumerate() {
            validate_definition(index, event)?;
        }
        Ok(Self { anchor, events })
    }

    /// Parse and validate a YAML catalog document
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(source)?;
        Self::new(document.anchor, document.events)
    }

    /// The event rotation that ships with the server
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_yaml_str(BUILTIN_CATALOG)?;
        info!(
            "Loaded built-in event catalog: {} events, anchor {}",
            catalog.events.len(),
            catalog.anchor
        );
        Ok(catalog)
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn events(&self) -> &[EventDefinition] {
        &self.events
    }

    pub fn resolver(&self) -> CycleResolver {
        CycleResolver::new(self.anchor)
    }

    /// All entries that point at the same long-form description
    pub fn events_with_detail(&self, detail_id: &str) -> Vec<&EventDefinition> {
        self.events
            .iter()
            .filter(|event| event.detail_id == detail_id)
            .collect()
    }
}

fn validate_definition(index: usize, event: &EventDefinition) -> Result<(), CatalogError> {
    if event.name.trim().is_empty() {
        return Err(CatalogError::EmptyName { index });
    }
    if event.detail_id.trim().is_empty() {
        return Err(CatalogError::EmptyDetailId {
            name: event.name.clone(),
        });
    }
    if matches!(&event.group_id, Some(group_id) if group_id.trim().is_empty()) {
        return Err(CatalogError::EmptyGroupId {
            name: event.name.clone(),
        });
    }

    for cycle_week in CycleWeek::ALL {
        let Some(span) = event.slot(cycle_week) else {
            continue;
        };
        if span.start > span.end {
            return Err(CatalogError::InvertedSpan {
                name: event.name.clone(),
                cycle_week,
                start: span.start,
                end: span.end,
            });
        }
        if span.end as usize >= DAYS_PER_WEEK {
            return Err(CatalogError::ColumnOutOfRange {
                name: event.name.clone(),
                cycle_week,
                column: span.end,
            });
        }
    }

    Ok(())
}
