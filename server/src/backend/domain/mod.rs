//! # Domain Module
//!
//! Business logic for the recurring event calendar.
//!
//! ## Module Organization
//!
//! - **event_catalog**: The validated, read-only table of recurring events
//! - **cycle**: Maps calendar weeks onto the four-week event rotation
//! - **activation**: Picks the events that run in a given cycle week
//! - **grouping**: Merges linked entries and orders them for placement
//! - **lane_packer**: Greedy first-fit assignment of groups to display rows
//! - **week_layout**: The full pipeline for a single week
//! - **calendar**: Multi-week views, header cells and focus-week navigation
//!
//! Everything below `calendar` is a pure function of the catalog and the
//! requested week. The only mutable state is the calendar focus week.

pub mod activation;
pub mod calendar;
pub mod cycle;
pub mod event_catalog;
pub mod grouping;
pub mod lane_packer;
pub mod models;
pub mod week_layout;

pub use calendar::*;
pub use cycle::*;
pub use event_catalog::*;
pub use week_layout::*;
