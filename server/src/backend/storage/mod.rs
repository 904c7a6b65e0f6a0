//! # Storage Module
//!
//! File-backed inputs for the event schedule.
//!
//! - **catalog_file**: Loads the event catalog from YAML at startup
//! - **event_details**: Reads long-form markdown descriptions on demand
//!
//! Nothing here is written at runtime. The catalog is read once and then
//! lives in memory; detail files are read per request so they can be edited
//! without restarting the server.

pub mod catalog_file;
pub mod event_details;

pub use catalog_file::*;
pub use event_details::*;
