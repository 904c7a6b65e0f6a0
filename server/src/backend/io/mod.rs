//! # IO Module
//!
//! Interface layer between the rendering client and the domain logic.
//!
//! Translates HTTP requests into calendar operations and domain results into
//! the DTOs from the `shared` crate. No layout logic lives here.
//!
//! ## Supported Operations
//!
//! - **GET /api/calendar/week**: Layout for one week
//! - **GET /api/calendar/weeks**: Layout for consecutive weeks
//! - **GET /api/calendar/current-week**: Today's week and cycle week
//! - **GET/POST /api/calendar/focus-week**: Calendar navigation state
//! - **GET /api/events**: The event catalog
//! - **GET /api/events/:detail_id**: Event description

pub mod rest;

pub use rest::*;
