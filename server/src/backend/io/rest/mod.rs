//! # REST API Interface Layer
//!
//! Axum routers for the event schedule, one per resource, plus the mappers
//! that convert domain values into the shared DTOs.

pub mod calendar_apis;
pub mod event_apis;
pub mod mappers;
