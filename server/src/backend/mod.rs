//! # Backend Module
//!
//! Contains all non-UI logic for the event schedule.
//!
//! - **Domain**: Cycle resolution and the week layout pipeline
//! - **Storage**: The event catalog file and event descriptions
//! - **IO**: REST endpoints consumed by the rendering client
//! - **Config**: Environment-driven server settings
//!
//! ## Architecture
//!
//! ```text
//! Rendering client
//!     ↓
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (calendar service, layout pipeline)
//!     ↓
//! Storage Layer (catalog YAML, markdown descriptions)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::backend::config::ServerConfig;
use crate::backend::domain::{CalendarService, EventCatalog};
use crate::backend::io::rest::{calendar_apis, event_apis};
use crate::backend::storage::{load_catalog, EventDetailStore};

/// Main application state that holds all services
#[derive(Debug, Clone)]
pub struct AppState {
    pub calendar_service: CalendarService,
    pub event_detail_store: EventDetailStore,
}

impl AppState {
    pub fn new(catalog: EventCatalog, event_detail_store: EventDetailStore) -> Self {
        Self {
            calendar_service: CalendarService::new(Arc::new(catalog)),
            event_detail_store,
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Loading event catalog");
    let catalog = load_catalog(config.catalog_path.as_deref())
        .context("Failed to load event catalog")?;

    info!("Setting up event descriptions");
    if let Some(dir) = &config.details_dir {
        info!("Reading event descriptions from {:?}", dir);
    }
    let event_detail_store = EventDetailStore::new(config.details_dir.clone());

    info!("Setting up application state");
    Ok(AppState::new(catalog, event_detail_store))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Result<Router> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.allowed_origin))?;

    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/calendar", calendar_apis::router())
        .nest("/events", event_apis::router());

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}
