use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info, warn};

use super::mappers::event_mapper::EventMapper;
use crate::backend::storage::EventDetailError;
use crate::backend::AppState;
use shared::{EventCatalogResponse, EventDetailResponse};

/// Shown when an event has no stored description
pub const MISSING_DESCRIPTION: &str = "No description is available for this event yet.";

/// Create a router for event catalog APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/:detail_id", get(get_event_detail))
}

/// List every event in the catalog
async fn list_events(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/events");

    let catalog = state.calendar_service.catalog();
    let response = EventCatalogResponse {
        anchor_date: catalog.anchor(),
        events: EventMapper::to_dto_list(catalog.events()),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Get the catalog entries and description for one detail id
async fn get_event_detail(
    State(state): State<AppState>,
    Path(detail_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/events/{}", detail_id);

    let events = EventMapper::to_dto_list(
        state
            .calendar_service
            .catalog()
            .events_with_detail(&detail_id),
    );
    if events.is_empty() {
        warn!("No event with detail id '{}'", detail_id);
        return (StatusCode::NOT_FOUND, "Event not found").into_response();
    }

    match state.event_detail_store.load_markdown(&detail_id).await {
        Ok(markdown) => {
            let response = EventDetailResponse {
                detail_id,
                events,
                has_description: markdown.is_some(),
                markdown: markdown.unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e @ EventDetailError::InvalidId(_)) => {
            warn!("{}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e) => {
            error!("Failed to load event description: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading event description").into_response()
        }
    }
}
