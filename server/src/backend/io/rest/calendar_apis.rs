use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use super::mappers::calendar_mapper::CalendarMapper;
use crate::backend::domain::{week_start, CalendarService};
use crate::backend::AppState;
use shared::{
    CalendarWeek, CalendarWeeksResponse, CurrentWeekResponse, UpdateFocusWeekRequest,
    UpdateFocusWeekResponse,
};

/// Most weeks a single request may lay out
pub const MAX_WEEK_COUNT: usize = 12;

// Query parameters for the single week API
#[derive(Debug, Deserialize)]
pub struct CalendarWeekQuery {
    /// Any day of the wanted week; defaults to today
    pub date: Option<NaiveDate>,
}

// Query parameters for the multi-week API
#[derive(Debug, Deserialize)]
pub struct CalendarWeeksQuery {
    pub start: Option<NaiveDate>,
    pub count: Option<usize>,
}

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/week", get(get_calendar_week))
        .route("/weeks", get(get_calendar_weeks))
        .route("/current-week", get(get_current_week))
        .route("/focus-week", get(get_focus_week).post(set_focus_week))
        .route("/focus-week/previous", post(navigate_previous_week))
        .route("/focus-week/next", post(navigate_next_week))
}

fn build_week(
    service: &CalendarService,
    date: NaiveDate,
    today: NaiveDate,
) -> Option<CalendarWeek> {
    let layout = service.layout_week(date)?;
    let days = service.week_days(layout.week_start, today)?;
    Some(CalendarMapper::week_to_dto(&layout, &days))
}

fn date_out_of_range(date: NaiveDate) -> Response {
    warn!("Rejected date {}: its week is outside the supported range", date);
    (
        StatusCode::BAD_REQUEST,
        format!("the week containing {} is outside the supported range", date),
    )
        .into_response()
}

fn focus_response(
    service: &CalendarService,
    week_start: NaiveDate,
    verb: &str,
) -> UpdateFocusWeekResponse {
    UpdateFocusWeekResponse {
        focus_week: CalendarMapper::focus_week_to_dto(week_start, service.cycle_week(week_start)),
        success_message: format!(
            "{} week of {}",
            verb,
            service.format_date_for_display(week_start)
        ),
    }
}

/// Get the layout for the week containing `date`
async fn get_calendar_week(
    State(state): State<AppState>,
    Query(query): Query<CalendarWeekQuery>,
) -> impl IntoResponse {
    info!("GET /api/calendar/week - query: {:?}", query);

    let service = &state.calendar_service;
    let today = service.today();
    let date = query.date.unwrap_or(today);
    match build_week(service, date, today) {
        Some(week) => (StatusCode::OK, Json(week)).into_response(),
        None => date_out_of_range(date),
    }
}

/// Get layouts for consecutive weeks
async fn get_calendar_weeks(
    State(state): State<AppState>,
    Query(query): Query<CalendarWeeksQuery>,
) -> impl IntoResponse {
    info!("GET /api/calendar/weeks - query: {:?}", query);

    let count = query.count.unwrap_or(CalendarService::DEFAULT_WEEK_COUNT);
    if count == 0 || count > MAX_WEEK_COUNT {
        warn!("Rejected week count {}", count);
        return (
            StatusCode::BAD_REQUEST,
            format!("count must be between 1 and {}", MAX_WEEK_COUNT),
        )
            .into_response();
    }

    let service = &state.calendar_service;
    let today = service.today();
    let start = query.start.unwrap_or(today);
    let weeks = service.layout_weeks(start, count).and_then(|layouts| {
        layouts
            .iter()
            .map(|layout| {
                let days = service.week_days(layout.week_start, today)?;
                Some(CalendarMapper::week_to_dto(layout, &days))
            })
            .collect::<Option<Vec<_>>>()
    });
    match weeks {
        Some(weeks) => (StatusCode::OK, Json(CalendarWeeksResponse { weeks })).into_response(),
        None => date_out_of_range(start),
    }
}

/// Get current date information from the backend
async fn get_current_week(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/current-week");

    let service = &state.calendar_service;
    let (today, cycle_week) = service.current_cycle_week();
    let Some(week_start) = week_start(today) else {
        return date_out_of_range(today);
    };
    let response = CurrentWeekResponse {
        today,
        formatted_date: service.format_date_for_display(today),
        week_start,
        cycle_week: cycle_week.as_u8(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Get the current focus week for calendar navigation
async fn get_focus_week(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/focus-week");

    let service = &state.calendar_service;
    let week_start = service.get_focus_week();
    let focus = CalendarMapper::focus_week_to_dto(week_start, service.cycle_week(week_start));
    (StatusCode::OK, Json(focus)).into_response()
}

/// Set the focus week for calendar navigation
async fn set_focus_week(
    State(state): State<AppState>,
    Json(request): Json<UpdateFocusWeekRequest>,
) -> impl IntoResponse {
    info!("POST /api/calendar/focus-week - request: {:?}", request);

    let service = &state.calendar_service;
    let Some(week_start) = service.set_focus_week(request.date) else {
        return date_out_of_range(request.date);
    };
    let response = focus_response(service, week_start, "Calendar focus set to");
    (StatusCode::OK, Json(response)).into_response()
}

/// Navigate to the previous week
async fn navigate_previous_week(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/focus-week/previous");

    let service = &state.calendar_service;
    let Some(week_start) = service.navigate_previous_week() else {
        return (StatusCode::BAD_REQUEST, "Already at the first supported week").into_response();
    };
    let response = focus_response(service, week_start, "Navigated to");
    (StatusCode::OK, Json(response)).into_response()
}

/// Navigate to the next week
async fn navigate_next_week(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/focus-week/next");

    let service = &state.calendar_service;
    let Some(week_start) = service.navigate_next_week() else {
        return (StatusCode::BAD_REQUEST, "Already at the last supported week").into_response();
    };
    let response = focus_response(service, week_start, "Navigated to");
    (StatusCode::OK, Json(response)).into_response()
}
