//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::TimeInput;
use crate::timetable::TimetableError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/line", post(register_line))
        .route("/nextmulti", get(next_multi))
        .route("/lines", get(list_lines))
        .route("/lines/:name", get(get_line))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Register a new line schedule.
async fn register_line(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatusResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: RegisterLineRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid JSON");
        AppError::bad_request("Bad Request.")
    })?;

    // Empty strings count as missing
    let line = req.line.filter(|l| !l.is_empty());
    let schedule = req.schedule.filter(|s| s.as_str() != Some(""));
    let (Some(line), Some(schedule)) = (line, schedule) else {
        return Err(AppError::bad_request("Bad Request."));
    };

    let schedule = TimeInput::try_from(schedule)
        .map_err(|_| AppError::bad_request("Error processing schedule."))?;

    let line = state
        .timetable
        .register(&line, schedule)
        .await
        .map_err(|e| match e {
            TimetableError::InvalidInput(_) => {
                AppError::bad_request("Error processing schedule.")
            }
            other => AppError::from(other),
        })?;

    info!(line = %line, "line registered");
    Ok(Json(StatusResponse {
        status: "Schedule saved.".to_string(),
    }))
}

/// Find the next time two or more trains are in at once.
async fn next_multi(
    State(state): State<AppState>,
    Query(req): Query<NextMultiRequest>,
) -> Result<Json<NextMultiResponse>, AppError> {
    let Some(time) = req.time.filter(|t| !t.is_empty()) else {
        return Err(AppError::bad_request("Missing Query."));
    };

    let found = state.timetable.next_coincidence(&time).await?;

    match found {
        Some(m) => info!(query = %time, found = %m, "found the next coincidence"),
        None => info!(query = %time, "next coincidence not found"),
    }

    Ok(Json(NextMultiResponse::from_found(found)))
}

/// List all registered lines.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .timetable
        .lines()
        .await
        .iter()
        .map(|l| l.to_string())
        .collect();

    Json(LinesResponse { lines })
}

/// Fetch a single line's schedule.
async fn get_line(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let schedule = state
        .timetable
        .schedule(&name)
        .await?
        .ok_or_else(|| AppError::NotFound {
            message: format!("Line {} not found.", name),
        })?;

    Ok(Json(ScheduleResponse::from_schedule(&schedule)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl AppError {
    fn bad_request(message: &str) -> Self {
        AppError::BadRequest {
            message: message.to_string(),
        }
    }
}

impl From<TimetableError> for AppError {
    fn from(e: TimetableError) -> Self {
        match e {
            TimetableError::InvalidLineName(_) => AppError::bad_request("Line name is invalid."),
            TimetableError::InvalidInput(message) => AppError::BadRequest { message },
            TimetableError::EncodingUnsupported => {
                AppError::bad_request("Error processing schedule.")
            }
            TimetableError::KeyExists(_) => AppError::bad_request("Error saving schedule."),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
