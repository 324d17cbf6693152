//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::StationId;
use crate::path::{PathError, PathResponse};
use crate::planner::SearchError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/paths", get(find_path))
        .route("/stations/:id/timetable", get(station_timetable))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find and price a route between two stations.
async fn find_path(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, AppError> {
    let request = query.to_request()?;
    let response = state.path_service().find_path_and_fare(&request)?;
    Ok(Json(response))
}

/// Departure times at a station.
async fn station_timetable(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<StationTimetableResponse>, AppError> {
    let timetables = state.path_service().station_timetable(StationId(id))?;

    Ok(Json(StationTimetableResponse {
        station_id: id,
        lines: timetables
            .iter()
            .map(TimetableResult::from_timetable)
            .collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { code: &'static str, message: String },
    NotFound { code: &'static str, message: String },
    Unprocessable { code: &'static str, message: String },
    BadGateway { code: &'static str, message: String },
    Internal { code: &'static str, message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            code: "INVALID_QUERY",
            message: e.to_string(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        let message = e.to_string();
        match e {
            SearchError::SameStation(_) => AppError::BadRequest {
                code: "SAME_STATION",
                message,
            },
            SearchError::MissingDepartureTime => AppError::BadRequest {
                code: "INVALID_QUERY",
                message,
            },
            SearchError::StationNotFound(_) => AppError::NotFound {
                code: "STATION_NOT_FOUND",
                message,
            },
            SearchError::Disconnected { .. } => AppError::Unprocessable {
                code: "DISCONNECTED",
                message,
            },
        }
    }
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        let message = e.to_string();
        match e {
            PathError::Search(e) => e.into(),
            PathError::StationNotFound(_) => AppError::NotFound {
                code: "STATION_NOT_FOUND",
                message,
            },
            PathError::Graph(_) => AppError::BadGateway {
                code: "INVALID_NETWORK",
                message,
            },
            PathError::Network(_) => AppError::BadGateway {
                code: "NETWORK_UNAVAILABLE",
                message,
            },
            PathError::Fare(_) => AppError::Internal {
                code: "INVALID_DISTANCE",
                message,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::NotFound { code, message } => (StatusCode::NOT_FOUND, code, message),
            AppError::Unprocessable { code, message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, code, message)
            }
            AppError::BadGateway { code, message } => (StatusCode::BAD_GATEWAY, code, message),
            AppError::Internal { code, message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, code, message)
            }
        };

        if status.is_server_error() {
            error!(%status, code, %message, "request failed");
        } else {
            warn!(%status, code, %message, "request rejected");
        }

        let body = Json(ErrorResponse {
            code,
            error: message,
        });
        (status, body).into_response()
    }
}
