//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::search::{TrainQuery, find_trains};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/search", get(search_trains))
        .with_state(state)
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: state.records.len(),
    })
}

/// Index page with search form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Search for trains on a route.
///
/// Missing query parameters reach the engine as empty strings, so the
/// engine's validation reports them. Returns HTML or JSON based on the
/// Accept header.
async fn search_trains(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let query = TrainQuery::new(
        params.departure.clone(),
        params.arrival.clone(),
        params.criterion.clone(),
    );

    let matches = match find_trains(&state.records, &query) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::debug!(error = %e, "rejected search query");

            if accepts_html(&headers) {
                let template = ErrorTemplate {
                    message: e.to_string(),
                };
                let html = template.render().map_err(|e| AppError::Internal {
                    message: format!("template error: {}", e),
                })?;

                return Ok((StatusCode::BAD_REQUEST, Html(html)).into_response());
            }

            return Err(AppError::BadRequest {
                message: e.to_string(),
            });
        }
    };

    if accepts_html(&headers) {
        // The inputs passed validation, so they echo back as-is.
        let template = ResultsTemplate {
            departure: params.departure,
            arrival: params.arrival,
            criterion: params.criterion.to_lowercase(),
            records: matches.iter().map(RecordView::from_record).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let trains = matches.iter().map(TrainRecordResponse::from_record).collect();

        Ok(Json(SearchResponse { trains }).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
