use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;

use super::AppState;
use crate::error::ScrapeError;

const USER_NOT_FOUND: &str =
    "User not found. User either does not exist or does exist but has no bytes.";
const BYTE_NOT_FOUND: &str = "Byte not found.";
const INTERNAL_ERROR: &str = "Internal server error";

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/:username", get(get_user))
        .route("/bytes/:id", get(get_byte))
        .route("/healthz", get(health))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

async fn get_user(State(state): State<AppState>, Path(username): Path<String>) -> Response {
    match state.scraper.get_user(&username).await {
        Ok(user) => Json(user).into_response(),
        Err(e) => error_response(e, USER_NOT_FOUND),
    }
}

async fn get_byte(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.scraper.get_post(&id).await {
        Ok(post) => Json(post).into_response(),
        Err(e) => error_response(e, BYTE_NOT_FOUND),
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Map a scrape failure to a JSON error response.
fn error_response(e: ScrapeError, not_found_message: &'static str) -> Response {
    if e.is_not_found() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: not_found_message,
            }),
        )
            .into_response();
    }

    let e = anyhow::Error::from(e);
    tracing::error!("Scrape failed: {e:#}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: INTERNAL_ERROR,
        }),
    )
        .into_response()
}
