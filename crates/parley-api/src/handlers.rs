//! Route handler functions for all API endpoints.
//!
//! Each handler extracts query/body parameters via axum extractors,
//! interacts with AppState services, and returns JSON responses.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use parley_core::types::{Analytics, Turn};
use parley_ui::CHAT_PAGE_HTML;

use crate::error::ApiError;
use crate::state::AppState;

/// History lookups never return more than this many turns.
const MAX_HISTORY_LIMIT: u32 = 50;

// =============================================================================
// Request / response types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponseBody {
    pub reply: String,
    pub session_id: Uuid,
    pub user_name: Option<String>,
    pub routed_to_search: bool,
    pub saved: bool,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub user: String,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub turns: Vec<Turn>,
}

#[derive(Debug, Deserialize)]
pub struct PreferenceRequest {
    pub user_name: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreferenceResponse {
    pub saved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub database_ok: bool,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /health - service status and database reachability.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_ok = state
        .database
        .with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(|e| parley_core::error::ParleyError::Storage(e.to_string()))
        })
        .is_ok();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        database_ok,
    })
}

/// GET /ui - the embedded chat page.
pub async fn ui() -> Html<&'static str> {
    Html(CHAT_PAGE_HTML)
}

/// POST /chat - handle one user utterance.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponseBody>, ApiError> {
    let outcome = state
        .responder
        .respond(&request.message, request.session_id)
        .await?;

    Ok(Json(ChatResponseBody {
        reply: outcome.reply,
        session_id: outcome.session_id,
        user_name: outcome.user_name,
        routed_to_search: outcome.routed_to_search,
        saved: outcome.saved,
    }))
}

/// GET /history?user=NAME&limit=N - recent turns for a user, newest first.
pub async fn history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, ApiError> {
    if params.user.trim().is_empty() {
        return Err(ApiError::BadRequest("user must not be empty".to_string()));
    }

    let limit = params
        .limit
        .unwrap_or(state.config.chat.default_history_limit)
        .min(MAX_HISTORY_LIMIT);

    let turns = state.turns.history(params.user.trim(), limit)?;
    Ok(Json(HistoryResponse { turns }))
}

/// POST /preferences - append one preference entry.
pub async fn save_preference(
    State(state): State<AppState>,
    Json(request): Json<PreferenceRequest>,
) -> Result<Json<PreferenceResponse>, ApiError> {
    if request.user_name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "user_name must not be empty".to_string(),
        ));
    }
    if request.key.trim().is_empty() {
        return Err(ApiError::BadRequest("key must not be empty".to_string()));
    }

    state
        .preferences
        .save(request.user_name.trim(), request.key.trim(), &request.value)?;
    Ok(Json(PreferenceResponse { saved: true }))
}

/// GET /analytics - aggregate counters over the conversations table.
pub async fn analytics(State(state): State<AppState>) -> Result<Json<Analytics>, ApiError> {
    Ok(Json(state.turns.analytics()?))
}
