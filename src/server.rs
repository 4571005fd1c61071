//! HTTP surface for the mentorbot responder

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::engine::SharedResponderEngine;
use crate::history_store::HistoryStore;
use crate::types::{HistoryEntry, MessagePair};

/// Incoming chat message
#[derive(Debug, Deserialize)]
pub struct RespondRequestHttp {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Shared handler state: the engine plus the history collaborator.
#[derive(Clone)]
pub struct AppState {
    pub engine: SharedResponderEngine,
    pub store: Arc<dyn HistoryStore>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn store_error(context: &str, err: anyhow::Error) -> HandlerError {
    error!("{}: {:?}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: context.to_string(),
            details: Some(err.to_string()),
        }),
    )
}

/// Process one message: fetch history, run the pipeline, persist the pair.
async fn respond_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<RespondRequestHttp>,
) -> Result<Json<MessagePair>, HandlerError> {
    info!("Respond request: session={} len={}", session_id, req.message.len());

    let history = state
        .store
        .history(&session_id)
        .await
        .map_err(|e| store_error("Failed to load history", e))?;

    let pair = state.engine.process(&history, &session_id, &req.message);

    state
        .store
        .append(&session_id, vec![pair.user_msg.clone(), pair.ai_msg.clone()])
        .await
        .map_err(|e| store_error("Failed to persist messages", e))?;

    Ok(Json(pair))
}

/// Stored history for a session.
async fn history_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<HistoryEntry>>, HandlerError> {
    let history = state
        .store
        .history(&session_id)
        .await
        .map_err(|e| store_error("Failed to load history", e))?;
    Ok(Json(history))
}

/// Known template language keys, in store order.
async fn languages_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    let keys = state
        .engine
        .store()
        .keys()
        .map(|k| k.to_string())
        .collect();
    Json(keys)
}

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "mentorbot".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create and configure the HTTP router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/languages", get(languages_handler))
        .route("/session/:session_id/respond", post(respond_handler))
        .route("/session/:session_id/history", get(history_handler))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    info!("Starting mentorbot server on {}", addr);

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
