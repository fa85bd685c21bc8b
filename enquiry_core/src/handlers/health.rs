//! Health and service description handlers

use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};

pub async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "app": state.app_name,
        "version": state.version,
        "endpoints": {
            "health": "GET /health",
            "contact": "POST /api/contact"
        }
    }))
}

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": state.version,
        "recipient_configured": !state.enquiries.recipient().is_empty(),
        "timestamp": chrono::Utc::now().timestamp()
    }))
}
