//! Route table

use crate::{
    handlers::{contact::handle_contact, health},
    AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

pub const CONTACT_PATH: &str = "/api/contact";

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::handle_root))
        .route("/health", get(health::handle_health))
        .route(CONTACT_PATH, post(handle_contact))
}
