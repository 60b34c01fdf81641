#![warn(clippy::pedantic, clippy::all, clippy::nursery)]

use crate::{
    routes::students::{get_student, post_student},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

#[macro_use]
extern crate tracing;

pub mod config;
pub mod data;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the full route table once at startup. Kept out of `main` so the
/// integration tests can drive the router in-process.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/students", post(post_student))
        .route("/students/{id}", get(get_student))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
