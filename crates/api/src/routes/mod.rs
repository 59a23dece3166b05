//! Route definitions, one module per resource.

use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod health;
pub mod movies;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/movies", movies::router())
}
