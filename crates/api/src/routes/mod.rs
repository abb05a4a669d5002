//! Route definitions.
//!
//! Each submodule exposes a `router()` returning `Router<AppState>`;
//! [`api_routes`] assembles everything mounted under `/api/v1`.

use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod checkin;
pub mod health;
pub mod participants;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(participants::router())
        .merge(checkin::router())
        .nest("/admin", admin::router())
}
