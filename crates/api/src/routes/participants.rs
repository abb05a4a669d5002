//! Registration routes.
//!
//! ```text
//! POST /participants       -> register
//! GET  /participants/{id}  -> get_participant (backs the QR display page)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::participants;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/participants", post(participants::register))
        .route("/participants/{id}", get(participants::get_participant))
}
