//! Admin routes, mounted at `/admin`. Every handler here takes the
//! [`AdminAuth`](crate::middleware::auth::AdminAuth) extractor.
//!
//! ```text
//! GET /participants -> roster
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/participants", get(admin::roster))
}
