//! Check-in route.
//!
//! ```text
//! POST /checkin -> check_in
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::checkin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/checkin", post(checkin::check_in))
}
