//! Handlers for the admin roster view.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uketsuke_core::participant::Participant;
use uketsuke_core::roster::{self, RosterCriteria, RosterStats};
use uketsuke_db::repositories::ParticipantRepo;

use crate::error::AppResult;
use crate::middleware::auth::AdminAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Roster payload: the filtered, sorted view plus roster-wide stats.
#[derive(Debug, Serialize)]
pub struct RosterView {
    pub participants: Vec<Participant>,
    /// Always computed over the unfiltered roster, not the view.
    pub stats: RosterStats,
}

/// GET /api/v1/admin/participants
///
/// Fetch the full participant collection once (no filter parameters
/// are pushed to the store) and apply the filter/sort pipeline locally
/// against that snapshot. Basic-Auth gated.
pub async fn roster(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Query(criteria): Query<RosterCriteria>,
) -> AppResult<impl IntoResponse> {
    let snapshot = ParticipantRepo::list_all(&state.pool).await?;

    let stats = roster::stats(&snapshot);
    let participants = roster::filter_and_sort(&snapshot, &criteria);

    Ok(Json(DataResponse {
        data: RosterView { participants, stats },
    }))
}
