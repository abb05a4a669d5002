//! Handler for the door check-in flow.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uketsuke_core::checkin::resolve_scan;
use uketsuke_db::repositories::{CheckInOutcome, ParticipantRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Check-in request: the raw text decoded from a scanned QR code.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub decoded_text: String,
}

/// POST /api/v1/checkin
///
/// Normalize the scanned payload into a lookup key and flip the
/// participant's `checked_in` flag with one atomic conditional update.
/// A second scan of the same code is rejected with 409 rather than
/// silently re-written.
pub async fn check_in(
    State(state): State<AppState>,
    Json(input): Json<CheckInRequest>,
) -> AppResult<impl IntoResponse> {
    let key = resolve_scan(&input.decoded_text)?;

    // A payload that is not a UUID can never match a stored row, so it
    // reports as not-found without touching the store.
    let id = Uuid::parse_str(&key).map_err(|_| AppError::NotFound {
        entity: "Participant",
        id: key.clone(),
    })?;

    match ParticipantRepo::check_in(&state.pool, id).await? {
        CheckInOutcome::CheckedIn(participant) => {
            tracing::info!(id = %participant.id, "Participant checked in");
            Ok(Json(DataResponse { data: participant }))
        }
        CheckInOutcome::AlreadyCheckedIn => Err(AppError::AlreadyCheckedIn { id }),
        CheckInOutcome::NotFound => Err(AppError::NotFound {
            entity: "Participant",
            id: id.to_string(),
        }),
    }
}
