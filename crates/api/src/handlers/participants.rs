//! Handlers for the registration flow.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uketsuke_core::registration::{self, RegistrationInput};
use uketsuke_db::repositories::ParticipantRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/participants
///
/// Validate a registration submission and persist it. Returns the
/// stored participant, whose `id` is what the QR code will encode.
/// Validation failures are reported before any store call is made.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegistrationInput>,
) -> AppResult<impl IntoResponse> {
    let new = registration::validate(&input)?;

    let participant = ParticipantRepo::insert(&state.pool, &new).await?;

    tracing::info!(
        id = %participant.id,
        has_license = participant.has_license,
        "Participant registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: participant })))
}

/// GET /api/v1/participants/{id}
///
/// Fetch one participant. Backs the QR display page, which shows the
/// id it encodes alongside the participant's name.
pub async fn get_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let participant = ParticipantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound {
            entity: "Participant",
            id: id.to_string(),
        })?;

    Ok(Json(DataResponse { data: participant }))
}
