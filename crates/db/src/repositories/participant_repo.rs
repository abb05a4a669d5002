//! Repository for the `participants` table.
//!
//! Registration is a single atomic insert; check-in is a single atomic
//! conditional update. There is no delete path and no partial write.

use sqlx::PgPool;
use uketsuke_core::participant::Participant;
use uketsuke_core::registration::NewParticipant;
use uuid::Uuid;

use crate::models::participant::ParticipantRow;

/// Column list for `participants` queries.
const PARTICIPANT_COLUMNS: &str =
    "id, name, age, has_license, license_grade, checked_in, created_at";

/// Result of a check-in attempt.
///
/// The update itself decides between the three cases; callers never
/// read first and write second.
#[derive(Debug, Clone)]
pub enum CheckInOutcome {
    /// The row was flipped from not-checked-in to checked-in.
    CheckedIn(Participant),
    /// The participant exists but was already checked in.
    AlreadyCheckedIn,
    /// No participant with the given id.
    NotFound,
}

/// Provides insert, full-table fetch, and check-in for participants.
pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Insert a validated registration and return the stored row.
    ///
    /// The id is generated here (UUID v4); `created_at` and the
    /// boolean defaults come from the database.
    pub async fn insert(
        pool: &PgPool,
        new: &NewParticipant,
    ) -> Result<Participant, sqlx::Error> {
        let query = format!(
            "INSERT INTO participants (id, name, age, has_license, license_grade) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {PARTICIPANT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ParticipantRow>(&query)
            .bind(Uuid::new_v4())
            .bind(&new.name)
            .bind(new.age)
            .bind(new.has_license)
            .bind(new.license_grade.map(|g| g.as_str()))
            .fetch_one(pool)
            .await?;

        Ok(row.into())
    }

    /// Find a participant by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!("SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE id = $1");
        let row = sqlx::query_as::<_, ParticipantRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Fetch the full participant collection.
    ///
    /// Deliberately takes no filter parameters: the admin view filters
    /// and sorts locally against this snapshot.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Participant>, sqlx::Error> {
        let query = format!("SELECT {PARTICIPANT_COLUMNS} FROM participants");
        let rows = sqlx::query_as::<_, ParticipantRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Check a participant in.
    ///
    /// One conditional update; the `checked_in = FALSE` guard makes
    /// the flip happen at most once even under concurrent scans. The
    /// follow-up read only classifies the zero-row case (missing vs
    /// already checked in) and performs no write.
    pub async fn check_in(pool: &PgPool, id: Uuid) -> Result<CheckInOutcome, sqlx::Error> {
        let query = format!(
            "UPDATE participants SET checked_in = TRUE \
             WHERE id = $1 AND checked_in = FALSE \
             RETURNING {PARTICIPANT_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, ParticipantRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        if let Some(row) = updated {
            return Ok(CheckInOutcome::CheckedIn(row.into()));
        }

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM participants WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        if exists {
            Ok(CheckInOutcome::AlreadyCheckedIn)
        } else {
            Ok(CheckInOutcome::NotFound)
        }
    }
}
