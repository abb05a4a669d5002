//! Row mapping for the `participants` table.

use sqlx::FromRow;
use uketsuke_core::participant::Participant;
use uketsuke_core::types::Timestamp;
use uuid::Uuid;

/// A row from the `participants` table.
///
/// Field-for-field mirror of the domain entity; kept separate so the
/// domain crate stays free of sqlx. Convert with `From`.
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantRow {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub has_license: bool,
    pub license_grade: Option<String>,
    pub checked_in: bool,
    pub created_at: Timestamp,
}

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        Participant {
            id: row.id,
            name: row.name,
            age: row.age,
            has_license: row.has_license,
            license_grade: row.license_grade,
            checked_in: row.checked_in,
            created_at: row.created_at,
        }
    }
}
