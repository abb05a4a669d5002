//! The `Participant` domain entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timestamp;

/// A registered event participant.
///
/// Created once by the registration flow, mutated exactly once by the
/// check-in flow (`checked_in: false -> true`), read-only thereafter.
/// There is no deletion path. The database owns persisted state; the
/// application only ever holds transient snapshots of these rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Opaque identifier, assigned at creation. This is exactly what
    /// the participant's QR code encodes.
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub has_license: bool,
    /// Set iff `has_license` is true. Always one of the four grade
    /// labels; enforced by the registration validator before insert.
    pub license_grade: Option<String>,
    pub checked_in: bool,
    pub created_at: Timestamp,
}
