//! Domain error taxonomy.
//!
//! [`ValidationError`] covers everything the user can correct by
//! re-submitting: bad registration fields and unusable scan payloads.
//! Store and configuration failures are represented at the layers that
//! own them (`sqlx::Error` in `uketsuke-db`, `AppError` in
//! `uketsuke-api`) so a persistence failure is never reported as a
//! validation failure.

/// A user-correctable rejection of submitted input.
///
/// Messages are user-facing and echoed verbatim in HTTP responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The submitted name is empty after trimming.
    #[error("名前は必須です")]
    MissingName,

    /// The submitted age is not a positive integer.
    #[error("年齢が不正です")]
    InvalidAge,

    /// `has_license` is set but the grade is missing or not one of the
    /// four recognized values.
    #[error("資格保有者は級を選択してください")]
    MissingGrade,

    /// A scanned payload normalized to an empty string.
    #[error("IDがありません")]
    EmptyScan,
}
