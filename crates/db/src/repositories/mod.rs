//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod participant_repo;

pub use participant_repo::{CheckInOutcome, ParticipantRepo};
