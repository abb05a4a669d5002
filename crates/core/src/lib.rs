//! Domain logic for the event reception service.
//!
//! Everything in this crate is pure: validation of registration
//! submissions, normalization of scanned QR payloads, and the
//! filter/sort pipeline behind the admin roster view. Persistence and
//! HTTP concerns live in `uketsuke-db` and `uketsuke-api`.

pub mod checkin;
pub mod error;
pub mod participant;
pub mod registration;
pub mod roster;
pub mod types;
