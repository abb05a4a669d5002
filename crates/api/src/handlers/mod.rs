//! Request handlers, grouped by surface.

pub mod admin;
pub mod checkin;
pub mod participants;
