//! Row structs mapping database rows to domain entities.

pub mod participant;
