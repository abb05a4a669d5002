//! Request guards.
//!
//! - [`auth::AdminAuth`] -- gates admin routes behind one Basic-Auth
//!   credential pair from process env.

pub mod auth;
