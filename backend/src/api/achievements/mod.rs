//! Student and school achievements.

pub mod handlers;
pub mod routes;
