//! Staff directory.

pub mod handlers;
pub mod routes;
