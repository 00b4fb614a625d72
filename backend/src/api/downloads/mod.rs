//! Downloadable documents.

pub mod handlers;
pub mod routes;
