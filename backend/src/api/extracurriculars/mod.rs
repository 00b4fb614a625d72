//! Extracurricular programs.

pub mod handlers;
pub mod routes;
