//! Site navigation menu.

pub mod handlers;
pub mod routes;
