//! Homepage hero banners.

pub mod handlers;
pub mod routes;
