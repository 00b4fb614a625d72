//! Media uploads forwarded to the hosting service.

pub mod handlers;
pub mod routes;
