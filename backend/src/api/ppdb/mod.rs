//! PPDB (student admission) intake.
//!
//! The one workflow in the system that is more than plain CRUD: the
//! public form creates a registration against an open wave, staff
//! review it through the admin endpoints, and status changes fan out
//! push notifications via `services::notifier`.

pub mod handlers;
pub mod routes;
