//! Authentication module for back-office accounts, sessions, and the
//! role gate protecting the admin API.
//!
//! Login issues an HttpOnly session cookie; the middleware validates it
//! against the sessions table and rejects requests whose account role is
//! not allowed through.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

pub use errors::AuthError;
pub use models::CurrentUser;
