//! Key/value site settings (school name, contact info, social links).

pub mod handlers;
pub mod routes;
