//! News articles: public feed plus back-office CRUD.

pub mod handlers;
pub mod routes;
