//! Core `adapters` crate for the school site's outbound service clients.
//!
//! This crate wraps the two third-party services the backend talks to:
//! the media-hosting upload API (`media`) and browser push delivery
//! (`push`). Backend services interact with them through the shared
//! models and the unified `AdapterError` type.

pub mod errors;
pub mod media;
pub mod models;
pub mod push;

pub use errors::AdapterError;
pub use media::MediaClient;
pub use models::{PushMessage, PushOutcome, UploadedMedia};
pub use push::PushClient;
