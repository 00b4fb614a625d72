//! Delivery of notifications to subscribed browsers.
//!
//! Each stored subscription is a push-service endpoint URL; delivery is
//! one POST of the JSON payload per endpoint with a TTL header. The
//! client reports endpoints the push service declares gone so callers
//! can prune them, and otherwise surfaces failures for the caller to
//! log and skip.

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::errors::{AdapterError, Result};
use crate::models::{PushMessage, PushOutcome};

/// Seconds the push service may hold an undelivered notification.
const DEFAULT_TTL_SECS: u32 = 24 * 60 * 60;

pub struct PushClient {
    client: Client,
    ttl_secs: u32,
}

impl PushClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }

    /// Send one message to one subscription endpoint.
    pub async fn send(&self, endpoint: &str, message: &PushMessage) -> Result<PushOutcome> {
        debug!("Pushing \"{}\" to {}", message.title, endpoint);

        let response = self
            .client
            .post(endpoint)
            .header("TTL", self.ttl_secs)
            .json(message)
            .send()
            .await?;

        match response.status() {
            s if s.is_success() => Ok(PushOutcome::Delivered),
            StatusCode::NOT_FOUND | StatusCode::GONE => Ok(PushOutcome::Gone),
            s => Err(AdapterError::Upstream(format!(
                "push endpoint answered {s}"
            ))),
        }
    }
}

impl Default for PushClient {
    fn default() -> Self {
        Self::new()
    }
}
