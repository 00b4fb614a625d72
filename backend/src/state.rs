//! Shared application state handed to every handler.

use std::sync::Arc;

use adapters::{MediaClient, PushClient};
use sqlx::PgPool;

use crate::config::Config;
use crate::database::init_pool;

pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub media: MediaClient,
    pub push: PushClient,
}

impl AppState {
    pub async fn new() -> Result<Arc<Self>, sqlx::Error> {
        let config = Config::load();

        let pool = init_pool(&config.database_url).await?;
        let media = MediaClient::new(&config.media_base_url, &config.media_upload_preset);
        let push = PushClient::new();

        Ok(Arc::new(Self {
            config,
            pool,
            media,
            push,
        }))
    }
}
