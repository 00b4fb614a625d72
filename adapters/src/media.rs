//! Client for the hosted media (image/video) upload service.
//!
//! Uploads go to a Cloudinary-style auto-upload endpoint using an
//! unsigned upload preset: a multipart POST carrying the file bytes and
//! the preset name, answered with the hosted URL and public id.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::{AdapterError, Result};
use crate::models::UploadedMedia;

pub struct MediaClient {
    base_url: String,
    upload_preset: String,
    client: Client,
}

impl MediaClient {
    /// `base_url` is the account-scoped API root, e.g.
    /// `https://api.cloudinary.com/v1_1/<cloud-name>`.
    pub fn new(base_url: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            upload_preset: upload_preset.into(),
            client: Client::new(),
        }
    }

    /// Upload raw file bytes, letting the service detect the resource type.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadedMedia> {
        let url = format!("{}/auto/upload", self.base_url);

        debug!("Uploading {} ({} bytes) to {}", file_name, bytes.len(), url);

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Media upload rejected with {}: {}", status, body);
            return Err(AdapterError::Upstream(format!(
                "upload failed with status {status}"
            )));
        }

        let media: UploadedMedia = response
            .json()
            .await
            .map_err(|e| AdapterError::Decode(e.to_string()))?;

        debug!("Upload accepted as {}", media.public_id);
        Ok(media)
    }
}
