//! Generic data models for the `adapters` crate.
//!
//! These models define the representations exchanged with the outbound
//! services (uploaded media descriptors, push payloads and delivery
//! outcomes) so the backend services work with a consistent data format
//! regardless of the provider behind each client.

use serde::{Deserialize, Serialize};

/// Descriptor of a file accepted by the media-hosting service.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedMedia {
    pub public_id: String,
    pub secure_url: String,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
}

/// Notification payload delivered to browser push endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Result of a single delivery attempt.
///
/// `Gone` means the endpoint reported it will never accept deliveries
/// again (404/410) and should be pruned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Delivered,
    Gone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_message_omits_absent_url() {
        let message = PushMessage {
            title: "Info PPDB".to_string(),
            body: "Berkas diverifikasi".to_string(),
            url: None,
        };

        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("url").is_none());
        assert_eq!(json["title"], "Info PPDB");
    }

    #[test]
    fn uploaded_media_tolerates_extra_fields() {
        let media: UploadedMedia = serde_json::from_str(
            r#"{"public_id":"site/hero1","secure_url":"https://cdn.example/hero1.jpg",
                "format":"jpg","width":1600}"#,
        )
        .unwrap();

        assert_eq!(media.public_id, "site/hero1");
        assert!(media.bytes.is_none());
    }
}
