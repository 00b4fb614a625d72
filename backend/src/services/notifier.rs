//! PPDB status-change push fan-out.
//!
//! When staff change a registration's status, every stored browser
//! subscription gets one notification, delivered sequentially. A failed
//! delivery is logged and skipped; endpoints the push service reports
//! gone are pruned. The broadcast is recorded once in the notification
//! log. None of this can fail the originating request.

use adapters::{PushMessage, PushOutcome};
use tracing::{info, warn};

use crate::database::models::{RegistrationRow, RegistrationStatus};
use crate::database::queries;
use crate::state::AppState;

/// Message shown on the applicant's device for each status.
pub fn status_message(registration: &RegistrationRow, status: RegistrationStatus) -> PushMessage {
    let body = match status {
        RegistrationStatus::Pending => format!(
            "Pendaftaran {} telah diterima dan menunggu verifikasi.",
            registration.registration_number
        ),
        RegistrationStatus::Verified => format!(
            "Berkas pendaftaran {} telah diverifikasi.",
            registration.registration_number
        ),
        RegistrationStatus::Accepted => format!(
            "Selamat! Pendaftaran {} dinyatakan DITERIMA.",
            registration.registration_number
        ),
        RegistrationStatus::Rejected => format!(
            "Mohon maaf, pendaftaran {} belum dapat diterima.",
            registration.registration_number
        ),
    };

    PushMessage {
        title: "Info PPDB".to_string(),
        body,
        url: Some(format!("/ppdb/status/{}", registration.registration_number)),
    }
}

/// Fan out a status change to all subscribers. Never returns an error;
/// the status update has already committed and delivery is best-effort.
pub async fn broadcast_status_change(
    state: &AppState,
    registration: &RegistrationRow,
    status: RegistrationStatus,
) {
    let subscriptions = match queries::list_push_subscriptions(&state.pool).await {
        Ok(subs) => subs,
        Err(e) => {
            warn!("Skipping push fan-out, cannot load subscriptions: {e}");
            return;
        }
    };

    if subscriptions.is_empty() {
        return;
    }

    let message = status_message(registration, status);
    let mut delivered = 0usize;

    for subscription in &subscriptions {
        match state.push.send(&subscription.endpoint, &message).await {
            Ok(PushOutcome::Delivered) => delivered += 1,
            Ok(PushOutcome::Gone) => {
                info!("Pruning gone push endpoint {}", subscription.endpoint);
                if let Err(e) =
                    queries::delete_push_subscription(&state.pool, &subscription.endpoint).await
                {
                    warn!("Failed to prune subscription: {e}");
                }
            }
            Err(e) => {
                warn!("Push to {} failed: {e}", subscription.endpoint);
            }
        }
    }

    info!(
        "Status push for {}: {delivered}/{} delivered",
        registration.registration_number,
        subscriptions.len()
    );

    if let Err(e) = queries::insert_notification_log(
        &state.pool,
        registration.id,
        &message.title,
        &message.body,
    )
    .await
    {
        warn!("Failed to record notification log: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn registration() -> RegistrationRow {
        RegistrationRow {
            id: Uuid::new_v4(),
            wave_id: Uuid::new_v4(),
            registration_number: "PPDB-2026-0007".to_string(),
            full_name: "Budi Santoso".to_string(),
            birth_date: "2011-04-12".to_string(),
            gender: "L".to_string(),
            origin_school: "SDN 3 Cimahi".to_string(),
            guardian_name: "Siti Santoso".to_string(),
            phone: "081234567890".to_string(),
            email: None,
            address: "Jl. Melati 4".to_string(),
            status: "pending".to_string(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn accepted_message_names_the_registration() {
        let msg = status_message(&registration(), RegistrationStatus::Accepted);
        assert!(msg.body.contains("PPDB-2026-0007"));
        assert!(msg.body.contains("DITERIMA"));
        assert_eq!(msg.url.as_deref(), Some("/ppdb/status/PPDB-2026-0007"));
    }

    #[test]
    fn every_status_has_a_message() {
        for status in [
            RegistrationStatus::Pending,
            RegistrationStatus::Verified,
            RegistrationStatus::Accepted,
            RegistrationStatus::Rejected,
        ] {
            let msg = status_message(&registration(), status);
            assert!(!msg.body.is_empty());
            assert_eq!(msg.title, "Info PPDB");
        }
    }
}
