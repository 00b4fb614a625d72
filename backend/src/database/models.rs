//! Rust structs that represent database table mappings.
//!
//! These models mirror the hosted tables row-for-row and derive
//! `sqlx::FromRow` for query results. They are distinct from the
//! camelCase API structs, which convert from these via `From` in the
//! handler modules.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Back-office account roles; anything else never passes the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Operator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "operator" => Some(Role::Operator),
            _ => None,
        }
    }
}

/// PPDB registration lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Pending,
    Verified,
    Accepted,
    Rejected,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Verified => "verified",
            RegistrationStatus::Accepted => "accepted",
            RegistrationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(RegistrationStatus::Pending),
            "verified" => Some(RegistrationStatus::Verified),
            "accepted" => Some(RegistrationStatus::Accepted),
            "rejected" => Some(RegistrationStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub display_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub token_hash: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct NewsRow {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub cover_url: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct TeacherRow {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub subject: Option<String>,
    pub photo_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AchievementRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub level: String,
    pub year: i32,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ExtracurricularRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub mentor: Option<String>,
    pub schedule: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct HeroSlideRow {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub sort_order: i32,
    pub active: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct NavigationItemRow {
    pub id: Uuid,
    pub label: String,
    pub url: String,
    pub parent_id: Option<Uuid>,
    pub sort_order: i32,
    pub visible: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct DownloadRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub file_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct SettingRow {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct WaveRow {
    pub id: Uuid,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub quota: i32,
    pub active: bool,
}

impl WaveRow {
    /// A wave accepts registrations while active and inside its window.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.active && self.starts_at <= now && now < self.ends_at
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct RegistrationRow {
    pub id: Uuid,
    pub wave_id: Uuid,
    pub registration_number: String,
    pub full_name: String,
    pub birth_date: String,
    pub gender: String,
    pub origin_school: String,
    pub guardian_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct RegistrationFileRow {
    pub id: Uuid,
    pub registration_id: Uuid,
    pub label: String,
    pub file_url: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct PushSubscriptionRow {
    pub id: Uuid,
    pub endpoint: String,
    pub p256dh: Option<String>,
    pub auth: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn status_round_trips() {
        for s in ["pending", "verified", "accepted", "rejected"] {
            assert_eq!(RegistrationStatus::parse(s).unwrap().as_str(), s);
        }
        assert!(RegistrationStatus::parse("lost").is_none());
    }

    #[test]
    fn role_rejects_unknown() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("root"), None);
    }

    #[test]
    fn wave_window_bounds() {
        let now = Utc::now();
        let wave = WaveRow {
            id: Uuid::new_v4(),
            name: "Gelombang 1".to_string(),
            starts_at: now - Duration::days(1),
            ends_at: now + Duration::days(1),
            quota: 100,
            active: true,
        };

        assert!(wave.is_open_at(now));
        assert!(!wave.is_open_at(now + Duration::days(2)));
        assert!(!wave.is_open_at(wave.ends_at));

        let inactive = WaveRow {
            active: false,
            ..wave
        };
        assert!(!inactive.is_open_at(now));
    }
}
