//! Core business logic for the authentication system.
//!
//! Passwords are stored as `salt$digest` with a SHA-256 digest over
//! salt + password. Session tokens are random v4 UUIDs handed to the
//! browser; only their SHA-256 hash ever reaches the sessions table.

use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use super::errors::AuthError;
use super::models::CurrentUser;
use crate::database::queries;

pub const SESSION_COOKIE: &str = "session";

pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{salt}${}", hex::encode(hasher.finalize()))
}

pub fn new_password_hash(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    hash_password(password, &salt)
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, _)) => hash_password(password, salt) == stored,
        None => false,
    }
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify credentials and mint a session; returns the raw token for the
/// cookie.
pub async fn login(
    pool: &PgPool,
    username: &str,
    password: &str,
    ttl_hours: i64,
) -> Result<(CurrentUser, String), AuthError> {
    let row = queries::get_user_by_username(pool, username)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(password, &row.password_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let user = CurrentUser::from_row(row).ok_or(AuthError::RoleNotAllowed)?;

    let token = Uuid::new_v4().simple().to_string();
    let expires_at = Utc::now() + Duration::hours(ttl_hours);
    queries::insert_session(pool, &hash_token(&token), user.id, expires_at).await?;

    Ok((user, token))
}

/// Resolve the session cookie on a request to its account.
pub async fn authenticate(pool: &PgPool, headers: &HeaderMap) -> Result<CurrentUser, AuthError> {
    let token = session_token(headers).ok_or(AuthError::InvalidSession)?;

    let session = queries::get_session(pool, &hash_token(&token))
        .await?
        .ok_or(AuthError::InvalidSession)?;

    if session.expires_at <= Utc::now() {
        queries::delete_session(pool, &session.token_hash).await?;
        return Err(AuthError::InvalidSession);
    }

    let row = queries::get_user_by_id(pool, session.user_id)
        .await?
        .ok_or(AuthError::InvalidSession)?;

    CurrentUser::from_row(row).ok_or(AuthError::RoleNotAllowed)
}

pub async fn logout(pool: &PgPool, headers: &HeaderMap) -> Result<(), AuthError> {
    if let Some(token) = session_token(headers) {
        queries::delete_session(pool, &hash_token(&token)).await?;
    }

    Ok(())
}

/// Pull the session token out of the Cookie header, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

pub fn session_cookie(token: &str, ttl_hours: i64) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        ttl_hours * 3600
    )
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    #[test]
    fn password_round_trip() {
        let stored = new_password_hash("rahasia123");
        assert!(verify_password("rahasia123", &stored));
        assert!(!verify_password("rahasia124", &stored));
    }

    #[test]
    fn stored_hash_keeps_salt_prefix() {
        let stored = hash_password("pw", "abcd");
        assert!(stored.starts_with("abcd$"));
        // same password, different salt, different digest
        assert_ne!(stored, hash_password("pw", "dcba"));
    }

    #[test]
    fn verify_rejects_malformed_stored_value() {
        assert!(!verify_password("pw", "no-dollar-sign"));
    }

    #[test]
    fn token_hash_is_stable_hex() {
        let h = hash_token("abc");
        assert_eq!(h.len(), 64);
        assert_eq!(h, hash_token("abc"));
    }

    #[test]
    fn session_token_parses_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "theme=dark; session=tok123; lang=id".parse().unwrap());
        assert_eq!(session_token(&headers).as_deref(), Some("tok123"));

        let mut no_session = HeaderMap::new();
        no_session.insert(COOKIE, "theme=dark".parse().unwrap());
        assert_eq!(session_token(&no_session), None);
    }

    #[test]
    fn cookie_attributes() {
        let cookie = session_cookie("tok", 72);
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=259200"));
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
