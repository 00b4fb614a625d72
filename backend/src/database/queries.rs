//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations. Every
//! function is one single-table statement; writes use `RETURNING *` so
//! handlers can echo the stored row back without a second round trip.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::models::*;

// ==================== USERS & SESSIONS ====================

pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_session(
    pool: &PgPool,
    token_hash: &str,
    user_id: Uuid,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO sessions (token_hash, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(token_hash)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn get_session(
    pool: &PgPool,
    token_hash: &str,
) -> Result<Option<SessionRow>, sqlx::Error> {
    sqlx::query_as::<_, SessionRow>("SELECT * FROM sessions WHERE token_hash = $1")
        .bind(token_hash)
        .fetch_optional(pool)
        .await
}

pub async fn delete_session(pool: &PgPool, token_hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
        .bind(token_hash)
        .execute(pool)
        .await?;

    Ok(())
}

// ==================== NEWS ====================

pub async fn list_published_news(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<NewsRow>, sqlx::Error> {
    sqlx::query_as::<_, NewsRow>(
        "SELECT * FROM news WHERE published = TRUE ORDER BY published_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn get_published_news_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<NewsRow>, sqlx::Error> {
    sqlx::query_as::<_, NewsRow>("SELECT * FROM news WHERE slug = $1 AND published = TRUE")
        .bind(slug)
        .fetch_optional(pool)
        .await
}

pub async fn list_news(pool: &PgPool) -> Result<Vec<NewsRow>, sqlx::Error> {
    sqlx::query_as::<_, NewsRow>("SELECT * FROM news ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn get_news(pool: &PgPool, id: Uuid) -> Result<Option<NewsRow>, sqlx::Error> {
    sqlx::query_as::<_, NewsRow>("SELECT * FROM news WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_news(pool: &PgPool, row: &NewsRow) -> Result<NewsRow, sqlx::Error> {
    sqlx::query_as::<_, NewsRow>(
        r#"
        INSERT INTO news (id, slug, title, excerpt, body, cover_url, published, published_at, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.slug)
    .bind(&row.title)
    .bind(&row.excerpt)
    .bind(&row.body)
    .bind(&row.cover_url)
    .bind(row.published)
    .bind(row.published_at)
    .bind(row.created_at)
    .bind(row.updated_at)
    .fetch_one(pool)
    .await
}

pub async fn update_news(pool: &PgPool, row: &NewsRow) -> Result<Option<NewsRow>, sqlx::Error> {
    sqlx::query_as::<_, NewsRow>(
        r#"
        UPDATE news
        SET slug = $2, title = $3, excerpt = $4, body = $5, cover_url = $6,
            published = $7,
            published_at = CASE WHEN $7 THEN COALESCE(published_at, $8) ELSE NULL END,
            updated_at = $9
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.slug)
    .bind(&row.title)
    .bind(&row.excerpt)
    .bind(&row.body)
    .bind(&row.cover_url)
    .bind(row.published)
    .bind(row.published_at)
    .bind(row.updated_at)
    .fetch_optional(pool)
    .await
}

pub async fn delete_news(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM news WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== TEACHERS ====================

pub async fn list_teachers(pool: &PgPool) -> Result<Vec<TeacherRow>, sqlx::Error> {
    sqlx::query_as::<_, TeacherRow>("SELECT * FROM teachers ORDER BY sort_order, name")
        .fetch_all(pool)
        .await
}

pub async fn get_teacher(pool: &PgPool, id: Uuid) -> Result<Option<TeacherRow>, sqlx::Error> {
    sqlx::query_as::<_, TeacherRow>("SELECT * FROM teachers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_teacher(pool: &PgPool, row: &TeacherRow) -> Result<TeacherRow, sqlx::Error> {
    sqlx::query_as::<_, TeacherRow>(
        r#"
        INSERT INTO teachers (id, name, position, subject, photo_url, sort_order, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.name)
    .bind(&row.position)
    .bind(&row.subject)
    .bind(&row.photo_url)
    .bind(row.sort_order)
    .bind(row.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update_teacher(
    pool: &PgPool,
    row: &TeacherRow,
) -> Result<Option<TeacherRow>, sqlx::Error> {
    sqlx::query_as::<_, TeacherRow>(
        r#"
        UPDATE teachers
        SET name = $2, position = $3, subject = $4, photo_url = $5, sort_order = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.name)
    .bind(&row.position)
    .bind(&row.subject)
    .bind(&row.photo_url)
    .bind(row.sort_order)
    .fetch_optional(pool)
    .await
}

pub async fn delete_teacher(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== ACHIEVEMENTS ====================

pub async fn list_achievements(pool: &PgPool) -> Result<Vec<AchievementRow>, sqlx::Error> {
    sqlx::query_as::<_, AchievementRow>(
        "SELECT * FROM achievements ORDER BY year DESC, created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_achievement(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<AchievementRow>, sqlx::Error> {
    sqlx::query_as::<_, AchievementRow>("SELECT * FROM achievements WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_achievement(
    pool: &PgPool,
    row: &AchievementRow,
) -> Result<AchievementRow, sqlx::Error> {
    sqlx::query_as::<_, AchievementRow>(
        r#"
        INSERT INTO achievements (id, title, description, level, year, photo_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.title)
    .bind(&row.description)
    .bind(&row.level)
    .bind(row.year)
    .bind(&row.photo_url)
    .bind(row.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update_achievement(
    pool: &PgPool,
    row: &AchievementRow,
) -> Result<Option<AchievementRow>, sqlx::Error> {
    sqlx::query_as::<_, AchievementRow>(
        r#"
        UPDATE achievements
        SET title = $2, description = $3, level = $4, year = $5, photo_url = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.title)
    .bind(&row.description)
    .bind(&row.level)
    .bind(row.year)
    .bind(&row.photo_url)
    .fetch_optional(pool)
    .await
}

pub async fn delete_achievement(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== EXTRACURRICULARS ====================

pub async fn list_extracurriculars(pool: &PgPool) -> Result<Vec<ExtracurricularRow>, sqlx::Error> {
    sqlx::query_as::<_, ExtracurricularRow>("SELECT * FROM extracurriculars ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn get_extracurricular(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<ExtracurricularRow>, sqlx::Error> {
    sqlx::query_as::<_, ExtracurricularRow>("SELECT * FROM extracurriculars WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_extracurricular(
    pool: &PgPool,
    row: &ExtracurricularRow,
) -> Result<ExtracurricularRow, sqlx::Error> {
    sqlx::query_as::<_, ExtracurricularRow>(
        r#"
        INSERT INTO extracurriculars (id, name, description, mentor, schedule, photo_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.name)
    .bind(&row.description)
    .bind(&row.mentor)
    .bind(&row.schedule)
    .bind(&row.photo_url)
    .bind(row.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update_extracurricular(
    pool: &PgPool,
    row: &ExtracurricularRow,
) -> Result<Option<ExtracurricularRow>, sqlx::Error> {
    sqlx::query_as::<_, ExtracurricularRow>(
        r#"
        UPDATE extracurriculars
        SET name = $2, description = $3, mentor = $4, schedule = $5, photo_url = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.name)
    .bind(&row.description)
    .bind(&row.mentor)
    .bind(&row.schedule)
    .bind(&row.photo_url)
    .fetch_optional(pool)
    .await
}

pub async fn delete_extracurricular(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM extracurriculars WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== HERO SLIDES ====================

pub async fn list_active_hero_slides(pool: &PgPool) -> Result<Vec<HeroSlideRow>, sqlx::Error> {
    sqlx::query_as::<_, HeroSlideRow>(
        "SELECT * FROM hero_slides WHERE active = TRUE ORDER BY sort_order",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_hero_slides(pool: &PgPool) -> Result<Vec<HeroSlideRow>, sqlx::Error> {
    sqlx::query_as::<_, HeroSlideRow>("SELECT * FROM hero_slides ORDER BY sort_order")
        .fetch_all(pool)
        .await
}

pub async fn get_hero_slide(pool: &PgPool, id: Uuid) -> Result<Option<HeroSlideRow>, sqlx::Error> {
    sqlx::query_as::<_, HeroSlideRow>("SELECT * FROM hero_slides WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_hero_slide(
    pool: &PgPool,
    row: &HeroSlideRow,
) -> Result<HeroSlideRow, sqlx::Error> {
    sqlx::query_as::<_, HeroSlideRow>(
        r#"
        INSERT INTO hero_slides (id, title, subtitle, image_url, link_url, sort_order, active)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.title)
    .bind(&row.subtitle)
    .bind(&row.image_url)
    .bind(&row.link_url)
    .bind(row.sort_order)
    .bind(row.active)
    .fetch_one(pool)
    .await
}

pub async fn update_hero_slide(
    pool: &PgPool,
    row: &HeroSlideRow,
) -> Result<Option<HeroSlideRow>, sqlx::Error> {
    sqlx::query_as::<_, HeroSlideRow>(
        r#"
        UPDATE hero_slides
        SET title = $2, subtitle = $3, image_url = $4, link_url = $5, sort_order = $6, active = $7
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.title)
    .bind(&row.subtitle)
    .bind(&row.image_url)
    .bind(&row.link_url)
    .bind(row.sort_order)
    .bind(row.active)
    .fetch_optional(pool)
    .await
}

pub async fn delete_hero_slide(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM hero_slides WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== NAVIGATION ====================

pub async fn list_visible_navigation(
    pool: &PgPool,
) -> Result<Vec<NavigationItemRow>, sqlx::Error> {
    sqlx::query_as::<_, NavigationItemRow>(
        "SELECT * FROM navigation_items WHERE visible = TRUE ORDER BY sort_order",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_navigation(pool: &PgPool) -> Result<Vec<NavigationItemRow>, sqlx::Error> {
    sqlx::query_as::<_, NavigationItemRow>("SELECT * FROM navigation_items ORDER BY sort_order")
        .fetch_all(pool)
        .await
}

pub async fn get_navigation_item(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<NavigationItemRow>, sqlx::Error> {
    sqlx::query_as::<_, NavigationItemRow>("SELECT * FROM navigation_items WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_navigation_item(
    pool: &PgPool,
    row: &NavigationItemRow,
) -> Result<NavigationItemRow, sqlx::Error> {
    sqlx::query_as::<_, NavigationItemRow>(
        r#"
        INSERT INTO navigation_items (id, label, url, parent_id, sort_order, visible)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.label)
    .bind(&row.url)
    .bind(row.parent_id)
    .bind(row.sort_order)
    .bind(row.visible)
    .fetch_one(pool)
    .await
}

pub async fn update_navigation_item(
    pool: &PgPool,
    row: &NavigationItemRow,
) -> Result<Option<NavigationItemRow>, sqlx::Error> {
    sqlx::query_as::<_, NavigationItemRow>(
        r#"
        UPDATE navigation_items
        SET label = $2, url = $3, parent_id = $4, sort_order = $5, visible = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.label)
    .bind(&row.url)
    .bind(row.parent_id)
    .bind(row.sort_order)
    .bind(row.visible)
    .fetch_optional(pool)
    .await
}

pub async fn delete_navigation_item(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM navigation_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== DOWNLOADS ====================

pub async fn list_downloads(
    pool: &PgPool,
    category: Option<&str>,
) -> Result<Vec<DownloadRow>, sqlx::Error> {
    match category {
        Some(category) => {
            sqlx::query_as::<_, DownloadRow>(
                "SELECT * FROM downloads WHERE category = $1 ORDER BY created_at DESC",
            )
            .bind(category)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, DownloadRow>("SELECT * FROM downloads ORDER BY created_at DESC")
                .fetch_all(pool)
                .await
        }
    }
}

pub async fn get_download(pool: &PgPool, id: Uuid) -> Result<Option<DownloadRow>, sqlx::Error> {
    sqlx::query_as::<_, DownloadRow>("SELECT * FROM downloads WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_download(pool: &PgPool, row: &DownloadRow) -> Result<DownloadRow, sqlx::Error> {
    sqlx::query_as::<_, DownloadRow>(
        r#"
        INSERT INTO downloads (id, title, description, file_url, category, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.title)
    .bind(&row.description)
    .bind(&row.file_url)
    .bind(&row.category)
    .bind(row.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update_download(
    pool: &PgPool,
    row: &DownloadRow,
) -> Result<Option<DownloadRow>, sqlx::Error> {
    sqlx::query_as::<_, DownloadRow>(
        r#"
        UPDATE downloads
        SET title = $2, description = $3, file_url = $4, category = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.title)
    .bind(&row.description)
    .bind(&row.file_url)
    .bind(&row.category)
    .fetch_optional(pool)
    .await
}

pub async fn delete_download(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM downloads WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== SETTINGS ====================

pub async fn list_settings(pool: &PgPool) -> Result<Vec<SettingRow>, sqlx::Error> {
    sqlx::query_as::<_, SettingRow>("SELECT * FROM settings ORDER BY key")
        .fetch_all(pool)
        .await
}

pub async fn upsert_setting(pool: &PgPool, key: &str, value: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO settings (key, value, updated_at)
        VALUES ($1, $2, now())
        ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

// ==================== PPDB WAVES ====================

pub async fn list_open_waves(
    pool: &PgPool,
    now: DateTime<Utc>,
) -> Result<Vec<WaveRow>, sqlx::Error> {
    sqlx::query_as::<_, WaveRow>(
        r#"
        SELECT * FROM ppdb_waves
        WHERE active = TRUE AND starts_at <= $1 AND ends_at > $1
        ORDER BY starts_at
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await
}

pub async fn list_waves(pool: &PgPool) -> Result<Vec<WaveRow>, sqlx::Error> {
    sqlx::query_as::<_, WaveRow>("SELECT * FROM ppdb_waves ORDER BY starts_at")
        .fetch_all(pool)
        .await
}

pub async fn get_wave(pool: &PgPool, id: Uuid) -> Result<Option<WaveRow>, sqlx::Error> {
    sqlx::query_as::<_, WaveRow>("SELECT * FROM ppdb_waves WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_wave(pool: &PgPool, row: &WaveRow) -> Result<WaveRow, sqlx::Error> {
    sqlx::query_as::<_, WaveRow>(
        r#"
        INSERT INTO ppdb_waves (id, name, starts_at, ends_at, quota, active)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.name)
    .bind(row.starts_at)
    .bind(row.ends_at)
    .bind(row.quota)
    .bind(row.active)
    .fetch_one(pool)
    .await
}

pub async fn update_wave(pool: &PgPool, row: &WaveRow) -> Result<Option<WaveRow>, sqlx::Error> {
    sqlx::query_as::<_, WaveRow>(
        r#"
        UPDATE ppdb_waves
        SET name = $2, starts_at = $3, ends_at = $4, quota = $5, active = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.name)
    .bind(row.starts_at)
    .bind(row.ends_at)
    .bind(row.quota)
    .bind(row.active)
    .fetch_optional(pool)
    .await
}

pub async fn delete_wave(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM ppdb_waves WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== PPDB REGISTRATIONS ====================

pub async fn count_registrations_for_year(
    pool: &PgPool,
    year_prefix: &str,
) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM ppdb_registrations WHERE registration_number LIKE $1",
    )
    .bind(format!("{year_prefix}%"))
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn insert_registration(
    pool: &PgPool,
    row: &RegistrationRow,
) -> Result<RegistrationRow, sqlx::Error> {
    sqlx::query_as::<_, RegistrationRow>(
        r#"
        INSERT INTO ppdb_registrations (
            id, wave_id, registration_number, full_name, birth_date, gender,
            origin_school, guardian_name, phone, email, address, status, notes,
            created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(row.wave_id)
    .bind(&row.registration_number)
    .bind(&row.full_name)
    .bind(&row.birth_date)
    .bind(&row.gender)
    .bind(&row.origin_school)
    .bind(&row.guardian_name)
    .bind(&row.phone)
    .bind(&row.email)
    .bind(&row.address)
    .bind(&row.status)
    .bind(&row.notes)
    .bind(row.created_at)
    .bind(row.updated_at)
    .fetch_one(pool)
    .await
}

pub async fn list_registrations(
    pool: &PgPool,
    status: Option<&str>,
) -> Result<Vec<RegistrationRow>, sqlx::Error> {
    match status {
        Some(status) => {
            sqlx::query_as::<_, RegistrationRow>(
                "SELECT * FROM ppdb_registrations WHERE status = $1 ORDER BY created_at DESC",
            )
            .bind(status)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, RegistrationRow>(
                "SELECT * FROM ppdb_registrations ORDER BY created_at DESC",
            )
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn get_registration(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<RegistrationRow>, sqlx::Error> {
    sqlx::query_as::<_, RegistrationRow>("SELECT * FROM ppdb_registrations WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_registration_by_number(
    pool: &PgPool,
    number: &str,
) -> Result<Option<RegistrationRow>, sqlx::Error> {
    sqlx::query_as::<_, RegistrationRow>(
        "SELECT * FROM ppdb_registrations WHERE registration_number = $1",
    )
    .bind(number)
    .fetch_optional(pool)
    .await
}

pub async fn update_registration_status(
    pool: &PgPool,
    id: Uuid,
    status: &str,
    notes: Option<&str>,
) -> Result<Option<RegistrationRow>, sqlx::Error> {
    sqlx::query_as::<_, RegistrationRow>(
        r#"
        UPDATE ppdb_registrations
        SET status = $2, notes = COALESCE($3, notes), updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(notes)
    .fetch_optional(pool)
    .await
}

pub async fn delete_registration(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM ppdb_registrations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== PPDB FILES ====================

pub async fn list_registration_files(
    pool: &PgPool,
    registration_id: Uuid,
) -> Result<Vec<RegistrationFileRow>, sqlx::Error> {
    sqlx::query_as::<_, RegistrationFileRow>(
        "SELECT * FROM ppdb_files WHERE registration_id = $1 ORDER BY uploaded_at",
    )
    .bind(registration_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_registration_file(
    pool: &PgPool,
    row: &RegistrationFileRow,
) -> Result<RegistrationFileRow, sqlx::Error> {
    sqlx::query_as::<_, RegistrationFileRow>(
        r#"
        INSERT INTO ppdb_files (id, registration_id, label, file_url, uploaded_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(row.registration_id)
    .bind(&row.label)
    .bind(&row.file_url)
    .bind(row.uploaded_at)
    .fetch_one(pool)
    .await
}

// ==================== PUSH SUBSCRIPTIONS & NOTIFICATION LOG ====================

pub async fn upsert_push_subscription(
    pool: &PgPool,
    row: &PushSubscriptionRow,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO push_subscriptions (id, endpoint, p256dh, auth, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (endpoint) DO UPDATE SET p256dh = EXCLUDED.p256dh, auth = EXCLUDED.auth
        "#,
    )
    .bind(row.id)
    .bind(&row.endpoint)
    .bind(&row.p256dh)
    .bind(&row.auth)
    .bind(row.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn list_push_subscriptions(
    pool: &PgPool,
) -> Result<Vec<PushSubscriptionRow>, sqlx::Error> {
    sqlx::query_as::<_, PushSubscriptionRow>("SELECT * FROM push_subscriptions")
        .fetch_all(pool)
        .await
}

pub async fn delete_push_subscription(pool: &PgPool, endpoint: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM push_subscriptions WHERE endpoint = $1")
        .bind(endpoint)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn insert_notification_log(
    pool: &PgPool,
    registration_id: Uuid,
    title: &str,
    body: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO ppdb_notifications (id, registration_id, title, body) VALUES ($1, $2, $3, $4)",
    )
    .bind(Uuid::new_v4())
    .bind(registration_id)
    .bind(title)
    .bind(body)
    .execute(pool)
    .await?;

    Ok(())
}
