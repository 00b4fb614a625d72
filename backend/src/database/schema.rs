//! Idempotent schema bootstrap for the hosted Postgres database.
//!
//! The hosted service keeps the data; this just makes sure every table
//! the handlers touch exists, so a fresh environment comes up without a
//! separate migration step.

use sqlx::PgPool;

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        username TEXT UNIQUE NOT NULL,
        password_hash TEXT NOT NULL,
        display_name TEXT NOT NULL,
        role TEXT NOT NULL DEFAULT 'operator',
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sessions (
        token_hash TEXT PRIMARY KEY,
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        expires_at TIMESTAMPTZ NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS news (
        id UUID PRIMARY KEY,
        slug TEXT UNIQUE NOT NULL,
        title TEXT NOT NULL,
        excerpt TEXT NOT NULL DEFAULT '',
        body TEXT NOT NULL,
        cover_url TEXT,
        published BOOLEAN NOT NULL DEFAULT FALSE,
        published_at TIMESTAMPTZ,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS teachers (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        position TEXT NOT NULL,
        subject TEXT,
        photo_url TEXT,
        sort_order INT NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS achievements (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        level TEXT NOT NULL,
        year INT NOT NULL,
        photo_url TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS extracurriculars (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        mentor TEXT,
        schedule TEXT,
        photo_url TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS hero_slides (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        subtitle TEXT,
        image_url TEXT NOT NULL,
        link_url TEXT,
        sort_order INT NOT NULL DEFAULT 0,
        active BOOLEAN NOT NULL DEFAULT TRUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS navigation_items (
        id UUID PRIMARY KEY,
        label TEXT NOT NULL,
        url TEXT NOT NULL,
        parent_id UUID REFERENCES navigation_items(id) ON DELETE CASCADE,
        sort_order INT NOT NULL DEFAULT 0,
        visible BOOLEAN NOT NULL DEFAULT TRUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS downloads (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        file_url TEXT NOT NULL,
        category TEXT NOT NULL DEFAULT 'umum',
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ppdb_waves (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        starts_at TIMESTAMPTZ NOT NULL,
        ends_at TIMESTAMPTZ NOT NULL,
        quota INT NOT NULL DEFAULT 0,
        active BOOLEAN NOT NULL DEFAULT TRUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ppdb_registrations (
        id UUID PRIMARY KEY,
        wave_id UUID NOT NULL REFERENCES ppdb_waves(id),
        registration_number TEXT UNIQUE NOT NULL,
        full_name TEXT NOT NULL,
        birth_date TEXT NOT NULL,
        gender TEXT NOT NULL,
        origin_school TEXT NOT NULL,
        guardian_name TEXT NOT NULL,
        phone TEXT NOT NULL,
        email TEXT,
        address TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'pending',
        notes TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ppdb_files (
        id UUID PRIMARY KEY,
        registration_id UUID NOT NULL REFERENCES ppdb_registrations(id) ON DELETE CASCADE,
        label TEXT NOT NULL,
        file_url TEXT NOT NULL,
        uploaded_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS push_subscriptions (
        id UUID PRIMARY KEY,
        endpoint TEXT UNIQUE NOT NULL,
        p256dh TEXT,
        auth TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ppdb_notifications (
        id UUID PRIMARY KEY,
        registration_id UUID NOT NULL,
        title TEXT NOT NULL,
        body TEXT NOT NULL,
        sent_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_news_published ON news(published, published_at)",
    "CREATE INDEX IF NOT EXISTS idx_sessions_user ON sessions(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_regs_status ON ppdb_registrations(status)",
    "CREATE INDEX IF NOT EXISTS idx_regs_wave ON ppdb_registrations(wave_id)",
    "CREATE INDEX IF NOT EXISTS idx_files_reg ON ppdb_files(registration_id)",
];

pub async fn initialize_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in TABLES.iter().chain(INDEXES) {
        sqlx::query(ddl).execute(pool).await?;
    }

    Ok(())
}
