//! Application state for the QMSquare API

use std::path::PathBuf;
use std::sync::Arc;

use ai_review::Reviewer;
use anyhow::Result;
use qms_types::{Document, QualityRecord};
use quality_engine::QualityEngine;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::repo::{Repository, SqliteDocumentRepository, SqliteQualityRecordRepository};

pub struct AppState {
    pub documents: Arc<dyn Repository<Document>>,
    pub records: Arc<dyn Repository<QualityRecord>>,
    pub engine: QualityEngine,
    pub reviewer: Reviewer,
}

impl AppState {
    pub async fn new(database_url: Option<String>, reviewer: Reviewer) -> Result<Self> {
        let db_url = database_url
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .unwrap_or_else(|| {
                let data_dir = data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("qms-api");
                std::fs::create_dir_all(&data_dir).ok();
                format!("sqlite:{}/qms.db?mode=rwc", data_dir.display())
            });

        tracing::info!("Connecting to database: {}", db_url);

        // In-memory databases exist per connection; keep them on one
        let max_connections = if db_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&db_url)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self {
            documents: Arc::new(SqliteDocumentRepository::new(pool.clone())),
            records: Arc::new(SqliteQualityRecordRepository::new(pool)),
            engine: QualityEngine::new(),
            reviewer,
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL,
                title TEXT NOT NULL,
                document_type TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT '초안',
                content TEXT,
                description TEXT,
                version TEXT,
                file_name TEXT,
                file_size INTEGER,
                created_at TEXT NOT NULL DEFAULT (datetime('now')),
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quality_records (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL,
                title TEXT NOT NULL,
                record_type TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT '진행중',
                description TEXT,
                created_at TEXT NOT NULL DEFAULT (datetime('now')),
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Indexes for per-owner listing
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_owner ON documents(owner_id)")
            .execute(pool)
            .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_quality_records_owner ON quality_records(owner_id)",
        )
        .execute(pool)
        .await?;

        tracing::info!("Migrations complete");
        Ok(())
    }
}

/// Get platform-specific data directory
fn data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join("Library/Application Support"))
    }
    #[cfg(target_os = "linux")]
    {
        std::env::var("XDG_DATA_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|h| PathBuf::from(h).join(".local/share"))
            })
    }
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA").ok().map(PathBuf::from)
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}
