//! Repository seam over sqlite
//!
//! Durable per-user record storage as an explicit interface: handlers
//! only see `Repository<T>`, never the pool, so storage can be swapped
//! or stubbed in tests.

use async_trait::async_trait;
use chrono::Utc;
use qms_types::{Document, DocumentStatus, QualityRecord};
use sqlx::SqlitePool;

use crate::models::{record_type_label, DbDocument, DbQualityRecord};

#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn create(&self, item: &T) -> Result<(), sqlx::Error>;
    async fn read(&self, owner_id: &str, id: &str) -> Result<Option<T>, sqlx::Error>;
    /// Returns false when no row matched
    async fn update(&self, item: &T) -> Result<bool, sqlx::Error>;
    async fn delete(&self, owner_id: &str, id: &str) -> Result<bool, sqlx::Error>;
    /// All items owned by `owner_id`, newest first
    async fn list(&self, owner_id: &str) -> Result<Vec<T>, sqlx::Error>;
}

pub struct SqliteDocumentRepository {
    pool: SqlitePool,
}

impl SqliteDocumentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Document> for SqliteDocumentRepository {
    async fn create(&self, doc: &Document) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO documents (id, owner_id, title, document_type, status, content,
                                   description, version, file_name, file_size, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&doc.id)
        .bind(&doc.owner_id)
        .bind(&doc.title)
        .bind(doc.document_type.label())
        .bind(status_label(doc.status))
        .bind(&doc.content)
        .bind(&doc.description)
        .bind(&doc.version)
        .bind(&doc.file_name)
        .bind(doc.file_size)
        .bind(doc.created_at)
        .bind(doc.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn read(&self, owner_id: &str, id: &str) -> Result<Option<Document>, sqlx::Error> {
        let row: Option<DbDocument> = sqlx::query_as(
            "SELECT * FROM documents WHERE owner_id = ? AND id = ?",
        )
        .bind(owner_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Document::from))
    }

    async fn update(&self, doc: &Document) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET title = ?, status = ?, content = ?, description = ?, version = ?, updated_at = ?
            WHERE owner_id = ? AND id = ?
            "#,
        )
        .bind(&doc.title)
        .bind(status_label(doc.status))
        .bind(&doc.content)
        .bind(&doc.description)
        .bind(&doc.version)
        .bind(Utc::now())
        .bind(&doc.owner_id)
        .bind(&doc.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, owner_id: &str, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE owner_id = ? AND id = ?")
            .bind(owner_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<Document>, sqlx::Error> {
        let rows: Vec<DbDocument> = sqlx::query_as(
            "SELECT * FROM documents WHERE owner_id = ? ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Document::from).collect())
    }
}

fn status_label(status: DocumentStatus) -> &'static str {
    match status {
        DocumentStatus::Draft => "초안",
        DocumentStatus::InReview => "검토중",
        DocumentStatus::Approved => "승인완료",
    }
}

pub struct SqliteQualityRecordRepository {
    pool: SqlitePool,
}

impl SqliteQualityRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<QualityRecord> for SqliteQualityRecordRepository {
    async fn create(&self, record: &QualityRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO quality_records (id, owner_id, title, record_type, status,
                                         description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.owner_id)
        .bind(&record.title)
        .bind(record_type_label(record.record_type))
        .bind(&record.status)
        .bind(&record.description)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn read(&self, owner_id: &str, id: &str) -> Result<Option<QualityRecord>, sqlx::Error> {
        let row: Option<DbQualityRecord> = sqlx::query_as(
            "SELECT * FROM quality_records WHERE owner_id = ? AND id = ?",
        )
        .bind(owner_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(QualityRecord::from))
    }

    async fn update(&self, record: &QualityRecord) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE quality_records
            SET title = ?, status = ?, description = ?, updated_at = ?
            WHERE owner_id = ? AND id = ?
            "#,
        )
        .bind(&record.title)
        .bind(&record.status)
        .bind(&record.description)
        .bind(Utc::now())
        .bind(&record.owner_id)
        .bind(&record.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, owner_id: &str, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quality_records WHERE owner_id = ? AND id = ?")
            .bind(owner_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<QualityRecord>, sqlx::Error> {
        let rows: Vec<DbQualityRecord> = sqlx::query_as(
            "SELECT * FROM quality_records WHERE owner_id = ? ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(QualityRecord::from).collect())
    }
}
