//! Request/response models for the QMSquare API

use ai_review::FallbackReason;
use chrono::{DateTime, Utc};
use qms_types::{
    AnalysisReport, Document, DocumentStatus, DocumentType, QualityCheckResult, QualityRecord,
    QualityRecordType, ReviewReport,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Request to create a controlled document
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub document_type: DocumentType,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<i64>,
}

/// Partial update of a controlled document
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocumentRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Request to create a quality record
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQualityRecordRequest {
    pub title: String,
    pub record_type: QualityRecordType,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update of a quality record
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQualityRecordRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Generic list envelope
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub items: Vec<T>,
    pub count: usize,
}

/// Rule-based analysis request
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    pub document_type: String,
}

/// Rule-based analysis response: weighted report plus the section-only
/// audit checklist
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub report: AnalysisReport,
    pub checklist: QualityCheckResult,
}

/// File extraction request; file content is base64-encoded
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    pub file_name: String,
    pub data_base64: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub text: String,
    pub char_count: usize,
    pub file_size: String,
}

/// AI review request
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub doc_type: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub success: bool,
    /// True when a canned demo report was served
    pub demo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_reason: Option<FallbackReason>,
    pub report: ReviewReport,
}

/// Document row as stored in sqlite
#[derive(Debug, Clone, FromRow)]
pub struct DbDocument {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub document_type: String,
    pub status: String,
    pub content: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbDocument> for Document {
    fn from(row: DbDocument) -> Self {
        Document {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            document_type: DocumentType::parse_label(&row.document_type)
                .unwrap_or(DocumentType::Sop),
            status: parse_status(&row.status),
            content: row.content,
            description: row.description,
            version: row.version,
            file_name: row.file_name,
            file_size: row.file_size,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn parse_status(s: &str) -> DocumentStatus {
    match s {
        "검토중" => DocumentStatus::InReview,
        "승인완료" => DocumentStatus::Approved,
        _ => DocumentStatus::Draft,
    }
}

/// Quality record row as stored in sqlite
#[derive(Debug, Clone, FromRow)]
pub struct DbQualityRecord {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub record_type: String,
    pub status: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbQualityRecord> for QualityRecord {
    fn from(row: DbQualityRecord) -> Self {
        QualityRecord {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            record_type: parse_record_type(&row.record_type),
            status: row.status,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn parse_record_type(s: &str) -> QualityRecordType {
    match s {
        "부적합" => QualityRecordType::Nonconformity,
        "내부심사" => QualityRecordType::InternalAudit,
        "교육기록" => QualityRecordType::TrainingRecord,
        "변경관리" => QualityRecordType::ChangeControl,
        _ => QualityRecordType::Capa,
    }
}

/// Serialized label for a record type, for storage
pub fn record_type_label(record_type: QualityRecordType) -> &'static str {
    match record_type {
        QualityRecordType::Capa => "CAPA",
        QualityRecordType::Nonconformity => "부적합",
        QualityRecordType::InternalAudit => "내부심사",
        QualityRecordType::TrainingRecord => "교육기록",
        QualityRecordType::ChangeControl => "변경관리",
    }
}
