//! HTTP handlers for the QMSquare API

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use ai_review::{ReviewDocType, ReviewOutcome};
use qms_types::{Document, DocumentStatus, QualityRecord};
use text_extract::{extract_text, format_file_size, MIN_TEXT_CHARS};

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Default owner when the client sends no identity header
const DEMO_USER: &str = "demo-user";

/// Owner identity from the `X-User-Id` header
fn owner_id(headers: &HeaderMap) -> String {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEMO_USER)
        .to_string()
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

pub async fn create_document(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<Json<Document>, ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::InvalidRequest("제목을 입력해주세요.".into()));
    }

    let now = Utc::now();
    let doc = Document {
        id: Uuid::new_v4().to_string(),
        owner_id: owner_id(&headers),
        title: req.title,
        document_type: req.document_type,
        status: req.status.unwrap_or(DocumentStatus::Draft),
        content: req.content,
        description: req.description,
        version: req.version,
        file_name: req.file_name,
        file_size: req.file_size,
        created_at: now,
        updated_at: now,
    };

    state.documents.create(&doc).await?;
    tracing::info!("Created document: {}", doc.id);

    Ok(Json(doc))
}

pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ListResponse<Document>>, ApiError> {
    let items = state.documents.list(&owner_id(&headers)).await?;
    let count = items.len();
    Ok(Json(ListResponse {
        success: true,
        items,
        count,
    }))
}

pub async fn get_document(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    let doc = state
        .documents
        .read(&owner_id(&headers), &id)
        .await?
        .ok_or(ApiError::NotFound {
            kind: "document",
            id,
        })?;
    Ok(Json(doc))
}

pub async fn update_document(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdateDocumentRequest>,
) -> Result<Json<Document>, ApiError> {
    let owner = owner_id(&headers);
    let mut doc = state
        .documents
        .read(&owner, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            kind: "document",
            id: id.clone(),
        })?;

    if let Some(title) = req.title {
        doc.title = title;
    }
    if let Some(status) = req.status {
        doc.status = status;
    }
    if let Some(content) = req.content {
        doc.content = Some(content);
    }
    if let Some(description) = req.description {
        doc.description = Some(description);
    }
    if let Some(version) = req.version {
        doc.version = Some(version);
    }
    doc.updated_at = Utc::now();

    if !state.documents.update(&doc).await? {
        return Err(ApiError::NotFound {
            kind: "document",
            id,
        });
    }

    Ok(Json(doc))
}

pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.documents.delete(&owner_id(&headers), &id).await? {
        return Err(ApiError::NotFound {
            kind: "document",
            id,
        });
    }
    tracing::info!("Deleted document: {}", id);
    Ok(Json(serde_json::json!({ "success": true })))
}

// ---------------------------------------------------------------------------
// Quality records
// ---------------------------------------------------------------------------

pub async fn create_quality_record(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CreateQualityRecordRequest>,
) -> Result<Json<QualityRecord>, ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::InvalidRequest("제목을 입력해주세요.".into()));
    }

    let now = Utc::now();
    let record = QualityRecord {
        id: Uuid::new_v4().to_string(),
        owner_id: owner_id(&headers),
        title: req.title,
        record_type: req.record_type,
        status: req.status.unwrap_or_else(|| "진행중".to_string()),
        description: req.description,
        created_at: now,
        updated_at: now,
    };

    state.records.create(&record).await?;
    tracing::info!("Created quality record: {}", record.id);

    Ok(Json(record))
}

pub async fn list_quality_records(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ListResponse<QualityRecord>>, ApiError> {
    let items = state.records.list(&owner_id(&headers)).await?;
    let count = items.len();
    Ok(Json(ListResponse {
        success: true,
        items,
        count,
    }))
}

pub async fn get_quality_record(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<QualityRecord>, ApiError> {
    let record = state
        .records
        .read(&owner_id(&headers), &id)
        .await?
        .ok_or(ApiError::NotFound {
            kind: "quality record",
            id,
        })?;
    Ok(Json(record))
}

pub async fn update_quality_record(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdateQualityRecordRequest>,
) -> Result<Json<QualityRecord>, ApiError> {
    let owner = owner_id(&headers);
    let mut record = state
        .records
        .read(&owner, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            kind: "quality record",
            id: id.clone(),
        })?;

    if let Some(title) = req.title {
        record.title = title;
    }
    if let Some(status) = req.status {
        record.status = status;
    }
    if let Some(description) = req.description {
        record.description = Some(description);
    }
    record.updated_at = Utc::now();

    if !state.records.update(&record).await? {
        return Err(ApiError::NotFound {
            kind: "quality record",
            id,
        });
    }

    Ok(Json(record))
}

pub async fn delete_quality_record(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.records.delete(&owner_id(&headers), &id).await? {
        return Err(ApiError::NotFound {
            kind: "quality record",
            id,
        });
    }
    tracing::info!("Deleted quality record: {}", id);
    Ok(Json(serde_json::json!({ "success": true })))
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Rule-based quality analysis of document text
pub async fn analyze_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if req.content.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "분석할 문서 내용이 없습니다.".into(),
        ));
    }

    let report = state.engine.analyze(&req.content, &req.document_type);
    let checklist = state.engine.check_quality(&req.content, &req.document_type);

    Ok(Json(AnalyzeResponse {
        success: true,
        report,
        checklist,
    }))
}

/// Extract plain text from an uploaded file (.txt or .docx)
pub async fn extract_document(
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let bytes = BASE64
        .decode(&req.data_base64)
        .map_err(|e| ApiError::InvalidRequest(format!("잘못된 base64 데이터입니다: {}", e)))?;

    let text = extract_text(&req.file_name, &bytes)?;
    let char_count = text.chars().count();

    tracing::info!(
        "Extracted {} chars from {} ({})",
        char_count,
        req.file_name,
        format_file_size(bytes.len() as u64)
    );

    Ok(Json(ExtractResponse {
        success: true,
        text,
        char_count,
        file_size: format_file_size(bytes.len() as u64),
    }))
}

// ---------------------------------------------------------------------------
// AI review
// ---------------------------------------------------------------------------

pub async fn review_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "검토할 문서 내용이 없습니다.".into(),
        ));
    }

    let char_count = req.text.chars().count();
    if char_count < MIN_TEXT_CHARS {
        return Err(ApiError::InvalidRequest(format!(
            "문서 내용이 너무 짧습니다 ({}자). 최소 {}자 이상 필요합니다.",
            char_count, MIN_TEXT_CHARS
        )));
    }

    let doc_type = ReviewDocType::parse_tag(&req.doc_type).ok_or_else(|| {
        ApiError::InvalidRequest(format!("지원하지 않는 문서 유형입니다: {}", req.doc_type))
    })?;

    let outcome = state.reviewer.review(doc_type, &req.text).await?;

    let (demo, demo_reason, report) = match outcome {
        ReviewOutcome::Completed(report) => (false, None, report),
        ReviewOutcome::Fallback { report, reason } => (true, Some(reason), report),
    };

    Ok(Json(ReviewResponse {
        success: true,
        demo,
        demo_reason,
        report,
    }))
}
