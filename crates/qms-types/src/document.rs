//! Controlled document and quality record models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Controlled document types managed by the QMS
///
/// The serialized labels are the Korean labels used throughout the
/// document repository; section rules are keyed by these labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "절차서(SOP)")]
    Sop,
    #[serde(rename = "작업지침서(WI)")]
    WorkInstruction,
    #[serde(rename = "기록서(Record)")]
    Record,
    #[serde(rename = "변경관리(Change)")]
    ChangeControl,
}

impl DocumentType {
    /// The label under which this type appears in documents and rule tables
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Sop => "절차서(SOP)",
            DocumentType::WorkInstruction => "작업지침서(WI)",
            DocumentType::Record => "기록서(Record)",
            DocumentType::ChangeControl => "변경관리(Change)",
        }
    }

    /// Parse a document-type label. Unknown labels return `None`; callers
    /// that score documents treat that as an empty rule set, not an error.
    pub fn parse_label(s: &str) -> Option<Self> {
        match s {
            "절차서(SOP)" => Some(DocumentType::Sop),
            "작업지침서(WI)" => Some(DocumentType::WorkInstruction),
            "기록서(Record)" => Some(DocumentType::Record),
            "변경관리(Change)" => Some(DocumentType::ChangeControl),
            _ => None,
        }
    }

    /// All known document types, in rule-table order
    pub fn all() -> &'static [DocumentType] {
        &[
            DocumentType::Sop,
            DocumentType::WorkInstruction,
            DocumentType::Record,
            DocumentType::ChangeControl,
        ]
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lifecycle status of a controlled document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    #[serde(rename = "초안")]
    Draft,
    #[serde(rename = "검토중")]
    InReview,
    #[serde(rename = "승인완료")]
    Approved,
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Draft => write!(f, "초안"),
            DocumentStatus::InReview => write!(f, "검토중"),
            DocumentStatus::Approved => write!(f, "승인완료"),
        }
    }
}

/// A controlled document (SOP, work instruction, record form, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    pub content: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Quality record categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityRecordType {
    #[serde(rename = "CAPA")]
    Capa,
    #[serde(rename = "부적합")]
    Nonconformity,
    #[serde(rename = "내부심사")]
    InternalAudit,
    #[serde(rename = "교육기록")]
    TrainingRecord,
    #[serde(rename = "변경관리")]
    ChangeControl,
}

/// A quality record (CAPA, deviation, audit, training, change control)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityRecord {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub record_type: QualityRecordType,
    /// "진행중" or "완료"
    pub status: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_roundtrip() {
        for ty in DocumentType::all() {
            assert_eq!(DocumentType::parse_label(ty.label()), Some(*ty));
        }
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert_eq!(DocumentType::parse_label("XYZ"), None);
        assert_eq!(DocumentType::parse_label(""), None);
    }

    #[test]
    fn test_serde_uses_korean_labels() {
        let json = serde_json::to_string(&DocumentType::Sop).unwrap();
        assert_eq!(json, "\"절차서(SOP)\"");
        let back: DocumentType = serde_json::from_str("\"변경관리(Change)\"").unwrap();
        assert_eq!(back, DocumentType::ChangeControl);
    }
}
