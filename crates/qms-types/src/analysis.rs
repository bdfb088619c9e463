//! Rule-based scoring result types

use serde::{Deserialize, Serialize};

/// A vague-term occurrence found during the line scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguousPhrase {
    /// The matched term, e.g. "적절히"
    pub phrase: String,
    /// The matching line, trimmed and truncated to 100 characters
    pub context: String,
    /// 1-based line number
    pub line_number: usize,
}

/// Result of one scoring pass over a document
///
/// Produced fresh per call and immutable afterwards; the caller decides
/// whether and where to persist it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Completeness score in 0..=100
    pub score: u8,
    /// Required section labels not found, in rule-table order
    pub missing_sections: Vec<String>,
    pub ambiguous_phrases: Vec<AmbiguousPhrase>,
    /// Human-readable feedback lines
    pub feedback: Vec<String>,
}

/// Result of the section-only audit checklist pass
///
/// Unlike [`ScoreResult`] this ignores vague language entirely: the score
/// is plain section coverage scaled to 0-100, which is also what the
/// audit-readiness figure reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheckResult {
    pub score: u8,
    pub defects_count: usize,
    pub missing_keywords: Vec<String>,
    pub audit_readiness: u8,
    pub feedback: Vec<String>,
}

/// Full analysis report: the raw score plus summary, recommendations and
/// the rework-savings estimate shown on the efficiency dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub efficiency_note: String,
}
