//! Structured AI review response types
//!
//! These mirror the JSON schema the review prompts instruct the model to
//! return: a manual-vs-QMSquare comparison block, key checkpoints, grouped
//! regulatory requirements, and individual findings with remediation text.

use serde::{Deserialize, Serialize};

/// Finding severity as used by the review schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Workflow estimate for one working mode (manual vs QMSquare)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeEstimate {
    pub avg_time_min: u32,
    pub missing_risk: String,
    pub rework_risk: String,
    pub audit_ready: String,
}

/// Side-by-side comparison of the two working modes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub manual: ModeEstimate,
    pub qmsquare: ModeEstimate,
}

/// A named group of regulatory requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// A single review finding with remediation guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFinding {
    pub severity: Severity,
    /// Regulatory category tag, e.g. "문서 승인/발행" or "원인분석"
    pub category: String,
    pub title: String,
    /// Excerpt of the problematic passage in the document
    pub evidence: String,
    /// Why an auditor would flag this
    pub why: String,
    /// Concrete fix steps
    pub fix: Vec<String>,
    /// Ready-to-paste replacement text
    pub recommended_text: String,
}

/// The full structured review response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReport {
    pub comparison: Comparison,
    pub key_points: Vec<String>,
    pub requirements: Vec<RequirementGroup>,
    pub findings: Vec<ReviewFinding>,
}
