//! Shared domain types for the QMSquare workspace
//!
//! This crate provides the document/record models, scoring results and
//! AI review types used across the engine crates and the API server.

pub mod analysis;
pub mod document;
pub mod review;

pub use analysis::{AmbiguousPhrase, AnalysisReport, QualityCheckResult, ScoreResult};
pub use document::{Document, DocumentStatus, DocumentType, QualityRecord, QualityRecordType};
pub use review::{
    Comparison, ModeEstimate, RequirementGroup, ReviewFinding, ReviewReport, Severity,
};
