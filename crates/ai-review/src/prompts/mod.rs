//! Prompt bundles per reviewable document type
//!
//! A closed set of document-type tags, each mapping to an immutable
//! system-instruction/user-prompt pair. The user prompt embeds the
//! document text truncated to a fixed character budget.

mod capa;
mod dv_protocol;
mod sop;

use serde::{Deserialize, Serialize};

/// Character budget for document text embedded in the user prompt
pub const MAX_DOC_CHARS: usize = 12_000;

/// Document types the AI reviewer knows how to assess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewDocType {
    Sop,
    DvProtocol,
    Capa,
}

impl ReviewDocType {
    /// Parse the wire tag ("SOP", "DV_PROTOCOL", "CAPA")
    pub fn parse_tag(s: &str) -> Option<Self> {
        match s {
            "SOP" => Some(ReviewDocType::Sop),
            "DV_PROTOCOL" => Some(ReviewDocType::DvProtocol),
            "CAPA" => Some(ReviewDocType::Capa),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ReviewDocType::Sop => "SOP",
            ReviewDocType::DvProtocol => "DV_PROTOCOL",
            ReviewDocType::Capa => "CAPA",
        }
    }

    /// The system instruction for this document type
    pub fn system_prompt(&self) -> &'static str {
        match self {
            ReviewDocType::Sop => sop::SYSTEM_PROMPT,
            ReviewDocType::DvProtocol => dv_protocol::SYSTEM_PROMPT,
            ReviewDocType::Capa => capa::SYSTEM_PROMPT,
        }
    }

    /// Build the user prompt embedding (a truncated view of) the document
    pub fn user_prompt(&self, text: &str) -> String {
        let text = truncate_chars(text, MAX_DOC_CHARS);
        match self {
            ReviewDocType::Sop => sop::user_prompt(&text),
            ReviewDocType::DvProtocol => dv_protocol::user_prompt(&text),
            ReviewDocType::Capa => capa::user_prompt(&text),
        }
    }
}

impl std::fmt::Display for ReviewDocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
