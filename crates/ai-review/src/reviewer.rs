//! Review orchestration: prompt selection, provider call, parse-with-fallback

use qms_types::ReviewReport;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::ReviewError;
use crate::fallback::demo_report;
use crate::prompts::ReviewDocType;
use crate::provider::{ChatProvider, OpenAiProvider};

/// Why a canned report was served instead of a live one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No API key configured; the service runs in demo mode
    MissingApiKey,
    /// The model reply was not valid JSON for the review schema
    UnparsableResponse,
}

/// Outcome of a review request
///
/// Upstream hard failures (auth, quota, timeout, transport) surface as
/// `Err(ReviewError)` from [`Reviewer::review`] instead.
#[derive(Debug, Clone)]
pub enum ReviewOutcome {
    Completed(ReviewReport),
    Fallback {
        report: ReviewReport,
        reason: FallbackReason,
    },
}

impl ReviewOutcome {
    pub fn report(&self) -> &ReviewReport {
        match self {
            ReviewOutcome::Completed(report) => report,
            ReviewOutcome::Fallback { report, .. } => report,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, ReviewOutcome::Fallback { .. })
    }
}

/// Reviewer entry point
pub struct Reviewer {
    provider: Option<Box<dyn ChatProvider>>,
}

impl Reviewer {
    pub fn new(provider: Box<dyn ChatProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A reviewer with no provider: every request serves the demo report
    pub fn demo() -> Self {
        Self { provider: None }
    }

    /// Build from `OPENAI_API_KEY` (demo mode when unset or empty)
    pub fn from_env() -> Result<Self, ReviewError> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.is_empty() => {
                let model = std::env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string());
                let provider = OpenAiProvider::new(key, model, None)?;
                Ok(Self::new(Box::new(provider)))
            }
            _ => {
                info!("OPENAI_API_KEY not set, serving demo reviews");
                Ok(Self::demo())
            }
        }
    }

    pub async fn review(
        &self,
        doc_type: ReviewDocType,
        text: &str,
    ) -> Result<ReviewOutcome, ReviewError> {
        let Some(provider) = &self.provider else {
            return Ok(ReviewOutcome::Fallback {
                report: demo_report(doc_type),
                reason: FallbackReason::MissingApiKey,
            });
        };

        let content = provider
            .complete(doc_type.system_prompt(), &doc_type.user_prompt(text))
            .await?;

        match parse_report(&content) {
            Ok(report) => Ok(ReviewOutcome::Completed(report)),
            Err(err) => {
                warn!("Unparsable review response, serving demo report: {err}");
                Ok(ReviewOutcome::Fallback {
                    report: demo_report(doc_type),
                    reason: FallbackReason::UnparsableResponse,
                })
            }
        }
    }
}

/// Parse the model reply, tolerating a markdown code fence around the JSON
fn parse_report(content: &str) -> Result<ReviewReport, serde_json::Error> {
    serde_json::from_str(strip_code_fence(content))
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedProvider(String);

    #[async_trait]
    impl ChatProvider for FixedProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, ReviewError> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ChatProvider for FailingProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, ReviewError> {
            Err(ReviewError::QuotaExceeded)
        }
    }

    fn valid_report_json() -> String {
        serde_json::to_string(&demo_report(ReviewDocType::Sop)).unwrap()
    }

    #[tokio::test]
    async fn test_no_provider_serves_demo() {
        let reviewer = Reviewer::demo();
        let outcome = reviewer
            .review(ReviewDocType::Sop, "문서 내용")
            .await
            .unwrap();
        assert!(outcome.is_demo());
        match outcome {
            ReviewOutcome::Fallback { reason, .. } => {
                assert_eq!(reason, FallbackReason::MissingApiKey)
            }
            _ => panic!("expected fallback"),
        }
    }

    #[tokio::test]
    async fn test_valid_response_completes() {
        let reviewer = Reviewer::new(Box::new(FixedProvider(valid_report_json())));
        let outcome = reviewer
            .review(ReviewDocType::Sop, "문서 내용")
            .await
            .unwrap();
        assert!(!outcome.is_demo());
        assert!(!outcome.report().findings.is_empty());
    }

    #[tokio::test]
    async fn test_fenced_response_still_parses() {
        let fenced = format!("```json\n{}\n```", valid_report_json());
        let reviewer = Reviewer::new(Box::new(FixedProvider(fenced)));
        let outcome = reviewer
            .review(ReviewDocType::Sop, "문서 내용")
            .await
            .unwrap();
        assert!(!outcome.is_demo());
    }

    #[tokio::test]
    async fn test_garbage_response_falls_back() {
        let reviewer = Reviewer::new(Box::new(FixedProvider("죄송하지만 분석할 수 없습니다".into())));
        let outcome = reviewer
            .review(ReviewDocType::Capa, "문서 내용")
            .await
            .unwrap();
        match outcome {
            ReviewOutcome::Fallback { reason, .. } => {
                assert_eq!(reason, FallbackReason::UnparsableResponse)
            }
            _ => panic!("expected fallback"),
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_is_an_error() {
        let reviewer = Reviewer::new(Box::new(FailingProvider));
        let err = reviewer
            .review(ReviewDocType::Sop, "문서 내용")
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::QuotaExceeded));
    }
}
