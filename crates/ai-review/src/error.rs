//! Review pipeline errors
//!
//! Upstream failures are pattern-matched on the error body and mapped to
//! the friendly messages shown to the user.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("OpenAI API 인증에 실패했습니다. OPENAI_API_KEY 환경 변수를 확인하세요.")]
    Auth,

    #[error("OpenAI API 할당량이 초과되었습니다. API 사용량을 확인하세요.")]
    QuotaExceeded,

    #[error("OpenAI API 요청 시간이 초과되었습니다. 잠시 후 다시 시도해주세요.")]
    Timeout,

    #[error("AI 응답이 비어 있습니다.")]
    EmptyResponse,

    #[error("서버 오류: {0}")]
    Upstream(String),

    #[error("요청 전송에 실패했습니다: {0}")]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for ReviewError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ReviewError::Timeout
        } else {
            ReviewError::Transport(err)
        }
    }
}

/// Map an upstream error body to a friendly error
pub(crate) fn classify_upstream(body: &str) -> ReviewError {
    let lower = body.to_lowercase();
    if lower.contains("api key") || lower.contains("api_key") || lower.contains("unauthorized") {
        ReviewError::Auth
    } else if lower.contains("quota") || lower.contains("rate limit") {
        ReviewError::QuotaExceeded
    } else if lower.contains("timeout") || lower.contains("timed out") {
        ReviewError::Timeout
    } else {
        ReviewError::Upstream(body.chars().take(300).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_auth_errors() {
        let e = classify_upstream(r#"{"error": {"code": "invalid_api_key"}}"#);
        assert!(matches!(e, ReviewError::Auth));
    }

    #[test]
    fn test_classifies_quota_errors() {
        let e = classify_upstream("You exceeded your current quota");
        assert!(matches!(e, ReviewError::QuotaExceeded));
    }

    #[test]
    fn test_classifies_timeouts() {
        let e = classify_upstream("Request timed out");
        assert!(matches!(e, ReviewError::Timeout));
    }

    #[test]
    fn test_unknown_errors_keep_truncated_body() {
        let body = "x".repeat(1000);
        match classify_upstream(&body) {
            ReviewError::Upstream(msg) => assert_eq!(msg.len(), 300),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
