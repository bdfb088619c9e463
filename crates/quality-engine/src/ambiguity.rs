//! Vague-language detection

use qms_types::AmbiguousPhrase;

use crate::rules::AMBIGUOUS_TERMS;

/// Maximum context length carried per finding, in characters
const CONTEXT_CHARS: usize = 100;

/// Scan `text` line by line for vague terms.
///
/// Findings are emitted term-major: all lines are scanned for the first
/// term in the list, then for the second, and so on. A line containing
/// several terms produces one finding per term. The order is stable for
/// identical input.
pub fn find_ambiguous_phrases(text: &str) -> Vec<AmbiguousPhrase> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut findings = Vec::new();

    for term in AMBIGUOUS_TERMS {
        for (index, line) in lines.iter().enumerate() {
            if line.contains(term) {
                findings.push(AmbiguousPhrase {
                    phrase: term.to_string(),
                    context: truncate_chars(line.trim(), CONTEXT_CHARS),
                    line_number: index + 1,
                });
            }
        }
    }

    findings
}

/// Truncate to at most `max` characters. Korean text makes byte slicing
/// unsafe here.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finds_term_with_line_number() {
        let text = "1. 목적\n세척은 적절히 수행한다.\n2. 기록";
        let findings = find_ambiguous_phrases(text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].phrase, "적절히");
        assert_eq!(findings[0].line_number, 2);
        assert_eq!(findings[0].context, "세척은 적절히 수행한다.");
    }

    #[test]
    fn test_multiple_terms_on_one_line() {
        let text = "필요시 적절히 건조한다.";
        let findings = find_ambiguous_phrases(text);
        assert_eq!(findings.len(), 2);
        // Term-major order: "적절히" precedes "필요시" in the term list
        assert_eq!(findings[0].phrase, "적절히");
        assert_eq!(findings[1].phrase, "필요시");
    }

    #[test]
    fn test_same_term_on_multiple_lines() {
        let text = "대략 10분간 교반한다.\n건조 후 대략 5분간 냉각한다.";
        let findings = find_ambiguous_phrases(text);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].line_number, 1);
        assert_eq!(findings[1].line_number, 2);
    }

    #[test]
    fn test_context_truncated_to_100_chars() {
        let long_line = format!("적당히 {}", "가".repeat(200));
        let findings = find_ambiguous_phrases(&long_line);
        assert_eq!(findings[0].context.chars().count(), 100);
    }

    #[test]
    fn test_clean_text_has_no_findings() {
        let text = "세척은 정제수로 3회, 각 30초간 수행한다.";
        assert!(find_ambiguous_phrases(text).is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(find_ambiguous_phrases("").is_empty());
    }
}
