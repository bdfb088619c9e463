//! Heuristic document compliance scorer
//!
//! Rule-based quality analysis for controlled QMS documents: required
//! section presence, vague-language detection, and a weighted completeness
//! score. Every entry point is a pure function of (document text, document
//! type) — no I/O, no shared state, and no failure modes: any input string
//! produces a result.

pub mod ambiguity;
pub mod report;
pub mod rules;
pub mod score;
pub mod sections;

use qms_types::{AnalysisReport, QualityCheckResult, ScoreResult};

/// QualityEngine entry point
pub struct QualityEngine;

impl QualityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a document against the rule set for `document_type`.
    ///
    /// Unknown document-type labels are treated as an empty rule set: no
    /// missing sections, section contribution 0 (so the score is 0 — the
    /// observed boundary behavior, kept as-is).
    pub fn score(&self, text: &str, document_type: &str) -> ScoreResult {
        let required = rules::sections_for_label(document_type);
        let missing_sections = sections::missing_sections(text, required);
        let ambiguous_phrases = ambiguity::find_ambiguous_phrases(text);

        let score = score::aggregate_score(
            required.len(),
            missing_sections.len(),
            ambiguous_phrases.len(),
        );
        let feedback = score::feedback(&missing_sections);

        ScoreResult {
            score,
            missing_sections,
            ambiguous_phrases,
            feedback,
        }
    }

    /// Section-only audit checklist: coverage scaled to 0-100, ignoring
    /// vague language. This is the figure reported as audit readiness.
    pub fn check_quality(&self, text: &str, document_type: &str) -> QualityCheckResult {
        let required = rules::sections_for_label(document_type);
        let missing_keywords = sections::missing_sections(text, required);
        let defects_count = missing_keywords.len();

        let score = if required.is_empty() {
            0
        } else {
            let found = required.len() - defects_count;
            (found as f64 / required.len() as f64 * 100.0).round() as u8
        };

        let feedback = score::feedback(&missing_keywords);

        QualityCheckResult {
            score,
            defects_count,
            missing_keywords,
            audit_readiness: score,
            feedback,
        }
    }

    /// Full analysis: weighted score plus summary, recommendations and the
    /// rework-savings estimate.
    pub fn analyze(&self, text: &str, document_type: &str) -> AnalysisReport {
        let result = self.score(text, document_type);

        let summary = report::summary(
            &result.missing_sections,
            &result.ambiguous_phrases,
            result.score,
        );
        let recommendations =
            report::recommendations(&result.missing_sections, &result.ambiguous_phrases);
        let efficiency_note =
            report::efficiency_note(&result.missing_sections, &result.ambiguous_phrases);

        AnalysisReport {
            result,
            summary,
            recommendations,
            efficiency_note,
        }
    }
}

impl Default for QualityEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOP_LABEL: &str = "절차서(SOP)";

    /// An SOP containing all seven required section labels, no vague terms
    fn complete_sop() -> String {
        "1. 목적\n2. 적용범위\n3. 책임과 권한\n4. 절차\n5. 기록관리\n6. 참고문서\n7. 개정이력\n"
            .to_string()
    }

    #[test]
    fn test_complete_sop_passes_audit_checklist() {
        let engine = QualityEngine::new();
        let result = engine.check_quality(&complete_sop(), SOP_LABEL);

        assert_eq!(result.score, 100);
        assert_eq!(result.audit_readiness, 100);
        assert!(result.missing_keywords.is_empty());
        assert!(result.feedback[0].contains("모든 필수 항목"));
    }

    #[test]
    fn test_two_missing_one_vague_term_scores_47() {
        let engine = QualityEngine::new();
        // Drop 참고문서 and 개정이력, add one vague term
        let text = "1. 목적\n2. 적용범위\n3. 책임과 권한\n4. 절차\n5. 기록관리\n세척은 적절히 수행한다.\n";
        let result = engine.score(text, SOP_LABEL);

        // (7-2)/7*70 = 50, minus 3 for one finding
        assert_eq!(result.score, 47);
        assert_eq!(result.missing_sections, vec!["참고문서", "개정이력"]);
        assert_eq!(result.ambiguous_phrases.len(), 1);
    }

    #[test]
    fn test_unknown_type_scores_zero_with_no_missing_sections() {
        let engine = QualityEngine::new();
        let result = engine.score("아무 내용이나 들어있는 문서", "XYZ");

        assert_eq!(result.score, 0);
        assert!(result.missing_sections.is_empty());

        let check = engine.check_quality("아무 내용이나 들어있는 문서", "XYZ");
        assert_eq!(check.score, 0);
        assert!(check.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_text_reports_every_section_missing() {
        let engine = QualityEngine::new();
        let result = engine.score("", SOP_LABEL);

        assert_eq!(result.missing_sections.len(), 7);
        assert_eq!(result.score, 0);
        assert!(result.feedback.iter().any(|f| f.contains("심각한 결함")));
    }

    #[test]
    fn test_analyze_attaches_report_text() {
        let engine = QualityEngine::new();
        let report = engine.analyze(&complete_sop(), SOP_LABEL);

        // 70 weighted points lands in the "acceptable" summary tier
        assert_eq!(report.result.score, 70);
        assert!(report.summary.contains("양호"));
        assert!(!report.recommendations.is_empty());
        assert!(report.efficiency_note.contains("0분"));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let engine = QualityEngine::new();
        let text = "목적: 충분히 검토함\n필요시 개정한다\n";
        let first = engine.score(text, SOP_LABEL);
        let second = engine.score(text, SOP_LABEL);
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn doc_type_label() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("절차서(SOP)".to_string()),
            Just("작업지침서(WI)".to_string()),
            Just("기록서(Record)".to_string()),
            Just("변경관리(Change)".to_string()),
            "[a-zA-Z]{0,12}",
        ]
    }

    proptest! {
        /// Scoring never panics and the score stays in 0..=100 for any
        /// input text and any document-type label
        #[test]
        fn score_is_total_and_bounded(text in ".{0,400}", label in doc_type_label()) {
            let engine = QualityEngine::new();
            let result = engine.score(&text, &label);
            prop_assert!(result.score <= 100);

            let check = engine.check_quality(&text, &label);
            prop_assert!(check.score <= 100);
        }

        /// Identical inputs produce identical results
        #[test]
        fn score_is_deterministic(text in ".{0,400}", label in doc_type_label()) {
            let engine = QualityEngine::new();
            prop_assert_eq!(engine.score(&text, &label), engine.score(&text, &label));
        }

        /// Appending a previously missing required section never lowers
        /// the score
        #[test]
        fn adding_a_missing_section_never_decreases_score(text in "[가-힣 \n]{0,200}") {
            let engine = QualityEngine::new();
            let label = "절차서(SOP)";
            let before = engine.score(&text, label);

            if let Some(section) = before.missing_sections.first() {
                let amended = format!("{text}\n{section}");
                let after = engine.score(&amended, label);
                prop_assert!(after.score >= before.score);
            }
        }

        /// Ten or more vague-term occurrences all hit the same 30-point cap
        #[test]
        fn ambiguity_penalty_caps(extra in 0usize..20) {
            let engine = QualityEngine::new();
            let base = "목적 적용범위 책임과 권한 절차 기록관리 참고문서 개정이력";
            let at_cap: String = std::iter::repeat("적절히 수행한다\n").take(10).collect();
            let over_cap: String = std::iter::repeat("적절히 수행한다\n").take(10 + extra).collect();

            let a = engine.score(&format!("{base}\n{at_cap}"), "절차서(SOP)");
            let b = engine.score(&format!("{base}\n{over_cap}"), "절차서(SOP)");
            prop_assert_eq!(a.score, b.score);
        }
    }
}
