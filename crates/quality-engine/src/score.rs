//! Score aggregation and feedback generation
//!
//! The weighting is fixed: section coverage contributes up to 70 points,
//! each vague-term occurrence deducts 3 points up to a cap of 30. The
//! feedback thresholds are business-rule constants carried over verbatim
//! from the audit checklist.

/// Maximum contribution of section coverage
const SECTION_WEIGHT: f64 = 70.0;

/// Deduction per vague-term occurrence
const AMBIGUITY_UNIT_PENALTY: usize = 3;

/// Cap on the total ambiguity deduction
const AMBIGUITY_PENALTY_CAP: usize = 30;

/// Combine section coverage and ambiguity count into a 0-100 score.
///
/// `total_required == 0` (unknown document type) forces the section
/// contribution to 0, so any such document scores 0.
pub fn aggregate_score(total_required: usize, missing_count: usize, ambiguous_count: usize) -> u8 {
    let section_score = if total_required == 0 {
        0.0
    } else {
        (total_required - missing_count) as f64 / total_required as f64 * SECTION_WEIGHT
    };

    let penalty = ambiguity_penalty(ambiguous_count) as f64;

    (section_score - penalty).round().max(0.0) as u8
}

/// Capped ambiguity deduction
pub fn ambiguity_penalty(ambiguous_count: usize) -> usize {
    (ambiguous_count * AMBIGUITY_UNIT_PENALTY).min(AMBIGUITY_PENALTY_CAP)
}

/// Audit-readiness feedback lines for the given missing-section list
pub fn feedback(missing_sections: &[String]) -> Vec<String> {
    let mut feedback = Vec::new();
    let missing_count = missing_sections.len();

    if missing_count == 0 {
        feedback.push("✅ 모든 필수 항목이 포함되어 있습니다.".to_string());
        feedback.push("✅ 심사 준비가 완료되었습니다.".to_string());
    } else {
        feedback.push(format!("⚠️ {missing_count}개의 필수 항목이 누락되었습니다."));
        feedback.push(format!("📋 누락 항목: {}", missing_sections.join(", ")));
        if missing_count > 5 {
            feedback.push("❌ 심각한 결함이 있어 심사 통과가 어렵습니다.".to_string());
        } else if missing_count > 2 {
            feedback.push("⚠️ 심사 전 보완이 필요합니다.".to_string());
        } else {
            feedback.push("✓ 일부 보완 후 심사 가능합니다.".to_string());
        }
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_coverage_no_ambiguity() {
        // Section contribution tops out at 70 under this formula; the
        // section-only audit checker is the one that reaches 100.
        assert_eq!(aggregate_score(7, 0, 0), 70);
    }

    #[test]
    fn test_two_missing_one_finding_arithmetic() {
        // (7-2)/7*70 = 50, minus one finding (3) = 47
        assert_eq!(aggregate_score(7, 2, 1), 47);
    }

    #[test]
    fn test_zero_required_scores_zero() {
        assert_eq!(aggregate_score(0, 0, 0), 0);
        assert_eq!(aggregate_score(0, 0, 5), 0);
    }

    #[test]
    fn test_penalty_caps_at_30() {
        assert_eq!(ambiguity_penalty(10), 30);
        assert_eq!(ambiguity_penalty(100), 30);
        assert_eq!(ambiguity_penalty(9), 27);
    }

    #[test]
    fn test_score_never_negative() {
        assert_eq!(aggregate_score(7, 7, 100), 0);
    }

    #[test]
    fn test_feedback_thresholds() {
        let none: Vec<String> = vec![];
        assert!(feedback(&none)[0].contains("모든 필수 항목"));

        let two: Vec<String> = vec!["목적".into(), "승인".into()];
        let lines = feedback(&two);
        assert!(lines[0].contains("2개"));
        assert!(lines[1].contains("목적, 승인"));
        assert!(lines[2].contains("일부 보완"));

        let four: Vec<String> = (0..4).map(|i| format!("섹션{i}")).collect();
        assert!(feedback(&four)[2].contains("심사 전 보완"));

        let six: Vec<String> = (0..6).map(|i| format!("섹션{i}")).collect();
        assert!(feedback(&six)[2].contains("심각한 결함"));
    }
}
