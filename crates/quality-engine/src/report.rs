//! Summary, recommendation and rework-savings text for the analysis report

use qms_types::AmbiguousPhrase;

/// Minutes of rework attributed to each defect caught up front
const REWORK_MINUTES_PER_DEFECT: usize = 15;

pub fn summary(missing: &[String], ambiguous: &[AmbiguousPhrase], score: u8) -> String {
    if score >= 80 {
        "문서 품질이 우수합니다. 필수 섹션이 모두 포함되어 있으며, 명확한 표현을 사용하고 있습니다."
            .to_string()
    } else if score >= 60 {
        "문서 품질이 양호합니다. 일부 개선이 필요하지만 전반적으로 기준을 충족합니다.".to_string()
    } else {
        format!(
            "문서 품질이 미흡합니다. {}개의 필수 섹션이 누락되었고, {}개의 모호한 표현이 발견되었습니다.",
            missing.len(),
            ambiguous.len()
        )
    }
}

pub fn recommendations(missing: &[String], ambiguous: &[AmbiguousPhrase]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing.is_empty() {
        let listed = missing
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let suffix = if missing.len() > 3 { " 등" } else { "" };
        recommendations.push(format!("필수 섹션 추가: {listed}{suffix}"));
    }

    if !ambiguous.is_empty() {
        recommendations.push(
            "모호한 표현을 구체적인 수치나 기준으로 대체하세요 (예: \"충분히\" → \"최소 95% 이상\")"
                .to_string(),
        );
    }

    if missing.is_empty() && ambiguous.is_empty() {
        recommendations
            .push("문서가 우수한 상태입니다. 정기적인 검토를 통해 최신 상태를 유지하세요.".to_string());
    }

    recommendations.push("변경 이력을 명확히 기록하여 추적성을 확보하세요.".to_string());
    recommendations.push("검토자와 승인자의 서명 및 날짜를 명시하세요.".to_string());

    recommendations
}

/// Estimate of rework avoided versus the manual workflow
pub fn efficiency_note(missing: &[String], ambiguous: &[AmbiguousPhrase]) -> String {
    let manual_defects = missing.len() + ambiguous.len() / 2;
    let qmsquare_defects = manual_defects / 4;
    let time_saved = manual_defects * REWORK_MINUTES_PER_DEFECT;

    format!(
        "QMSquare를 사용하면 누락 섹션 {}개와 모호 표현 {}개가 자동으로 방지되어, 재작업 시간을 약 {}분 절감할 수 있습니다. 수기 대비 결함률을 {}개 → {}개로 75% 감소시킬 수 있습니다.",
        missing.len(),
        ambiguous.len(),
        time_saved,
        manual_defects,
        qmsquare_defects
    )
}
