//! Canned demo reports used when no API key is configured or the model
//! response cannot be parsed

use qms_types::{
    Comparison, ModeEstimate, RequirementGroup, ReviewFinding, ReviewReport, Severity,
};

use crate::prompts::ReviewDocType;

fn base_comparison() -> Comparison {
    Comparison {
        manual: ModeEstimate {
            avg_time_min: 120,
            missing_risk: "필수 섹션 누락 가능성 높음 (승인 프로세스, 보존기간 등)".to_string(),
            rework_risk: "높음 (심사 후 재작업 빈번, 개정 사유 불명확)".to_string(),
            audit_ready: "낮음/불확실 (규제 요구사항 미충족 가능성)".to_string(),
        },
        qmsquare: ModeEstimate {
            avg_time_min: 35,
            missing_risk: "템플릿 기반 자동 점검으로 필수 섹션 누락 방지".to_string(),
            rework_risk: "낮음 (사전 규제 검증, 심사 전 이슈 발견)".to_string(),
            audit_ready: "높음/즉시 대응 가능 (규제 준수 자동 확인)".to_string(),
        },
    }
}

/// Demo review report for the given document type
pub fn demo_report(doc_type: ReviewDocType) -> ReviewReport {
    match doc_type {
        ReviewDocType::Sop => sop_demo(),
        // Other document types return the base schema
        _ => ReviewReport {
            comparison: base_comparison(),
            key_points: vec!["기본 체크 포인트".to_string()],
            requirements: vec![RequirementGroup {
                title: "기본 요구사항".to_string(),
                items: vec!["항목 1".to_string()],
            }],
            findings: vec![],
        },
    }
}

fn sop_demo() -> ReviewReport {
    ReviewReport {
        comparison: base_comparison(),
        key_points: vec![
            "문서 승인 프로세스가 명확히 정의되어 있는가 (승인 권한자, 검토-승인 분리)".to_string(),
            "최신본 관리 및 구버전 회수 절차가 구체적으로 기술되어 있는가".to_string(),
            "개정 이력과 변경 사유가 명확히 기록되는가 (변경 영향 평가 포함)".to_string(),
            "보존 기간이 법적 근거와 함께 구체적으로 명시되어 있는가".to_string(),
            "전자문서 접근 권한/무단 수정 방지 조치가 있는가 (로그 추적 포함)".to_string(),
        ],
        requirements: vec![
            RequirementGroup {
                title: "문서 승인/발행".to_string(),
                items: vec![
                    "승인 권한자 정의 (직위, 권한 근거)".to_string(),
                    "검토/승인 분리 원칙 (동일인 불가)".to_string(),
                    "승인 기록 보관 (전자 서명 또는 종이 기록)".to_string(),
                ],
            },
            RequirementGroup {
                title: "최신본/배포/회수".to_string(),
                items: vec![
                    "배포 대상/방법 명시 (이메일, 문서 시스템 등록)".to_string(),
                    "구버전 회수/폐기 절차 (회수 기한, 폐기 방법)".to_string(),
                    "최신본 확인 방법 (버전 번호, 날짜, 시스템 표시)".to_string(),
                ],
            },
            RequirementGroup {
                title: "기록 보관/보존기간".to_string(),
                items: vec![
                    "보존 책임자 지정 (부서, 담당자)".to_string(),
                    "보존 기간 기준 (법적 근거: 의료기기법 시행규칙 제27조 등)".to_string(),
                ],
            },
        ],
        findings: vec![
            ReviewFinding {
                severity: Severity::High,
                category: "최신본/배포/회수".to_string(),
                title: "구버전 회수 절차 누락".to_string(),
                evidence: "배포 방법 기술 없음, 구버전 관리 규정 부재".to_string(),
                why: "구버전 SOP를 사용할 위험이 있어 ISO 13485 4.2.4 심사에서 Major 부적합 판정 가능.".to_string(),
                fix: vec![
                    "배포 대상 부서를 명시 (제조, 품질관리, 연구개발)".to_string(),
                    "구버전 회수 기한 설정 (예: 신규 개정본 배포 후 7일 이내)".to_string(),
                    "회수 확인 방법 (수령 확인서, 시스템 로그)".to_string(),
                ],
                recommended_text: "구버전 SOP는 신규 개정본 배포 후 7일 이내에 회수하여 '무효' 표시 후 보관하거나 파기한다. 회수 완료 여부는 품질보증팀이 확인한다.".to_string(),
            },
            ReviewFinding {
                severity: Severity::High,
                category: "기록 보관/보존기간".to_string(),
                title: "보존 기간 미명시 (법적 근거 부재)".to_string(),
                evidence: "문서 하단에 보존 기간 기재 없음".to_string(),
                why: "의료기기법 시행규칙 제27조 위반으로 식약처 심사 시 지적 가능.".to_string(),
                fix: vec![
                    "보존 기간을 법적 근거와 함께 명시 (예: 3년, 근거: 의료기기법 시행규칙 제27조)".to_string(),
                    "보관 책임자 지정 (부서, 직위)".to_string(),
                ],
                recommended_text: "본 문서는 발효일로부터 3년간 보존한다(근거: 의료기기법 시행규칙 제27조). 보관 책임자: 품질보증팀장.".to_string(),
            },
            ReviewFinding {
                severity: Severity::Medium,
                category: "문서 승인/발행".to_string(),
                title: "검토-승인 분리 원칙 미명시".to_string(),
                evidence: "승인 절차에 '검토자와 승인자는 동일인이 될 수 없다'는 언급 없음".to_string(),
                why: "ISO 13485 4.2.4 요구사항. 동일인 검토-승인은 객관성 결여로 심사에서 지적 가능.".to_string(),
                fix: vec![
                    "검토자와 승인자는 반드시 다른 사람이어야 함을 명시".to_string(),
                    "승인자 권한 근거 (직위, 책임)".to_string(),
                ],
                recommended_text: "문서 검토자와 승인자는 반드시 다른 사람이어야 한다. 검토자는 해당 분야 실무 경험이 3년 이상인 담당자가 수행하며, 승인자는 팀장 이상 직위자가 수행한다.".to_string(),
            },
            ReviewFinding {
                severity: Severity::Low,
                category: "문서 개정/변경이력".to_string(),
                title: "모호한 표현: '필요시 개정'".to_string(),
                evidence: "'필요시 개정할 수 있다'로 기재".to_string(),
                why: "'필요시'는 판단 기준이 모호하여 개정 시점 논란 가능.".to_string(),
                fix: vec![
                    "개정 트리거 조건을 구체화 (법규 변경, 프로세스 변경, 부적합 발생 등)".to_string(),
                    "개정 주기 명시 (예: 매년 정기 검토)".to_string(),
                ],
                recommended_text: "본 SOP는 다음의 경우 개정한다: (1) 관련 법규/규제 변경 시, (2) 프로세스 변경 시, (3) 내부심사/외부심사에서 개선 요청 시, (4) CAPA 조치 결과 반영 시.".to_string(),
            },
        ],
    }
}
