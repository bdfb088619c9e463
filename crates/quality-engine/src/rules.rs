//! Static rule tables: required sections per document type and the
//! vague-term list flagged during ambiguity scanning

use qms_types::DocumentType;

/// Required sections for 절차서(SOP)
pub const SOP_SECTIONS: &[&str] = &[
    "목적",
    "적용범위",
    "책임과 권한",
    "절차",
    "기록관리",
    "참고문서",
    "개정이력",
];

/// Required sections for 작업지침서(WI)
pub const WORK_INSTRUCTION_SECTIONS: &[&str] =
    &["목적", "적용범위", "작업순서", "주의사항", "기록", "안전사항"];

/// Required sections for 기록서(Record)
pub const RECORD_SECTIONS: &[&str] = &[
    "제목",
    "날짜",
    "작성자",
    "검토자",
    "승인자",
    "시험항목",
    "합격기준",
    "결과",
];

/// Required sections for 변경관리(Change)
pub const CHANGE_CONTROL_SECTIONS: &[&str] = &[
    "변경요청",
    "변경사유",
    "영향평가",
    "승인",
    "실행",
    "검증",
    "문서화",
];

/// Vague regulatory language flagged because it lacks a verifiable criterion
pub const AMBIGUOUS_TERMS: &[&str] = &[
    "적절히",
    "충분히",
    "가능한",
    "필요시",
    "검토함",
    "적당히",
    "대략",
    "약간",
];

/// Required section list for a known document type
pub fn sections_for(document_type: DocumentType) -> &'static [&'static str] {
    match document_type {
        DocumentType::Sop => SOP_SECTIONS,
        DocumentType::WorkInstruction => WORK_INSTRUCTION_SECTIONS,
        DocumentType::Record => RECORD_SECTIONS,
        DocumentType::ChangeControl => CHANGE_CONTROL_SECTIONS,
    }
}

/// Required section list for a document-type label. Unknown labels map to
/// an empty rule set, never an error.
pub fn sections_for_label(label: &str) -> &'static [&'static str] {
    DocumentType::parse_label(label)
        .map(sections_for)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sop_has_seven_sections() {
        assert_eq!(sections_for_label("절차서(SOP)").len(), 7);
    }

    #[test]
    fn test_unknown_label_has_empty_rules() {
        assert!(sections_for_label("XYZ").is_empty());
        assert!(sections_for_label("").is_empty());
    }

    #[test]
    fn test_every_type_has_rules() {
        for ty in DocumentType::all() {
            assert!(!sections_for(*ty).is_empty());
        }
    }
}
