//! Text extraction from uploaded document files
//!
//! Supports plain text (`.txt`) and Word documents (`.docx`). Anything
//! else is rejected, as is any file whose extracted text is shorter than
//! the minimum the analyzers need to produce a meaningful result.

use std::io::{Cursor, Read};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Minimum extracted text length (characters) accepted for analysis
pub const MIN_TEXT_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("지원하지 않는 파일 형식입니다. TXT 또는 DOCX 파일만 지원합니다.")]
    UnsupportedFormat,

    #[error("텍스트가 너무 짧습니다. 최소 {MIN_TEXT_CHARS}자 이상 필요합니다. (현재: {len}자)")]
    TooShort { len: usize },

    #[error("파일이 올바른 UTF-8 텍스트가 아닙니다.")]
    InvalidEncoding,

    #[error("DOCX 파일 처리 중 오류가 발생했습니다: {0}")]
    Docx(String),
}

lazy_static! {
    static ref XML_TAG: Regex = Regex::new(r"<[^>]+>").expect("valid tag pattern");
}

/// Extract raw text from an uploaded file, dispatching on the extension
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let lower = file_name.to_lowercase();

    let text = if lower.ends_with(".txt") {
        extract_txt(bytes)?
    } else if lower.ends_with(".docx") {
        extract_docx(bytes)?
    } else {
        return Err(ExtractError::UnsupportedFormat);
    };

    let len = text.trim().chars().count();
    if len < MIN_TEXT_CHARS {
        return Err(ExtractError::TooShort { len });
    }

    Ok(text)
}

fn extract_txt(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::InvalidEncoding)
}

/// Pull the document body out of the OOXML container and flatten it to
/// plain text: paragraph ends become newlines, tags are stripped, basic
/// entities decoded.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let cursor = Cursor::new(bytes);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    let xml = xml
        .replace("</w:p>", "\n")
        .replace("<w:br/>", "\n")
        .replace("<w:tab/>", "\t");
    let stripped = XML_TAG.replace_all(&xml, "");

    Ok(decode_entities(&stripped))
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Human-readable file size, e.g. `2.5 KB`
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_with_body(xml_body: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file("word/document.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(xml_body.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    const LONG_LINE: &str = "이 절차서는 의료기기 품질경영시스템의 문서관리 절차를 기술하며 모든 부서에 적용된다. 본 절차는 품질책임자의 승인 후 발효된다.";

    #[test]
    fn test_txt_passthrough() {
        let text = extract_text("sop.txt", LONG_LINE.as_bytes()).unwrap();
        assert_eq!(text, LONG_LINE);
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(extract_text("SOP.TXT", LONG_LINE.as_bytes()).is_ok());
    }

    #[test]
    fn test_unsupported_format() {
        let err = extract_text("scan.pdf", LONG_LINE.as_bytes()).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat));
    }

    #[test]
    fn test_too_short_reports_char_count() {
        let err = extract_text("note.txt", "짧은 메모".as_bytes()).unwrap_err();
        match err {
            ExtractError::TooShort { len } => assert_eq!(len, 5),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_txt() {
        let err = extract_text("broken.txt", &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidEncoding));
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let body = format!(
            "<w:document><w:body><w:p><w:r><w:t>1. 목적</w:t></w:r></w:p>\
             <w:p><w:r><w:t>{LONG_LINE}</w:t></w:r></w:p></w:body></w:document>"
        );
        let bytes = docx_with_body(&body);
        let text = extract_text("sop.docx", &bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1. 목적");
        assert_eq!(lines[1], LONG_LINE);
    }

    #[test]
    fn test_docx_entities_decoded() {
        let body = format!(
            "<w:document><w:body><w:p><w:r><w:t>A &amp; B &lt;기준&gt; {LONG_LINE}</w:t></w:r></w:p></w:body></w:document>"
        );
        let text = extract_text("sop.docx", &docx_with_body(&body)).unwrap();
        assert!(text.contains("A & B <기준>"));
    }

    #[test]
    fn test_docx_without_document_xml_fails() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file("other.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"<x/>").unwrap();
            writer.finish().unwrap();
        }
        let err = extract_text("sop.docx", &buf.into_inner()).unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }

    #[test]
    fn test_not_a_zip_fails() {
        let err = extract_text("sop.docx", b"plainly not a zip").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(2048), "2 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
    }
}
