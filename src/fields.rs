//! 검색 가능 필드 목록 모듈
//!
//! trufflehog 출력에서 자주 쓰이는 필드 이름을 안내용으로 제공합니다.
//! 필드 해석기는 이 목록과 무관하게 임의의 점 구분 경로를 받습니다.

use std::io::Write;

/// 자주 검색하는 필드 이름 (대소문자 구분)
pub const SEARCHABLE_FIELDS: &[&str] = &[
    "DecoderName",
    "DetectorDescription",
    "DetectorName",
    "DetectorType",
    "project",
    "rotation_guide",
    "Raw",
    "RawV2",
    "Redacted",
    "SourceID",
    "commit",
    "email",
    "file",
    "line",
    "link",
    "repository",
    "timestamp",
    "SourceName",
    "SourceType",
    "StructuredData",
    "VerificationFromCache",
    "Verified",
];

/// 필드 목록 출력
pub fn print_searchable_fields<W: Write>(out: &mut W) -> std::io::Result<()> {
    let rule = "-".repeat(40);

    writeln!(out, "Searchable Fields (case-sensitive):")?;
    writeln!(out, "{}", rule)?;
    for field in SEARCHABLE_FIELDS {
        writeln!(out, "- {}", field)?;
    }
    writeln!(out, "{}", rule)?;

    Ok(())
}
