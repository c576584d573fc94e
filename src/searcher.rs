//! 레코드 검색 모듈
//!
//! 실행 단위 검색 설정과, 단일 레코드의 일치 여부 판정 및 출력을 담당합니다.

use colored::Colorize;
use serde_json::{Map, Value};
use std::io::Write;

use crate::error::{Result, SearchError};
use crate::field::resolve;
use crate::matcher::{matches_value, SearchMode};

/// 기본 필드 접두사 목록 (평탄한 레코드, GitHub 출처 메타데이터 순)
pub const DEFAULT_PREFIXES: &[&str] = &["", "SourceMetadata.Data.Github."];

/// 검색 설정
///
/// 실행 시작 시 한 번 만들어지고 모든 워커가 읽기 전용으로 공유합니다.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    term: String,
    mode: SearchMode,
    field: Option<String>,
    prefixes: Vec<String>,
}

impl SearchConfig {
    /// 새 검색 설정 생성
    ///
    /// 검색어는 소문자로 변환되어 저장됩니다. 빈 검색어는 에러입니다.
    pub fn new(term: &str, mode: SearchMode) -> Result<Self> {
        if term.is_empty() {
            return Err(SearchError::EmptySearchTerm);
        }

        Ok(Self {
            term: term.to_lowercase(),
            mode,
            field: None,
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
        })
    }

    /// 검색할 필드 설정 (빈 문자열이나 None이면 전체 레코드 검색)
    pub fn with_field(mut self, field: Option<String>) -> Self {
        self.field = field.filter(|f| !f.is_empty());
        self
    }

    /// 필드 접두사 목록 교체
    pub fn with_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// 레코드가 검색 조건과 일치하는지 확인
    ///
    /// 필드가 지정되면 접두사를 순서대로 붙여 해석하고, 첫 일치에서 멈춥니다.
    /// 어떤 접두사로도 일치하지 않으면 전체 레코드 검색으로 넘어가지 않습니다.
    /// 필드가 없으면 최상위 값 각각을 재귀적으로 검사합니다.
    pub fn record_matches(&self, record: &Map<String, Value>) -> bool {
        match &self.field {
            Some(field) => self.prefixes.iter().any(|prefix| {
                let path = format!("{}{}", prefix, field);
                resolve(record, &path)
                    .map(|value| matches_value(value, &self.term, self.mode))
                    .unwrap_or(false)
            }),
            None => record
                .values()
                .any(|value| matches_value(value, &self.term, self.mode)),
        }
    }

    /// 레코드를 검사하고 일치하면 헤더와 Pretty JSON을 한 번 출력
    ///
    /// # Arguments
    /// * `record` - 파싱된 레코드
    /// * `line_number` - 1부터 시작하는 줄 번호
    /// * `sink` - 출력 대상
    ///
    /// # Returns
    /// 일치 여부
    pub fn search_record<W: Write>(
        &self,
        record: &Map<String, Value>,
        line_number: usize,
        sink: &mut W,
    ) -> Result<bool> {
        if !self.record_matches(record) {
            return Ok(false);
        }

        let block = format_match(record, line_number)?;
        sink.write_all(block.as_bytes())?;
        Ok(true)
    }
}

/// 일치 레코드 출력 블록 생성 (헤더 + 2칸 들여쓰기 JSON)
fn format_match(record: &Map<String, Value>, line_number: usize) -> Result<String> {
    let pretty = serde_json::to_string_pretty(record).map_err(|e| SearchError::OutputError {
        reason: e.to_string(),
    })?;

    let header = format!("--- Related Data at line {} ---", line_number);
    Ok(format!("\n{}\n{}\n", header.bright_green(), pretty))
}
