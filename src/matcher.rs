//! 값 매칭 모듈
//!
//! 임의의 JSON 값 안에서 검색어와 일치하는 문자열이 있는지 재귀적으로 확인합니다.

use clap::ValueEnum;
use serde_json::Value;

/// 검색 모드
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// 소문자 변환 후 전체 문자열이 같아야 일치
    Exact,
    /// 소문자 변환 후 검색어를 포함하면 일치
    #[default]
    Contains,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Exact => write!(f, "exact"),
            SearchMode::Contains => write!(f, "contains"),
        }
    }
}

impl SearchMode {
    /// 단일 문자열 비교 (`term`은 이미 소문자여야 함)
    pub fn matches_str(&self, value: &str, term: &str) -> bool {
        let lower = value.to_lowercase();
        match self {
            SearchMode::Exact => lower == term,
            SearchMode::Contains => lower.contains(term),
        }
    }
}

/// JSON 값이 검색어와 일치하는지 확인
///
/// 문자열은 직접 비교하고, 배열은 요소, 객체는 값(키 제외)을 재귀적으로 검사합니다.
/// 숫자, 불리언, null은 항상 불일치입니다. 첫 일치에서 바로 반환합니다.
///
/// # Examples
/// ```
/// use jsearch::matcher::{matches_value, SearchMode};
/// use serde_json::json;
///
/// let value = json!({"tags": ["alpha", "AKIA123"]});
/// assert!(matches_value(&value, "akia", SearchMode::Contains));
/// assert!(!matches_value(&value, "akia", SearchMode::Exact));
/// ```
pub fn matches_value(value: &Value, term: &str, mode: SearchMode) -> bool {
    match value {
        Value::String(s) => mode.matches_str(s, term),
        Value::Array(items) => items.iter().any(|item| matches_value(item, term, mode)),
        Value::Object(map) => map.values().any(|item| matches_value(item, term, mode)),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}
