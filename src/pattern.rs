//! 파일 이름 필터 모듈
//!
//! `.json` 확장자 규칙과 선택적 glob 패턴으로 검색 대상 파일을 고릅니다.

use glob::Pattern;

use crate::error::{Result, SearchError};

/// 검색 대상 확장자 (대소문자 구분)
pub const JSON_SUFFIX: &str = ".json";

/// 컴파일된 파일 이름 필터
#[derive(Default)]
pub struct FileFilter {
    pattern: Option<Pattern>,
}

impl FileFilter {
    /// 새 파일 필터 생성
    ///
    /// # Arguments
    /// * `pattern` - 글로브 패턴 문자열 (None이면 `.json` 규칙만 적용)
    ///
    /// # Examples
    /// ```
    /// use jsearch::pattern::FileFilter;
    ///
    /// let filter = FileFilter::new(Some("*_2024*".to_string())).unwrap();
    /// assert!(filter.matches("scan_2024_01.json"));
    /// assert!(!filter.matches("scan_2023_12.json"));
    /// assert!(!filter.matches("scan_2024_01.txt"));
    /// ```
    pub fn new(pattern: Option<String>) -> Result<Self> {
        let compiled = match pattern {
            Some(ref p) => Some(
                Pattern::new(p).map_err(|_| SearchError::InvalidPattern { pattern: p.clone() })?,
            ),
            None => None,
        };

        Ok(Self { pattern: compiled })
    }

    /// 파일 이름이 검색 대상인지 확인
    ///
    /// 이름이 `.json`으로 끝나야 하고, 패턴이 있으면 패턴과도 일치해야 합니다.
    pub fn matches(&self, file_name: &str) -> bool {
        if !file_name.ends_with(JSON_SUFFIX) {
            return false;
        }

        match &self.pattern {
            Some(p) => p.matches(file_name),
            None => true,
        }
    }
}
