//! jsearch - JSONL LOG SEARCHER
//!
//! 폴더 내 줄 단위 JSON 로그 파일(예: trufflehog JSON 출력)에서
//! 검색어와 일치하는 레코드를 찾아 보기 좋게 출력하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **대소문자 무시 검색**: `exact`(전체 일치), `contains`(부분 일치) 모드
//! - 🎯 **필드 검색**: `a.b.c` 형식의 중첩 필드 경로 지원
//! - 🧭 **필드 접두사**: 평탄한 레코드와 출처 메타데이터 아래 레코드를 순서대로 시도
//! - 🚀 **병렬 처리**: Rayon 스레드 풀로 여러 파일 동시 스캔
//! - 🛡️ **에러 격리**: 잘못된 줄이나 파일이 있어도 나머지 검색은 계속
//! - 📈 **통계**: 파일/레코드/일치 수 요약
//!
//! # 예제
//!
//! ```bash
//! # 레코드 전체에서 부분 일치 검색
//! jsearch -i ./scans -s AKIAEXAMPLE
//!
//! # 특정 필드 전체 일치 검색
//! jsearch -i ./scans -s alice -f email -m exact
//!
//! # 검색 가능한 필드 목록
//! jsearch -l
//! ```

pub mod cli;
pub mod dispatcher;
pub mod error;
pub mod field;
pub mod fields;
pub mod matcher;
pub mod pattern;
pub mod scanner;
pub mod searcher;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use dispatcher::{collect_json_files, dispatch, validate_input};
pub use error::{Result, SearchError};
pub use field::resolve;
pub use matcher::{matches_value, SearchMode};
pub use pattern::FileFilter;
pub use scanner::{scan_file, scan_reader, FileReport};
pub use searcher::{SearchConfig, DEFAULT_PREFIXES};
pub use stats::{format_bytes, Statistics};
