//! 에러 타입 정의 모듈
//!
//! jsearch에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! 시작 단계 에러는 실행을 중단시키고, 파일/라인 단위 에러는 출력 후 계속 진행합니다.

use std::path::PathBuf;
use thiserror::Error;

/// jsearch에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum SearchError {
    /// 입력 폴더가 존재하지 않음
    #[error("입력 폴더를 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 입력이 폴더가 아님
    #[error("입력 경로가 폴더가 아닙니다: {path}")]
    NotADirectory { path: PathBuf },

    /// 폴더 목록 읽기 실패
    #[error("폴더를 읽을 수 없습니다 ({path}): {reason}")]
    DirectoryRead { path: PathBuf, reason: String },

    /// 검색어 누락
    #[error("검색어가 비어 있습니다 (-s)")]
    EmptySearchTerm,

    /// 스레드 수가 1 미만
    #[error("스레드 수는 1 이상이어야 합니다: {count}")]
    InvalidThreadCount { count: usize },

    /// 스레드 풀 초기화 실패
    #[error("스레드 풀 초기화 실패: {reason}")]
    ThreadPoolError { reason: String },

    /// 유효하지 않은 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },

    /// 파일 열기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// 파일 읽기 도중 I/O 실패
    #[error("파일 읽기 실패 ({file}): {reason}")]
    ReadError { file: String, reason: String },

    /// 라인 JSON 파싱 실패
    #[error("JSON 파싱 실패 ({file}, {line}번째 줄): {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// 라인이 JSON 객체가 아님
    #[error("JSON 객체가 아닙니다 ({file}, {line}번째 줄)")]
    NotAnObject { file: String, line: usize },

    /// 콘솔/출력 쓰기 실패
    #[error("출력 실패: {reason}")]
    OutputError { reason: String },
}

impl From<std::io::Error> for SearchError {
    fn from(e: std::io::Error) -> Self {
        SearchError::OutputError {
            reason: e.to_string(),
        }
    }
}

/// jsearch 결과 타입 별칭
pub type Result<T> = std::result::Result<T, SearchError>;
