//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 검색 설정 변환을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::error::{Result, SearchError};
use crate::matcher::SearchMode;
use crate::searcher::SearchConfig;

/// jsearch CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "jsearch",
    author = "YourName <your@email.com>",
    version,
    about = "JSONL LOG SEARCHER - 폴더 내 JSON 로그 파일에서 레코드를 검색하는 병렬 CLI 도구",
    long_about = r#"
JSONL LOG SEARCHER
==================

지정된 폴더의 .json 파일(한 줄에 JSON 객체 하나)을 읽어
검색어와 일치하는 레코드를 보기 좋게 출력합니다.

특징:
  • 대소문자 무시 검색 (exact / contains)
  • 점 구분 중첩 필드 검색 (예: SourceMetadata.Data.Github.email)
  • 필드 접두사 자동 시도로 다양한 레코드 구조 지원
  • 멀티스레드 파일 처리

예제:
  jsearch -i ./scans -s AKIAEXAMPLE
  jsearch -i ./scans -s alice -f email -m exact
  jsearch -i ./scans -s github -t 8 --stats
  jsearch -l
"#
)]
pub struct Args {
    /// trufflehog JSON 출력 파일이 있는 입력 폴더 경로
    #[arg(short, long, required_unless_present = "list_fields")]
    pub input: Option<PathBuf>,

    /// 검색어 (대소문자 무시)
    #[arg(short, long, required_unless_present = "list_fields")]
    pub search: Option<String>,

    /// 검색 모드
    #[arg(short, long, value_enum, default_value_t = SearchMode::Contains)]
    pub mode: SearchMode,

    /// 검색할 필드 (점 구분 경로, 생략하면 레코드 전체 검색)
    #[arg(short, long)]
    pub field: Option<String>,

    /// 검색 가능한 필드 목록 출력 (대소문자 구분)
    #[arg(short, long)]
    pub list_fields: bool,

    /// 병렬 처리 스레드 수
    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,

    /// 파일 이름 패턴 필터 (glob 형식, 예: "*_2024*")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// 필드 접두사 (여러 번 지정 가능, 지정하면 기본 접두사 목록을 대체)
    #[arg(long = "prefix")]
    pub prefixes: Vec<String>,

    /// 검색 종료 후 통계 출력
    #[arg(long)]
    pub stats: bool,
}

impl Args {
    /// 인자를 검색 설정으로 변환
    pub fn search_config(&self) -> Result<SearchConfig> {
        let term = self.search.as_deref().unwrap_or_default();
        let mut config = SearchConfig::new(term, self.mode)?.with_field(self.field.clone());

        if !self.prefixes.is_empty() {
            config = config.with_prefixes(self.prefixes.clone());
        }

        Ok(config)
    }

    /// 입력 폴더 경로 반환
    pub fn input_dir(&self) -> Result<&PathBuf> {
        self.input.as_ref().ok_or_else(|| SearchError::InputNotFound {
            path: PathBuf::new(),
        })
    }

    /// 스레드 수 검증
    pub fn thread_count(&self) -> Result<usize> {
        match self.threads {
            0 => Err(SearchError::InvalidThreadCount { count: 0 }),
            n => Ok(n),
        }
    }
}
