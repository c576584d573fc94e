//! 워커 풀 분배 모듈
//!
//! 입력 폴더에서 검색 대상 파일을 모으고, 고정 크기 rayon 스레드 풀로 나눠 스캔합니다.

use colored::Colorize;
use rayon::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{Result, SearchError};
use crate::pattern::FileFilter;
use crate::scanner::{scan_file, FileReport};
use crate::searcher::SearchConfig;
use crate::stats::Statistics;

/// 입력 경로 유효성 검사
pub fn validate_input(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(SearchError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }

    if !dir.is_dir() {
        return Err(SearchError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    Ok(())
}

/// 검색 대상 파일 수집
///
/// 하위 폴더로 내려가지 않고 입력 폴더 바로 아래의 파일만 이름순으로 모읍니다.
/// `.json`으로 끝나지 않거나 필터와 맞지 않는 항목은 조용히 건너뜁니다.
/// 폴더 목록을 읽지 못하면 에러를 반환합니다.
pub fn collect_json_files(dir: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| SearchError::DirectoryRead {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let selected = entry.path().is_file()
            && entry
                .file_name()
                .to_str()
                .map(|name| filter.matches(name))
                .unwrap_or(false);

        if selected {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// 파일 목록을 `threads`개 워커로 나눠 스캔
///
/// 전용 스레드 풀을 만들어 모든 파일이 끝날 때까지 대기합니다.
/// 각 파일의 에러는 해당 파일에만 영향을 주며 통계에 기록됩니다.
///
/// # Arguments
/// * `files` - 스캔할 파일 목록
/// * `config` - 공유 검색 설정
/// * `threads` - 워커 수 (1 이상)
/// * `stats` - 공유 통계
/// * `make_sink` - 파일마다 출력 대상을 만드는 함수
pub fn dispatch<W, F>(
    files: &[PathBuf],
    config: &SearchConfig,
    threads: usize,
    stats: &Statistics,
    make_sink: F,
) -> Result<()>
where
    W: Write,
    F: Fn() -> W + Sync,
{
    if threads == 0 {
        return Err(SearchError::InvalidThreadCount { count: threads });
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| SearchError::ThreadPoolError {
            reason: e.to_string(),
        })?;

    debug!(threads, files = files.len(), "starting worker pool");

    pool.install(|| {
        files.par_iter().for_each(|path| {
            trace!(
                worker = rayon::current_thread_index(),
                file = %path.display(),
                "scanning"
            );

            let mut sink = make_sink();
            match scan_one(path, config, &mut sink) {
                Ok(report) => stats.record_file(&report),
                Err(e) => {
                    stats.increment_failed();
                    eprintln!("{} {}: {}", "✗".red(), path.display(), e);
                }
            }
        });
    });

    debug!(matches = stats.get_matches(), "worker pool finished");

    Ok(())
}

fn scan_one<W: Write>(path: &Path, config: &SearchConfig, sink: &mut W) -> Result<FileReport> {
    let report = scan_file(path, config, sink)?;
    sink.flush()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::SearchMode;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn create_test_json(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_collect_json_files() {
        let temp_dir = TempDir::new().unwrap();
        create_test_json(temp_dir.path(), "b.json", "{}");
        create_test_json(temp_dir.path(), "a.json", "{}");
        create_test_json(temp_dir.path(), "other.txt", "not json");
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        create_test_json(&temp_dir.path().join("sub"), "deep.json", "{}");
        fs::create_dir(temp_dir.path().join("dir.json")).unwrap();

        let files = collect_json_files(temp_dir.path(), &FileFilter::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_collect_json_files_with_pattern() {
        let temp_dir = TempDir::new().unwrap();
        create_test_json(temp_dir.path(), "data_SUM_1.json", "{}");
        create_test_json(temp_dir.path(), "other.json", "{}");

        let filter = FileFilter::new(Some("*_SUM_*".to_string())).unwrap();
        let files = collect_json_files(temp_dir.path(), &filter).unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_validate_input() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_json(temp_dir.path(), "x.json", "{}");

        assert!(validate_input(temp_dir.path()).is_ok());
        assert!(matches!(
            validate_input(&file),
            Err(SearchError::NotADirectory { .. })
        ));
        assert!(matches!(
            validate_input(&temp_dir.path().join("missing")),
            Err(SearchError::InputNotFound { .. })
        ));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = SearchConfig::new("a", SearchMode::Contains).unwrap();
        let stats = Statistics::new(0);
        let result = dispatch(&[], &config, 0, &stats, Vec::<u8>::new);
        assert!(matches!(
            result,
            Err(SearchError::InvalidThreadCount { count: 0 })
        ));
    }

    #[test]
    fn test_dispatch_scans_every_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut files = Vec::new();
        for i in 0..8 {
            files.push(create_test_json(
                temp_dir.path(),
                &format!("f{}.json", i),
                &format!("{{\"id\": \"token-{}\"}}\n{{\"id\": \"other\"}}\n", i),
            ));
        }
        files.push(temp_dir.path().join("vanished.json"));

        let config = SearchConfig::new("TOKEN", SearchMode::Contains).unwrap();
        let stats = Statistics::new(files.len());
        let buf = SharedBuf::default();

        dispatch(&files, &config, 4, &stats, || buf.clone()).unwrap();

        assert_eq!(stats.get_files_scanned(), 8);
        assert_eq!(stats.get_files_failed(), 1);
        assert_eq!(stats.get_records(), 16);
        assert_eq!(stats.get_matches(), 8);

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text.matches("Searching in file").count(), 8);
        assert_eq!(text.matches("Related Data at line 1").count(), 8);
        assert!(text.contains("vanished.json"));
    }
}
