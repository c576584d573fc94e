//! 파일 스캔 모듈
//!
//! JSONL 파일 하나를 줄 단위로 읽어 각 레코드를 검색합니다.
//! 파일/라인 단위 에러는 출력만 하고 스캔을 계속합니다.

use colored::Colorize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, trace};

use crate::error::{Result, SearchError};
use crate::searcher::SearchConfig;

/// 파일 스캔 결과 요약 (통계용)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// 읽은 줄 수
    pub lines: usize,
    /// 파싱에 성공한 레코드 수
    pub records: usize,
    /// 일치한 레코드 수
    pub matches: usize,
    /// 파싱 실패 줄 수
    pub parse_errors: usize,
    /// 읽은 바이트 수
    pub bytes_read: u64,
    /// 파일 열기/읽기 실패 여부
    pub failed: bool,
}

/// 단일 파일 스캔
///
/// # Arguments
/// * `path` - 스캔할 파일 경로
/// * `config` - 검색 설정
/// * `sink` - 배너, 일치 결과, 에러 메시지 출력 대상
///
/// # Returns
/// 스캔 요약. 출력 대상에 쓰기 실패한 경우에만 에러를 반환합니다.
pub fn scan_file<W: Write>(path: &Path, config: &SearchConfig, sink: &mut W) -> Result<FileReport> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            let error = SearchError::FileOpenError {
                file: path.to_path_buf(),
                reason: e.to_string(),
            };
            writeln!(sink, "{}", error.to_string().red())?;
            return Ok(FileReport {
                failed: true,
                ..Default::default()
            });
        }
    };

    let name = display_name(path);
    writeln!(sink, "\n--- Searching in file: {} ---", name.bright_cyan())?;

    scan_reader(BufReader::new(file), &name, config, sink)
}

/// 이미 열린 리더에서 줄 단위 스캔
///
/// `name`은 에러 메시지에 쓰이는 파일 이름입니다.
pub fn scan_reader<R: BufRead, W: Write>(
    mut reader: R,
    name: &str,
    config: &SearchConfig,
    sink: &mut W,
) -> Result<FileReport> {
    let mut report = FileReport::default();
    let mut read_error = None;
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(n) => report.bytes_read += n as u64,
            Err(e) => {
                read_error = Some(e);
                break;
            }
        }

        line_number += 1;
        report.lines += 1;

        // 인코딩이 깨진 줄도 해당 줄의 파싱 에러로만 처리
        let record = match parse_record(trim_line_ending(&buf), name, line_number) {
            Ok(record) => record,
            Err(error) => {
                report.parse_errors += 1;
                writeln!(sink, "{}", error.to_string().red())?;
                continue;
            }
        };

        report.records += 1;
        if config.search_record(&record, line_number, sink)? {
            trace!(file = name, line = line_number, "record matched");
            report.matches += 1;
        }
    }

    if let Some(e) = read_error {
        let error = SearchError::ReadError {
            file: name.to_string(),
            reason: e.to_string(),
        };
        writeln!(sink, "{}", error.to_string().red())?;
        report.failed = true;
    }

    debug!(
        file = name,
        lines = report.lines,
        matches = report.matches,
        parse_errors = report.parse_errors,
        "file scanned"
    );

    Ok(report)
}

/// 한 줄을 JSON 객체로 파싱
fn parse_record(
    line: &[u8],
    name: &str,
    line_number: usize,
) -> Result<serde_json::Map<String, Value>> {
    let value: Value = serde_json::from_slice(line).map_err(|e| SearchError::ParseError {
        file: name.to_string(),
        line: line_number,
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SearchError::NotAnObject {
            file: name.to_string(),
            line: line_number,
        }),
    }
}

/// 줄 끝의 `\n` 또는 `\r\n` 제거
fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// 경로에서 파일 이름만 추출
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::SearchMode;
    use std::io::{self, Cursor, Read};

    fn run(input: &str, config: &SearchConfig) -> (FileReport, String) {
        let mut out = Vec::new();
        let report = scan_reader(Cursor::new(input), "test.json", config, &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_bad_line_does_not_stop_scan() {
        let config = SearchConfig::new("alice", SearchMode::Contains).unwrap();
        let input = "{\"user\": \"bob\"}\n{bad}\n{\"user\": \"alice\"}\n";

        let (report, text) = run(input, &config);

        assert_eq!(report.lines, 3);
        assert_eq!(report.records, 2);
        assert_eq!(report.parse_errors, 1);
        assert_eq!(report.matches, 1);
        assert!(text.contains("test.json, 2번째 줄"));
        assert!(text.contains("Related Data at line 3"));
    }

    #[test]
    fn test_non_object_line_is_parse_error() {
        let config = SearchConfig::new("x", SearchMode::Contains).unwrap();
        let (report, text) = run("[\"x\"]\nnull\n\n", &config);

        assert_eq!(report.parse_errors, 3);
        assert_eq!(report.records, 0);
        assert!(text.contains("JSON 객체가 아닙니다 (test.json, 1번째 줄)"));
        assert!(text.contains("JSON 객체가 아닙니다 (test.json, 2번째 줄)"));
        assert!(text.contains("JSON 파싱 실패 (test.json, 3번째 줄)"));
    }

    #[test]
    fn test_crlf_lines() {
        let config = SearchConfig::new("v", SearchMode::Exact).unwrap();
        let (report, _) = run("{\"k\": \"V\"}\r\n{\"k\": \"w\"}\r\n", &config);

        assert_eq!(report.parse_errors, 0);
        assert_eq!(report.matches, 1);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_scan() {
        let config = SearchConfig::new("needle", SearchMode::Contains).unwrap();
        let mut input = b"{\"k\":\"first\"}\n{\"k\":\"".to_vec();
        input.extend_from_slice(&[0xff, 0xfe]);
        input.extend_from_slice(b"\"}\n{\"k\":\"needle\"}\n");
        let mut out = Vec::new();

        let report = scan_reader(Cursor::new(input), "bin.json", &config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!report.failed);
        assert_eq!(report.lines, 3);
        assert_eq!(report.records, 2);
        assert_eq!(report.parse_errors, 1);
        assert_eq!(report.matches, 1);
        assert!(text.contains("JSON 파싱 실패 (bin.json, 2번째 줄)"));
        assert!(text.contains("Related Data at line 3"));
        assert!(!text.contains("파일 읽기 실패"));
    }

    struct FailingReader {
        inner: Cursor<Vec<u8>>,
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "disk fault"));
            }
            self.served = true;
            self.inner.read(buf)
        }
    }

    #[test]
    fn test_read_error_reported_once() {
        let config = SearchConfig::new("a", SearchMode::Contains).unwrap();
        let reader = FailingReader {
            inner: Cursor::new(b"{\"k\": \"a\"}\n".to_vec()),
            served: false,
        };
        let mut out = Vec::new();

        let report =
            scan_reader(BufReader::new(reader), "broken.json", &config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(report.failed);
        assert_eq!(report.matches, 1);
        assert_eq!(text.matches("파일 읽기 실패 (broken.json)").count(), 1);
        assert!(text.contains("disk fault"));
    }

    #[test]
    fn test_missing_file_reports_open_error() {
        let config = SearchConfig::new("a", SearchMode::Contains).unwrap();
        let mut out = Vec::new();

        let report = scan_file(Path::new("/nonexistent/dir/x.json"), &config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(report.failed);
        assert!(text.contains("파일을 열 수 없습니다"));
        assert!(text.contains("/nonexistent/dir/x.json"));
        assert!(!text.contains("Searching in file"));
    }
}
