//! 통계 및 유틸리티 모듈
//!
//! 워커들이 공유하는 검색 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::scanner::FileReport;

/// 검색 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 총 파일 수
    pub total_files: usize,
    /// 스캔 완료 파일 수
    pub files_scanned: AtomicUsize,
    /// 열기/읽기 실패 파일 수
    pub files_failed: AtomicUsize,
    /// 파싱된 레코드 수
    pub records: AtomicUsize,
    /// 일치 레코드 수
    pub matches: AtomicUsize,
    /// 파싱 실패 줄 수
    pub parse_errors: AtomicUsize,
    /// 읽은 총 바이트
    pub total_bytes_read: AtomicU64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 파일 하나의 스캔 결과 반영
    pub fn record_file(&self, report: &FileReport) {
        if report.failed {
            self.files_failed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.files_scanned.fetch_add(1, Ordering::Relaxed);
        }
        self.records.fetch_add(report.records, Ordering::Relaxed);
        self.matches.fetch_add(report.matches, Ordering::Relaxed);
        self.parse_errors
            .fetch_add(report.parse_errors, Ordering::Relaxed);
        self.total_bytes_read
            .fetch_add(report.bytes_read, Ordering::Relaxed);
    }

    /// 실패 파일 카운트 증가
    pub fn increment_failed(&self) {
        self.files_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_files_scanned(&self) -> usize {
        self.files_scanned.load(Ordering::Relaxed)
    }

    pub fn get_files_failed(&self) -> usize {
        self.files_failed.load(Ordering::Relaxed)
    }

    pub fn get_records(&self) -> usize {
        self.records.load(Ordering::Relaxed)
    }

    pub fn get_matches(&self) -> usize {
        self.matches.load(Ordering::Relaxed)
    }

    pub fn get_parse_errors(&self) -> usize {
        self.parse_errors.load(Ordering::Relaxed)
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 검색 통계 요약 출력
    pub fn print_summary(&self) {
        let failed = self.get_files_failed();
        let parse_errors = self.get_parse_errors();

        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 검색 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 전체 파일:    {}",
            "📁".bright_cyan(),
            self.total_files
        );
        println!(
            "  {} 스캔 완료:    {}",
            "✅".bright_green(),
            self.get_files_scanned().to_string().green()
        );

        if failed > 0 {
            println!(
                "  {} 실패 파일:    {}",
                "❌".bright_red(),
                failed.to_string().red()
            );
        }

        println!(
            "  {} 레코드:       {}",
            "📋".bright_white(),
            self.get_records()
        );
        println!(
            "  {} 일치:         {}",
            "🔍".bright_magenta(),
            self.get_matches().to_string().bright_green()
        );

        if parse_errors > 0 {
            println!(
                "  {} 파싱 실패:    {}",
                "⚠️".bright_yellow(),
                parse_errors.to_string().yellow()
            );
        }

        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.total_bytes_read.load(Ordering::Relaxed))
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use jsearch::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", size, UNITS[unit])
}

/// 검색 소요 시간 표시 (1초 미만은 ms, 1분 이상은 분/초)
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs == 0 {
        format!("{}ms", duration.subsec_millis())
    } else if secs < 60 {
        format!("{:.2}초", duration.as_secs_f64())
    } else {
        format!("{}분 {}초", secs / 60, secs % 60)
    }
}
