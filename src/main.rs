//! jsearch - JSONL LOG SEARCHER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io;
use tracing_subscriber::EnvFilter;

use jsearch::{
    cli::Args,
    dispatcher::{collect_json_files, dispatch, validate_input},
    fields::print_searchable_fields,
    pattern::FileFilter,
    searcher::SearchConfig,
    stats::Statistics,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // 진단 로그 (RUST_LOG 설정 시에만 출력)
    // 이미 전역 구독자가 설치돼 있으면 그대로 사용
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    // 필드 목록 모드
    if args.list_fields {
        print_searchable_fields(&mut io::stdout().lock()).context("필드 목록 출력 실패")?;
        return Ok(());
    }

    // 시작 단계 검증: 여기서 실패하면 파일을 하나도 스캔하지 않음
    let input = args.input_dir()?.clone();
    validate_input(&input)?;
    let config = args.search_config()?;
    let threads = args.thread_count()?;
    let filter = FileFilter::new(args.pattern.clone())?;

    let json_files = collect_json_files(&input, &filter)?;

    if args.stats {
        print_header(&args, &config, json_files.len());
    }

    let stats = Statistics::new(json_files.len());
    dispatch(&json_files, &config, threads, &stats, io::stdout)?;

    if args.stats {
        stats.print_summary();
    }

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args, config: &SearchConfig, file_count: usize) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🔍 JSONL LOG SEARCHER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());

    if let Some(ref input) = args.input {
        println!("  {} 입력 폴더: {:?}", "📂".bright_cyan(), input);
    }
    println!("  {} 검색어: {}", "🔎".bright_green(), config.term());
    println!("  {} 모드: {}", "⚙️".bright_yellow(), config.mode());

    if let Some(field) = config.field() {
        println!("  {} 필드: {}", "🎯".bright_cyan(), field);
        println!(
            "  {} 접두사: {:?}",
            "🧭".bright_white(),
            config.prefixes()
        );
    }

    if let Some(ref pattern) = args.pattern {
        println!("  {} 패턴 필터: {}", "🔍".bright_magenta(), pattern);
    }

    println!("  {} 스레드: {}", "⚡".bright_yellow(), args.threads);
    println!(
        "  {} 발견된 파일 수: {}",
        "📋".bright_white(),
        file_count.to_string().bright_green()
    );
    println!("{}", "═".repeat(50).bright_blue());
}
