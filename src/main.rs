//! snipgen - SOURCE FILES TO EDITOR SNIPPETS
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use snipgen::{
    cli::Args,
    collector::collect_paths,
    config::Config,
    snippet::SnippetStore,
    stats::Statistics,
    writer::write_snippets,
};

fn main() {
    let args = Args::parse();

    // 에러는 한 줄로 stderr에 출력
    if let Err(err) = run(&args) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.to_config().context("설정 초기화 실패")?;

    print_header(args, &config);

    let mut stats = Statistics::new();
    let store = collect_paths(&args.paths, &config, &mut stats)?;

    if store.is_empty() {
        println!("{}", "⚠️ 변환할 파일이 없습니다.".yellow());
    } else {
        println!(
            "  {} 발견된 스니펫: {} ({}개 확장자)",
            "📋".bright_white(),
            store.snippet_count().to_string().bright_green(),
            store.len()
        );
    }

    if config.dry_run {
        print_dry_run(&store, &config);
        return Ok(());
    }

    println!("\n{}", "💾 스니펫 파일 저장 중...".bright_cyan());
    write_snippets(&store, &config, &mut stats)?;

    stats.print_summary();
    println!(
        "\n{} 저장 완료: {:?}\n",
        "✅".bright_green(),
        config.output_dir
    );

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args, config: &Config) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " ✂️ SOURCE FILES TO EDITOR SNIPPETS".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());

    for path in &args.paths {
        println!("  {} 입력: {:?}", "📂".bright_cyan(), path);
    }
    println!("  {} 출력 폴더: {:?}", "📄".bright_green(), config.output_dir);
    println!("  {} 들여쓰기: {:?}", "⚙️".bright_yellow(), config.indent);

    if let Some(pattern) = config.pattern.as_str() {
        println!("  {} 패턴 필터: {}", "🔍".bright_magenta(), pattern);
    }

    if let Some(depth) = config.max_depth {
        println!("  {} 최대 깊이: {}", "📏".bright_white(), depth);
    }

    if config.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 저장 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
}

/// 드라이런 출력
fn print_dry_run(store: &SnippetStore, config: &Config) {
    println!("\n{}", "📋 생성 예정 파일 목록:".bright_cyan());
    for (i, (ext, group)) in store.groups().enumerate() {
        println!(
            "  {}. {:?} ({}개 스니펫)",
            i + 1,
            config.output_file(ext),
            group.len()
        );
        if config.verbose {
            for name in group.keys() {
                println!("      {} {}", "•".dimmed(), name);
            }
        }
    }
    println!(
        "\n{} 총 {} 개의 파일이 생성될 예정입니다.",
        "ℹ️".bright_blue(),
        store.len().to_string().bright_green()
    );
}
