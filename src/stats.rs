//! 통계 및 유틸리티 모듈
//!
//! 처리 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

/// 처리 통계 구조체
///
/// 수집과 쓰기는 순차적으로 진행되므로 일반 카운터를 사용합니다.
#[derive(Debug, Default)]
pub struct Statistics {
    /// 수집한 파일 수
    pub files_collected: usize,
    /// 같은 이름/확장자로 덮어쓴 스니펫 수
    pub snippets_replaced: usize,
    /// 생성한 스니펫 파일 수
    pub files_written: usize,
    /// 읽은 총 바이트
    pub bytes_read: u64,
    /// 쓴 총 바이트
    pub bytes_written: u64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 수집한 파일 기록
    pub fn record_collected(&mut self, bytes: u64, replaced: bool) {
        self.files_collected += 1;
        self.bytes_read += bytes;
        if replaced {
            self.snippets_replaced += 1;
        }
    }

    /// 생성한 출력 파일 기록
    pub fn record_written(&mut self, bytes: u64) {
        self.files_written += 1;
        self.bytes_written += bytes;
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 처리 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 수집 파일:    {}",
            "📁".bright_cyan(),
            self.files_collected.to_string().green()
        );

        if self.snippets_replaced > 0 {
            println!(
                "  {} 덮어쓴 스니펫: {}",
                "⚠️".bright_yellow(),
                self.snippets_replaced.to_string().yellow()
            );
        }

        println!(
            "  {} 생성 파일:    {}",
            "📄".bright_green(),
            self.files_written.to_string().green()
        );
        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
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
/// use snipgen::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
