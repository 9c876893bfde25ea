//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{default_output_dir, parse_indent, Config, DEFAULT_INDENT};
use crate::error::Result;
use crate::pattern::PatternMatcher;

/// snipgen CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "snipgen",
    author = "YourName <your@email.com>",
    version,
    about = "SOURCE FILES TO EDITOR SNIPPETS - 소스 파일들을 확장자별 VS Code 스니펫 JSON으로 변환하는 CLI 도구",
    long_about = r#"
SOURCE FILES TO EDITOR SNIPPETS
===============================

지정된 파일과 폴더를 탐색하여 확장자별로 묶은 뒤
<확장자>.json 형식의 VS Code 사용자 스니펫 파일을 생성합니다.
스니펫 이름과 prefix는 파일의 기본 이름(확장자 제외)입니다.

예제:
  snipgen ./snips
  snipgen ./snips -o ./out -i "\t"
  snipgen ./snips ./more/greet.go --verbose
  snipgen ./snips --pattern "http_*" --dry-run
"#
)]
pub struct Args {
    /// 스니펫으로 변환할 파일 또는 폴더 경로
    #[arg(value_name = "FILE|DIR", required = true)]
    pub paths: Vec<PathBuf>,

    /// JSON 들여쓰기 단위 (\t, \s 이스케이프 지원, 공백과 탭 외의 문자는 거부)
    #[arg(short, long, default_value = DEFAULT_INDENT)]
    pub indent: String,

    /// VS Code 스니펫 폴더 경로 (기본값: <사용자 설정 폴더>/Code/User/snippets)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 파일 이름 패턴 필터 (glob 형식, 예: "http_*", "*.rs")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// 최대 폴더 탐색 깊이
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 파일 생성 없이 생성될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// 인자로부터 실행 설정 생성
    ///
    /// 들여쓰기와 패턴을 검증하고, 출력 폴더가 없으면 기본 경로를 사용합니다.
    pub fn to_config(&self) -> Result<Config> {
        let output_dir = match &self.output {
            Some(dir) => dir.clone(),
            None => default_output_dir()?,
        };

        Ok(Config::new(output_dir)
            .with_indent(parse_indent(&self.indent)?)
            .with_pattern(PatternMatcher::new(self.pattern.clone())?)
            .with_max_depth(self.max_depth)
            .with_verbose(self.verbose)
            .with_dry_run(self.dry_run))
    }
}
