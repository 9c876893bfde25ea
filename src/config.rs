//! 실행 설정 모듈
//!
//! 명령줄 인자로부터 한 번 만들어져 수집/쓰기 단계에 전달되는 설정을 정의합니다.

use std::path::{Path, PathBuf};

use crate::error::{Result, SnippetError};
use crate::pattern::PatternMatcher;

/// 기본 들여쓰기 (공백 4칸)
pub const DEFAULT_INDENT: &str = "    ";

/// 사용자 설정 폴더 아래 VS Code 사용자 스니펫 폴더 경로
pub const VSCODE_SNIPPETS_DIR: &str = "Code/User/snippets";

/// snipgen 실행 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON 출력 들여쓰기 단위
    pub indent: String,
    /// 스니펫 파일이 생성될 폴더
    pub output_dir: PathBuf,
    /// 파일 이름 필터
    pub pattern: PatternMatcher,
    /// 최대 폴더 탐색 깊이
    pub max_depth: Option<usize>,
    /// 상세 출력 여부
    pub verbose: bool,
    /// 실제 파일을 쓰지 않고 결과만 표시
    pub dry_run: bool,
}

impl Config {
    /// 기본 설정 생성
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            output_dir: output_dir.into(),
            pattern: PatternMatcher::default(),
            max_depth: None,
            verbose: false,
            dry_run: false,
        }
    }

    /// 들여쓰기 설정
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// 파일 이름 필터 설정
    pub fn with_pattern(mut self, pattern: PatternMatcher) -> Self {
        self.pattern = pattern;
        self
    }

    /// 최대 탐색 깊이 설정
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 상세 출력 설정
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 드라이런 설정
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 확장자에 해당하는 출력 파일 경로
    pub fn output_file(&self, ext: &str) -> PathBuf {
        output_file_in(&self.output_dir, ext)
    }
}

/// `<dir>/<ext>.json` 경로 생성
pub fn output_file_in(dir: &Path, ext: &str) -> PathBuf {
    dir.join(format!("{ext}.json"))
}

/// 기본 출력 폴더 (사용자 설정 폴더 + `Code/User/snippets`)
///
/// 설정 폴더 위치는 <https://code.visualstudio.com/docs/getstarted/settings#_settings-file-locations> 참고.
pub fn default_output_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(VSCODE_SNIPPETS_DIR))
        .ok_or(SnippetError::ConfigDirNotFound)
}

/// 들여쓰기 인자 해석
///
/// 셸에서 입력하기 어려운 문자를 위해 `\t`(탭), `\s`(공백) 이스케이프를 지원합니다.
/// 결과는 공백과 탭으로만 이루어져야 합니다.
///
/// # Examples
/// ```
/// use snipgen::config::parse_indent;
///
/// assert_eq!(parse_indent("\\t").unwrap(), "\t");
/// assert_eq!(parse_indent("  ").unwrap(), "  ");
/// assert!(parse_indent("--").is_err());
/// ```
pub fn parse_indent(raw: &str) -> Result<String> {
    let mut indent = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            indent.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => indent.push('\t'),
            Some('s') => indent.push(' '),
            _ => {
                return Err(SnippetError::InvalidIndent {
                    indent: raw.to_string(),
                })
            }
        }
    }

    if indent.chars().all(|c| c == ' ' || c == '\t') {
        Ok(indent)
    } else {
        Err(SnippetError::InvalidIndent {
            indent: raw.to_string(),
        })
    }
}
