//! 소스 파일 수집 모듈
//!
//! 입력 경로를 재귀적으로 탐색하며 파일 내용을 읽어 [`SnippetStore`]를 채웁니다.

use colored::Colorize;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{Result, SnippetError};
use crate::snippet::SnippetStore;
use crate::stats::Statistics;

/// 모든 입력 경로를 순서대로 수집
///
/// 하나라도 실패하면 즉시 중단하고 에러를 반환합니다.
///
/// # Arguments
/// * `paths` - 파일 또는 폴더 경로 목록
/// * `config` - 실행 설정
/// * `stats` - 처리 통계
pub fn collect_paths(
    paths: &[PathBuf],
    config: &Config,
    stats: &mut Statistics,
) -> Result<SnippetStore> {
    let mut store = SnippetStore::new();
    for path in paths {
        collect_path(path, config, &mut store, stats)?;
    }
    Ok(store)
}

/// 단일 입력 경로 수집
///
/// 폴더는 파일 이름 순으로 탐색하므로, 기본 이름과 확장자가 같은 파일이 여러 개면
/// 나중에 방문한 파일이 남습니다.
pub fn collect_path(
    root: &Path,
    config: &Config,
    store: &mut SnippetStore,
    stats: &mut Statistics,
) -> Result<()> {
    let mut walker = WalkDir::new(root).sort_by_file_name();
    if let Some(max_depth) = config.max_depth {
        walker = walker.max_depth(max_depth);
    }

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !is_regular_file(&entry)? || !matches_pattern(&entry, config) {
            continue;
        }

        let path = entry.path();
        let content = std::fs::read(path).map_err(|e| read_error(path, e))?;

        let replaced = store.add_file(path, &content).is_some();
        stats.record_collected(content.len() as u64, replaced);

        if config.verbose {
            if replaced {
                println!("  {} {} (덮어씀)", "✓".yellow(), path.display());
            } else {
                println!("  {} {}", "✓".green(), path.display());
            }
        }
    }

    Ok(())
}

/// 일반 파일 또는 일반 파일을 가리키는 심볼릭 링크 여부
///
/// 폴더, FIFO, 소켓, 장치 파일은 건너뜁니다. 대상이 없는 심볼릭 링크는 읽기 실패입니다.
fn is_regular_file(entry: &DirEntry) -> Result<bool> {
    if entry.file_type().is_file() {
        return Ok(true);
    }
    if !entry.path_is_symlink() {
        return Ok(false);
    }
    entry
        .path()
        .metadata()
        .map(|m| m.is_file())
        .map_err(|e| read_error(entry.path(), e))
}

fn read_error(path: &Path, error: std::io::Error) -> SnippetError {
    SnippetError::Read {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}

fn matches_pattern(entry: &DirEntry, config: &Config) -> bool {
    config
        .pattern
        .matches(&entry.file_name().to_string_lossy())
}

fn walk_error(root: &Path, error: walkdir::Error) -> SnippetError {
    let path = error.path().unwrap_or(root).to_path_buf();
    let reason = match error.io_error() {
        Some(io) => io.to_string(),
        None => error.to_string(),
    };
    SnippetError::Walk { path, reason }
}
