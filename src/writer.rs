//! 스니펫 파일 쓰기 모듈
//!
//! 확장자별 스니펫 그룹을 `<ext>.json` 파일로 저장합니다.

use colored::Colorize;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, SnippetError};
use crate::snippet::{SnippetGroup, SnippetStore};
use crate::stats::Statistics;

/// 저장소의 모든 그룹을 출력 폴더에 저장
///
/// 출력 폴더가 없으면 상위 폴더까지 생성합니다. 기존 파일은 경고 없이 덮어씁니다.
/// 중간에 실패하면 즉시 중단하며, 이미 저장된 파일은 그대로 남습니다.
///
/// # Returns
/// 생성된 파일 경로 목록
pub fn write_snippets(
    store: &SnippetStore,
    config: &Config,
    stats: &mut Statistics,
) -> Result<Vec<PathBuf>> {
    ensure_output_dir(&config.output_dir)?;

    let mut written = Vec::with_capacity(store.len());
    for (ext, group) in store.groups() {
        let path = config.output_file(ext);
        let bytes = write_group(&path, group, &config.indent)?;
        stats.record_written(bytes);

        if config.verbose {
            println!(
                "  {} {:?} ({}개 스니펫)",
                "💾".bright_cyan(),
                path,
                group.len()
            );
        }
        written.push(path);
    }

    Ok(written)
}

/// 출력 폴더 생성 (이미 있으면 아무것도 하지 않음)
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| SnippetError::CreateOutputDir {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 스니펫 그룹을 들여쓰기된 JSON으로 직렬화
///
/// 결과는 개행 문자로 끝납니다.
pub fn render_group(group: &SnippetGroup, indent: &str) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    group.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

/// 그룹 하나를 파일로 저장하고 쓴 바이트 수를 반환
fn write_group(path: &Path, group: &SnippetGroup, indent: &str) -> Result<u64> {
    let content = render_group(group, indent).map_err(|e| SnippetError::Serialize {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let file = File::create(path).map_err(|e| SnippetError::CreateFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(&content)
        .and_then(|_| writer.flush())
        .map_err(|e| SnippetError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(content.len() as u64)
}
