//! 스니펫 데이터 모델 모듈
//!
//! 스니펫 레코드와 확장자별 그룹 저장소를 정의합니다.

use serde::{Serialize, Serializer};
use std::collections::btree_map::{self, BTreeMap};
use std::path::Path;

/// 스니펫 하나에 해당하는 레코드
///
/// 직렬화 시 필드 순서는 `prefix`, `description`, `body` 입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetRecord {
    /// 스니펫을 호출하는 트리거 텍스트 (파일의 기본 이름)
    pub prefix: String,
    /// 설명 (항상 빈 문자열)
    pub description: String,
    /// 원본 파일 내용. 직렬화할 때 줄 배열로 바뀝니다.
    #[serde(serialize_with = "serialize_body")]
    pub body: String,
}

impl SnippetRecord {
    /// 파일 기본 이름과 내용으로 레코드 생성
    pub fn from_content(name: &str, content: impl Into<String>) -> Self {
        Self {
            prefix: name.to_string(),
            description: String::new(),
            body: content.into(),
        }
    }

    /// 직렬화될 본문 줄 목록
    pub fn lines(&self) -> Vec<&str> {
        body_lines(&self.body).collect()
    }
}

/// 스니펫 이름 → 레코드 매핑 (확장자 하나당 하나)
pub type SnippetGroup = BTreeMap<String, SnippetRecord>;

/// 확장자 → 스니펫 그룹 매핑
///
/// 실행마다 빈 상태로 만들어지고, 수집 단계에서만 변경됩니다.
#[derive(Debug, Default)]
pub struct SnippetStore {
    groups: BTreeMap<String, SnippetGroup>,
}

impl SnippetStore {
    /// 빈 저장소 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 레코드 삽입
    ///
    /// 확장자 그룹이 없으면 먼저 만들고, 같은 이름이 있으면 덮어씁니다.
    /// 덮어쓴 경우 이전 레코드를 반환합니다.
    pub fn insert(
        &mut self,
        ext: &str,
        name: &str,
        record: SnippetRecord,
    ) -> Option<SnippetRecord> {
        self.groups
            .entry(ext.to_string())
            .or_default()
            .insert(name.to_string(), record)
    }

    /// 파일 경로와 내용으로 스니펫 추가
    ///
    /// 확장자와 기본 이름은 [`split_file_name`] 규칙을 따릅니다.
    pub fn add_file(&mut self, path: &Path, content: &[u8]) -> Option<SnippetRecord> {
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        let (name, ext) = split_file_name(&file_name);
        let record = SnippetRecord::from_content(name, String::from_utf8_lossy(content));
        self.insert(ext, name, record)
    }

    /// 확장자 그룹 조회
    pub fn get(&self, ext: &str) -> Option<&SnippetGroup> {
        self.groups.get(ext)
    }

    /// 확장자 순으로 그룹 순회
    pub fn groups(&self) -> btree_map::Iter<'_, String, SnippetGroup> {
        self.groups.iter()
    }

    /// 그룹(확장자) 수
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 전체 스니펫 수
    pub fn snippet_count(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }
}

/// 파일 이름을 (기본 이름, 확장자)로 분리
///
/// 확장자는 마지막 `.` 뒤의 텍스트입니다. `.`이 없으면 확장자는 빈 문자열입니다.
///
/// # Examples
/// ```
/// use snipgen::snippet::split_file_name;
///
/// assert_eq!(split_file_name("greet.go"), ("greet", "go"));
/// assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", "gz"));
/// assert_eq!(split_file_name("Makefile"), ("Makefile", ""));
/// assert_eq!(split_file_name(".bashrc"), ("", "bashrc"));
/// ```
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(dot) => (&file_name[..dot], &file_name[dot + 1..]),
        None => (file_name, ""),
    }
}

/// 본문을 줄 단위로 분리
///
/// 마지막 개행 문자 하나만 제거한 뒤 `\n` 기준으로 나눕니다.
/// 그보다 많은 빈 줄은 빈 문자열 항목으로 남습니다.
pub fn body_lines(content: &str) -> std::str::Split<'_, char> {
    content.strip_suffix('\n').unwrap_or(content).split('\n')
}

fn serialize_body<S>(body: &str, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(body_lines(body))
}
