//! 패턴 매칭 모듈
//!
//! glob 패턴을 사용한 소스 파일 이름 필터링을 담당합니다.

use glob::Pattern;

use crate::error::{Result, SnippetError};

/// 컴파일된 패턴 매처
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    pattern: Option<Pattern>,
}

impl PatternMatcher {
    /// 새 패턴 매처 생성
    ///
    /// # Arguments
    /// * `pattern` - 글로브 패턴 문자열 (None이면 모든 파일 매칭)
    ///
    /// # Examples
    /// ```
    /// use snipgen::pattern::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new(Some("*.rs".to_string())).unwrap();
    /// assert!(matcher.matches("main.rs"));
    /// assert!(!matcher.matches("main.go"));
    /// ```
    pub fn new(pattern: Option<String>) -> Result<Self> {
        let compiled = match pattern {
            Some(ref p) => Some(
                Pattern::new(p)
                    .map_err(|_| SnippetError::InvalidPattern { pattern: p.clone() })?,
            ),
            None => None,
        };

        Ok(Self { pattern: compiled })
    }

    /// 파일 이름이 패턴과 일치하는지 확인 (패턴이 없으면 항상 true)
    pub fn matches(&self, file_name: &str) -> bool {
        match &self.pattern {
            Some(p) => p.matches(file_name),
            None => true,
        }
    }

    /// 패턴 원문 반환
    pub fn as_str(&self) -> Option<&str> {
        self.pattern.as_ref().map(Pattern::as_str)
    }
}
