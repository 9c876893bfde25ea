//! 에러 타입 정의 모듈
//!
//! snipgen에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// snipgen에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum SnippetError {
    /// 입력 경로 탐색 실패 (존재하지 않는 경로, 권한 없음 등)
    #[error("경로 탐색 실패 ({path}): {reason}")]
    Walk { path: PathBuf, reason: String },

    /// 소스 파일 읽기 실패
    #[error("파일을 읽을 수 없습니다 ({path}): {reason}")]
    Read { path: PathBuf, reason: String },

    /// 출력 폴더 생성 실패
    #[error("출력 폴더를 만들 수 없습니다 ({path}): {reason}")]
    CreateOutputDir { path: PathBuf, reason: String },

    /// 출력 파일 생성 실패
    #[error("출력 파일을 만들 수 없습니다 ({path}): {reason}")]
    CreateFile { path: PathBuf, reason: String },

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패 ({path}): {reason}")]
    Serialize { path: PathBuf, reason: String },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {reason}")]
    Write { path: PathBuf, reason: String },

    /// 사용자 설정 폴더를 찾을 수 없음
    #[error("사용자 설정 폴더를 찾을 수 없습니다. -o 옵션으로 출력 폴더를 지정하세요")]
    ConfigDirNotFound,

    /// 유효하지 않은 들여쓰기 문자열
    #[error("유효하지 않은 들여쓰기: {indent:?} (공백과 탭만 허용)")]
    InvalidIndent { indent: String },

    /// 유효하지 않은 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },
}

/// snipgen 결과 타입 별칭
pub type Result<T> = std::result::Result<T, SnippetError>;
