//! snipgen - SOURCE FILES TO EDITOR SNIPPETS
//!
//! 소스 코드 파일들을 확장자별 VS Code 사용자 스니펫 JSON 파일로 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 📂 **재귀 탐색**: 파일과 폴더를 섞어서 여러 개 지정 가능
//! - 🗂️ **확장자별 그룹화**: `greet.go`, `greet.py` → `go.json`, `py.json`
//! - ✍️ **들여쓰기 설정**: `-i "\t"` 처럼 원하는 들여쓰기로 출력
//! - 🔍 **패턴 필터링**: glob 형식의 파일 이름 필터링
//! - 🧪 **드라이런 모드**: 실제 쓰기 없이 생성될 파일 목록 미리 확인
//! - 🎨 **컬러 출력**: 가독성 높은 컬러 터미널 출력
//!
//! # 출력 형식
//!
//! ```json
//! {
//!     "greet": {
//!         "prefix": "greet",
//!         "description": "",
//!         "body": ["fmt.Println(\"hi\")"]
//!     }
//! }
//! ```
//!
//! # 예제
//!
//! ```bash
//! # 기본 출력 폴더(VS Code 사용자 스니펫 폴더)에 생성
//! snipgen ./snips
//!
//! # 출력 폴더와 탭 들여쓰기 지정
//! snipgen ./snips -o ./out -i "\t"
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod pattern;
pub mod snippet;
pub mod stats;
pub mod writer;

// Re-exports for convenient access
pub use cli::Args;
pub use collector::{collect_path, collect_paths};
pub use config::Config;
pub use error::{Result, SnippetError};
pub use pattern::PatternMatcher;
pub use snippet::{SnippetGroup, SnippetRecord, SnippetStore};
pub use stats::Statistics;
pub use writer::{render_group, write_snippets};
