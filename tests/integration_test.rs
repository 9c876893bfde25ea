//! 통합 테스트 모듈
//!
//! snipgen의 전체 기능을 테스트합니다.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 테스트용 소스 파일 생성 헬퍼
fn create_source_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 출력 JSON 파일 읽기
fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// 테스트용 스니펫 폴더 생성 (`snips/greet.go`, `snips/greet.py`)
fn setup_snips_directory() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let snips = temp_dir.path().join("snips");
    fs::create_dir(&snips).unwrap();

    create_source_file(&snips, "greet.go", "fmt.Println(\"hi\")\n");
    create_source_file(&snips, "greet.py", "print('hi')\n");

    temp_dir
}

mod pipeline_tests {
    use super::*;
    use snipgen::{collect_paths, write_snippets, Config, Statistics};

    fn convert(paths: &[PathBuf], config: &Config) -> Vec<PathBuf> {
        let mut stats = Statistics::new();
        let store = collect_paths(paths, config, &mut stats).unwrap();
        write_snippets(&store, config, &mut stats).unwrap()
    }

    #[test]
    fn test_end_to_end_go_and_python() {
        let temp_dir = setup_snips_directory();
        let out = temp_dir.path().join("out");
        let config = Config::new(&out);

        convert(&[temp_dir.path().join("snips")], &config);

        assert_eq!(
            read_json(&out.join("go.json")),
            json!({"greet": {"prefix": "greet", "description": "", "body": ["fmt.Println(\"hi\")"]}})
        );
        assert_eq!(
            read_json(&out.join("py.json")),
            json!({"greet": {"prefix": "greet", "description": "", "body": ["print('hi')"]}})
        );
    }

    #[test]
    fn test_one_entry_per_base_name() {
        let temp_dir = TempDir::new().unwrap();
        create_source_file(temp_dir.path(), "alpha.rs", "a\n");
        create_source_file(temp_dir.path(), "beta.rs", "b\n");
        create_source_file(temp_dir.path(), "gamma.rs", "c\n");
        let out = temp_dir.path().join("out");

        convert(&[temp_dir.path().to_path_buf()], &Config::new(&out));

        let value = read_json(&out.join("rs.json"));
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["beta"]["prefix"], "beta");
    }

    #[test]
    fn test_last_write_wins_across_inputs() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        create_source_file(first.path(), "dup.js", "first()\n");
        create_source_file(second.path(), "dup.js", "second()\n");
        let out = first.path().join("out");

        convert(
            &[first.path().join("dup.js"), second.path().join("dup.js")],
            &Config::new(&out),
        );

        let value = read_json(&out.join("js.json"));
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value["dup"]["body"], json!(["second()"]));
    }

    #[test]
    fn test_body_trailing_newlines() {
        let temp_dir = TempDir::new().unwrap();
        create_source_file(temp_dir.path(), "one.txt", "a\nb\nc\n");
        create_source_file(temp_dir.path(), "none.txt", "a\nb\nc");
        create_source_file(temp_dir.path(), "two.txt", "a\nb\nc\n\n");
        let out = temp_dir.path().join("out");

        convert(&[temp_dir.path().to_path_buf()], &Config::new(&out));

        let value = read_json(&out.join("txt.json"));
        assert_eq!(value["one"]["body"], json!(["a", "b", "c"]));
        assert_eq!(value["none"]["body"], json!(["a", "b", "c"]));
        assert_eq!(value["two"]["body"], json!(["a", "b", "c", ""]));
    }

    #[test]
    fn test_idempotent_output() {
        let temp_dir = setup_snips_directory();
        let snips = temp_dir.path().join("snips");
        create_source_file(&snips, "bye.go", "fmt.Println(\"bye\")\n");
        let out = temp_dir.path().join("out");
        let config = Config::new(&out);

        convert(&[snips.clone()], &config);
        let first = fs::read(out.join("go.json")).unwrap();

        convert(&[snips], &config);
        let second = fs::read(out.join("go.json")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_tab_indent() {
        let temp_dir = setup_snips_directory();
        let spaced_out = temp_dir.path().join("spaced");
        let tabbed_out = temp_dir.path().join("tabbed");
        let snips = temp_dir.path().join("snips");

        convert(&[snips.clone()], &Config::new(&spaced_out));
        convert(&[snips], &Config::new(&tabbed_out).with_indent("\t"));

        let spaced = fs::read_to_string(spaced_out.join("py.json")).unwrap();
        let tabbed = fs::read_to_string(tabbed_out.join("py.json")).unwrap();

        assert!(spaced.contains("\n    \"greet\""));
        assert!(tabbed.contains("\n\t\"greet\""));
        assert!(!tabbed.contains("    "));
        assert_eq!(tabbed.replace('\t', "    "), spaced);
    }

    #[test]
    fn test_extensionless_file_goes_to_dot_json() {
        let temp_dir = TempDir::new().unwrap();
        create_source_file(temp_dir.path(), "Makefile", "all:\n\tcargo build\n");
        let out = temp_dir.path().join("out");

        let written = convert(&[temp_dir.path().join("Makefile")], &Config::new(&out));

        assert_eq!(written, vec![out.join(".json")]);
        assert_eq!(
            read_json(&out.join(".json"))["Makefile"]["body"],
            json!(["all:", "\tcargo build"])
        );
    }

    #[test]
    fn test_existing_output_directory() {
        let temp_dir = setup_snips_directory();
        let out = temp_dir.path().join("out");
        fs::create_dir(&out).unwrap();
        create_source_file(&out, "unrelated.json", "{}");

        convert(&[temp_dir.path().join("snips")], &Config::new(&out));

        assert!(out.join("go.json").is_file());
        assert_eq!(fs::read_to_string(out.join("unrelated.json")).unwrap(), "{}");
    }
}

mod error_tests {
    use super::*;
    use snipgen::{collect_paths, write_snippets, Config, SnippetError, Statistics};

    #[test]
    fn test_write_failure_keeps_earlier_files() {
        let temp_dir = setup_snips_directory();
        let out = temp_dir.path().join("out");
        // py.json 자리를 폴더가 차지하면 해당 파일 생성이 실패
        fs::create_dir_all(out.join("py.json")).unwrap();

        let config = Config::new(&out);
        let mut stats = Statistics::new();
        let store = collect_paths(&[temp_dir.path().join("snips")], &config, &mut stats).unwrap();
        let err = write_snippets(&store, &config, &mut stats).unwrap_err();

        match err {
            SnippetError::CreateFile { path, .. } => assert_eq!(path, out.join("py.json")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            read_json(&out.join("go.json"))["greet"]["body"],
            json!(["fmt.Println(\"hi\")"])
        );
        assert_eq!(stats.files_written, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_aborts_collection() {
        use std::os::unix::fs::symlink;

        let temp_dir = setup_snips_directory();
        let snips = temp_dir.path().join("snips");
        let dangling = snips.join("stale.go");
        symlink(temp_dir.path().join("deleted.go"), &dangling).unwrap();

        let config = Config::new(temp_dir.path().join("out"));
        let err = collect_paths(&[snips], &config, &mut Statistics::new()).unwrap_err();

        match err {
            SnippetError::Read { ref path, .. } => assert_eq!(path, &dangling),
            ref other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("stale.go"));
    }

    #[test]
    fn test_missing_input_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let config = Config::new(temp_dir.path().join("out"));

        let err = collect_paths(&[missing.clone()], &config, &mut Statistics::new()).unwrap_err();

        assert!(matches!(err, SnippetError::Walk { .. }));
        assert!(err.to_string().contains(&missing.display().to_string()));
    }

    #[test]
    fn test_error_display() {
        let error = SnippetError::Read {
            path: PathBuf::from("snips/greet.go"),
            reason: "permission denied".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("snips/greet.go"));
        assert!(msg.contains("permission denied"));
        assert!(!msg.contains('\n'));
    }
}

mod binary_tests {
    use super::*;
    use std::process::Command;

    fn snipgen() -> Command {
        Command::new(env!("CARGO_BIN_EXE_snipgen"))
    }

    #[test]
    fn test_cli_success() {
        let temp_dir = setup_snips_directory();
        let out = temp_dir.path().join("deep").join("out");

        let output = snipgen()
            .arg("-o")
            .arg(&out)
            .arg(temp_dir.path().join("snips"))
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(out.join("go.json").is_file());
        assert!(out.join("py.json").is_file());
    }

    #[test]
    fn test_cli_tab_indent_escape() {
        let temp_dir = setup_snips_directory();
        let out = temp_dir.path().join("out");

        let output = snipgen()
            .args(["-i", "\\t", "-o"])
            .arg(&out)
            .arg(temp_dir.path().join("snips"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let text = fs::read_to_string(out.join("go.json")).unwrap();
        assert!(text.starts_with("{\n\t\"greet\""));
    }

    #[test]
    fn test_cli_missing_input_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing-dir");

        let output = snipgen()
            .arg("-o")
            .arg(temp_dir.path().join("out"))
            .arg(&missing)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(stderr.trim_end().lines().count(), 1);
        assert!(stderr.contains("missing-dir"));
        assert!(!temp_dir.path().join("out").exists());
    }

    #[test]
    fn test_cli_dry_run_writes_nothing() {
        let temp_dir = setup_snips_directory();
        let out = temp_dir.path().join("out");

        let output = snipgen()
            .arg("--dry-run")
            .arg("-o")
            .arg(&out)
            .arg(temp_dir.path().join("snips"))
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(!out.exists());
    }

    #[test]
    fn test_cli_requires_paths() {
        let output = snipgen().output().unwrap();
        assert!(!output.status.success());
    }
}
