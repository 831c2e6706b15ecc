//! 実ディレクトリの Vault に対して Runner を通しで動かすテスト

use std::path::Path;
use std::sync::Arc;

use common::adapter::{NoopLog, StdFileSystem};
use common::error::Error;
use tempfile::tempdir;

use super::fakes::StubEnvResolver;
use crate::cli::Config;
use crate::ports::inbound::UseCaseRunner;
use crate::wiring;

/// 標準アダプターで App を組み立て、Runner で run する（テスト用の入口）
fn run_app(config: Config) -> Result<i32, Error> {
    let app = wiring::wire_with(
        &config,
        Arc::new(StdFileSystem),
        Arc::new(StubEnvResolver),
        Arc::new(NoopLog),
    )?;
    let mut runner = crate::Runner { app };
    runner.run(config)
}

/// 対話ダイアログ（SIGINT ハンドラ登録）を避けるため既定で非対話にする。--text があればそちらが優先。
fn base_config(vault: &Path) -> Config {
    Config {
        vault_dir: Some(vault.to_path_buf()),
        non_interactive: true,
        ..Default::default()
    }
}

#[test]
fn test_run_app_with_help() {
    let dir = tempdir().unwrap();
    let config = Config {
        help: true,
        ..base_config(dir.path())
    };
    assert_eq!(run_app(config).unwrap(), 0);
}

#[test]
fn test_settings_then_capture_twice() {
    let dir = tempdir().unwrap();

    let settings = Config {
        command: Some("settings".to_string()),
        folder: Some("Highlights/".to_string()),
        ..base_config(dir.path())
    };
    assert_eq!(run_app(settings).unwrap(), 0);
    let data = std::fs::read_to_string(
        dir.path().join(".obsidian/plugins/book-highlights/data.json"),
    )
    .unwrap();
    assert!(data.contains("\"mySetting\": \"Highlights/\""));

    for text in ["first", "second"] {
        let capture = Config {
            active: Some("Books/Chapter 1.md".to_string()),
            text: Some(text.to_string()),
            ..base_config(dir.path())
        };
        assert_eq!(run_app(capture).unwrap(), 0);
    }

    let note = std::fs::read_to_string(dir.path().join("Highlights/Chapter 1.md")).unwrap();
    assert_eq!(note, "first\nsecond");
}

#[test]
fn test_non_interactive_capture_writes_nothing() {
    let dir = tempdir().unwrap();
    let config = Config {
        active: Some("Chapter 1.md".to_string()),
        non_interactive: true,
        ..base_config(dir.path())
    };
    assert_eq!(run_app(config).unwrap(), 0);
    assert!(!dir.path().join("defaultChapter 1.md").exists());
}

#[test]
fn test_capture_failure_exits_with_io_code() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("defaultChapter 1.md")).unwrap();
    let config = Config {
        active: Some("Chapter 1.md".to_string()),
        text: Some("lost".to_string()),
        ..base_config(dir.path())
    };
    assert_eq!(run_app(config).unwrap(), 74);
}

#[test]
fn test_unknown_command_is_usage_error() {
    let dir = tempdir().unwrap();
    let config = Config {
        command: Some("sync".to_string()),
        ..base_config(dir.path())
    };
    let err = run_app(config).unwrap_err();
    assert!(err.is_usage());
    assert!(err.to_string().contains("'sync' is not implemented"));
}

#[test]
fn test_missing_vault_is_env_error() {
    let err = run_app(Config::default()).unwrap_err();
    assert_eq!(err.exit_code(), 78);
}
