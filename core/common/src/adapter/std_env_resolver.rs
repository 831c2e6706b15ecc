//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::VaultDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn vault_dir_from_env(&self) -> Option<VaultDir> {
        non_empty_var("HL_VAULT").map(PathBuf::from).map(VaultDir::new)
    }

    fn active_document_from_env(&self) -> Option<String> {
        non_empty_var("HL_ACTIVE_DOCUMENT")
    }

    fn current_dir(&self) -> Result<PathBuf, Error> {
        env::current_dir().map_err(|e| Error::env(format!("Failed to get current directory: {}", e)))
    }

    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        if let Some(p) = non_empty_var("HL_LOG_FILE") {
            return Ok(PathBuf::from(p));
        }

        let state_base = non_empty_var("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty_var("HOME").map(|h| PathBuf::from(h).join(".local/state")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(state_base.join("hl").join("hl.jsonl"))
    }
}
