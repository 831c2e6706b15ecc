//! 環境変数解決 Outbound ポート
//!
//! Vault ディレクトリ・アクティブ文書・ログファイルのパスを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::VaultDir;
use crate::error::Error;
use std::path::{Path, PathBuf};

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// Vault ディレクトリを環境変数 HL_VAULT から取得
    fn vault_dir_from_env(&self) -> Option<VaultDir>;

    /// アクティブ文書名を環境変数 HL_ACTIVE_DOCUMENT から取得
    fn active_document_from_env(&self) -> Option<String>;

    /// カレントディレクトリを返す（Vault 未指定時のフォールバック）
    fn current_dir(&self) -> Result<PathBuf, Error>;

    /// 構造化ログ（JSONL）の出力先
    ///
    /// 優先順位:
    /// 1. HL_LOG_FILE
    /// 2. $XDG_STATE_HOME/hl/hl.jsonl
    /// 3. $HOME/.local/state/hl/hl.jsonl
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error>;

    /// Vault ディレクトリを解決する（明示指定 > HL_VAULT > カレントディレクトリ）
    fn resolve_vault_dir(&self, explicit: Option<&Path>) -> Result<VaultDir, Error> {
        if let Some(p) = explicit {
            return Ok(VaultDir::new(p));
        }
        if let Some(v) = self.vault_dir_from_env() {
            return Ok(v);
        }
        self.current_dir().map(VaultDir::new)
    }
}
