//! ノートへの追記（Append Engine）
//!
//! 存在すれば読み込んで `既存 + "\n" + 追記` で 1 回書き戻し、無ければ追記内容だけで作成する。
//! 失敗はこの境界でログに記録し、AppendOutcome::Failed として返す（Err にはしない）。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::NotePath;
use crate::ports::outbound::Vault;

/// 追記 1 回分の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// ノートを新規作成した
    Created,
    /// 既存ノートの末尾に追記した
    Appended,
    /// 失敗（理由はログにも残す）
    Failed(String),
}

impl AppendOutcome {
    #[allow(dead_code)]
    pub fn is_success(&self) -> bool {
        !matches!(self, AppendOutcome::Failed(_))
    }
}

pub struct AppendEngine {
    vault: Arc<dyn Vault>,
    logger: Arc<dyn Log>,
    /// 同一パスへの read-modify-write をプロセス内で直列化する
    locks: Mutex<HashMap<NotePath, Arc<Mutex<()>>>>,
}

impl AppendEngine {
    pub fn new(vault: Arc<dyn Vault>, logger: Arc<dyn Log>) -> Self {
        Self {
            vault,
            logger,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// `content` を `path` のノートへ追記する
    pub fn append(&self, path: &NotePath, content: &str) -> AppendOutcome {
        let lock = self.lock_for(path);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        match self.read_modify_write(path, content) {
            Ok(outcome) => outcome,
            Err(e) => {
                let _ = self.logger.log(
                    &LogRecord::new(LogLevel::Error, format!("Error handling file: {}", e))
                        .layer("usecase")
                        .kind("append")
                        .field("path", serde_json::json!(path.as_str())),
                );
                AppendOutcome::Failed(e.to_string())
            }
        }
    }

    fn lock_for(&self, path: &NotePath) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(locks.entry(path.clone()).or_default())
    }

    fn read_modify_write(&self, path: &NotePath, content: &str) -> Result<AppendOutcome, Error> {
        if self.vault.exists(path)? {
            let existing = self.vault.read(path)?;
            self.vault.modify(path, &format!("{}\n{}", existing, content))?;
            Ok(AppendOutcome::Appended)
        } else {
            self.vault.create(path, content)?;
            Ok(AppendOutcome::Created)
        }
    }
}
