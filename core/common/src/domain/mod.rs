//! ドメイン型（Newtype）
//!
//! PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use std::path::{Path, PathBuf};

/// Vault（ノートを格納するルートディレクトリ）のパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultDir(PathBuf);

impl VaultDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Vault 設定ディレクトリ（`.obsidian`）
    pub fn config_dir(&self) -> PathBuf {
        self.0.join(".obsidian")
    }
}

impl std::ops::Deref for VaultDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for VaultDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for VaultDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}
