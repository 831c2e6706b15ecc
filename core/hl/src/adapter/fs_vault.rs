//! Vault ディレクトリ上の Vault 実装
//!
//! NotePath を Vault ルートに join する前に検証し、ルートの外へは出さない。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::domain::VaultDir;
use common::error::Error;
use common::ports::outbound::FileSystem;

use crate::domain::NotePath;
use crate::ports::outbound::Vault;

pub struct FsVault {
    fs: Arc<dyn FileSystem>,
    root: VaultDir,
}

impl FsVault {
    pub fn new(fs: Arc<dyn FileSystem>, root: VaultDir) -> Self {
        Self { fs, root }
    }

    /// 先頭の `/` は取り除き、空・`.`・`..` の成分は拒否する
    fn resolve(&self, path: &NotePath) -> Result<PathBuf, Error> {
        let relative = path.as_str().trim_start_matches('/');
        let mut resolved = self.root.to_path_buf();
        for component in relative.split('/') {
            if component.is_empty() || component == "." || component == ".." {
                return Err(Error::invalid_argument(format!(
                    "Invalid note path '{}': must stay inside the vault",
                    path
                )));
            }
            resolved.push(component);
        }
        Ok(resolved)
    }

    fn ensure_parent(&self, path: &Path) -> Result<(), Error> {
        match path.parent() {
            Some(parent) if !self.fs.exists(parent) => self.fs.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

impl Vault for FsVault {
    fn exists(&self, path: &NotePath) -> Result<bool, Error> {
        let p = self.resolve(path)?;
        Ok(self.fs.exists(&p))
    }

    fn read(&self, path: &NotePath) -> Result<String, Error> {
        let p = self.resolve(path)?;
        self.fs.read_to_string(&p)
    }

    fn modify(&self, path: &NotePath, contents: &str) -> Result<(), Error> {
        let p = self.resolve(path)?;
        if !self.fs.metadata(&p)?.is_file() {
            return Err(Error::io_msg(format!("'{}' is not a file", path)));
        }
        self.fs.write(&p, contents)
    }

    fn create(&self, path: &NotePath, contents: &str) -> Result<(), Error> {
        let p = self.resolve(path)?;
        self.ensure_parent(&p)?;
        self.fs.create_new(&p, contents)
    }
}
