//! 設定を Vault 内のプラグインデータ（data.json）に保存する

use std::path::PathBuf;
use std::sync::Arc;

use common::domain::VaultDir;
use common::error::Error;
use common::ports::outbound::FileSystem;
use serde_json::Value;

use crate::ports::outbound::SettingsRepository;

/// `.obsidian/plugins/<PLUGIN_ID>/data.json`
pub const PLUGIN_ID: &str = "book-highlights";
const DATA_FILENAME: &str = "data.json";

pub struct JsonSettingsRepository {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl JsonSettingsRepository {
    pub fn new(fs: Arc<dyn FileSystem>, vault: &VaultDir) -> Self {
        let path = vault
            .config_dir()
            .join("plugins")
            .join(PLUGIN_ID)
            .join(DATA_FILENAME);
        Self { fs, path }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SettingsRepository for JsonSettingsRepository {
    fn load_data(&self) -> Result<Option<Value>, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(None);
        }
        let s = self.fs.read_to_string(&self.path)?;
        let v: Value = serde_json::from_str(&s)
            .map_err(|e| Error::json(format!("parse {}: {}", self.path.display(), e)))?;
        Ok(Some(v))
    }

    fn save_data(&self, data: &Value) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let s = serde_json::to_string_pretty(data)?;
        self.fs.write(&self.path, &s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_load_without_file_is_none() {
        let dir = tempdir().unwrap();
        let repo = JsonSettingsRepository::new(Arc::new(StdFileSystem), &VaultDir::new(dir.path()));
        assert_eq!(repo.load_data().unwrap(), None);
    }

    #[test]
    fn test_save_creates_plugin_dir_and_loads_back() {
        let dir = tempdir().unwrap();
        let repo = JsonSettingsRepository::new(Arc::new(StdFileSystem), &VaultDir::new(dir.path()));
        repo.save_data(&json!({ "mySetting": "Highlights/" })).unwrap();

        assert!(dir
            .path()
            .join(".obsidian/plugins/book-highlights/data.json")
            .exists());
        assert_eq!(
            repo.load_data().unwrap(),
            Some(json!({ "mySetting": "Highlights/" }))
        );
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let dir = tempdir().unwrap();
        let repo = JsonSettingsRepository::new(Arc::new(StdFileSystem), &VaultDir::new(dir.path()));
        std::fs::create_dir_all(repo.path().parent().unwrap()).unwrap();
        std::fs::write(repo.path(), "{").unwrap();
        assert!(matches!(repo.load_data(), Err(Error::Json(_))));
    }
}
