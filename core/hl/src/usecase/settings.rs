//! 設定の読み込み・保存（Settings Store）と設定パネル

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use serde_json::Value;

use crate::domain::settings::VAULT_FOLDER_KEY;
use crate::domain::{SettingField, Settings};
use crate::ports::outbound::SettingsRepository;

pub struct SettingsStore {
    repo: Arc<dyn SettingsRepository>,
    logger: Arc<dyn Log>,
}

impl SettingsStore {
    pub fn new(repo: Arc<dyn SettingsRepository>, logger: Arc<dyn Log>) -> Self {
        Self { repo, logger }
    }

    /// 保存済みデータを既定値の上にマージして返す
    ///
    /// 読めない・壊れている場合は警告をログに残して既定値を使う。
    pub fn load(&self) -> Settings {
        match self.repo.load_data() {
            Ok(data) => merge_over_default(data.as_ref()),
            Err(e) => {
                let _ = self.logger.log(
                    &LogRecord::new(LogLevel::Warn, format!("Failed to load settings: {}", e))
                        .layer("usecase")
                        .kind("settings"),
                );
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), Error> {
        let data = serde_json::to_value(settings)?;
        self.repo.save_data(&data)
    }
}

/// 既知のキーで型が合うものだけ採用する。未知のキーは無視する。
fn merge_over_default(data: Option<&Value>) -> Settings {
    let mut settings = Settings::default();
    if let Some(folder) = data
        .and_then(|v| v.get(VAULT_FOLDER_KEY))
        .and_then(Value::as_str)
    {
        settings.vault_folder = folder.to_string();
    }
    settings
}

/// 設定パネル（入力欄 1 つ。変更のたびに即保存する）
pub struct SettingsPanel<'a> {
    store: &'a SettingsStore,
    settings: &'a mut Settings,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(store: &'a SettingsStore, settings: &'a mut Settings) -> Self {
        Self { store, settings }
    }

    pub fn display(&self) -> SettingField {
        SettingField {
            name: "Vault Folder",
            description: "Select a folder in the vault",
            placeholder: "Enter folder path",
            value: self.settings.vault_folder.clone(),
        }
    }

    pub fn on_change(&mut self, value: &str) -> Result<(), Error> {
        self.settings.vault_folder = value.to_string();
        self.store.save(&*self.settings)?;
        let _ = self.store.logger.log(
            &LogRecord::new(LogLevel::Info, "settings saved")
                .layer("usecase")
                .kind("settings")
                .field(VAULT_FOLDER_KEY, serde_json::json!(value)),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_without_data_is_default() {
        assert_eq!(merge_over_default(None), Settings::default());
        assert_eq!(merge_over_default(Some(&Value::Null)), Settings::default());
    }

    #[test]
    fn test_merge_takes_known_key_and_ignores_unknown() {
        let data = json!({ "mySetting": "Highlights/", "theme": "dark" });
        let s = merge_over_default(Some(&data));
        assert_eq!(s.vault_folder, "Highlights/");
    }

    #[test]
    fn test_merge_wrong_type_falls_back() {
        let data = json!({ "mySetting": 42 });
        assert_eq!(merge_over_default(Some(&data)), Settings::default());
        assert_eq!(merge_over_default(Some(&json!(["x"]))), Settings::default());
    }
}
