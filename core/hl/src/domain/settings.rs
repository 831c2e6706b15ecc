//! プラグイン設定（1 項目: ノートを置く Vault 内フォルダ）

use serde::Serialize;

/// 永続化 JSON 上のキー名（既存の data.json と互換）
pub const VAULT_FOLDER_KEY: &str = "mySetting";

/// vault_folder の既定値
pub const DEFAULT_VAULT_FOLDER: &str = "default";

/// 設定レコード
///
/// `vault_folder` はノートパスの先頭にそのまま連結される（末尾の `/` は利用者が付ける）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    #[serde(rename = "mySetting")]
    pub vault_folder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_folder: DEFAULT_VAULT_FOLDER.to_string(),
        }
    }
}

/// 設定パネルの 1 項目（表示用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingField {
    pub name: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        assert_eq!(Settings::default().vault_folder, "default");
    }

    #[test]
    fn test_serialize_uses_persisted_key() {
        let s = Settings {
            vault_folder: "Highlights/".to_string(),
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v, serde_json::json!({ "mySetting": "Highlights/" }));
    }
}
