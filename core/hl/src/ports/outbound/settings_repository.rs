//! 設定の永続化 Outbound ポート
//!
//! 中身は不透明な JSON。既定値とのマージは SettingsStore が行う。

use common::error::Error;
use serde_json::Value;

pub trait SettingsRepository: Send + Sync {
    /// 保存済みデータ。未保存なら Ok(None)。
    fn load_data(&self) -> Result<Option<Value>, Error>;
    fn save_data(&self, data: &Value) -> Result<(), Error>;
}
