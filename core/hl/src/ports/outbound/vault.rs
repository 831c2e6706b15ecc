//! Vault（ノートの名前空間）Outbound ポート
//!
//! パスは Vault ルートからの相対。存在確認と読み書きは別呼び出しで、原子性はない。

use crate::domain::NotePath;
use common::error::Error;

pub trait Vault: Send + Sync {
    fn exists(&self, path: &NotePath) -> Result<bool, Error>;
    fn read(&self, path: &NotePath) -> Result<String, Error>;
    /// 既存ファイルの内容を丸ごと置き換える
    fn modify(&self, path: &NotePath, contents: &str) -> Result<(), Error>;
    /// 新規作成。既に存在する場合は Err。
    fn create(&self, path: &NotePath, contents: &str) -> Result<(), Error>;
}
