//! アクティブ文書を問い合わせる Outbound ポート

use crate::domain::DocumentName;
use common::error::Error;

/// ホストのワークスペース
pub trait Workspace: Send + Sync {
    /// いまアクティブな文書の表示名。無ければ Ok(None)。
    fn active_document(&self) -> Result<Option<DocumentName>, Error>;
}
