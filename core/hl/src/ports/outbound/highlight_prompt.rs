//! ハイライト入力ダイアログ Outbound ポート
//!
//! usecase は stdin/stderr に直接触れず、このトレイト経由で入力を得る。

use crate::domain::{PromptDialog, PromptOutcome};
use common::error::Error;

/// 開いた PromptDialog を描画し、確定（submit）か破棄（dismiss）まで進める
///
/// 戻るまでにダイアログを閉じること。確定時だけ Submitted を返す。
pub trait HighlightPrompt: Send + Sync {
    fn ask(&self, dialog: &mut PromptDialog) -> Result<PromptOutcome, Error>;
}
