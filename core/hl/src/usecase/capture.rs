//! ハイライト記録のユースケース（Capture Trigger）
//!
//! アクティブ文書名を解決 → 通知 → ダイアログ → 確定なら `<folder><name>.md` へ追記 → 成功なら通知。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{DocumentName, NotePath, PromptDialog, PromptOutcome, Settings};
use crate::ports::outbound::{HighlightPrompt, Notifier, Workspace};
use crate::usecase::append::{AppendEngine, AppendOutcome};

/// 追記成功時の通知
pub const SAVED_NOTICE: &str = "✅";

/// capture 1 回分の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Saved { path: NotePath },
    /// ダイアログが確定されずに閉じられた
    Cancelled,
    Failed { path: NotePath, reason: String },
}

pub struct CaptureUseCase {
    workspace: Arc<dyn Workspace>,
    notifier: Arc<dyn Notifier>,
    prompt: Arc<dyn HighlightPrompt>,
    append: Arc<AppendEngine>,
    logger: Arc<dyn Log>,
}

impl CaptureUseCase {
    pub fn new(
        workspace: Arc<dyn Workspace>,
        notifier: Arc<dyn Notifier>,
        prompt: Arc<dyn HighlightPrompt>,
        append: Arc<AppendEngine>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            workspace,
            notifier,
            prompt,
            append,
            logger,
        }
    }

    /// capture を実行する
    ///
    /// Err になるのは入力ダイアログ自体が壊れた場合だけ。追記の失敗は CaptureOutcome::Failed で返す。
    pub fn run(&self, settings: &Settings) -> Result<CaptureOutcome, Error> {
        let document = self.resolve_active_document();
        let name = DocumentName::or_placeholder(document.as_ref()).to_string();
        self.notifier.notify(&format!("Record note at: {}", name));

        let mut dialog = PromptDialog::new();
        dialog.open();
        let outcome = self.prompt.ask(&mut dialog);
        if dialog.is_open() {
            dialog.dismiss();
        }

        match outcome? {
            PromptOutcome::Submitted(highlight) => Ok(self.on_submit(settings, &name, &highlight)),
            PromptOutcome::Cancelled => {
                self.debug("prompt dismissed", None);
                Ok(CaptureOutcome::Cancelled)
            }
        }
    }

    fn on_submit(&self, settings: &Settings, name: &str, highlight: &str) -> CaptureOutcome {
        let path = NotePath::for_document(&settings.vault_folder, name);
        self.debug(
            "highlight submitted",
            Some((path.as_str(), highlight)),
        );

        match self.append.append(&path, highlight) {
            AppendOutcome::Created | AppendOutcome::Appended => {
                self.notifier.notify(SAVED_NOTICE);
                CaptureOutcome::Saved { path }
            }
            AppendOutcome::Failed(reason) => {
                self.notifier
                    .notify(&format!("Failed to save highlight: {}", reason));
                CaptureOutcome::Failed { path, reason }
            }
        }
    }

    /// 解決に失敗してもプレースホルダで続行する
    fn resolve_active_document(&self) -> Option<DocumentName> {
        match self.workspace.active_document() {
            Ok(doc) => doc,
            Err(e) => {
                let _ = self.logger.log(
                    &LogRecord::new(
                        LogLevel::Warn,
                        format!("Failed to resolve active document: {}", e),
                    )
                    .layer("usecase")
                    .kind("capture"),
                );
                None
            }
        }
    }

    fn debug(&self, message: &str, target: Option<(&str, &str)>) {
        let mut rec = LogRecord::new(LogLevel::Debug, message)
            .layer("usecase")
            .kind("capture");
        if let Some((path, highlight)) = target {
            rec = rec
                .field("path", serde_json::json!(path))
                .field("highlight", serde_json::json!(highlight));
        }
        let _ = self.logger.log(&rec);
    }
}
