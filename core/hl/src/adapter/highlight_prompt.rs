//! ハイライト入力ダイアログの実装（CLI 境界）
//!
//! stdin/stderr を用いた対話は adapter 層の責務。
//! 入力待ち中は InterruptChecker をポーリングし、Ctrl+C か EOF でダイアログを閉じる（追記しない）。

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use common::error::Error;

use crate::domain::prompt::{DIALOG_TITLE, FIELD_LABEL, SUBMIT_LABEL};
use crate::domain::{PromptDialog, PromptOutcome};
use crate::ports::outbound::{HighlightPrompt, InterruptChecker};

/// 1 行入力して Enter で確定する実装
pub struct CliHighlightPrompt {
    interrupt_checker: Arc<dyn InterruptChecker>,
}

impl CliHighlightPrompt {
    pub fn new(interrupt_checker: Arc<dyn InterruptChecker>) -> Self {
        Self { interrupt_checker }
    }
}

/// 読み取った 1 行から改行だけを落とす（前後の空白は残す）
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

impl HighlightPrompt for CliHighlightPrompt {
    fn ask(&self, dialog: &mut PromptDialog) -> Result<PromptOutcome, Error> {
        eprintln!("============ {} =============", DIALOG_TITLE);
        eprint!("{} ([Enter] {}, Ctrl+D/Ctrl+C cancel): ", FIELD_LABEL, SUBMIT_LABEL);
        let _ = io::stderr().flush();

        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let stdin = io::stdin();
            let mut line = String::new();
            let read = stdin.lock().read_line(&mut line);
            let _ = tx.send(read.map(|n| (n, line)));
        });

        let timeout = Duration::from_millis(100);
        loop {
            match rx.recv_timeout(timeout) {
                Ok(Ok((0, _))) => {
                    eprintln!();
                    dialog.dismiss();
                    return Ok(PromptOutcome::Cancelled);
                }
                Ok(Ok((_, line))) => {
                    dialog.edit(strip_line_ending(&line));
                    return Ok(dialog.submit_outcome());
                }
                Ok(Err(e)) => {
                    dialog.dismiss();
                    return Err(Error::io_msg(format!("Failed to read highlight: {}", e)));
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if self.interrupt_checker.is_interrupted() {
                        eprintln!();
                        dialog.dismiss();
                        return Ok(PromptOutcome::Cancelled);
                    }
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    dialog.dismiss();
                    return Ok(PromptOutcome::Cancelled);
                }
            }
        }
    }
}

/// --text で渡された文字列をそのまま確定する実装
pub struct PresetHighlightPrompt {
    text: String,
}

impl PresetHighlightPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl HighlightPrompt for PresetHighlightPrompt {
    fn ask(&self, dialog: &mut PromptDialog) -> Result<PromptOutcome, Error> {
        dialog.edit(self.text.clone());
        Ok(dialog.submit_outcome())
    }
}

/// 非対話用: 常にダイアログを閉じる（CI 等でプロンプトを出さない）
pub struct NonInteractivePrompt;

impl HighlightPrompt for NonInteractivePrompt {
    fn ask(&self, dialog: &mut PromptDialog) -> Result<PromptOutcome, Error> {
        dialog.dismiss();
        Ok(PromptOutcome::Cancelled)
    }
}
