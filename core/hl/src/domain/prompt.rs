//! ハイライト入力ダイアログの状態機械
//!
//! `Closed → Open → Submitted | Cancelled`。入力欄は 1 つ、確定ボタンは 1 つ。
//! 描画は HighlightPrompt アダプタの責務で、ここは状態と値だけを持つ。

/// ダイアログのタイトル
pub const DIALOG_TITLE: &str = "Highlight Contents";
/// 入力欄のラベル
pub const FIELD_LABEL: &str = "Highlights";
/// 確定ボタンのラベル
pub const SUBMIT_LABEL: &str = "Submit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
    /// 確定して閉じた（値を 1 回だけ渡した）
    Submitted,
    /// 確定せずに閉じた
    Cancelled,
}

/// ダイアログの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

#[derive(Debug)]
pub struct PromptDialog {
    state: DialogState,
    field: String,
}

impl Default for PromptDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptDialog {
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
            field: String::new(),
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// 開く。入力欄は空から始まる。
    pub fn open(&mut self) {
        self.field.clear();
        self.state = DialogState::Open;
    }

    /// 入力欄の値を置き換える（検証なし）。開いていなければ無視。
    pub fn edit(&mut self, value: impl Into<String>) {
        if self.is_open() {
            self.field = value.into();
        }
    }

    /// 現在の入力値
    #[allow(dead_code)]
    pub fn value(&self) -> &str {
        &self.field
    }

    /// 確定して閉じる。開いている場合のみ値を返し、2 回目以降は None。
    pub fn submit(&mut self) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        self.state = DialogState::Submitted;
        Some(std::mem::take(&mut self.field))
    }

    /// 確定せずに閉じる。入力値は破棄する。
    pub fn dismiss(&mut self) {
        if self.is_open() {
            self.state = DialogState::Cancelled;
            self.field.clear();
        }
    }

    /// 確定して結果を返す（開いていなければ Cancelled）
    pub fn submit_outcome(&mut self) -> PromptOutcome {
        match self.submit() {
            Some(text) => PromptOutcome::Submitted(text),
            None => PromptOutcome::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_returns_edited_value_once() {
        let mut d = PromptDialog::new();
        d.open();
        d.edit("a fine line");
        assert_eq!(d.submit(), Some("a fine line".to_string()));
        assert_eq!(d.state(), DialogState::Submitted);
        assert_eq!(d.submit(), None);
        assert_eq!(d.value(), "");
    }

    #[test]
    fn test_submit_without_edit_is_empty() {
        let mut d = PromptDialog::new();
        d.open();
        assert_eq!(d.submit(), Some(String::new()));
    }

    #[test]
    fn test_dismiss_clears_and_yields_nothing() {
        let mut d = PromptDialog::new();
        d.open();
        d.edit("draft");
        d.dismiss();
        assert_eq!(d.state(), DialogState::Cancelled);
        assert_eq!(d.value(), "");
        assert_eq!(d.submit(), None);
    }

    #[test]
    fn test_edit_ignored_when_closed() {
        let mut d = PromptDialog::new();
        d.edit("too early");
        assert_eq!(d.value(), "");
        assert_eq!(d.state(), DialogState::Closed);
    }

    #[test]
    fn test_submit_outcome() {
        let mut d = PromptDialog::new();
        d.open();
        d.edit("kept");
        assert_eq!(d.submit_outcome(), PromptOutcome::Submitted("kept".to_string()));
        assert_eq!(d.submit_outcome(), PromptOutcome::Cancelled);
    }

    #[test]
    fn test_reopen_starts_empty() {
        let mut d = PromptDialog::new();
        d.open();
        d.edit("first");
        d.submit();
        d.open();
        assert_eq!(d.value(), "");
        assert!(d.is_open());
    }
}
