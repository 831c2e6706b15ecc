//! Ctrl+C（SIGINT）による割り込みを検知する Outbound ポート
//!
//! 入力待ち中に押された場合はダイアログを閉じる（何も追記しない）。

pub trait InterruptChecker: Send + Sync {
    fn is_interrupted(&self) -> bool;
}
