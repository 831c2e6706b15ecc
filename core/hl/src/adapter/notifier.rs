//! 通知を stderr に出す Notifier 実装

use crate::ports::outbound::Notifier;

#[derive(Debug, Clone, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
