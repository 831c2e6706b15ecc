//! 一時通知 Outbound ポート

/// ユーザーへの短い通知（投げっぱなし。失敗も結果も返さない）
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
