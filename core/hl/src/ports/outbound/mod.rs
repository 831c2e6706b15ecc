//! Outbound ポート: アプリがホストの能力を使うための trait
//!
//! 実装は adapter（Vault ディレクトリ / stdin・stderr）とテスト用のメモリ実装。

pub mod highlight_prompt;
pub mod interrupt_checker;
pub mod notifier;
pub mod settings_repository;
pub mod vault;
pub mod workspace;

pub use highlight_prompt::HighlightPrompt;
pub use interrupt_checker::InterruptChecker;
pub use notifier::Notifier;
pub use settings_repository::SettingsRepository;
pub use vault::Vault;
pub use workspace::Workspace;
