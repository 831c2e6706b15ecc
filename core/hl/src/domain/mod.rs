//! ドメイン型（Newtype、enum、ルール）

pub mod command;
pub mod document;
pub mod prompt;
pub mod settings;

pub use command::Command;
pub use document::{DocumentName, NotePath, NO_ACTIVE_DOCUMENT};
pub use prompt::{DialogState, PromptDialog, PromptOutcome};
pub use settings::{SettingField, Settings, DEFAULT_VAULT_FOLDER};
