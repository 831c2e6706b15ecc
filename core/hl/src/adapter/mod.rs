pub(crate) mod fs_vault;
pub(crate) mod highlight_prompt;
pub(crate) mod json_settings_repository;
pub(crate) mod notifier;
pub(crate) mod obsidian_workspace;
pub(crate) mod sigint_checker;

pub(crate) use fs_vault::FsVault;
pub(crate) use highlight_prompt::{CliHighlightPrompt, NonInteractivePrompt, PresetHighlightPrompt};
pub(crate) use json_settings_repository::JsonSettingsRepository;
pub(crate) use notifier::StderrNotifier;
pub(crate) use obsidian_workspace::ObsidianWorkspace;
pub(crate) use sigint_checker::{NoopInterruptChecker, SigintChecker};
