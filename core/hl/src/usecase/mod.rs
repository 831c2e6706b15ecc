pub(crate) mod append;
pub(crate) mod capture;
pub(crate) mod settings;

pub(crate) use append::{AppendEngine, AppendOutcome};
pub(crate) use capture::{CaptureOutcome, CaptureUseCase};
pub(crate) use settings::{SettingsPanel, SettingsStore};
