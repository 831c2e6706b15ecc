//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StderrLog, StdEnvResolver, StdFileSystem};
use common::domain::VaultDir;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{
    CliHighlightPrompt, FsVault, JsonSettingsRepository, NonInteractivePrompt,
    NoopInterruptChecker, ObsidianWorkspace, PresetHighlightPrompt, SigintChecker, StderrNotifier,
};
use crate::cli::Config;
use crate::domain::Settings;
use crate::ports::outbound::{
    HighlightPrompt, InterruptChecker, Notifier, SettingsRepository, Vault, Workspace,
};
use crate::usecase::{AppendEngine, CaptureUseCase, SettingsStore};

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    pub vault_dir: VaultDir,
    /// 構造化ログ（ファイルへ JSONL）。ユーザー向け通知とは別。
    pub logger: Arc<dyn Log>,
    pub settings_store: SettingsStore,
    /// 起動時に 1 回読み込み、設定パネルだけが書き換える
    pub settings: Settings,
    pub capture_use_case: CaptureUseCase,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_hl(config: &Config) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let file_log: Arc<dyn Log> = env_resolver
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(&fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));
    let logger: Arc<dyn Log> = if config.verbose {
        Arc::new(StderrLog::new(file_log))
    } else {
        file_log
    };
    wire_with(config, fs, env_resolver, logger)
}

/// 配線本体（テストでは Log や EnvResolver を差し替える）
pub fn wire_with(
    config: &Config,
    fs: Arc<dyn FileSystem>,
    env_resolver: Arc<dyn EnvResolver>,
    logger: Arc<dyn Log>,
) -> Result<App, Error> {
    let vault_dir = env_resolver.resolve_vault_dir(config.vault_dir.as_deref())?;
    let active = config
        .active
        .clone()
        .or_else(|| env_resolver.active_document_from_env());

    let workspace: Arc<dyn Workspace> = Arc::new(ObsidianWorkspace::new(
        Arc::clone(&fs),
        vault_dir.clone(),
        active,
    ));
    let vault: Arc<dyn Vault> = Arc::new(FsVault::new(Arc::clone(&fs), vault_dir.clone()));
    let settings_repo: Arc<dyn SettingsRepository> =
        Arc::new(JsonSettingsRepository::new(Arc::clone(&fs), &vault_dir));
    let notifier: Arc<dyn Notifier> = Arc::new(StderrNotifier);
    let prompt = build_prompt(config);

    let settings_store = SettingsStore::new(settings_repo, Arc::clone(&logger));
    let settings = settings_store.load();
    let append = Arc::new(AppendEngine::new(vault, Arc::clone(&logger)));
    let capture_use_case = CaptureUseCase::new(
        workspace,
        notifier,
        prompt,
        append,
        Arc::clone(&logger),
    );

    Ok(App {
        vault_dir,
        logger,
        settings_store,
        settings,
        capture_use_case,
    })
}

/// --text > --no-interactive > 対話の順で入力元を選ぶ
fn build_prompt(config: &Config) -> Arc<dyn HighlightPrompt> {
    if let Some(text) = config.text.as_deref() {
        return Arc::new(PresetHighlightPrompt::new(text));
    }
    if config.non_interactive {
        return Arc::new(NonInteractivePrompt);
    }
    let interrupt_checker: Arc<dyn InterruptChecker> = match SigintChecker::new() {
        Ok(checker) => Arc::new(checker),
        Err(_) => Arc::new(NoopInterruptChecker),
    };
    Arc::new(CliHighlightPrompt::new(interrupt_checker))
}
