use crate::domain::Command;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -d / --vault: Vault ルート（未指定なら HL_VAULT、それも無ければカレントディレクトリ）
    pub vault_dir: Option<PathBuf>,
    /// -a / --active: アクティブ文書名を明示する（workspace.json より優先）
    pub active: Option<String>,
    /// -t / --text: ダイアログを出さずにこの文字列を記録する
    pub text: Option<String>,
    /// -f / --folder: settings で Vault Folder を変更する
    pub folder: Option<String>,
    /// --no-interactive: ダイアログを出さない（確定されなかった扱い）
    pub non_interactive: bool,
    /// -v / --verbose: 構造化ログを stderr にも出す
    pub verbose: bool,
    pub command: Option<String>,
    pub command_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("hl")
        .about("Capture a highlight into the note of the active document")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("vault")
                .short('d')
                .long("vault")
                .value_name("directory")
                .help("Vault root directory")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("active")
                .short('a')
                .long("active")
                .value_name("name")
                .help("Name of the active document (overrides the vault workspace)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("text")
                .short('t')
                .long("text")
                .value_name("highlight")
                .help("Record this text without opening the prompt")
                .num_args(1)
                .allow_hyphen_values(true),
        )
        .arg(
            clap::Arg::new("folder")
                .short('f')
                .long("folder")
                .value_name("value")
                .help("settings: new Vault Folder value")
                .num_args(1)
                .allow_hyphen_values(true),
        )
        .arg(
            clap::Arg::new("no-interactive")
                .long("no-interactive")
                .help("Do not open the prompt (nothing is recorded)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror structured logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("Command (capture, settings) then its arguments")
                .num_args(0..),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let positional: Vec<String> = matches
        .get_many::<String>("positional")
        .map(|i| i.cloned().collect())
        .unwrap_or_default();
    let (command, command_args) = match positional.split_first() {
        Some((first, rest)) => (Some(first.clone()), rest.to_vec()),
        None => (None, vec![]),
    };

    Config {
        help: matches.get_flag("help"),
        vault_dir: matches.get_one::<PathBuf>("vault").cloned(),
        active: matches.get_one::<String>("active").cloned(),
        text: matches.get_one::<String>("text").cloned(),
        folder: matches.get_one::<String>("folder").cloned(),
        non_interactive: matches.get_flag("no-interactive"),
        verbose: matches.get_flag("verbose"),
        command,
        command_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "hl", &mut std::io::stdout());
}

/// Config を Command に変換する
pub fn config_to_command(config: &Config) -> Command {
    if config.help {
        return Command::Help;
    }
    match config.command.as_deref() {
        None => Command::Capture,
        Some(name) => Command::parse_with_args(name, &config.command_args, config.folder.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert!(!config.non_interactive);
        assert!(config.vault_dir.is_none());
        assert!(config.command.is_none());
        assert_eq!(config_to_command(&config), Command::Capture);
    }

    #[test]
    fn test_parse_capture_with_options() {
        let config = parse_args_from(&[
            "hl", "-d", "/tmp/vault", "-a", "Chapter 1.md", "capture", "-t", "a line",
        ])
        .unwrap();
        assert_eq!(config.vault_dir, Some(PathBuf::from("/tmp/vault")));
        assert_eq!(config.active.as_deref(), Some("Chapter 1.md"));
        assert_eq!(config.text.as_deref(), Some("a line"));
        assert_eq!(config_to_command(&config), Command::Capture);
    }

    #[test]
    fn test_parse_settings_folder() {
        let config = parse_args_from(&["hl", "settings", "--folder", "Highlights/"]).unwrap();
        assert_eq!(
            config_to_command(&config),
            Command::Settings {
                folder: Some("Highlights/".to_string())
            }
        );
    }

    #[test]
    fn test_parse_help_wins() {
        let config = parse_args_from(&["hl", "-h", "settings"]).unwrap();
        assert_eq!(config_to_command(&config), Command::Help);
    }

    #[test]
    fn test_parse_unknown_option_is_usage_error() {
        let err = parse_args_from(&["hl", "--bogus"]).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_text_may_start_with_hyphen() {
        let config = parse_args_from(&["hl", "--text", "- a dash quote"]).unwrap();
        assert_eq!(config.text.as_deref(), Some("- a dash quote"));
    }
}
