mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::command::TRIGGER_LABEL;
use domain::{Command, SettingField};
use ports::inbound::UseCaseRunner;
use usecase::{CaptureOutcome, SettingsPanel};
use wiring::{wire_hl, App};

/// 追記に失敗したときの終了コード（EX_IOERR）
const EXIT_APPEND_FAILED: i32 = 74;

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&mut self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config);
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", serde_json::json!(command_name))
                .field("vault", serde_json::json!(self.app.vault_dir.display().to_string())),
        );

        let result = match cmd {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::Capture => self
                .app
                .capture_use_case
                .run(&self.app.settings)
                .map(|outcome| match outcome {
                    CaptureOutcome::Saved { .. } | CaptureOutcome::Cancelled => 0,
                    CaptureOutcome::Failed { .. } => EXIT_APPEND_FAILED,
                }),
            Command::Settings { folder } => {
                let mut panel =
                    SettingsPanel::new(&self.app.settings_store, &mut self.app.settings);
                let saved = match folder {
                    Some(value) => panel.on_change(&value),
                    None => Ok(()),
                };
                saved.map(|()| {
                    print_setting_field(&panel.display());
                    0
                })
            }
            Command::Unknown(name) => Err(Error::invalid_argument(format!(
                "Command '{}' is not implemented.",
                name
            ))),
        };

        let code = result.as_ref().copied().unwrap_or_else(|e| e.exit_code());
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", serde_json::json!(command_name))
                .field("exit_code", serde_json::json!(code)),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn print_setting_field(field: &SettingField) {
    println!("{}", field.name);
    println!("  {}", field.description);
    if field.value.is_empty() {
        println!("  value: ({})", field.placeholder);
    } else {
        println!("  value: {}", field.value);
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("hl: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_hl(&config)?;
    let mut runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: hl [-h] [-d|--vault directory] [-a|--active name] [<command> [options]]");
}

fn print_help() {
    println!("Usage: hl [-h] [-d|--vault directory] [-a|--active name] [<command> [options]]");
    println!("  -h, --help              Display this help message.");
    println!("  -d, --vault <dir>       Vault root directory. Default: $HL_VAULT, then the current directory.");
    println!("  -a, --active <name>     Active document name. Default: $HL_ACTIVE_DOCUMENT, then .obsidian/workspace.json.");
    println!("  -t, --text <highlight>  capture: record this text without opening the prompt.");
    println!("  -f, --folder <value>    settings: set the Vault Folder (saved immediately).");
    println!("  --no-interactive        Do not open the prompt (nothing is recorded).");
    println!("  -v, --verbose           Mirror structured logs to stderr.");
    println!("  --generate <shell>      Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Commands:");
    println!("  capture                 {}: record a highlight into <Vault Folder><document>.md (default).", TRIGGER_LABEL);
    println!("  settings                Show the Vault Folder setting (use --folder to change it).");
    println!();
    println!("Environment:");
    println!("  HL_VAULT              Vault root directory.");
    println!("  HL_ACTIVE_DOCUMENT    Name of the active document.");
    println!("  HL_LOG_FILE           Structured log file. Default: $XDG_STATE_HOME/hl/hl.jsonl or ~/.local/state/hl/hl.jsonl.");
}
