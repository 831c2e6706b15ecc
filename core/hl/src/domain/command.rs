//! hl コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、match でディスパッチする。

/// ツールバー操作のラベル（ヘルプ表示用）
pub const TRIGGER_LABEL: &str = "Book Highlight";

/// hl のサブコマンド
///
/// コマンドなし = capture。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示
    Help,

    /// アクティブ文書のハイライトを記録する
    Capture,

    /// 設定パネル（folder 指定時は値を変更して保存）
    Settings { folder: Option<String> },

    /// 未知のコマンド（エラー用）
    Unknown(String),
}

impl Command {
    /// コマンド名と引数から Command に解析する
    ///
    /// サブコマンドは余分な位置引数を取らない。余りがあれば Unknown とする。
    pub fn parse_with_args(name: &str, args: &[String], folder: Option<String>) -> Self {
        if !args.is_empty() {
            return Command::Unknown(format!("{} {}", name, args.join(" ")));
        }
        match name {
            "capture" => Command::Capture,
            "settings" => Command::Settings { folder },
            "help" => Command::Help,
            _ => Command::Unknown(name.to_string()),
        }
    }

    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Capture => "capture",
            Command::Settings { .. } => "settings",
            Command::Unknown(_) => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_capture() {
        assert_eq!(Command::parse_with_args("capture", &[], None), Command::Capture);
    }

    #[test]
    fn test_parse_settings_with_folder() {
        let cmd = Command::parse_with_args("settings", &[], Some("Highlights/".to_string()));
        assert_eq!(
            cmd,
            Command::Settings {
                folder: Some("Highlights/".to_string())
            }
        );
        assert_eq!(cmd.name(), "settings");
    }

    #[test]
    fn test_parse_extra_args_is_unknown() {
        let cmd = Command::parse_with_args("capture", &["now".to_string()], None);
        assert!(matches!(cmd, Command::Unknown(s) if s == "capture now"));
    }

    #[test]
    fn test_parse_unknown() {
        let cmd = Command::parse_with_args("sync", &[], None);
        assert!(matches!(cmd, Command::Unknown(s) if s == "sync"));
    }
}
