//! アクティブ文書名と、ハイライトを溜めるノートのパス

use std::fmt;

/// アクティブ文書が無いときに名前の代わりに使う文字列
pub const NO_ACTIVE_DOCUMENT: &str = "undefined";

/// ノートファイルの拡張子
pub const NOTE_EXTENSION: &str = ".md";

/// アクティブ文書の表示名（拡張子込みの basename。例: `Chapter 1.md`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentName(String);

impl DocumentName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Vault 内パス（`Books/Chapter 1.md`）から basename を取り出す
    pub fn from_vault_path(path: &str) -> Option<Self> {
        let base = path.rsplit('/').next().unwrap_or(path);
        if base.is_empty() {
            None
        } else {
            Some(Self::new(base))
        }
    }

    /// 無い場合はプレースホルダを返す
    pub fn or_placeholder(doc: Option<&DocumentName>) -> &str {
        doc.map(|d| d.as_str()).unwrap_or(NO_ACTIVE_DOCUMENT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 末尾の拡張子（最後の `.` 以降）を取り除く
///
/// `.` の後ろが空、または `/` を含む場合は拡張子とみなさない。
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i + 1 < name.len() && !name[i + 1..].contains('/') => &name[..i],
        _ => name,
    }
}

/// ノートのパス（Vault ルートからの相対、`/` 区切り）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotePath(String);

impl NotePath {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// `<folder><拡張子を除いた文書名>.md`。folder はそのまま連結する（区切りは補わない）。
    pub fn for_document(folder: &str, document: &str) -> Self {
        Self(format!("{}{}{}", folder, strip_extension(document), NOTE_EXTENSION))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
