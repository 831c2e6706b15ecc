//! Obsidian 互換 Vault のワークスペースからアクティブ文書を解決する
//!
//! 優先順位:
//! 1. 明示指定（-a/--active または HL_ACTIVE_DOCUMENT）
//! 2. `.obsidian/workspace.json` の `active` が指す leaf の `state.state.file`
//! 3. 同ファイルの `lastOpenFiles[0]`

use std::path::PathBuf;
use std::sync::Arc;

use common::domain::VaultDir;
use common::error::Error;
use common::ports::outbound::FileSystem;
use serde_json::Value;

use crate::domain::DocumentName;
use crate::ports::outbound::Workspace;

const WORKSPACE_FILENAME: &str = "workspace.json";

pub struct ObsidianWorkspace {
    fs: Arc<dyn FileSystem>,
    vault: VaultDir,
    explicit: Option<String>,
}

impl ObsidianWorkspace {
    pub fn new(fs: Arc<dyn FileSystem>, vault: VaultDir, explicit: Option<String>) -> Self {
        Self { fs, vault, explicit }
    }

    fn workspace_file(&self) -> PathBuf {
        self.vault.config_dir().join(WORKSPACE_FILENAME)
    }
}

impl Workspace for ObsidianWorkspace {
    fn active_document(&self) -> Result<Option<DocumentName>, Error> {
        if let Some(name) = self.explicit.as_deref() {
            return Ok(DocumentName::from_vault_path(name));
        }

        let path = self.workspace_file();
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        let s = self.fs.read_to_string(&path)?;
        let workspace: Value = serde_json::from_str(&s)
            .map_err(|e| Error::json(format!("parse {}: {}", path.display(), e)))?;

        let active_file = workspace
            .get("active")
            .and_then(Value::as_str)
            .and_then(|id| find_leaf_file(&workspace, id))
            .or_else(|| {
                workspace
                    .get("lastOpenFiles")
                    .and_then(|files| files.get(0))
                    .and_then(Value::as_str)
            });
        Ok(active_file.and_then(DocumentName::from_vault_path))
    }
}

/// id が一致するノードの `state.state.file` を深さ優先で探す
fn find_leaf_file<'a>(node: &'a Value, id: &str) -> Option<&'a str> {
    match node {
        Value::Object(map) => {
            if map.get("id").and_then(Value::as_str) == Some(id) {
                if let Some(file) = node.pointer("/state/state/file").and_then(Value::as_str) {
                    return Some(file);
                }
            }
            map.values().find_map(|v| find_leaf_file(v, id))
        }
        Value::Array(items) => items.iter().find_map(|v| find_leaf_file(v, id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;
    use serde_json::json;
    use tempfile::tempdir;

    fn write_workspace(vault: &std::path::Path, data: &Value) {
        let dir = vault.join(".obsidian");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(WORKSPACE_FILENAME), data.to_string()).unwrap();
    }

    fn workspace(vault: &std::path::Path, explicit: Option<&str>) -> ObsidianWorkspace {
        ObsidianWorkspace::new(
            Arc::new(StdFileSystem),
            VaultDir::new(vault),
            explicit.map(String::from),
        )
    }

    #[test]
    fn test_explicit_name_wins() {
        let dir = tempdir().unwrap();
        write_workspace(dir.path(), &json!({ "lastOpenFiles": ["Other.md"] }));
        let ws = workspace(dir.path(), Some("Books/Chapter 1.md"));
        assert_eq!(
            ws.active_document().unwrap(),
            Some(DocumentName::new("Chapter 1.md"))
        );
    }

    #[test]
    fn test_active_leaf_file() {
        let dir = tempdir().unwrap();
        write_workspace(
            dir.path(),
            &json!({
                "main": {
                    "id": "root",
                    "type": "split",
                    "children": [{
                        "id": "tabs",
                        "type": "tabs",
                        "children": [
                            { "id": "leaf-a", "type": "leaf",
                              "state": { "type": "markdown", "state": { "file": "Books/Dune.md" } } },
                            { "id": "leaf-b", "type": "leaf",
                              "state": { "type": "pdf", "state": { "file": "Papers/Attention.pdf" } } }
                        ]
                    }]
                },
                "active": "leaf-b",
                "lastOpenFiles": ["Books/Dune.md"]
            }),
        );
        let ws = workspace(dir.path(), None);
        assert_eq!(
            ws.active_document().unwrap(),
            Some(DocumentName::new("Attention.pdf"))
        );
    }

    #[test]
    fn test_falls_back_to_last_open_file() {
        let dir = tempdir().unwrap();
        write_workspace(
            dir.path(),
            &json!({ "active": "gone", "lastOpenFiles": ["Books/Dune.md", "x.md"] }),
        );
        let ws = workspace(dir.path(), None);
        assert_eq!(ws.active_document().unwrap(), Some(DocumentName::new("Dune.md")));
    }

    #[test]
    fn test_no_workspace_file_is_none() {
        let dir = tempdir().unwrap();
        let ws = workspace(dir.path(), None);
        assert_eq!(ws.active_document().unwrap(), None);
    }

    #[test]
    fn test_malformed_workspace_is_error() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join(".obsidian");
        std::fs::create_dir_all(&cfg).unwrap();
        std::fs::write(cfg.join(WORKSPACE_FILENAME), "{not json").unwrap();
        let ws = workspace(dir.path(), None);
        assert!(ws.active_document().is_err());
    }
}
