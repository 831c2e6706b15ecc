//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリがホスト（Vault・ワークスペース・通知・入力ダイアログ）を使うための trait

pub mod inbound;
pub mod outbound;
