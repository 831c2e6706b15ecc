//! hl 共通ライブラリ
//!
//! エラー型・外界への Outbound ポート（FS / 構造化ログ / 環境変数）と、その標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプタ（std::fs / std::env / JSONL ログ）
pub mod adapter;
