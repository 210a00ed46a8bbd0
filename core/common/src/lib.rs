//! meshdash 共通ライブラリ
//!
//! ダッシュボードバックエンドのインフラ層（エラー型、ポート、標準アダプタ）を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート（FileSystem / EnvResolver / Log）
pub mod ports;

/// 標準アダプタ実装
pub mod adapter;
