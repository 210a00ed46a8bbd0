//! 構造化ログ Outbound ポート
//!
//! usecase / adapter から JSONL ログをファイルに書き出すための trait。
//! コンソール出力（stdout の JSON、stderr のエラー）とは別チャネル。

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// 現在時刻を ISO8601 (RFC3339) で返す。LogRecord の `ts` に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// 1 行分のログレコード（JSONL の 1 行に対応）
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// ISO8601 形式のタイムスタンプ
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
    /// 例: usecase, adapter, http
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 追加のキー・値（オブジェクトとして出力）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, serde_json::Value>>,
}

impl LogRecord {
    /// fields なしの 1 行を作る
    pub fn new(level: LogLevel, message: impl Into<String>, kind: &str) -> Self {
        Self {
            ts: now_iso8601(),
            level,
            message: message.into(),
            kind: Some(kind.to_string()),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: BTreeMap<String, serde_json::Value>) -> Self {
        self.fields = Some(fields);
        self
    }
}

/// 構造化ログを出力する Outbound ポート
///
/// 実装は `common::adapter::FileJsonLog`（ファイルへ JSONL 追記）や
/// `NoopLog`（出力先未設定時・テスト用）など。
pub trait Log: Send + Sync {
    /// 1 レコードをログに書き出す
    fn log(&self, record: &LogRecord) -> Result<(), Error>;
}
