//! エラー型（メッセージ + sysexits 終了コード）
//!
//! 全レイヤーで同じ `Error` を使い、main で `exit_code()` に落とす。
//! variant は失敗の分類に対応する。自動リトライはどこでも行わない。

use thiserror::Error;

/// meshdash 共通のエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// 引数不正（usage 表示対象、exit 64）
    #[error("{0}")]
    InvalidArgument(String),

    /// 資格情報・環境変数の欠如（exit 64）
    #[error("{0}")]
    Env(String),

    /// JSON の解析失敗（exit 65）
    #[error("{0}")]
    Json(String),

    /// 上流 API に到達できない（exit 69）
    #[error("{0}")]
    Upstream(String),

    /// 内部エラー（exit 70）
    #[error("{0}")]
    System(String),

    /// ファイル I/O の失敗（exit 74）
    #[error("{0}")]
    Io(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// sysexits(3) 互換の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::Json(_) => 65,
            Self::Upstream(_) => 69,
            Self::System(_) => 70,
            Self::Io(_) => 74,
        }
    }

    /// usage を表示すべきエラーか（引数不正のみ）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
