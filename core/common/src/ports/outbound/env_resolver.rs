//! 環境変数解決 Outbound ポート
//!
//! 資格情報とパス解決を環境変数から行うのはこの trait の実装だけ。
//! usecase / adapter は wiring で解決済みの値をコンストラクタ経由で受け取る。

use crate::domain::MeshDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のフェイクなど。
pub trait EnvResolver: Send + Sync {
    /// GitHub の bearer トークン（GITHUB_TOKEN）。未設定・空なら None
    fn github_token(&self) -> Option<String>;

    /// メッシュワークスペースのルートを解決する
    ///
    /// 優先順位:
    /// 1. MESHDASH_MESH_DIR（設定されていれば）
    /// 2. ./repo_mesh（カレントディレクトリ相対）
    fn resolve_mesh_dir(&self) -> MeshDir;

    /// 構造化ログの出力先ファイル（MESHDASH_LOG）
    /// 未設定なら Err（呼び出し側は NoopLog にフォールバックする）
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error>;
}
