//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::MeshDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// メッシュワークスペースのデフォルト位置（カレントディレクトリ相対）
const DEFAULT_MESH_DIR: &str = "./repo_mesh";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn github_token(&self) -> Option<String> {
        env::var("GITHUB_TOKEN").ok().filter(|s| !s.is_empty())
    }

    fn resolve_mesh_dir(&self) -> MeshDir {
        env::var("MESHDASH_MESH_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .map(MeshDir::new)
            .unwrap_or_else(|| MeshDir::new(PathBuf::from(DEFAULT_MESH_DIR)))
    }

    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        env::var("MESHDASH_LOG")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| Error::env("MESHDASH_LOG is not set"))
    }
}
