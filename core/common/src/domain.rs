//! ドメイン型（Newtype）
//!
//! PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use std::path::{Path, PathBuf};

/// メッシュワークスペースのルートディレクトリ
///
/// 選択状態の永続化先とパイプライン成果物はこの配下に置かれる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshDir(PathBuf);

impl MeshDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl std::ops::Deref for MeshDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for MeshDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for MeshDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// メッシュワークスペース内の成果物パス
///
/// - `repos_yaml`: 選択状態の永続化先。外部パイプラインが `selected` と
///   `local_path` を読む
/// - `profile_json`: パイプラインの出力成果物（読み取り専用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshPaths {
    pub repos_yaml: PathBuf,
    pub profile_json: PathBuf,
}

impl MeshPaths {
    pub fn new(mesh_dir: &MeshDir) -> Self {
        Self {
            repos_yaml: mesh_dir.join("config").join("repos.yaml"),
            profile_json: mesh_dir.join("output").join("latest_profile.json"),
        }
    }
}
