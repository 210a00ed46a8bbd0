//! latest_profile.json を読む ProfileStore 実装

use crate::domain::ProfileArtifact;
use crate::ports::outbound::ProfileStore;
use common::error::Error;
use common::ports::outbound::FileSystem;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ファイルベースの ProfileStore（読み取り専用）
///
/// ファイルの不在（パイプライン未実行）と内容の破損は区別する。
pub struct FileProfileStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ProfileStore for FileProfileStore {
    fn load(&self) -> Result<Option<ProfileArtifact>, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(None);
        }
        let text = self.fs.read_to_string(&self.path)?;
        let v: Value = serde_json::from_str(&text)
            .map_err(|e| Error::json(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(ProfileArtifact::from_json(&v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;

    fn store(path: &Path) -> FileProfileStore {
        FileProfileStore::new(Arc::new(StdFileSystem), path)
    }

    #[test]
    fn test_missing_artifact_is_absent_not_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let loaded = store(&tmp.path().join("latest_profile.json")).load().unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_broken_json_is_distinct_from_absent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("latest_profile.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = store(&path).load().unwrap_err();
        assert!(matches!(err, Error::Json(_)), "got: {:?}", err);
    }

    #[test]
    fn test_valid_artifact_loads() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("latest_profile.json");
        std::fs::write(
            &path,
            r#"{"repo_count": 1, "profiles": [{"repo_id": "solo", "skills": ["rust"]}], "consensus": {"repo_count": 1}}"#,
        )
        .unwrap();

        let artifact = store(&path).load().unwrap().expect("artifact present");
        assert_eq!(artifact.repo_count, 1);
        assert_eq!(artifact.profiles[0].repo_id, "solo");
        assert_eq!(artifact.profiles[0].skills, vec!["rust"]);
    }
}
