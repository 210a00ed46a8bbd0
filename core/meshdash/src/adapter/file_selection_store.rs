//! repos.yaml を読み書きする SelectionStore 実装

use crate::adapter::repos_yaml;
use crate::domain::{SelectionRecord, SelectionState};
use crate::ports::outbound::SelectionStore;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ファイルベースの SelectionStore
///
/// ファイルが無いのは「まだ何も選択されていない」であってエラーではない。
pub struct FileSelectionStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileSelectionStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SelectionStore for FileSelectionStore {
    fn load_state(&self) -> Result<SelectionState, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(SelectionState::new());
        }
        let text = self.fs.read_to_string(&self.path)?;
        Ok(repos_yaml::decode(&text))
    }

    fn load_records(&self) -> Result<Vec<SelectionRecord>, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(Vec::new());
        }
        let text = self.fs.read_to_string(&self.path)?;
        Ok(repos_yaml::decode_records(&text))
    }

    fn save(&self, records: &[SelectionRecord]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write(&self.path, &repos_yaml::encode(records))
    }
}
