//! パイプライン成果物表示のユースケース

use crate::domain::ProfileArtifact;
use crate::ports::outbound::ProfileStore;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

/// profile コマンドのユースケース
pub struct ProfileUseCase {
    store: Arc<dyn ProfileStore>,
    logger: Arc<dyn Log>,
}

impl ProfileUseCase {
    pub fn new(store: Arc<dyn ProfileStore>, logger: Arc<dyn Log>) -> Self {
        Self { store, logger }
    }

    /// 成果物を読む。無ければ None（「パイプライン未実行」の表示に使う）
    pub fn show(&self) -> Result<Option<ProfileArtifact>, Error> {
        let artifact = self.store.load()?;
        if artifact.is_none() {
            let _ = self.logger.log(&LogRecord::new(
                LogLevel::Debug,
                "profile artifact absent",
                "usecase",
            ));
        }
        Ok(artifact)
    }
}
