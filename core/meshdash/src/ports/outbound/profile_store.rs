//! パイプライン成果物の読み込み Outbound ポート

use crate::domain::ProfileArtifact;
use common::error::Error;

/// パイプラインの出力成果物を読む（読み取り専用）
pub trait ProfileStore: Send + Sync {
    /// 成果物を読む。ファイルが無ければ `Ok(None)`（「まだ無い」はエラーではない）。
    /// 存在するが JSON として壊れている場合は `Error::Json`
    fn load(&self) -> Result<Option<ProfileArtifact>, Error>;
}
