//! 選択状態の永続化 Outbound ポート
//!
//! 永続化先は外部パイプラインと共有する repos.yaml。読み書きの
//! 排他制御はしない（単一操作者・後勝ちの前提）。

use crate::domain::{SelectionRecord, SelectionState};
use common::error::Error;

/// 選択状態の読み込みと全置換保存
pub trait SelectionStore: Send + Sync {
    /// 永続化済みの選択状態。ファイルが無ければ空（エラーではない）
    fn load_state(&self) -> Result<SelectionState, Error>;

    /// 永続化済みのレコード一覧（stale 持ち越しポリシー用）。
    /// ファイルが無ければ空
    fn load_records(&self) -> Result<Vec<SelectionRecord>, Error>;

    /// レコード一式で全置換保存する（マージはしない）
    fn save(&self, records: &[SelectionRecord]) -> Result<(), Error>;
}
