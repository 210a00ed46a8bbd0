//! 候補リポジトリ一覧 Outbound ポート

use crate::domain::CandidateRepo;
use common::error::Error;

/// 上流ホスティング API から候補リポジトリの一覧を取得する
///
/// 実装は `adapter::GithubRepoListing` やテスト用のフェイクなど。
pub trait RepoListing: Send + Sync {
    /// 一覧を 1 回取得する（リトライしない）
    ///
    /// - 資格情報が未設定なら `Error::Env`
    /// - 上流に到達できなければ `Error::Upstream`
    /// - レスポンスが不正な場合は空の一覧（呼び出し側は「リポジトリなし」を描画できる）
    fn fetch(&self) -> Result<Vec<CandidateRepo>, Error>;
}
