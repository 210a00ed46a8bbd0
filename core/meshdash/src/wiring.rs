//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdEnvResolver, StdFileSystem};
use common::domain::MeshPaths;
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{FileProfileStore, FileSelectionStore, GithubRepoListing};
use crate::domain::StalePolicy;
use crate::ports::outbound::{ProfileStore, RepoListing, SelectionStore};
use crate::usecase::{ProfileUseCase, ReposUseCase};

/// 上流ホスティング API のベース URL
const GITHUB_API_BASE: &str = "https://api.github.com";

/// 一覧取得の 1 ページ上限（更新順で先頭 1 ページのみ読む）
const LISTING_PAGE_SIZE: u32 = 50;

/// 配線で組み立てた UseCase 群（main の Command ディスパッチで利用）
pub struct App {
    pub repos_use_case: ReposUseCase,
    pub profile_use_case: ProfileUseCase,
}

/// 配線: 標準アダプタで App を組み立てる
///
/// 環境変数を読むのはここで使う StdEnvResolver だけ。解決済みの値を
/// 各アダプタのコンストラクタへ明示的に渡す。
pub fn wire_meshdash(policy: StalePolicy) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger: Arc<dyn Log> = env
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(&fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));
    let paths = MeshPaths::new(&env.resolve_mesh_dir());

    let listing: Arc<dyn RepoListing> = Arc::new(GithubRepoListing::new(
        env.github_token(),
        GITHUB_API_BASE,
        LISTING_PAGE_SIZE,
        Arc::clone(&logger),
    ));
    let selection_store: Arc<dyn SelectionStore> =
        Arc::new(FileSelectionStore::new(Arc::clone(&fs), &paths.repos_yaml));
    let profile_store: Arc<dyn ProfileStore> =
        Arc::new(FileProfileStore::new(Arc::clone(&fs), &paths.profile_json));

    App {
        repos_use_case: ReposUseCase::new(listing, selection_store, policy, Arc::clone(&logger)),
        profile_use_case: ProfileUseCase::new(profile_store, logger),
    }
}
