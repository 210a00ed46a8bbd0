//! アダプタ実装（GitHub 一覧取得、repos.yaml コーデック、成果物ストア）

pub(crate) mod file_profile_store;
pub(crate) mod file_selection_store;
pub(crate) mod github_repo_listing;
pub(crate) mod repos_yaml;

pub(crate) use file_profile_store::FileProfileStore;
pub(crate) use file_selection_store::FileSelectionStore;
pub(crate) use github_repo_listing::GithubRepoListing;
