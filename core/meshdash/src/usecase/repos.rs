//! 候補一覧の取得と選択保存のユースケース

use crate::domain::{annotate, build_artifact, AnnotatedCandidate, StalePolicy};
use crate::ports::outbound::{RepoListing, SelectionStore};
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// 保存結果。`updated_count` は要求された id のうち selected=true で
/// 保存された数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub updated_count: usize,
}

/// repos コマンドのユースケース（list / save）
pub struct ReposUseCase {
    listing: Arc<dyn RepoListing>,
    store: Arc<dyn SelectionStore>,
    policy: StalePolicy,
    logger: Arc<dyn Log>,
}

impl ReposUseCase {
    pub fn new(
        listing: Arc<dyn RepoListing>,
        store: Arc<dyn SelectionStore>,
        policy: StalePolicy,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            listing,
            store,
            policy,
            logger,
        }
    }

    /// 現在の候補一覧に保存済みの選択状態を重ねて返す
    ///
    /// 一覧取得と状態読み込みの失敗（資格情報なし・上流未到達・読めない
    /// ファイル）はそのまま区別可能なエラーとして呼び出し側へ返す。
    pub fn list(&self) -> Result<Vec<AnnotatedCandidate>, Error> {
        let candidates = self.listing.fetch()?;
        let state = self.store.load_state()?;
        Ok(annotate(&candidates, &state))
    }

    /// 選択集合を保存する
    ///
    /// 一覧を取り直してから作る（レコードには完全なメタデータが要るため）。
    /// 取得 -> 構築 -> 保存は厳密に逐次。保存は全置換であり、読みと保存の
    /// 間に上流で改名されたリポジトリは選択を失う（仕様上の挙動）。
    pub fn save(&self, selected_ids: &BTreeSet<String>) -> Result<SaveOutcome, Error> {
        let candidates = self.listing.fetch()?;
        let prior = match self.policy {
            StalePolicy::Preserve => self.store.load_records()?,
            StalePolicy::Drop => Vec::new(),
        };
        let records = build_artifact(&candidates, selected_ids, &prior, self.policy);
        self.store.save(&records)?;

        let updated_count = records
            .iter()
            .filter(|r| r.selected && selected_ids.contains(&r.id))
            .count();
        let mut fields = BTreeMap::new();
        fields.insert("records".to_string(), serde_json::json!(records.len()));
        fields.insert("updated".to_string(), serde_json::json!(updated_count));
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "selection saved", "usecase").with_fields(fields),
        );
        Ok(SaveOutcome { updated_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CandidateRepo, SelectionRecord, SelectionState};
    use common::adapter::NoopLog;
    use std::sync::Mutex;

    struct FakeListing {
        result: Result<Vec<CandidateRepo>, Error>,
    }

    impl RepoListing for FakeListing {
        fn fetch(&self) -> Result<Vec<CandidateRepo>, Error> {
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        records: Mutex<Vec<SelectionRecord>>,
    }

    impl SelectionStore for MemoryStore {
        fn load_state(&self) -> Result<SelectionState, Error> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .map(|r| (r.id.clone(), r.selected))
                .collect())
        }

        fn load_records(&self) -> Result<Vec<SelectionRecord>, Error> {
            Ok(self.records.lock().unwrap().clone())
        }

        fn save(&self, records: &[SelectionRecord]) -> Result<(), Error> {
            *self.records.lock().unwrap() = records.to_vec();
            Ok(())
        }
    }

    fn candidate(id: &str) -> CandidateRepo {
        CandidateRepo {
            id: id.to_string(),
            full_name: format!("alice/{}", id),
            description: String::new(),
            language: String::new(),
            updated_at: String::new(),
        }
    }

    fn use_case(
        listing: Result<Vec<CandidateRepo>, Error>,
        store: Arc<MemoryStore>,
        policy: StalePolicy,
    ) -> ReposUseCase {
        ReposUseCase::new(
            Arc::new(FakeListing { result: listing }),
            store,
            policy,
            Arc::new(NoopLog),
        )
    }

    fn ids(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_list_annotates_from_saved_state() {
        let store = Arc::new(MemoryStore::default());
        store
            .save(&[SelectionRecord::from_candidate(&candidate("aa"), true)])
            .unwrap();
        let uc = use_case(
            Ok(vec![candidate("aa"), candidate("bb")]),
            Arc::clone(&store),
            StalePolicy::Drop,
        );

        let listed = uc.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].selected);
        assert!(!listed[1].selected);
    }

    #[test]
    fn test_list_propagates_missing_credential() {
        let uc = use_case(
            Err(Error::env("GITHUB_TOKEN is not set")),
            Arc::new(MemoryStore::default()),
            StalePolicy::Drop,
        );
        let err = uc.list().unwrap_err();
        assert!(matches!(err, Error::Env(_)), "got: {:?}", err);
    }

    #[test]
    fn test_save_is_full_replace() {
        let store = Arc::new(MemoryStore::default());
        // 前回は A と B を選択していた
        store
            .save(&[
                SelectionRecord::from_candidate(&candidate("A"), true),
                SelectionRecord::from_candidate(&candidate("B"), true),
            ])
            .unwrap();
        // 今回の一覧には B と C しか無い
        let uc = use_case(
            Ok(vec![candidate("B"), candidate("C")]),
            Arc::clone(&store),
            StalePolicy::Drop,
        );

        let outcome = uc.save(&ids(&["B", "C"])).unwrap();
        assert_eq!(outcome.updated_count, 2);

        let saved = store.load_records().unwrap();
        let saved_ids: Vec<&str> = saved.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(saved_ids, vec!["B", "C"]);
    }

    #[test]
    fn test_save_ignores_ghost_ids() {
        let store = Arc::new(MemoryStore::default());
        let uc = use_case(Ok(vec![candidate("B")]), Arc::clone(&store), StalePolicy::Drop);

        let outcome = uc.save(&ids(&["B", "ghost"])).unwrap();
        assert_eq!(outcome.updated_count, 1);

        let saved = store.load_records().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, "B");
        assert!(saved[0].selected);
    }

    #[test]
    fn test_save_empty_set_clears_selection() {
        let store = Arc::new(MemoryStore::default());
        store
            .save(&[SelectionRecord::from_candidate(&candidate("aa"), true)])
            .unwrap();
        let uc = use_case(Ok(vec![candidate("aa")]), Arc::clone(&store), StalePolicy::Drop);

        let outcome = uc.save(&BTreeSet::new()).unwrap();
        assert_eq!(outcome.updated_count, 0);
        let saved = store.load_records().unwrap();
        assert_eq!(saved.len(), 1);
        assert!(!saved[0].selected);
    }

    #[test]
    fn test_save_with_preserve_keeps_stale_selected_records() {
        let store = Arc::new(MemoryStore::default());
        store
            .save(&[SelectionRecord::from_candidate(&candidate("old"), true)])
            .unwrap();
        let uc = use_case(
            Ok(vec![candidate("new")]),
            Arc::clone(&store),
            StalePolicy::Preserve,
        );

        let outcome = uc.save(&ids(&["new"])).unwrap();
        // 持ち越した stale レコードは要求 id ではないので数えない
        assert_eq!(outcome.updated_count, 1);

        let saved = store.load_records().unwrap();
        let saved_ids: Vec<&str> = saved.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(saved_ids, vec!["new", "old"]);
    }

    #[test]
    fn test_save_propagates_upstream_error() {
        let uc = use_case(
            Err(Error::upstream("GitHub API request failed: timeout")),
            Arc::new(MemoryStore::default()),
            StalePolicy::Drop,
        );
        assert!(matches!(
            uc.save(&ids(&["aa"])).unwrap_err(),
            Error::Upstream(_)
        ));
    }
}
