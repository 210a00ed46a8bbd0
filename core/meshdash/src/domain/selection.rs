//! 選択状態のドメイン型と突き合わせロジック
//!
//! `annotate` / `build_artifact` は純関数。I/O はすべてポートの向こう側。

use crate::domain::candidate::{AnnotatedCandidate, CandidateRepo};
use std::collections::{BTreeMap, BTreeSet};

/// 永続化済みの選択状態（id -> selected）。読み込みのたびに作り直す
pub type SelectionState = BTreeMap<String, bool>;

/// repos.yaml の 1 エントリ
///
/// 保存は常に全レコードの作り直し（全置換）で、部分更新はしない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRecord {
    pub id: String,
    pub display_name: String,
    pub full_name: String,
    /// パイプラインが checkout する先。`./workspace/<id>` 固定
    pub local_path: String,
    pub selected: bool,
    /// 常に true。パイプラインにソースリポジトリへの書き込みは許可しない
    pub read_only: bool,
}

impl SelectionRecord {
    /// 候補リポジトリから保存用レコードを作る
    pub fn from_candidate(candidate: &CandidateRepo, selected: bool) -> Self {
        Self {
            id: candidate.id.clone(),
            display_name: candidate.id.clone(),
            full_name: candidate.full_name.clone(),
            local_path: format!("./workspace/{}", candidate.id),
            selected,
            read_only: true,
        }
    }
}

/// 前回保存分のうち、現在の一覧に存在しないレコードの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// 破棄する。保存は全置換であり、パイプラインの workspace 整理が
    /// 古いエントリの消滅に依存しうるため、これが既定
    #[default]
    Drop,
    /// selected のレコードだけそのまま持ち越す（--keep-stale）
    Preserve,
}

/// 候補一覧に保存済みの選択状態を重ねる
///
/// 入力順を保ち、候補を 1 件も落とさない。state にだけ存在する id は
/// 黙って無視する（上流で削除・改名されたリポジトリは次の保存まで
/// レコードが残っていても、見える集合からは自然に外れる）。
pub fn annotate(candidates: &[CandidateRepo], state: &SelectionState) -> Vec<AnnotatedCandidate> {
    candidates
        .iter()
        .map(|c| {
            let selected = state.get(&c.id).copied().unwrap_or(false);
            AnnotatedCandidate::new(c.clone(), selected)
        })
        .collect()
}

/// 現在の一覧と要求された選択集合から保存用レコード一式を作る
///
/// 候補 1 件につきレコード 1 件。`selected_ids` のうち一覧に無い id からは
/// レコードを作らない（エラーにもしない）。`policy` が `Preserve` の場合のみ、
/// 前回保存分で selected だったが一覧に無いレコードを末尾に持ち越す。
pub fn build_artifact(
    candidates: &[CandidateRepo],
    selected_ids: &BTreeSet<String>,
    prior: &[SelectionRecord],
    policy: StalePolicy,
) -> Vec<SelectionRecord> {
    let mut records: Vec<SelectionRecord> = candidates
        .iter()
        .map(|c| SelectionRecord::from_candidate(c, selected_ids.contains(&c.id)))
        .collect();

    if policy == StalePolicy::Preserve {
        let current: BTreeSet<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        for record in prior {
            if record.selected && !current.contains(record.id.as_str()) {
                records.push(record.clone());
            }
        }
    }

    records
}
