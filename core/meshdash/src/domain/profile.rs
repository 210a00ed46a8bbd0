//! パイプライン出力成果物のデータモデル
//!
//! 成果物は外部パイプラインが書く読み取り専用の JSON。ここでは最小限の
//! 検証で受け流す。欠落・型違いのサブ構造は失敗ではなく空として扱う。

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// 成果物全体（repo_count + プロファイル一覧 + 合意ビュー）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileArtifact {
    pub repo_count: u64,
    pub profiles: Vec<RepoProfile>,
    pub consensus: Consensus,
}

/// リポジトリ 1 件分の導出プロファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoProfile {
    pub repo_id: String,
    pub skills: Vec<String>,
    pub intentions: Vec<String>,
    pub interests: Vec<String>,
    pub evidence_ids: Vec<String>,
}

/// リポジトリ横断の合意ビュー
///
/// `interest_map` の値が参照する repo_id が `profiles` に無くても
/// そのまま通す（表示側が空として描画する）。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Consensus {
    pub shared_skills: Vec<String>,
    pub shared_intentions: Vec<String>,
    pub interest_map: BTreeMap<String, Vec<String>>,
    pub repo_count: u64,
}

impl ProfileArtifact {
    /// JSON 値から成果物を組み立てる
    ///
    /// `repo_id` を持たないプロファイルは読み飛ばす。それ以外の欠落は
    /// 空のベクタ・マップ・0 に落とす。
    pub fn from_json(v: &Value) -> Self {
        let profiles = v["profiles"]
            .as_array()
            .map(|items| items.iter().filter_map(RepoProfile::from_json).collect())
            .unwrap_or_default();
        Self {
            repo_count: v["repo_count"].as_u64().unwrap_or(0),
            profiles,
            consensus: Consensus::from_json(&v["consensus"]),
        }
    }
}

impl RepoProfile {
    fn from_json(v: &Value) -> Option<Self> {
        let repo_id = v["repo_id"].as_str()?.to_string();
        Some(Self {
            repo_id,
            skills: string_list(&v["skills"]),
            intentions: string_list(&v["intentions"]),
            interests: string_list(&v["interests"]),
            evidence_ids: string_list(&v["evidence_ids"]),
        })
    }
}

impl Consensus {
    fn from_json(v: &Value) -> Self {
        let interest_map = v["interest_map"]
            .as_object()
            .map(|m| {
                m.iter()
                    .map(|(interest, repo_ids)| (interest.clone(), string_list(repo_ids)))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            shared_skills: string_list(&v["shared_skills"]),
            shared_intentions: string_list(&v["shared_intentions"]),
            interest_map,
            repo_count: v["repo_count"].as_u64().unwrap_or(0),
        }
    }
}

fn string_list(v: &Value) -> Vec<String> {
    v.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
