//! 候補リポジトリ（上流 API の一覧 1 件分）

use serde::Serialize;

/// 一覧取得時点の GitHub リポジトリ
///
/// 取得のたびに作り直す。オブジェクトとしては永続化せず、
/// 選択状態（SelectionRecord）としてのみ保存される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRepo {
    /// リポジトリ名。1 回の一覧レスポンス内で一意
    pub id: String,
    /// owner/name 形式。永続化にのみ使い、参照キーには使わない
    pub full_name: String,
    /// 表示用メタデータ（無ければ空文字）
    pub description: String,
    pub language: String,
    pub updated_at: String,
}

/// UI に返す 1 行分（CandidateRepo + 選択フラグ）
///
/// JSON のフィールド名は UI・パイプラインと共有する形に合わせる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedCandidate {
    #[serde(rename = "repo_id")]
    pub id: String,
    pub display_name: String,
    #[serde(rename = "github_full_name")]
    pub full_name: String,
    pub description: String,
    pub language: String,
    pub updated_at: String,
    pub selected: bool,
}

impl AnnotatedCandidate {
    pub fn new(candidate: CandidateRepo, selected: bool) -> Self {
        Self {
            display_name: candidate.id.clone(),
            id: candidate.id,
            full_name: candidate.full_name,
            description: candidate.description,
            language: candidate.language,
            updated_at: candidate.updated_at,
            selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotated_candidate_json_shape() {
        let c = CandidateRepo {
            id: "mesh-tools".to_string(),
            full_name: "alice/mesh-tools".to_string(),
            description: "Helper scripts".to_string(),
            language: "Rust".to_string(),
            updated_at: "2026-07-30T10:00:00Z".to_string(),
        };
        let json = serde_json::to_value(AnnotatedCandidate::new(c, true)).unwrap();
        assert_eq!(json["repo_id"], "mesh-tools");
        assert_eq!(json["display_name"], "mesh-tools");
        assert_eq!(json["github_full_name"], "alice/mesh-tools");
        assert_eq!(json["language"], "Rust");
        assert_eq!(json["selected"], true);
    }
}
