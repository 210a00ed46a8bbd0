//! repos.yaml の読み書き
//!
//! 対象は自前で書き出す閉じたサブセット（フラットな key/value ブロックの
//! フラットなリスト）だけなので、汎用 YAML パーサではなく専用の小さな
//! 文法で読む。手編集された成果物も想定し、読み込みは徹底して寛容:
//! 未知のキー・余分な空白・引用符の有無は無視し、`repo_id` か `selected`
//! を欠くブロックはエラーにせず読み飛ばす。書き出しは常に正規形。

use crate::domain::{SelectionRecord, SelectionState};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// ブロック区切り（リスト 1 エントリの開始）
fn block_delimiter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^  - ").expect("fixed delimiter pattern"))
}

/// ブロック内の `key: value` 行
fn key_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^\s*([A-Za-z_][A-Za-z0-9_]*):[ \t]*(.*?)[ \t]*$")
            .expect("fixed key/value pattern")
    })
}

/// テキストから選択状態（id -> selected）を復元する
///
/// どんな入力でもエラーにならない。解釈できるブロックが無ければ空。
pub fn decode(text: &str) -> SelectionState {
    decode_records(text)
        .into_iter()
        .map(|r| (r.id, r.selected))
        .collect()
}

/// テキストからレコード一覧を復元する
///
/// `repo_id` と `selected`（true / false）が取れたブロックだけをレコードに
/// する。その他のフィールドは欠けていれば既定値で補う。
pub fn decode_records(text: &str) -> Vec<SelectionRecord> {
    let mut records = Vec::new();
    for block in block_delimiter_re().split(text).skip(1) {
        let fields = scan_fields(block);
        let Some(id) = fields.get("repo_id").filter(|v| !v.is_empty()) else {
            continue;
        };
        let Some(selected) = fields.get("selected").and_then(|v| parse_bool(v)) else {
            continue;
        };
        records.push(SelectionRecord {
            id: id.clone(),
            display_name: fields
                .get("display_name")
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| id.clone()),
            full_name: fields
                .get("github_full_name")
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| id.clone()),
            local_path: fields
                .get("local_path")
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("./workspace/{}", id)),
            selected,
            read_only: fields
                .get("read_only")
                .and_then(|v| parse_bool(v))
                .unwrap_or(true),
        });
    }
    records
}

/// レコード一式を正規形のテキストにする
///
/// フィールドは固定順、文字列は二重引用符、真偽値は裸のリテラル。
/// 空のレコード列はトップレベルキーだけを出力する。
pub fn encode(records: &[SelectionRecord]) -> String {
    let blocks: Vec<String> = records
        .iter()
        .map(|r| {
            [
                format!("  - repo_id: \"{}\"", r.id),
                format!("    display_name: \"{}\"", r.display_name),
                format!("    github_full_name: \"{}\"", r.full_name),
                format!("    local_path: \"{}\"", r.local_path),
                format!("    selected: {}", r.selected),
                format!("    read_only: {}", r.read_only),
            ]
            .join("\n")
        })
        .collect();
    format!("repos:\n{}", blocks.join("\n"))
}

/// ブロック内の key/value 行を拾う。値の引用符はあってもなくてもよい
fn scan_fields(block: &str) -> BTreeMap<String, String> {
    key_value_re()
        .captures_iter(block)
        .map(|caps| {
            let key = caps[1].to_string();
            let value = caps[2].trim_matches(|c| c == '"' || c == '\'').to_string();
            (key, value)
        })
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CandidateRepo;

    fn record(id: &str, selected: bool) -> SelectionRecord {
        let candidate = CandidateRepo {
            id: id.to_string(),
            full_name: format!("alice/{}", id),
            description: String::new(),
            language: String::new(),
            updated_at: String::new(),
        };
        SelectionRecord::from_candidate(&candidate, selected)
    }

    #[test]
    fn test_round_trip_preserves_selection_mapping() {
        let records = vec![record("aa", true), record("bb", false), record("cc", true)];
        let state = decode(&encode(&records));
        assert_eq!(state.len(), 3);
        assert_eq!(state["aa"], true);
        assert_eq!(state["bb"], false);
        assert_eq!(state["cc"], true);
    }

    #[test]
    fn test_encode_canonical_form() {
        let text = encode(&[record("mesh-tools", true)]);
        let expected = concat!(
            "repos:\n",
            "  - repo_id: \"mesh-tools\"\n",
            "    display_name: \"mesh-tools\"\n",
            "    github_full_name: \"alice/mesh-tools\"\n",
            "    local_path: \"./workspace/mesh-tools\"\n",
            "    selected: true\n",
            "    read_only: true",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_encode_empty_is_valid_and_decodes_empty() {
        let text = encode(&[]);
        assert_eq!(text, "repos:\n");
        assert!(decode(&text).is_empty());
    }

    #[test]
    fn test_decode_tolerates_hand_edited_blocks() {
        // キー順の入れ替え、引用符なし、未知のキー、余分な空白
        let text = concat!(
            "repos:\n",
            "\n",
            "  - selected: true\n",
            "    repo_id: plain\n",
            "    note: added by hand\n",
            "\n",
            "  - repo_id: 'single'\n",
            "    github_full_name: \"alice/single\"\n",
            "    selected:   false\n",
        );
        let state = decode(text);
        assert_eq!(state.len(), 2);
        assert_eq!(state["plain"], true);
        assert_eq!(state["single"], false);
    }

    #[test]
    fn test_decode_skips_block_missing_selected() {
        let text = concat!(
            "repos:\n",
            "  - repo_id: \"good\"\n",
            "    selected: true\n",
            "  - repo_id: \"broken\"\n",
            "    display_name: \"broken\"\n",
        );
        let state = decode(text);
        assert_eq!(state.len(), 1);
        assert_eq!(state["good"], true);
    }

    #[test]
    fn test_decode_skips_block_missing_repo_id() {
        let text = concat!(
            "repos:\n",
            "  - display_name: \"anonymous\"\n",
            "    selected: true\n",
            "  - repo_id: \"named\"\n",
            "    selected: false\n",
        );
        let state = decode(text);
        assert_eq!(state.len(), 1);
        assert_eq!(state["named"], false);
    }

    #[test]
    fn test_decode_skips_non_boolean_selected() {
        let text = "repos:\n  - repo_id: \"odd\"\n    selected: yes\n";
        assert!(decode(text).is_empty());
    }

    #[test]
    fn test_decode_arbitrary_text_is_empty() {
        assert!(decode("").is_empty());
        assert!(decode("not an artifact at all\n").is_empty());
        assert!(decode("repos:\n").is_empty());
    }

    #[test]
    fn test_decode_records_fills_defaults() {
        let text = "repos:\n  - repo_id: bare\n    selected: true\n";
        let records = decode_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_name, "bare");
        assert_eq!(records[0].full_name, "bare");
        assert_eq!(records[0].local_path, "./workspace/bare");
        assert!(records[0].read_only);
    }

    #[test]
    fn test_decode_records_reads_all_fields() {
        let records = vec![record("full", true)];
        let decoded = decode_records(&encode(&records));
        assert_eq!(decoded, records);
    }
}
