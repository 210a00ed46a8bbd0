//! GitHub からの候補リポジトリ一覧取得
//!
//! 更新順で 1 ページ分だけ取る（ページ送りはしない）。レスポンスが
//! おかしい場合は警告ログを残して空の一覧に落とし、UI は「リポジトリなし」
//! を描画できるようにする。資格情報の欠如と上流への未到達だけは
//! 区別可能なエラーとして返す。

use crate::domain::CandidateRepo;
use crate::ports::outbound::RepoListing;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use serde_json::Value;
use std::sync::Arc;

const USER_AGENT: &str = "meshdash";

/// GitHub /user/repos を読む RepoListing 実装
pub struct GithubRepoListing {
    token: Option<String>,
    base_url: String,
    page_size: u32,
    logger: Arc<dyn Log>,
}

impl GithubRepoListing {
    /// # Arguments
    /// * `token` - bearer トークン。None のまま fetch すると `Error::Env`
    /// * `base_url` - 例: "https://api.github.com"（テストでは差し替える）
    /// * `page_size` - 1 ページの件数上限
    pub fn new(
        token: Option<String>,
        base_url: impl Into<String>,
        page_size: u32,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            token,
            base_url: base_url.into(),
            page_size,
            logger,
        }
    }

    fn warn(&self, message: String) {
        // ログ出力の失敗で一覧取得を壊さない
        let _ = self
            .logger
            .log(&LogRecord::new(LogLevel::Warn, message, "adapter"));
    }
}

impl RepoListing for GithubRepoListing {
    fn fetch(&self) -> Result<Vec<CandidateRepo>, Error> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::env("GITHUB_TOKEN is not set"))?;

        let url = format!(
            "{}/user/repos?per_page={}&sort=updated",
            self.base_url, self.page_size
        );
        let client = reqwest::blocking::Client::new();
        let response = client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .send()
            .map_err(|e| Error::upstream(format!("GitHub API request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| Error::upstream(format!("Failed to read GitHub response: {}", e)))?;

        if !status.is_success() {
            self.warn(format!(
                "GitHub API returned {}; treating listing as empty",
                status
            ));
            return Ok(Vec::new());
        }

        let v: Value = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(e) => {
                self.warn(format!("GitHub response is not JSON ({}); treating listing as empty", e));
                return Ok(Vec::new());
            }
        };
        let Some(items) = v.as_array() else {
            self.warn("GitHub response is not a list; treating listing as empty".to_string());
            return Ok(Vec::new());
        };

        Ok(items.iter().filter_map(candidate_from_json).collect())
    }
}

/// 一覧の 1 件を候補に変換する。name / full_name を欠くものは読み飛ばす
fn candidate_from_json(v: &Value) -> Option<CandidateRepo> {
    let id = v["name"].as_str()?.to_string();
    let full_name = v["full_name"].as_str()?.to_string();
    Some(CandidateRepo {
        id,
        full_name,
        description: v["description"].as_str().unwrap_or("").to_string(),
        language: v["language"].as_str().unwrap_or("").to_string(),
        updated_at: v["updated_at"].as_str().unwrap_or("").to_string(),
    })
}
