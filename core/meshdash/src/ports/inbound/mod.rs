//! Inbound ポート: CLI がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// CLI から Config を受け取りコマンドを実行する（match は main レイヤーに集約）
pub trait UseCaseRunner {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
