//! Ports & Adapters のポート定義
//!
//! - outbound: アプリが外界（ファイル・環境変数・ログ）を使うための trait

pub mod outbound;
