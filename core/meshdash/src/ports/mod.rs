//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: 候補一覧の取得・成果物の読み書き trait（common の
//!   FileSystem / EnvResolver / Log も利用）

pub mod inbound;
pub mod outbound;
