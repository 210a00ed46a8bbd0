//! meshdash コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、match でディスパッチする。

/// meshdash のサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示（コマンド未指定時もこれ）
    Help,

    /// 候補一覧 + 選択状態を JSON で出力（repos list）
    ReposList,

    /// 選択集合を保存（repos save [--keep-stale] [id...]）
    /// id を 1 つも渡さなければ全解除として保存する
    ReposSave { ids: Vec<String> },

    /// パイプライン成果物を表示（profile）
    Profile,

    /// 未知のコマンド（エラー用）
    Unknown(String),
}

impl Command {
    /// コマンド名と引数から Command に解析する
    pub fn parse_with_args(name: &str, args: &[String]) -> Self {
        if name == "repos" {
            match args.first().map(|s| s.as_str()) {
                Some("list") => return Command::ReposList,
                Some("save") => {
                    return Command::ReposSave {
                        ids: args[1..].to_vec(),
                    }
                }
                _ => {
                    let sub = args.first().cloned().unwrap_or_default();
                    return Command::Unknown(format!("repos {}", sub).trim_end().to_string());
                }
            }
        }
        if name == "profile" {
            return Command::Profile;
        }
        Command::Unknown(name.to_string())
    }
}
