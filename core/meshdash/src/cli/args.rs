use crate::domain::command::Command;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

/// CLI から受け取った生の設定（command は文字列のまま保持）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    pub mesh_dir: Option<String>,
    /// repos save --keep-stale（一覧から消えた選択済みレコードを持ち越す）
    pub keep_stale: bool,
    /// コマンド名（None の場合はヘルプ表示）
    pub command_name: Option<String>,
    pub command_args: Vec<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("mesh-dir")
                .short('m')
                .long("mesh-dir")
                .value_name("directory")
                .help("Specify the mesh workspace directory (sets MESHDASH_MESH_DIR for this process)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn build_repos_subcommand() -> clap::Command {
    clap::Command::new("repos")
        .about("Repository selection: list / save")
        .subcommand_required(true)
        .subcommand(
            clap::Command::new("list")
                .about("List candidate repositories with their selection state (JSON)"),
        )
        .subcommand(
            clap::Command::new("save")
                .about("Persist a new selection set (pass no ids to clear the selection)")
                .arg(
                    clap::Arg::new("keep-stale")
                        .long("keep-stale")
                        .help("Carry over selected entries that vanished from the listing")
                        .action(ArgAction::SetTrue),
                )
                .arg(clap::Arg::new("ids").num_args(0..).value_name("id")),
        )
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new("meshdash")
            .about("Dashboard backend for the repo mesh analysis pipeline")
            .subcommand_required(false)
            .disable_help_subcommand(true)
            .subcommand(clap::Command::new("help").about("Display this help message"))
            .subcommand(build_repos_subcommand())
            .subcommand(
                clap::Command::new("profile").about("Show the latest pipeline profile artifact"),
            ),
    )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help") || matches.subcommand_matches("help").is_some();
    let mesh_dir = matches.get_one::<String>("mesh-dir").cloned();

    let mut keep_stale = false;
    let (command_name, command_args) = match matches.subcommand() {
        None => (None, Vec::new()),
        Some(("help", _)) => (None, Vec::new()),
        Some(("repos", repos_m)) => {
            let (sub, args) = match repos_m.subcommand() {
                Some(("list", _)) => ("list", vec![]),
                Some(("save", m)) => {
                    keep_stale = m.get_flag("keep-stale");
                    (
                        "save",
                        m.get_many::<String>("ids")
                            .map(|i| i.cloned().collect())
                            .unwrap_or_default(),
                    )
                }
                _ => ("", vec![]),
            };
            let mut command_args = vec![sub.to_string()];
            command_args.extend(args);
            (Some("repos".to_string()), command_args)
        }
        Some((name, _)) => (Some(name.to_string()), vec![]),
    };

    Config {
        help,
        mesh_dir,
        keep_stale,
        command_name,
        command_args,
    }
}

/// Config を Command に落とす（コマンド未指定・help はヘルプ表示）
pub fn config_to_command(config: &Config) -> Command {
    if config.help {
        return Command::Help;
    }
    match &config.command_name {
        None => Command::Help,
        Some(name) => Command::parse_with_args(name, &config.command_args),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は
/// ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
/// 注: clap_complete::generate は当コマンド構成でパニックするため、簡易フォールバックを常に使用する。
pub fn print_completion(shell: Shell) {
    emit_fallback_completion(shell);
}

fn emit_fallback_completion(shell: Shell) {
    let subcommands = ["help", "profile", "repos"];
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for meshdash (subcommands only)
_meshdash() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{}" -- "$cur"))
}}
complete -F _meshdash meshdash
"#,
                subcommands.join(" ")
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for meshdash (subcommands only)
#compdef meshdash
local subcommands
subcommands=({})
_describe 'command' subcommands
"#,
                subcommands
                    .iter()
                    .map(|s| format!("\"{}\"", s))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for meshdash (subcommands only)
complete -c meshdash -a "{}"
"#,
                subcommands.join(" ")
            );
        }
        _ => {}
    }
}
