mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

use std::collections::BTreeSet;
use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use domain::command::Command;
use domain::{AnnotatedCandidate, ProfileArtifact, StalePolicy};
use ports::inbound::UseCaseRunner;
use wiring::{wire_meshdash, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        match config_to_command(&config) {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::ReposList => {
                let repos = self.app.repos_use_case.list()?;
                println!("{}", repos_json(&repos)?);
                Ok(0)
            }
            Command::ReposSave { ids } => {
                let selected: BTreeSet<String> = ids.into_iter().collect();
                let outcome = self.app.repos_use_case.save(&selected)?;
                println!(
                    "{}",
                    serde_json::json!({ "ok": true, "updated": outcome.updated_count })
                );
                Ok(0)
            }
            Command::Profile => {
                match self.app.profile_use_case.show()? {
                    Some(artifact) => println!("{}", profile_json(&artifact)?),
                    // 成果物の不在は障害ではなく「まだ無い」状態
                    None => println!("No mesh output yet. Run the pipeline first."),
                }
                Ok(0)
            }
            Command::Unknown(name) => Err(Error::invalid_argument(format!(
                "Command '{}' is not implemented.",
                name
            ))),
        }
    }
}

/// UI が読む一覧 JSON（{"repos": [...]}）
fn repos_json(repos: &[AnnotatedCandidate]) -> Result<String, Error> {
    serde_json::to_string(&serde_json::json!({ "repos": repos }))
        .map_err(|e| Error::json(e.to_string()))
}

fn profile_json(artifact: &ProfileArtifact) -> Result<String, Error> {
    serde_json::to_string(artifact).map_err(|e| Error::json(e.to_string()))
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("meshdash: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: meshdash [-h] [-m|--mesh-dir directory] [<command> [args...]]");
}

fn print_help() {
    println!("Usage: meshdash [-h] [-m|--mesh-dir directory] [<command> [args...]]");
    println!("  -h, --help            Display this help message.");
    println!("  -m, --mesh-dir        Specify the mesh workspace directory (sets MESHDASH_MESH_DIR for this process).");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish). Source the output to enable tab completion.");
    println!();
    println!("Environment:");
    println!("  GITHUB_TOKEN        Bearer token for the GitHub listing call (required for repos commands).");
    println!("  MESHDASH_MESH_DIR   Mesh workspace directory holding config/repos.yaml and output/latest_profile.json. Default: ./repo_mesh.");
    println!("  MESHDASH_LOG        Structured JSONL log file. Unset: logging is disabled.");
    println!();
    println!("Commands:");
    println!("  repos list                        List candidate repositories with their selection state (JSON).");
    println!("  repos save [--keep-stale] [id...] Persist a new selection set (full replace; no ids clears the selection).");
    println!("  profile                           Show the latest pipeline profile artifact.");
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match &outcome {
        ParseOutcome::Config(c) => c.clone(),
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(*shell);
            return Ok(0);
        }
    };
    // -m/--mesh-dir 指定時は MESHDASH_MESH_DIR を設定し、resolve_mesh_dir() がその値を使うようにする
    if let Some(ref dir) = config.mesh_dir {
        std::env::set_var("MESHDASH_MESH_DIR", dir);
    }
    let policy = if config.keep_stale {
        StalePolicy::Preserve
    } else {
        StalePolicy::Drop
    };
    let app = wire_meshdash(policy);
    let runner = Runner { app };
    runner.run(config)
}
