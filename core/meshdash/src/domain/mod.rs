//! ドメイン型とルール（候補リポジトリ、選択状態、プロファイル成果物）

pub mod candidate;
pub mod command;
pub mod profile;
pub mod selection;

pub use candidate::{AnnotatedCandidate, CandidateRepo};
pub use profile::{Consensus, ProfileArtifact, RepoProfile};
pub use selection::{annotate, build_artifact, SelectionRecord, SelectionState, StalePolicy};
