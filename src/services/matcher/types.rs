//! Domain types for roster ↔ folder matching.
//!
//! Contains: Member, CandidateFolder, RankedCandidate, MatchOutcome, MatchResult
//! and the fixed scoring thresholds.

use serde::{Deserialize, Serialize};

/// Candidates scoring at or below this are noise and never surfaced.
pub const SCORE_FLOOR: f64 = 0.3;
/// Minimum raw score for an assignment to be applied without review.
pub const ACCEPT_THRESHOLD: f64 = 0.5;
/// Ranking bonus for folders that contain at least one file.
pub const FILE_BONUS: f64 = 0.3;
/// Scorer bonus when the first name token agrees.
pub const FIRST_TOKEN_BONUS: f64 = 0.2;

/// A registered roster member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    /// Given name and surname joined by a single space.
    pub full_name: String,
    /// Folder already linked to this member, if any.
    pub existing_folder_id: Option<String>,
}

impl Member {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            existing_folder_id: None,
        }
    }

    pub fn with_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.existing_folder_id = Some(folder_id.into());
        self
    }
}

/// A per-person folder found under `section / year / person` in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFolder {
    pub id: String,
    pub name: String,
    pub section_tag: String,
    pub year_tag: String,
    /// Direct (non-recursive) file count; proxy for "folder is in use".
    pub file_count: u32,
}

/// Best candidate picked by the ranker for one member.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub folder: CandidateFolder,
    /// Similarity in `[0, 1]`; the only score used for accept/review.
    pub raw_score: f64,
    /// `raw_score` plus the non-empty folder bonus; ranking only.
    pub adjusted_score: f64,
}

/// Terminal classification of a member within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOutcome {
    /// Member already had a folder and the run is not forced.
    AlreadyMapped,
    /// Confident match, applied unless dry-run.
    Matched,
    /// Plausible match surfaced for a human; never applied.
    NeedsReview,
    /// No candidate cleared the floor.
    NotFound,
    /// Matched, but persisting the link failed.
    Error,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::AlreadyMapped => write!(f, "ALREADY_MAPPED"),
            MatchOutcome::Matched => write!(f, "MATCHED"),
            MatchOutcome::NeedsReview => write!(f, "NEEDS_REVIEW"),
            MatchOutcome::NotFound => write!(f, "NOT_FOUND"),
            MatchOutcome::Error => write!(f, "ERROR"),
        }
    }
}

/// Per-member result of one reconciliation run. Never persisted itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub member_id: String,
    pub member_name: String,
    pub outcome: MatchOutcome,
    pub folder_id: Option<String>,
    /// Snapshot of the proposed folder, when one came from the candidate tree.
    pub folder: Option<CandidateFolder>,
    pub raw_score: f64,
    pub adjusted_score: f64,
    /// Failure detail for `MatchOutcome::Error`.
    pub error: Option<String>,
}

impl MatchResult {
    /// Whether the driver should write this result back.
    pub fn is_applicable(&self) -> bool {
        self.outcome == MatchOutcome::Matched && self.folder_id.is_some()
    }
}
