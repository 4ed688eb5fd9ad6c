//! Roster ↔ storage folder matcher.
//!
//! Pure pipeline: normalize → score → rank → classify. Nothing here touches
//! storage or the database; the reconcile driver owns all I/O.
pub mod classifier;
pub mod normalizer;
pub mod ranker;
pub mod scoring;
pub mod types;

pub use classifier::classify;
pub use normalizer::normalize;
pub use ranker::rank;
pub use scoring::score;
pub use types::{
    CandidateFolder, MatchOutcome, MatchResult, Member, RankedCandidate, ACCEPT_THRESHOLD,
    FILE_BONUS, FIRST_TOKEN_BONUS, SCORE_FLOOR,
};

/// Rank and classify one member against the candidate snapshot.
pub fn match_member(member: &Member, candidates: &[CandidateFolder], force: bool) -> MatchResult {
    // Ranking is skipped for mapped members; classify would discard it anyway.
    if let Some(existing) = member.existing_folder_id.as_deref().filter(|_| !force) {
        let mut result = classify(member, None, force);
        // The linked folder may have moved or been deleted since; leave it bare then.
        result.folder = candidates.iter().find(|c| c.id == existing).cloned();
        return result;
    }
    let best = rank(member, candidates);
    classify(member, best.as_ref(), force)
}
