//! Accept / review / reject decision for one member.

use super::types::{MatchOutcome, MatchResult, Member, RankedCandidate, ACCEPT_THRESHOLD};

/// Classify a member from its ranking result and current link state.
///
/// Acceptance looks at the raw score only; the file bonus never turns a
/// review candidate into an automatic match.
pub fn classify(member: &Member, best: Option<&RankedCandidate>, force: bool) -> MatchResult {
    if let Some(existing) = member.existing_folder_id.as_ref().filter(|_| !force) {
        return MatchResult {
            member_id: member.id.clone(),
            member_name: member.full_name.clone(),
            outcome: MatchOutcome::AlreadyMapped,
            folder_id: Some(existing.clone()),
            folder: None,
            raw_score: 0.0,
            adjusted_score: 0.0,
            error: None,
        };
    }

    let Some(best) = best else {
        return MatchResult {
            member_id: member.id.clone(),
            member_name: member.full_name.clone(),
            outcome: MatchOutcome::NotFound,
            folder_id: None,
            folder: None,
            raw_score: 0.0,
            adjusted_score: 0.0,
            error: None,
        };
    };

    let outcome = if best.raw_score >= ACCEPT_THRESHOLD {
        MatchOutcome::Matched
    } else {
        MatchOutcome::NeedsReview
    };

    MatchResult {
        member_id: member.id.clone(),
        member_name: member.full_name.clone(),
        outcome,
        folder_id: Some(best.folder.id.clone()),
        folder: Some(best.folder.clone()),
        raw_score: best.raw_score,
        adjusted_score: best.adjusted_score,
        error: None,
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
