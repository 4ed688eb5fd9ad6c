//! Best-candidate selection for a single member.

use super::scoring::score;
use super::types::{CandidateFolder, Member, RankedCandidate, FILE_BONUS, SCORE_FLOOR};

/// Pick the best folder for `member`, or `None` if nothing clears [`SCORE_FLOOR`].
///
/// Candidates are compared on adjusted score: raw similarity plus [`FILE_BONUS`]
/// when the folder holds files, since an empty folder is more often a stale
/// placeholder. Ties keep the first candidate seen.
pub fn rank(member: &Member, candidates: &[CandidateFolder]) -> Option<RankedCandidate> {
    let mut best: Option<RankedCandidate> = None;

    for candidate in candidates {
        let raw_score = score(&member.full_name, &candidate.name);
        if raw_score <= SCORE_FLOOR {
            continue;
        }

        let adjusted_score = adjusted(raw_score, candidate.file_count);
        let is_better = match &best {
            Some(current) => adjusted_score > current.adjusted_score,
            None => true,
        };
        if is_better {
            best = Some(RankedCandidate {
                folder: candidate.clone(),
                raw_score,
                adjusted_score,
            });
        }
    }

    best
}

fn adjusted(raw_score: f64, file_count: u32) -> f64 {
    if file_count > 0 {
        raw_score + FILE_BONUS
    } else {
        raw_score
    }
}

#[cfg(test)]
#[path = "tests/ranker_tests.rs"]
mod tests;
