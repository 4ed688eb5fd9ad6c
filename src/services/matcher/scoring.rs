//! Name similarity between a roster member and a storage folder.

use super::normalizer::{normalize, significant_tokens};
use super::types::FIRST_TOKEN_BONUS;

const SCORE_MIN: f64 = 0.0;
const SCORE_MAX: f64 = 1.0;

/// Score how well `folder_name` describes `member_full_name`, in `[0, 1]`.
///
/// The base score is the fraction of folder tokens recognizable in the member's
/// name. Folder names are the noisy side, so unrelated words in the folder cost
/// more than extra given names or surnames on the member.
///
/// A folder token is covered when it equals a member token or either one
/// contains the other (`luis` ⊂ `luisa`, truncated surnames). Agreement on the
/// first token adds [`FIRST_TOKEN_BONUS`].
pub fn score(member_full_name: &str, folder_name: &str) -> f64 {
    let member = normalize(member_full_name);
    let folder = normalize(folder_name);

    if !folder.is_empty() && member == folder {
        return SCORE_MAX;
    }

    let folder_tokens = significant_tokens(&folder);
    if folder_tokens.is_empty() {
        return SCORE_MIN;
    }
    let member_tokens = significant_tokens(&member);

    let covered = folder_tokens
        .iter()
        .filter(|f| token_covered(f, &member_tokens))
        .count();
    let base = covered as f64 / folder_tokens.len() as f64;

    let bonus = match (member_tokens.first(), folder_tokens.first()) {
        (Some(m), Some(f)) if m == f => FIRST_TOKEN_BONUS,
        _ => 0.0,
    };

    (base + bonus).clamp(SCORE_MIN, SCORE_MAX)
}

fn token_covered(folder_token: &str, member_tokens: &[&str]) -> bool {
    member_tokens
        .iter()
        .any(|m| *m == folder_token || m.contains(folder_token) || folder_token.contains(*m))
}

#[cfg(test)]
#[path = "tests/scoring_tests.rs"]
mod tests;
