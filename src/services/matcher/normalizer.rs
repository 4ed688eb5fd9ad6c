//! Text normalization for roster names and storage folder names.
//! Every comparison in the matcher runs on the output of [`normalize`].

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Anything that is not a lowercase ASCII letter, digit or whitespace.
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("Invalid regex"));

/// Tokens at or below this length are initials or noise.
const MIN_TOKEN_LEN: usize = 2;

/// Canonicalize free text so accented, cased and punctuated variants compare equal.
///
/// Pipeline:
/// 1. Lowercase
/// 2. Canonical decomposition (NFD), dropping combining marks (`é` → `e`)
/// 3. Remove every character outside `[a-z0-9\s]`
/// 4. Collapse and trim whitespace
///
/// Total: empty or symbol-only input yields an empty string.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped: String = lower.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let clean = RE_NON_ALNUM.replace_all(&stripped, "");
    clean.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split already-normalized text into words, dropping single-letter tokens.
pub fn significant_tokens(normalized: &str) -> Vec<&str> {
    normalized
        .split(' ')
        .filter(|w| w.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
