use super::*;

#[test]
fn test_normalize_lowercases_and_strips_accents() {
    assert_eq!(normalize("José García"), "jose garcia");
    assert_eq!(normalize("ÁLVARO NÚÑEZ"), "alvaro nunez");
    assert_eq!(normalize("Çelik Öztürk"), "celik ozturk");
}

#[test]
fn test_normalize_removes_punctuation_without_splitting() {
    // Removed characters are dropped, not replaced by a space.
    assert_eq!(normalize("Ana G."), "ana g");
    assert_eq!(normalize("García-López"), "garcialopez");
    assert_eq!(normalize("O'Brien (2023)"), "obrien 2023");
}

#[test]
fn test_normalize_collapses_whitespace() {
    assert_eq!(normalize("  Marta \t  Sanz\n"), "marta sanz");
}

#[test]
fn test_normalize_drops_non_latin_letters() {
    // Characters with no canonical decomposition to ASCII are removed.
    assert_eq!(normalize("Łukasz"), "ukasz");
    assert_eq!(normalize("神里"), "");
}

#[test]
fn test_normalize_is_total() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize("!!! ..."), "");
}

#[test]
fn test_significant_tokens_skips_initials() {
    assert_eq!(significant_tokens("marta s"), vec!["marta"]);
    assert_eq!(significant_tokens("j m garcia"), vec!["garcia"]);
    assert!(significant_tokens("").is_empty());
}
