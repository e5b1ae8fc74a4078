use super::*;

#[test]
fn levenshtein_counts_unit_cost_edits() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("flaw", "lawn"), 2);
    assert_eq!(levenshtein("abc", "abc"), 0);
}

#[test]
fn levenshtein_against_empty_is_length() {
    assert_eq!(levenshtein("", ""), 0);
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("abc", ""), 3);
}

#[test]
fn levenshtein_compares_chars_not_bytes() {
    assert_eq!(levenshtein("café", "cafe"), 1);
    assert_eq!(levenshtein("日本語", "日本"), 1);
}

#[test]
fn damerau_counts_adjacent_swap_once() {
    assert_eq!(damerau_levenshtein("ab", "ba"), 1);
    assert_eq!(levenshtein("ab", "ba"), 2);
    assert_eq!(damerau_levenshtein("a cat", "a act"), 1);
}

#[test]
fn damerau_is_restricted_to_non_overlapping_swaps() {
    // Optimal string alignment cannot edit a transposed pair again.
    assert_eq!(damerau_levenshtein("ca", "abc"), 3);
}

#[test]
fn damerau_matches_levenshtein_without_swaps() {
    for (a, b) in [("kitten", "sitting"), ("", "xyz"), ("same", "same")] {
        assert_eq!(damerau_levenshtein(a, b), levenshtein(a, b), "{a:?} vs {b:?}");
    }
}

#[test]
fn edit_distances_are_symmetric() {
    let samples = ["", "a", "ab", "ba", "kitten", "sitting", "fn main() {}\n"];
    for a in samples {
        for b in samples {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
            assert_eq!(damerau_levenshtein(a, b), damerau_levenshtein(b, a));
        }
        assert_eq!(levenshtein(a, a), 0);
        assert_eq!(damerau_levenshtein(a, a), 0);
    }
}
