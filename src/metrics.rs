//! Distance and difference functions over pairs of strings.
//!
//! Every function here is total and pure. Lengths and positions are counted in
//! `char`s, so multi-byte text is compared character by character.

mod counts;
mod edit;
mod hamming;
mod jaro;
mod kind;
mod lcs;

pub use self::counts::{additions, line_count_diff, word_count_diff};
pub use self::edit::{damerau_levenshtein, levenshtein};
pub use self::hamming::hamming;
pub use self::jaro::{jaro_similarity, jaro_winkler_distance, jaro_winkler_similarity};
pub use self::kind::{MetricFn, MetricKind, MetricSign};
pub use self::lcs::{lcs_distance, lcs_length};

fn to_chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn char_len(s: &str) -> i64 {
    i64::try_from(s.chars().count()).unwrap_or(i64::MAX)
}
