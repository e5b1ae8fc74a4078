use super::char_len;

/// `len(b) - len(a)` in characters. Positive when `b` is longer.
pub fn additions(a: &str, b: &str) -> i64 {
    char_len(b) - char_len(a)
}

/// Difference in `\n`-delimited segment counts.
///
/// This counts segments, not logical lines: `""` has one segment and
/// `"x\n"` has two.
pub fn line_count_diff(a: &str, b: &str) -> i64 {
    segments(b) - segments(a)
}

/// Difference in whitespace-separated word counts.
pub fn word_count_diff(a: &str, b: &str) -> i64 {
    words(b) - words(a)
}

fn segments(s: &str) -> i64 {
    i64::try_from(s.split('\n').count()).unwrap_or(i64::MAX)
}

fn words(s: &str) -> i64 {
    i64::try_from(s.split_whitespace().count()).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "../tests/metrics/counts_tests.rs"]
mod tests;
