use std::iter;

/// Hamming distance after right-padding the shorter string with spaces.
///
/// Trailing spaces in the content are indistinguishable from padding, so
/// `hamming("ab ", "ab") == 0`.
pub fn hamming(a: &str, b: &str) -> usize {
    let len = a.chars().count().max(b.chars().count());
    let pad = || iter::repeat(' ');

    a.chars()
        .chain(pad())
        .zip(b.chars().chain(pad()))
        .take(len)
        .filter(|(x, y)| x != y)
        .count()
}

#[cfg(test)]
#[path = "../tests/metrics/hamming_tests.rs"]
mod tests;
