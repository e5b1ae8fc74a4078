use super::to_chars;

/// Length of the longest common (not necessarily contiguous) subsequence.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a = to_chars(a);
    let b = to_chars(b);
    let n = b.len();

    let mut prev = vec![0usize; n + 1];
    let mut cur = vec![0usize; n + 1];

    for i in 1..=a.len() {
        cur[0] = 0;
        for j in 1..=n {
            cur[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(cur[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[n]
}

/// `max(len(a), len(b)) - lcs_length(a, b)`.
pub fn lcs_distance(a: &str, b: &str) -> usize {
    let max = a.chars().count().max(b.chars().count());
    max - lcs_length(a, b)
}

#[cfg(test)]
#[path = "../tests/metrics/lcs_tests.rs"]
mod tests;
