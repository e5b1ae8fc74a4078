use super::to_chars;

/// Unit-cost insert/delete/substitute edit distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = to_chars(a);
    let b = to_chars(b);
    let n = b.len();

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut cur = vec![0usize; n + 1];

    for i in 1..=a.len() {
        cur[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            cur[j] = (prev[j] + 1).min(cur[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[n]
}

/// Levenshtein distance that also counts swapping two adjacent characters as
/// a single edit (optimal string alignment).
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a = to_chars(a);
    let b = to_chars(b);
    let n = b.len();

    // Rows i-2, i-1 and i of the full table.
    let mut before: Vec<usize> = vec![0; n + 1];
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut cur = vec![0usize; n + 1];

    for i in 1..=a.len() {
        cur[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (prev[j] + 1).min(cur[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(before[j - 2] + cost);
            }
            cur[j] = best;
        }
        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[n]
}

#[cfg(test)]
#[path = "../tests/metrics/edit_tests.rs"]
mod tests;
