use super::to_chars;

const MAX_PREFIX: usize = 4;
const PREFIX_WEIGHT: f64 = 0.1;

/// Jaro similarity in `[0, 1]`; `1.0` for identical strings.
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a = to_chars(a);
    let b = to_chars(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ch) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if !b_matched[j] && b[j] == *ch {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_seq = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let mismatched = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();

    let m = matches as f64;
    let t = mismatched as f64 / 2.0;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro similarity boosted by a shared prefix of up to four characters.
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    let jaro = jaro_similarity(a, b);
    let prefix = a
        .chars()
        .zip(b.chars())
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();
    jaro + PREFIX_WEIGHT * prefix as f64 * (1.0 - jaro)
}

/// `1 - jaro_winkler_similarity(a, b)`.
pub fn jaro_winkler_distance(a: &str, b: &str) -> f64 {
    if a == b {
        return 0.0;
    }
    1.0 - jaro_winkler_similarity(a, b)
}

#[cfg(test)]
#[path = "../tests/metrics/jaro_tests.rs"]
mod tests;
