use super::*;

#[test]
fn lcs_length_of_known_pairs() {
    assert_eq!(lcs_length("ABCDGH", "AEDFHR"), 3);
    assert_eq!(lcs_length("AGGTAB", "GXTXAYB"), 4);
    assert_eq!(lcs_length("", "abc"), 0);
}

#[test]
fn lcs_distance_subtracts_from_longer_length() {
    assert_eq!(lcs_distance("ABCDGH", "AEDFHR"), 3);
    assert_eq!(lcs_distance("AGGTAB", "GXTXAYB"), 3);
    assert_eq!(lcs_distance("", "abc"), 3);
    assert_eq!(lcs_distance("abc", "abc"), 0);
    assert_eq!(lcs_distance("", ""), 0);
}

#[test]
fn lcs_distance_is_symmetric() {
    let samples = ["", "abc", "acb", "ABCDGH", "AEDFHR"];
    for a in samples {
        for b in samples {
            assert_eq!(lcs_distance(a, b), lcs_distance(b, a));
        }
    }
}
