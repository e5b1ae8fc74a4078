use super::*;

#[test]
fn counts_differing_positions() {
    assert_eq!(hamming("abc", "abd"), 1);
    assert_eq!(hamming("abc", "abc"), 0);
    assert_eq!(hamming("", ""), 0);
}

#[test]
fn pads_shorter_side_with_spaces() {
    // "ab" becomes "ab  " and differs from "abcd" at positions 2 and 3.
    assert_eq!(hamming("ab", "abcd"), 2);
    assert_eq!(hamming("abcd", "ab"), 2);
    assert_eq!(hamming("", "  x"), 1);
}

#[test]
fn trailing_spaces_look_like_padding() {
    assert_eq!(hamming("ab ", "ab"), 0);
    assert_eq!(hamming("ab", "ab   "), 0);
}
