use super::*;

#[test]
fn additions_is_length_difference() {
    assert_eq!(additions("abc", "abcdef"), 3);
    assert_eq!(additions("abcdef", "abc"), -3);
    assert_eq!(additions("", ""), 0);
    assert_eq!(additions("é", "ée"), 1);
}

#[test]
fn line_count_diff_counts_segments() {
    assert_eq!(line_count_diff("line1\nline2", "line1\nline2\nline3"), 1);
    assert_eq!(line_count_diff("", ""), 0);
    assert_eq!(line_count_diff("", "\n"), 1);
}

#[test]
fn trailing_newline_adds_a_segment() {
    assert_eq!(line_count_diff("a", "a\n"), 1);
    assert_eq!(line_count_diff("a\nb\n", "a\nb"), -1);
}

#[test]
fn word_count_diff_splits_on_whitespace_runs() {
    assert_eq!(word_count_diff("hello world", "hello world test"), 1);
    assert_eq!(word_count_diff("a  b\tc\n", ""), -3);
    assert_eq!(word_count_diff("   \n\t", ""), 0);
}

#[test]
fn difference_metrics_are_antisymmetric() {
    let samples = ["", " ", "one", "one two\n", "x\ny\nz\n", "  spaced   out  "];
    for a in samples {
        for b in samples {
            assert_eq!(additions(a, b), -additions(b, a));
            assert_eq!(line_count_diff(a, b), -line_count_diff(b, a));
            assert_eq!(word_count_diff(a, b), -word_count_diff(b, a));
        }
    }
}
