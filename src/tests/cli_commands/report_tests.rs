use super::*;

#[test]
fn no_flags_request_nothing() {
    assert!(MetricArgs::default().requested().is_empty());
}

#[test]
fn flags_map_to_canonical_names() {
    let args = MetricArgs {
        damerau_levenshtein: true,
        ..MetricArgs::default()
    };
    assert_eq!(args.requested(), vec!["damerau-levenshtein".to_string()]);
}

#[test]
fn flags_and_names_are_all_forwarded() {
    let args = MetricArgs {
        hamming: true,
        word_diff: true,
        metric: vec!["lcs".to_string()],
        ..MetricArgs::default()
    };
    assert_eq!(
        args.requested(),
        vec![
            "hamming".to_string(),
            "word-diff".to_string(),
            "lcs".to_string()
        ]
    );
}
