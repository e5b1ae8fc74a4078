use super::*;

#[test]
fn canonical_names_parse_back() {
    for kind in MetricKind::ALL {
        assert_eq!(kind.canonical_name().parse::<MetricKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.canonical_name());
    }
}

#[test]
fn aliases_and_case_are_accepted() {
    assert_eq!("Damerau".parse(), Ok(MetricKind::DamerauLevenshtein));
    assert_eq!("JARO_WINKLER".parse(), Ok(MetricKind::JaroWinkler));
    assert_eq!("lines".parse(), Ok(MetricKind::LineDiff));
    assert_eq!("words".parse(), Ok(MetricKind::WordDiff));
}

#[test]
fn unknown_name_is_rejected() {
    let err = "cosine".parse::<MetricKind>().unwrap_err();
    assert_eq!(
        err,
        MetricError::Unknown {
            name: "cosine".to_string()
        }
    );
    assert!(err.to_string().contains("damerau-levenshtein"));
}

#[test]
fn function_dispatches_to_catalogue_entry() {
    let (a, b) = ("hello world", "help world\n");
    assert_eq!(
        MetricKind::Levenshtein.evaluate(a, b),
        MetricValue::from(super::super::levenshtein(a, b))
    );
    assert_eq!(
        MetricKind::LineDiff.evaluate(a, b),
        MetricValue::Count(1)
    );
    assert!(matches!(
        MetricKind::JaroWinkler.evaluate(a, b),
        MetricValue::Ratio(_)
    ));
}

#[test]
fn distance_metrics_vanish_on_identical_inputs() {
    for kind in MetricKind::ALL {
        for s in ["", "   ", "a\nb\n", "some text"] {
            assert_eq!(kind.evaluate(s, s), kind.zero(), "{kind} on {s:?}");
        }
    }
}

#[test]
fn zero_matches_value_domain() {
    assert_eq!(MetricKind::JaroWinkler.zero(), MetricValue::Ratio(0.0));
    assert_eq!(MetricKind::Additions.zero(), MetricValue::Count(0));
    assert_eq!(MetricKind::Hamming.sign(), MetricSign::NonNegative);
    assert_eq!(MetricKind::WordDiff.sign(), MetricSign::Signed);
}

#[test]
fn serializes_as_kebab_case() -> anyhow::Result<()> {
    let json = serde_json::to_string(&MetricKind::DamerauLevenshtein)?;
    assert_eq!(json, "\"damerau-levenshtein\"");
    Ok(())
}
