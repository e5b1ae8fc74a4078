use super::*;

#[test]
fn explicit_request_beats_config() -> Result<()> {
    let cfg = RevdistConfig {
        metric: Some("hamming".to_string()),
        ..RevdistConfig::default()
    };
    let metric = resolve_metric(vec!["lcs".to_string()], &cfg)?;
    assert_eq!(metric.canonical_name(), "lcs");
    Ok(())
}

#[test]
fn config_metric_applies_without_request() -> Result<()> {
    let cfg = RevdistConfig {
        metric: Some("word-diff".to_string()),
        ..RevdistConfig::default()
    };
    let metric = resolve_metric(Vec::new(), &cfg)?;
    assert_eq!(metric.canonical_name(), "word-diff");
    Ok(())
}

#[test]
fn default_applies_without_request_or_config() -> Result<()> {
    let metric = resolve_metric(Vec::new(), &RevdistConfig::default())?;
    assert_eq!(metric.canonical_name(), "levenshtein");
    Ok(())
}

#[test]
fn two_requests_fail_even_with_config() {
    let cfg = RevdistConfig {
        metric: Some("hamming".to_string()),
        ..RevdistConfig::default()
    };
    let err = resolve_metric(vec!["lcs".to_string(), "hamming".to_string()], &cfg).unwrap_err();
    assert!(err.to_string().contains("only one metric"));
}
