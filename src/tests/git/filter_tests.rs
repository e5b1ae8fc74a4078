use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_filter_accepts_everything() {
    let filter = PathFilter::accept_all();
    assert!(filter.matches("src/main.rs"));
    assert!(filter.matches("Cargo.lock"));
}

#[test]
fn include_limits_to_matching_paths() -> Result<()> {
    let filter = PathFilter::new(&strings(&["src/**/*.rs"]), &[])?;
    assert!(filter.matches("src/metrics/edit.rs"));
    assert!(!filter.matches("README.md"));
    Ok(())
}

#[test]
fn exclude_wins_over_include() -> Result<()> {
    let filter = PathFilter::new(&strings(&["**/*.rs"]), &strings(&["src/tests/**"]))?;
    assert!(filter.matches("src/lib.rs"));
    assert!(!filter.matches("src/tests/select_tests.rs"));
    Ok(())
}

#[test]
fn invalid_glob_is_an_error() {
    let err = PathFilter::new(&strings(&["src/[oops"]), &[]).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid glob: src/[oops"));
}
