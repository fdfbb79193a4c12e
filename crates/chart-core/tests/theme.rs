// File: crates/chart-core/tests/theme.rs
// Purpose: Theme lookup and fallback selection.

use chart_core::theme::{find, presets, select};
use chart_core::ChartError;

#[test]
fn presets_are_unique_and_findable() {
    let all = presets();
    for t in &all {
        let found = find(&t.name.to_uppercase()).expect("case-insensitive lookup");
        assert_eq!(found.name, t.name);
    }
    let mut names: Vec<_> = all.iter().map(|t| t.name).collect();
    names.dedup();
    assert_eq!(names.len(), all.len());
}

#[test]
fn select_prefers_primary() {
    let t = select("seaborn-v0_8-darkgrid", "ggplot").expect("select");
    assert_eq!(t.name, "seaborn-v0_8-darkgrid");
}

#[test]
fn select_falls_back_when_primary_missing() {
    let t = select("no-such-style", "ggplot").expect("fallback");
    assert_eq!(t.name, "ggplot");
}

#[test]
fn select_fails_when_fallback_missing() {
    let err = select("no-such-style", "also-missing").expect_err("both missing");
    assert!(matches!(err, ChartError::UnknownTheme(name) if name == "also-missing"));
}
