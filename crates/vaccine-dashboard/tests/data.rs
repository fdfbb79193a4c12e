// File: crates/vaccine-dashboard/tests/data.rs
// Purpose: Cardinality and range invariants of the literal datasets.

use vaccine_dashboard::data::{self, AGE_GROUPS, DOSES, HOSPITALIZATION, INFECTION};

#[test]
fn series_cardinalities() {
    assert_eq!(INFECTION.len(), 3);
    assert_eq!(data::as_points(&INFECTION).len(), 3);
    assert_eq!(HOSPITALIZATION.len(), 3);
    assert_eq!(data::as_points(&HOSPITALIZATION).len(), 3);
    assert_eq!(AGE_GROUPS.len(), 5);
    assert_eq!(DOSES.len(), 4);
}

#[test]
fn every_percentage_is_within_bounds() {
    let mut values: Vec<f64> = Vec::new();
    values.extend(INFECTION.iter().chain(HOSPITALIZATION.iter()).map(|s| s.effectiveness));
    values.push(data::DEATH_6MO);
    values.extend(AGE_GROUPS.iter().flat_map(|g| [g.ed_uc, g.hospitalization]).flatten());
    values.extend(DOSES.iter().flat_map(|d| [d.local_reaction, d.systemic_reaction, d.effectiveness]));
    assert!(!values.is_empty());
    for v in values {
        assert!((0.0..=100.0).contains(&v), "{v} outside [0, 100]");
    }
}

#[test]
fn weeks_are_increasing() {
    for series in [&INFECTION, &HOSPITALIZATION] {
        assert!(series.windows(2).all(|w| w[0].week < w[1].week));
    }
}

#[test]
fn unmeasured_age_metrics_are_absent_not_zero() {
    let seniors = AGE_GROUPS.iter().find(|g| g.label == "65+ IC*").expect("group");
    assert_eq!(seniors.ed_uc, None);
    assert_eq!(seniors.hospitalization, Some(45.5));
    let toddlers = &AGE_GROUPS[0];
    assert_eq!((toddlers.label, toddlers.ed_uc, toddlers.hospitalization), ("9mo-4yr", Some(76.0), None));
}

#[test]
fn findings_text_is_multiline() {
    assert!(data::KEY_FINDINGS.starts_with("Key Findings:\n\n1. "));
    assert_eq!(data::KEY_FINDINGS.lines().count(), 10);
}
