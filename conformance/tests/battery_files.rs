//! End-to-end runs of batteries read from TOML.

use std::fs;

use amestoy_conformance::{run_all, Battery, Severity};

#[test]
fn battery_file_with_even_order_skips_it() {
    let dir = std::env::temp_dir().join(format!("amestoy-battery-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cases.toml");
    fs::write(
        &path,
        r#"
        tolerance = 1e-4
        classical_max_order = 50
        progression_max_dimension = 3

        [[square]]
        order = 4
        start = 50

        [[square]]
        order = 11
        start = 0.25
        "#,
    )
    .unwrap();

    let battery = Battery::load(&path).unwrap();
    let report = run_all(&battery).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert!(report.all_passed());
    assert_eq!(report.skipped_count(), 1);
    let skipped = report
        .results
        .iter()
        .find(|r| r.severity == Severity::Skipped)
        .unwrap();
    assert_eq!(skipped.message, "n=4, start=50: not applicable, n is even");
}

#[test]
fn wrong_expectation_fails_the_run() {
    let battery = Battery::from_toml_str(
        r#"
        [[formula]]
        order = 3
        dimension = 2
        start = 1
        expected = 14
        "#,
    )
    .unwrap();
    let report = run_all(&battery).unwrap();
    assert!(!report.all_passed());
    assert_eq!(report.failure_count(), 1);
    let failed = report.results.iter().find(|r| r.is_failure()).unwrap();
    assert_eq!(failed.validator, "formula/examples");
}

#[test]
fn report_serializes_to_json() {
    let report = run_all(&Battery::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), report.results.len());
    assert_eq!(results[0]["severity"], "pass");
    assert_eq!(results[1]["verification"]["predicted"], 15.0);
}
