#![cfg(feature = "cli")]

use predicates::prelude::*;

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    cmd.arg("indices");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_prints_indices_for_inline_measurements() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    let measurements = serde_json::json!({
        "fc": 3.0,
        "tc": 3.2,
        "ph": 7.5,
        "ta": 100.0,
        "ch": 250.0,
        "temperature": 78.0,
        "tds": 300.0
    })
    .to_string();

    cmd.arg("indices").arg("--measurements-json").arg(measurements);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("LSI: 0.40"))
        .stdout(predicate::str::contains("RSI: 6.70"))
        .stdout(predicate::str::contains("Estimated").not());
}

#[test]
fn cli_reports_defaults_in_json_from_stdin_document() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    let doc = serde_json::json!({
        "measurements": {
            "fc": 3.0,
            "tc": 3.0,
            "ph": 7.5,
            "ta": 0.0,
            "ch": 0.0,
            "temperature": 25.5
        },
        "unit_system": "metric"
    })
    .to_string();

    cmd.arg("indices")
        .arg("--json")
        .arg("--input")
        .arg("-")
        .write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"lsi\""))
        .stdout(predicate::str::contains(
            "TDS, Calcium Hardness, Total Alkalinity",
        ));
}

#[test]
fn cli_skips_indices_without_ph() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    let measurements = serde_json::json!({
        "fc": 3.0, "tc": 3.0, "ph": 0.0, "ta": 100.0, "ch": 250.0, "temperature": 80.0
    })
    .to_string();

    cmd.arg("indices").arg("--measurements-json").arg(measurements);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Indices not calculated"));
}

#[test]
fn cli_reports_invalid_json_for_measurements_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    cmd.arg("indices")
        .arg("--measurements-json")
        .arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --measurements-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    cmd.arg("indices").arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}

#[test]
fn cli_converts_temperature() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    cmd.args(["convert", "--value", "77", "--parameter", "temperature", "--from", "imperial"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("77 °F = 25.00 °C"));
}

#[test]
fn cli_rejects_unknown_conversion_parameter() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    cmd.args(["convert", "--value", "1", "--parameter", "turbidity"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown parameter 'turbidity'"));
}

#[test]
fn cli_prints_reference_entry() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    cmd.args(["reference", "lsi"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("-0.3 to +0.3 (balanced water)"))
        .stdout(predicate::str::contains("Langelier Saturation Index"));
}

#[test]
fn cli_json_explains_skipped_indices_without_ph() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    let measurements = serde_json::json!({
        "fc": 3.0, "tc": 3.0, "ph": 0.0, "ta": 100.0, "ch": 250.0, "temperature": 80.0
    })
    .to_string();

    cmd.arg("indices")
        .arg("--json")
        .arg("--measurements-json")
        .arg(measurements);

    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["calculated"], serde_json::json!(false));
    assert_eq!(v["reason"], serde_json::json!("pH missing"));
}

#[test]
fn cli_reference_without_key_lists_ranges_and_descriptions() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("waterlogger_rs");
    cmd.arg("reference");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ideal ranges:"))
        .stdout(predicate::str::contains("2,700 - 3,400 ppm (optimal: 3,200 ppm)"))
        .stdout(predicate::str::contains("Descriptions:"))
        .stdout(predicate::str::contains(
            "Visual observations about water clarity",
        ));
}
