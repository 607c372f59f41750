use std::fs;

use assert_cmd::Command;
use csv::Reader;
use predicates::prelude::*;

#[test]
fn plan_reports_a_sail_only_trip() {
    let mut cmd = Command::cargo_bin("plan").expect("plan bin");
    cmd.args([
        "--depart",
        "08:00",
        "--arrive",
        "12:00",
        "--distance",
        "20",
        "--sail-speed",
        "5",
        "--motor-speed",
        "8",
    ]);
    cmd.assert().success().stdout(
        predicate::str::contains("Je kunt de hele afstand zeilen in 4 uur (20.00 zeemijl)")
            .and(predicate::str::contains("Geschat brandstofverbruik: 0 liter.")),
    );
}

#[test]
fn plan_reports_a_late_arrival() {
    let mut cmd = Command::cargo_bin("plan").expect("plan bin");
    cmd.args([
        "--depart",
        "08:00",
        "--arrive",
        "09:00",
        "--distance",
        "20",
        "--sail-speed",
        "5",
        "--motor-speed",
        "8",
    ]);
    cmd.assert().success().stdout(
        predicate::str::contains("maar je zult niet op tijd aankomen")
            .and(predicate::str::contains("Je verwachte aankomsttijd is 10:30."))
            .and(predicate::str::contains("Geschat brandstofverbruik: 12.50 liter.")),
    );
}

#[test]
fn plan_emits_json_when_asked() {
    let mut cmd = Command::cargo_bin("plan").expect("plan bin");
    cmd.args([
        "--depart",
        "08:00",
        "--arrive",
        "12:00",
        "--distance",
        "20",
        "--sail-speed",
        "5",
        "--motor-speed",
        "8",
        "--json",
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be JSON");
    assert_eq!(value["outcome"], "sail_only");
    assert_eq!(value["duration_h"], 4.0);
}

#[test]
fn plan_rejects_a_motor_slower_than_sail() {
    let mut cmd = Command::cargo_bin("plan").expect("plan bin");
    cmd.args(["--sail-speed", "8", "--motor-speed", "6"]);
    cmd.assert().failure().stderr(predicate::str::contains(
        "Motorsnelheid moet groter zijn dan zeilsnelheid",
    ));
}

#[test]
fn plan_enforces_bounds_from_a_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings_path = dir.path().join("settings.yaml");
    fs::write(
        &settings_path,
        "limits:\n  max_distance: 10\n",
    )
    .expect("write settings");

    let mut cmd = Command::cargo_bin("plan").expect("plan bin");
    cmd.args([
        "--settings",
        settings_path.to_str().expect("utf8 path"),
        "--distance",
        "20",
    ]);
    cmd.assert().failure().stderr(predicate::str::contains(
        "Afstand moet kleiner zijn dan 10",
    ));
}

#[test]
fn plan_defaults_come_from_settings() {
    // Built-in defaults: 08:00 to 12:00, 25 nm at 5/8 knots. Sailing needs
    // 5 hours against a 4-hour window, so the default plan is mixed.
    let mut cmd = Command::cargo_bin("plan").expect("plan bin");
    cmd.assert().success().stdout(
        predicate::str::contains("zeilen")
            .and(predicate::str::contains("overschakelen naar de motor")),
    );
}

#[test]
fn sweep_writes_one_csv_row_per_candidate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output_path = dir.path().join("sweep.csv");

    let mut cmd = Command::cargo_bin("sweep").expect("sweep bin");
    cmd.args([
        "--from",
        "08:00",
        "--to",
        "10:00",
        "--step-minutes",
        "30",
        "--arrive",
        "12:00",
        "--distance",
        "20",
        "--sail-speed",
        "5",
        "--motor-speed",
        "8",
        "--output",
        output_path.to_str().expect("utf8 path"),
    ]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("08:00"));

    let mut reader = Reader::from_path(&output_path).expect("csv");
    assert_eq!(
        reader
            .headers()
            .expect("headers")
            .iter()
            .collect::<Vec<_>>(),
        vec![
            "departure",
            "outcome",
            "sail_hours",
            "motor_hours",
            "fuel_liters",
            "expected_arrival"
        ]
    );

    let records: Vec<csv::StringRecord> =
        reader.records().collect::<Result<_, _>>().expect("records");
    assert_eq!(records.len(), 5);
    assert_eq!(&records[0][0], "08:00");
    assert_eq!(&records[0][1], "sail_only");
    assert_eq!(&records[4][0], "10:00");
    assert_eq!(&records[4][1], "motor_only_late");
    assert_eq!(&records[4][5], "12:30");
}
