use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fincalc(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fincalc").unwrap();
    cmd.env("FINCALC_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_loan_payment_table() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["loan", "payment", "--principal", "25000", "--rate", "6", "--years", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan Payment"))
        .stdout(predicate::str::contains("$483.32"));
}

#[test]
fn test_loan_payment_json() {
    let dir = TempDir::new().unwrap();
    let output = fincalc(&dir)
        .args(["--format", "json", "loan", "payment", "-p", "25000", "-r", "6", "-y", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["calculator"], "loan");
    assert_eq!(value["inputs"]["principal"], 25000.0);
    let payment = value["result"]["monthly_payment"].as_f64().unwrap();
    assert!((payment - 483.32).abs() < 0.01);
}

#[test]
fn test_yaml_output_has_header() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["rule-of-72", "--rate", "8", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# fincalc"))
        .stdout(predicate::str::contains("estimated_years:"));
}

#[test]
fn test_debt_compare() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args([
            "debt",
            "compare",
            "--debt",
            "Visa:5000:22.9:150",
            "--debt",
            "Car:12000:6.5:300",
            "--extra",
            "200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snowball vs Avalanche"));
}

#[test]
fn test_debt_without_debts_fails() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["debt", "snowball"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No debts given"));
}

#[test]
fn test_invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["loan", "payment", "--principal", "lots", "--rate", "6", "--years", "5"])
        .assert()
        .failure();
}

#[test]
fn test_history_records_calculations() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["roi", "--invested", "1000", "--returned", "1500"])
        .assert()
        .success();

    fincalc(&dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ROI"));

    fincalc(&dir)
        .args(["history", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 history entries."));
}

#[test]
fn test_schedule_csv_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schedule.csv");

    fincalc(&dir)
        .args(["loan", "schedule", "-p", "1200", "-r", "0", "-y", "1", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported to:"));

    let csv = std::fs::read_to_string(&path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Month,Payment,Principal,Interest,Balance"));
    assert_eq!(lines.count(), 12);
}

#[test]
fn test_init_writes_settings() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    fincalc(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:     $"));
}

#[test]
fn test_init_twice_keeps_settings() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir).arg("init").assert().success();
    fincalc(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}
