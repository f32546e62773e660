use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", base)
        .env_remove("EXPENSE_TRACKER_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn expenses_file(base: &Path) -> std::path::PathBuf {
    base.join("data").join("expenses.json")
}

#[test]
fn add_then_summary_json() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    for (amount, description, category) in [
        ("10", "Lunch", "Food"),
        ("5", "Snack", "food"),
        ("20", "Train", "2"),
    ] {
        tracker(base)
            .args(["add", amount, description, "--category", category])
            .assert()
            .success()
            .stdout(predicate::str::contains("Expense saved."));
    }

    let output = tracker(base)
        .args(["summary", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["record_count"], 3);
    assert_eq!(report["category_totals"][0]["category"], "Food");
    assert_eq!(report["category_totals"][0]["total"].to_string(), "15");
    assert_eq!(report["category_totals"][1]["category"], "Transportation");
    assert_eq!(report["period_totals"][0]["period"], "All Time");
    assert_eq!(report["period_totals"][0]["total"].to_string(), "35");
    assert_eq!(report["grand_total"].to_string(), "35");

    let id = report["report_id"].as_str().unwrap();
    assert!(expense_tracker::reports::ReportId::parse(id).is_some());
}

#[test]
fn add_rejects_non_positive_amounts() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    tracker(base)
        .args(["add", "7", "Coffee", "-c", "Food"])
        .assert()
        .success();
    let before = fs::read(expenses_file(base)).unwrap();

    for amount in ["0", "-5"] {
        tracker(base)
            .args(["add", amount, "Nothing", "-c", "Other"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid record"));
    }

    assert_eq!(fs::read(expenses_file(base)).unwrap(), before);
}

#[test]
fn add_rejects_unknown_category() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    tracker(base)
        .args(["add", "7", "Rent", "-c", "Housing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));

    assert!(!expenses_file(base).exists());
}

#[test]
fn summary_on_missing_store_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    tracker(base)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense data available."))
        .stdout(predicate::str::is_match(r"Report ID: RPT-\d{8}-\d{6}").unwrap());

    assert!(!expenses_file(base).exists());
}

#[test]
fn corrupt_store_is_recovered_and_logged() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    fs::create_dir_all(base.join("data")).unwrap();
    fs::write(expenses_file(base), "{{{ definitely not json").unwrap();

    tracker(base)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."))
        .stderr(predicate::str::contains("corrupt"));

    tracker(base)
        .args(["add", "3.50", "Bus", "-c", "Transportation"])
        .assert()
        .success();

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(expenses_file(base)).unwrap()).unwrap();
    let records = stored.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["description"], "Bus");
    assert_eq!(records[0]["amount"].to_string(), "3.50");

    assert!(base.join("data").join("expenses.json.corrupt").exists());
}

#[test]
fn file_flag_overrides_default_location() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    let custom = base.join("elsewhere.json");

    tracker(base)
        .args(["--file", custom.to_str().unwrap()])
        .args(["add", "2", "Stamp", "-c", "Other"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!expenses_file(base).exists());

    tracker(base)
        .env("EXPENSE_TRACKER_FILE", &custom)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stamp"));
}

#[test]
fn summary_csv_export() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    let csv_path = base.join("summary.csv");

    tracker(base)
        .args(["add", "4", "Movie", "-c", "Entertainment"])
        .assert()
        .success();

    tracker(base)
        .args(["summary", "--output", csv_path.to_str().unwrap()])
        .assert()
        .success();

    let csv = fs::read_to_string(csv_path).unwrap();
    assert!(csv.starts_with("report_id,section,label,total,count\n"));
    assert!(csv.contains(",category,Entertainment,4,1"));
}

#[test]
fn interactive_session() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    tracker(base)
        .write_stdin("1\nabc\n12.5\nGroceries\n7\n1\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a number."))
        .stdout(predicate::str::contains("Invalid category number."))
        .stdout(predicate::str::contains("Expense saved."))
        .stdout(predicate::str::contains("12.50"))
        .stdout(predicate::str::contains("Exiting..."));

    assert!(expenses_file(base).exists());
}

#[test]
fn reads_four_space_indented_float_files() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    fs::create_dir_all(base.join("data")).unwrap();
    fs::write(
        expenses_file(base),
        r#"[
    {
        "amount": 12.0,
        "description": "Pizza",
        "category": "Food"
    },
    {
        "amount": 40.25,
        "description": "Power",
        "category": "Utilities"
    }
]"#,
    )
    .unwrap();

    tracker(base)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza"))
        .stdout(predicate::str::contains("2 expense(s), total 52.25"));
}

#[test]
fn init_writes_settings() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    tracker(base).arg("init").assert().success();
    assert!(base.join("config.json").exists());

    tracker(base)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized: true"));
}

#[test]
fn out_of_range_amount_fails_without_losing_records() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    fs::create_dir_all(base.join("data")).unwrap();
    let contents = r#"[
    {"amount": 10.0, "description": "Lunch", "category": "Food"},
    {"amount": 1e300, "description": "Typo", "category": "Other"}
]"#;
    fs::write(expenses_file(base), contents).unwrap();

    tracker(base)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrepresentable amount at index 1"));

    tracker(base)
        .args(["add", "3", "Bus", "-c", "Transportation"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(expenses_file(base)).unwrap(), contents);
}

#[test]
fn add_rejects_malformed_and_oversized_amounts() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    for amount in ["-$-5", "$-5"] {
        tracker(base)
            .args(["add", amount, "Odd", "-c", "Other"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid input"));
    }

    tracker(base)
        .args(["add", "50000000000000000000000000000", "Huge", "-c", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must not exceed"));

    assert!(!expenses_file(base).exists());
}
