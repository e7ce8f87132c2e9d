use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", dir).env_remove("SPENDLOG_LOG");
    cmd
}

/// A data directory with sample seeding switched off
fn empty_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"seed_sample_data": false}"#).unwrap();
    dir
}

fn add_expense(dir: &Path, amount: &str, category: &str, description: &str, date: &str) -> String {
    let output = spendlog(dir)
        .args(["expense", "add", amount, "-c", category, "-d", description, "--date", date])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Expense:"))
        .map(|id| id.trim().to_string())
        .unwrap()
}

#[test]
fn fresh_directory_shows_sample_data() {
    let dir = TempDir::new().unwrap();

    spendlog(dir.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly grocery shopping"))
        .stdout(predicate::str::contains("5 expense(s), total $283.73"));
}

#[test]
fn add_then_list_by_category() {
    let dir = empty_dir();
    add_expense(dir.path(), "45.99", "Groceries", "Weekly shopping", "2025-05-15");
    add_expense(dir.path(), "12", "Dining", "Lunch", "2025-05-16");

    spendlog(dir.path())
        .args(["expense", "list", "-c", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly shopping"))
        .stdout(predicate::str::contains("Lunch").not());

    spendlog(dir.path())
        .args(["expense", "list", "-c", "Travel"])
        .assert()
        .success()
        .stdout("No expenses found.\n");

    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn invalid_form_is_rejected_with_field_messages() {
    let dir = empty_dir();

    spendlog(dir.path())
        .args(["expense", "add", "-3", "-c", " ", "-d", "Lunch", "--date", "2025-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid amount"))
        .stderr(predicate::str::contains("Please select a category"));

    spendlog(dir.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout("No expenses found.\n");
}

#[test]
fn edit_and_delete_by_id_prefix() {
    let dir = empty_dir();
    let id = add_expense(dir.path(), "20", "Dining", "Dinner", "2025-05-10");
    let prefix = &id[..8];

    spendlog(dir.path())
        .args(["expense", "edit", prefix, "--amount", "25.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$25.50"));

    spendlog(dir.path())
        .args(["expense", "show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: Dinner"));

    spendlog(dir.path())
        .args(["expense", "delete", prefix])
        .assert()
        .success();

    spendlog(dir.path())
        .args(["expense", "delete", prefix])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}

#[test]
fn budget_set_show_and_remove() {
    let dir = empty_dir();
    add_expense(dir.path(), "90", "Dining", "Dinner", "2025-05-10");
    add_expense(dir.path(), "15", "Pets", "Food", "2025-05-11");

    spendlog(dir.path())
        .args(["budget", "set-monthly", "1000"])
        .assert()
        .success()
        .stdout("Monthly budget set to $1000.00\n");

    spendlog(dir.path())
        .args(["budget", "set", "Dining", "100"])
        .assert()
        .success();

    spendlog(dir.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining:       $895.00"))
        .stdout(predicate::str::contains("90% used !"))
        .stdout(predicate::str::contains("Categories without a budget: Pets"));

    spendlog(dir.path())
        .args(["budget", "set-monthly", "0"])
        .assert()
        .failure();

    spendlog(dir.path())
        .args(["budget", "remove", "Dining"])
        .assert()
        .success();

    spendlog(dir.path())
        .args(["budget", "remove", "Dining"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn spending_report_top_categories() {
    let dir = TempDir::new().unwrap();

    spendlog(dir.path())
        .args(["report", "spending", "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Utilities"))
        .stdout(predicate::str::contains("Dining").not());
}

#[test]
fn weekly_trend_has_seven_days() {
    let dir = TempDir::new().unwrap();

    let output = spendlog(dir.path())
        .args(["report", "trend", "--range", "week", "--as-of", "2025-05-15"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.lines().last().unwrap().starts_with("Thu"));
    assert!(stdout.contains("$45.99"));
}

#[test]
fn dashboard_renders() {
    let dir = TempDir::new().unwrap();

    spendlog(dir.path())
        .args(["report", "dashboard", "--as-of", "2025-05-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Financial Overview (This Month)"))
        .stdout(predicate::str::contains("Recent transactions"));
}

#[test]
fn export_csv_and_json() {
    let dir = TempDir::new().unwrap();

    spendlog(dir.path())
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,date,category,description,amount\n"))
        .stdout(predicate::str::contains("4,2025-05-10,Utilities,Electricity bill,120.00"));

    let out = dir.path().join("export.json");
    spendlog(dir.path())
        .args(["export", "json", "-o"])
        .arg(&out)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["expenses"].as_array().unwrap().len(), 5);
    assert_eq!(value["monthly_budget"], 2000);
}

#[test]
fn import_restores_json_export() {
    let source = TempDir::new().unwrap();
    let file = source.path().join("backup.json");
    spendlog(source.path())
        .args(["export", "json", "-o"])
        .arg(&file)
        .assert()
        .success();

    let target = empty_dir();
    spendlog(target.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 expenses, 5 category budgets"))
        .stdout(predicate::str::contains("--force"));
    spendlog(target.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));

    spendlog(target.path())
        .arg("import")
        .arg(&file)
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 5 expenses and 5 category budgets"));
    spendlog(target.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 expense(s), total $283.73"));
    spendlog(target.path())
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget: $2000.00"));
}

#[test]
fn oversized_amount_is_rejected() {
    let dir = empty_dir();

    spendlog(dir.path())
        .args(["expense", "add", "90000000000000000", "-c", "Rent", "-d", "Tower", "--date", "2025-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount is too large"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    spendlog(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("Default range:     month"));
}
