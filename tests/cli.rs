use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn ledger_cmd(file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("expense-ledger").unwrap();
    cmd.env_remove("EXPENSE_LEDGER_LOG").arg("--file").arg(file);
    cmd
}

#[test]
fn add_rename_delete_round_trip() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("finance_data.csv");

    ledger_cmd(&file)
        .args(["add", "Rent", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent      1000.0"));
    ledger_cmd(&file).args(["add", "Food", "200"]).assert().success();
    ledger_cmd(&file)
        .args(["rename", "Food", "Groceries", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries").and(predicate::str::contains("Food").not()));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Category,Amount\nGroceries,200.0\nRent,1000.0\n"
    );

    ledger_cmd(&file).args(["delete", "Rent"]).assert().success();
    ledger_cmd(&file)
        .args(["delete", "Rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category not found: Rent"));
}

#[test]
fn invalid_amount_fails_without_writing() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("finance_data.csv");

    ledger_cmd(&file)
        .args(["add", "Food", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "Category,Amount\n");
}

#[test]
fn file_can_come_from_environment() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("from_env.csv");

    Command::cargo_bin("expense-ledger")
        .unwrap()
        .env("EXPENSE_LEDGER_FILE", &file)
        .args(["add", "Tea", "3.5"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Category,Amount\nTea,3.5\n"
    );
}

#[test]
fn bar_chart_renders_from_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("finance_data.csv");
    fs::write(&file, "Category,Amount\nFood,200\nRent,1000\n").unwrap();

    ledger_cmd(&file)
        .args(["chart", "--kind", "bar", "--width", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent     │██████████ 1000.0"));
}

#[test]
fn malformed_file_is_fatal() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("finance_data.csv");
    fs::write(&file, "Category,Amount\nFood,abc\n").unwrap();

    ledger_cmd(&file)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}
