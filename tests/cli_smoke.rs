use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn tally_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("tally"))
}

/// Runs with a private home and the working directory set to it, so the
/// default `sample_data.txt` ledger lands inside the tempdir.
fn cmd_in(home: &tempfile::TempDir) -> Command {
    let mut cmd = tally_cmd();
    cmd.env("TALLY_HOME", home.path());
    cmd.env_remove("TALLY_LEDGER");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(home.path());
    cmd
}

fn run_ok(home: &tempfile::TempDir, args: &[&str]) {
    let mut cmd = cmd_in(home);
    cmd.args(args);
    cmd.assert().success();
}

fn run_ok_out(home: &tempfile::TempDir, args: &[&str]) -> String {
    let mut cmd = cmd_in(home);
    cmd.args(args);
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf8 stdout")
}

#[test]
fn add_appends_to_default_ledger_and_summary_aggregates() {
    let home = tempfile::tempdir().expect("tempdir");

    run_ok(
        &home,
        &[
            "add", "--type", "income", "--category", "Salary", "--amount", "1000", "--date",
            "2024-01-15",
        ],
    );
    run_ok(
        &home,
        &[
            "add", "--type", "EXPENSE", "--category", "Rent", "--amount", "300", "--date",
            "2024-01-20",
        ],
    );

    let ledger = fs::read_to_string(home.path().join("sample_data.txt")).expect("ledger");
    assert_eq!(
        ledger,
        "INCOME,Salary,1000.00,2024-01-15\nEXPENSE,Rent,300.00,2024-01-20\n"
    );

    let out = run_ok_out(&home, &["summary"]);
    assert!(out.contains("--- Monthly Summary from File ---"));
    assert!(out.contains("| 2024-01 | 1000.00 | 300.00  | 700.00  | 2 "));
}

#[test]
fn add_with_bad_date_fails_and_writes_nothing() {
    let home = tempfile::tempdir().expect("tempdir");

    let mut cmd = cmd_in(&home);
    cmd.args([
        "add", "--type", "expense", "--category", "Food", "--amount", "12", "--date",
        "15/01/2024",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not be parsed as yyyy-MM-dd"));

    assert!(!home.path().join("sample_data.txt").exists());
}

#[test]
fn summary_orders_months_and_skips_short_lines() {
    let home = tempfile::tempdir().expect("tempdir");
    let file = home.path().join("data.txt");
    fs::write(
        &file,
        concat!(
            "EXPENSE,Travel,80.00,2024-03-02\n",
            "INCOME,Salary,1000.00,2024-01-15\n",
            "EXPENSE,Rent,300.00\n",
            "INCOME,Business,250.00,2023-12-31\n",
        ),
    )
    .unwrap();

    let out = run_ok_out(&home, &["summary", "--file", file.to_str().unwrap()]);
    let dec = out.find("| 2023-12 ").expect("2023-12 row");
    let jan = out.find("| 2024-01 ").expect("2024-01 row");
    let mar = out.find("| 2024-03 ").expect("2024-03 row");
    assert!(dec < jan && jan < mar);
    assert!(out.contains("| 2024-03 | 0.00    | 80.00   | -80.00  | 1 "));
}

#[test]
fn summary_of_bad_file_reports_and_fails() {
    let home = tempfile::tempdir().expect("tempdir");
    let file = home.path().join("data.txt");
    fs::write(&file, "INCOME,Salary,1000.00,2024-01-15\nINCOME,Salary,lots,2024-01-16\n").unwrap();

    let mut cmd = cmd_in(&home);
    cmd.args(["summary", "--file", file.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Failed to read file or parse data: line 2: Invalid amount: lots"))
        .stdout(predicate::str::contains("2024-01").not());
}

#[test]
fn load_echoes_records_and_rejects_unknown_types() {
    let home = tempfile::tempdir().expect("tempdir");
    let good = home.path().join("good.txt");
    let bad = home.path().join("bad.txt");
    fs::write(&good, "INCOME,Salary,1000,2024-01-15\nEXPENSE,Food,9.5,2024-01-16\n").unwrap();
    fs::write(&bad, "INCOME,Salary,1000,2024-01-15\nGIFT,Aunt,50,2024-01-16\n").unwrap();

    let out = run_ok_out(&home, &["load", good.to_str().unwrap()]);
    assert!(out.contains("INCOME,Salary,1000.00,2024-01-15"));
    assert!(out.contains("EXPENSE,Food,9.50,2024-01-16"));
    assert!(out.contains("File loaded successfully."));

    let mut cmd = cmd_in(&home);
    cmd.args(["load", bad.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Failed to load file: line 2: No enum constant"))
        .stdout(predicate::str::contains("File loaded successfully.").not());
}

#[test]
fn ledger_flag_overrides_configured_file() {
    let home = tempfile::tempdir().expect("tempdir");
    let custom = home.path().join("custom.txt");

    let mut cmd = cmd_in(&home);
    cmd.env("TALLY_LEDGER", &custom);
    cmd.args([
        "add", "--type", "income", "--category", "Business", "--amount", "42.1", "--date",
        "2025-07-04",
    ]);
    cmd.assert().success().stdout(predicate::str::contains("Transaction added."));

    assert_eq!(
        fs::read_to_string(&custom).unwrap(),
        "INCOME,Business,42.10,2025-07-04\n"
    );
    assert!(!home.path().join("sample_data.txt").exists());

    let out = run_ok_out(&home, &["--ledger", custom.to_str().unwrap(), "config"]);
    assert!(out.contains(&format!("ledger\t{}", custom.display())));
}

#[test]
fn config_is_created_on_first_run() {
    let home = tempfile::tempdir().expect("tempdir");
    let out = run_ok_out(&home, &["config"]);
    assert!(out.contains("ledger\tsample_data.txt"));
    assert!(home.path().join("config").join("config.json").exists());
}
