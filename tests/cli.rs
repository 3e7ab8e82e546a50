use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rollover(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rollover").unwrap();
    cmd.env("DAILY_ROLLOVER_DATA_DIR", data_dir.path())
        .env_remove("DAILY_ROLLOVER_TODAY")
        .env_remove("RUST_LOG");
    cmd
}

fn add_expense(data_dir: &TempDir, amount: &str, date: &str) {
    rollover(data_dir)
        .args(["expense", "add", amount, "--date", date])
        .assert()
        .success();
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    rollover(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized daily-rollover"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").exists());
}

#[test]
fn deficit_consumes_rollover_before_today() {
    let dir = TempDir::new().unwrap();
    rollover(&dir)
        .args(["config", "set-limit", "300"])
        .assert()
        .success();
    add_expense(&dir, "200", "2025-03-01");
    add_expense(&dir, "400", "2025-03-02");

    rollover(&dir)
        .args(["--today", "2025-03-03", "today", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rollover_from_yesterday\": 0.0"))
        .stdout(predicate::str::contains("\"effective_limit\": 300.0"));
}

#[test]
fn ledger_exports_csv() {
    let dir = TempDir::new().unwrap();
    rollover(&dir)
        .args(["config", "set-limit", "100"])
        .assert()
        .success();
    add_expense(&dir, "500", "2025-03-03");

    rollover(&dir)
        .args([
            "ledger",
            "--from",
            "2025-03-01",
            "--to",
            "2025-03-04",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "date,limit,spent,remaining,rollover,effective_limit",
        ))
        .stdout(predicate::str::contains("2025-03-03,100.0,500.0,-400.0,200.0,300.0"))
        .stdout(predicate::str::contains("2025-03-04,100.0,0.0,100.0,0.0,100.0"));
}

#[test]
fn summary_reports_monthly_message() {
    let dir = TempDir::new().unwrap();
    rollover(&dir)
        .args(["config", "set-limit", "40"])
        .assert()
        .success();
    add_expense(&dir, "10", "2025-10-01");
    add_expense(&dir, "20", "2025-10-02");

    rollover(&dir)
        .args(["--today", "2025-10-03", "summary", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"monthly_ahead\""));
}

#[test]
fn month_in_future_has_no_elapsed_days() {
    let dir = TempDir::new().unwrap();
    rollover(&dir)
        .args(["--today", "2025-03-15", "month", "--month", "2025-05", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"days_elapsed\": 0"))
        .stdout(predicate::str::contains("\"total_spent\": 0.0"));
}

#[test]
fn rejects_non_positive_limit() {
    let dir = TempDir::new().unwrap();
    rollover(&dir)
        .args(["config", "set-limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Daily limit must be a positive amount"));
}

#[test]
fn rejects_bad_today_flag() {
    let dir = TempDir::new().unwrap();
    rollover(&dir)
        .args(["--today", "03/03/2025", "today"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn imports_expenses_from_csv() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("bank.csv");
    std::fs::write(
        &csv_path,
        "date,amount,description\n2025-04-01,12.50,Lunch\n2025-04-02,oops,Bad\n",
    )
    .unwrap();

    rollover(&dir)
        .args(["expense", "import"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 expense(s)"))
        .stdout(predicate::str::contains("row 2"));

    rollover(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("$12.50"));
}

#[test]
fn streak_counts_days_within_limit() {
    let dir = TempDir::new().unwrap();
    rollover(&dir)
        .args(["config", "set-limit", "50"])
        .assert()
        .success();
    add_expense(&dir, "80", "2025-06-07");
    add_expense(&dir, "10", "2025-06-08");

    rollover(&dir)
        .args(["--today", "2025-06-10", "streak", "--days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 3 day(s)"));
}
