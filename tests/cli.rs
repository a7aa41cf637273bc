use assert_cmd::Command;
use predicates::prelude::*;

fn minnow(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("minnow").unwrap();
    cmd.env("MINNOW_DATA_DIR", data_dir);
    cmd
}

#[test]
fn first_command_seeds_default_pond() {
    let dir = tempfile::tempdir().unwrap();
    minnow(dir.path())
        .args(["ponds", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hồ Câu Trung Hiếu"));
    assert!(dir.path().join("minnow.json").exists());
}

#[test]
fn add_and_list_customers() {
    let dir = tempfile::tempdir().unwrap();
    minnow(dir.path())
        .args(["customers", "add", "Anh Bảy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added customer: Anh Bảy"));
    minnow(dir.path())
        .args(["customers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anh Bảy"))
        .stdout(predicate::str::contains("Customers (1)"));
}

#[test]
fn priced_booking_records_companion_sale() {
    let dir = tempfile::tempdir().unwrap();
    minnow(dir.path()).args(["customers", "add", "Chị Ba"]).assert().success();
    minnow(dir.path())
        .args([
            "bookings", "add",
            "--pond", "Hồ Câu Trung Hiếu",
            "--customer", "Chị Ba",
            "--date", "2024-06-01",
            "--hours", "3",
            "--price", "150000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded a matching sale"));
    minnow(dir.path())
        .args(["txns", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sale"))
        .stdout(predicate::str::contains("Booking:"));
    minnow(dir.path())
        .args(["report", "date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booking total:"))
        .stdout(predicate::str::contains("150.000 ₫"));
}

#[test]
fn txn_add_rejects_nonpositive_amount() {
    let dir = tempfile::tempdir().unwrap();
    minnow(dir.path())
        .args(["txns", "add", "--kind", "expense", "--amount", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount must be a positive number"));
}

#[test]
fn booking_rejects_malformed_date() {
    let dir = tempfile::tempdir().unwrap();
    minnow(dir.path()).args(["customers", "add", "Anh Bảy"]).assert().success();
    minnow(dir.path())
        .args([
            "bookings", "add",
            "--pond", "Hồ Câu Trung Hiếu",
            "--customer", "Anh Bảy",
            "--date", "01/06/2024",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn deleted_pond_shows_placeholder_in_bookings() {
    let dir = tempfile::tempdir().unwrap();
    minnow(dir.path()).args(["customers", "add", "Anh Bảy"]).assert().success();
    minnow(dir.path())
        .args([
            "bookings", "add",
            "--pond", "Hồ Câu Trung Hiếu",
            "--customer", "Anh Bảy",
            "--date", "2024-06-01",
            "--price", "50000",
        ])
        .assert()
        .success();

    let list = minnow(dir.path()).args(["ponds", "list"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&list.stdout);
    let pond_id = stdout
        .lines()
        .find(|l| l.contains("Hồ Câu Trung Hiếu"))
        .and_then(|l| l.split_whitespace().nth(1))
        .expect("pond id in list output")
        .to_string();

    minnow(dir.path())
        .args(["ponds", "delete", &pond_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookings that reference it are kept"));
    minnow(dir.path())
        .args(["bookings", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("—"));
}

#[test]
fn export_then_import_roundtrip() {
    let source = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();
    let csv_path = source.path().join("full.csv");

    minnow(source.path()).args(["customers", "add", "Anh Bảy"]).assert().success();
    minnow(source.path())
        .args([
            "bookings", "add",
            "--pond", "Hồ Câu Trung Hiếu",
            "--customer", "Anh Bảy",
            "--date", "2024-06-01",
            "--price", "150000",
        ])
        .assert()
        .success();
    minnow(source.path())
        .args(["export", "all", "--output", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    minnow(target.path())
        .args(["import", csv_path.to_str().unwrap(), "--replace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 customers"))
        .stdout(predicate::str::contains("1 bookings"));
    minnow(target.path())
        .args(["customers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anh Bảy"));
}

#[test]
fn status_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    minnow(dir.path()).args(["customers", "add", "Anh Bảy"]).assert().success();
    minnow(dir.path())
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ponds:         1"))
        .stdout(predicate::str::contains("Customers:     1"));
}

#[test]
fn reset_requires_force() {
    let dir = tempfile::tempdir().unwrap();
    minnow(dir.path()).args(["ponds", "list"]).assert().success();
    minnow(dir.path())
        .args(["reset"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    minnow(dir.path())
        .args(["reset", "--force"])
        .assert()
        .success();
    assert!(!dir.path().join("minnow.json").exists());
}
