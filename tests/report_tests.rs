use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, obra_db, setup_test_db};

#[test]
fn test_monthly_report_uses_lifetime_profitability() {
    let db_path = setup_test_db("report_monthly");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["report", "--month", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Profitability report: June 2025"))
        .stdout(contains("Month Expenses"))
        .stdout(contains("20.00 h"))
        .stdout(contains("200.00 €"))
        .stdout(contains("392.00 €/h"))
        .stdout(contains("Nave Industrial"))
        .stdout(contains("0.00 €/h"));
}

#[test]
fn test_month_filter_excludes_other_months() {
    let db_path = setup_test_db("report_month_filter");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["report", "--month", "julio"])
        .assert()
        .success()
        .stdout(contains("5.00 h"))
        .stdout(contains("20.00 h").not())
        .stdout(contains("200.00 €").not());

    obra_db(&db_path, &["report", "--month", "8"])
        .assert()
        .success()
        .stdout(contains("August"))
        .stdout(contains("392.00 €/h"));
}

#[test]
fn test_all_time_report_sums_everything() {
    let db_path = setup_test_db("report_all_time");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["report", "--all-time"])
        .assert()
        .success()
        .stdout(contains("Profitability report: all time"))
        .stdout(contains("25.00 h"))
        .stdout(contains("392.00 €/h"));
}

#[test]
fn test_finished_project_visible_only_in_closing_month() {
    let db_path = setup_test_db("report_finished");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["project", "close", "Nave Industrial", "--date", "2025-06-20"])
        .assert()
        .success();

    obra_db(&db_path, &["report", "--month", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Nave Industrial"));

    obra_db(&db_path, &["report", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(contains("Ascensor Mayor"))
        .stdout(contains("Nave Industrial").not());

    obra_db(
        &db_path,
        &["report", "--month", "2025-07", "--include-finished"],
    )
    .assert()
    .success()
    .stdout(contains("Nave Industrial"));
}

#[test]
fn test_single_project_report() {
    let db_path = setup_test_db("report_single");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["report", "--all-time", "--project", "2"])
        .assert()
        .success()
        .stdout(contains("Nave Industrial"))
        .stdout(contains("500.00 €"))
        .stdout(contains("Ascensor Mayor").not());
}

#[test]
fn test_report_without_projects_shows_no_data() {
    let db_path = setup_test_db("report_empty");
    obra_db(&db_path, &["init"]).assert().success();

    obra_db(&db_path, &["report", "--month", "6"])
        .assert()
        .success()
        .stdout(contains("No data"));
}

#[test]
fn test_report_round_trip_of_fresh_records() {
    let db_path = setup_test_db("report_round_trip");
    obra_db(&db_path, &["init"]).assert().success();

    obra_db(&db_path, &["project", "add", "Reforma Baño", "--budget", "3000.5"])
        .assert()
        .success();
    obra_db(&db_path, &["worker", "add", "Pedro"]).assert().success();
    obra_db(
        &db_path,
        &["parts", "add", "Pedro", "Reforma Baño", "--date", "2025-03-11", "--hours", "7.5"],
    )
    .assert()
    .success();
    obra_db(
        &db_path,
        &[
            "expense",
            "add",
            "Reforma Baño",
            "--category",
            "container",
            "--amount",
            "120.25",
            "--date",
            "2025-03-12",
        ],
    )
    .assert()
    .success();

    // (3000.50 - 120.25) / 7.5 = 384.03
    obra_db(&db_path, &["report", "--month", "2025-03", "--chart"])
        .assert()
        .success()
        .stdout(contains("3000.50 €"))
        .stdout(contains("120.25 €"))
        .stdout(contains("7.50 h"))
        .stdout(contains("384.03 €/h"))
        .stdout(contains("█"));
}

#[test]
fn test_invalid_month_is_rejected() {
    let db_path = setup_test_db("report_bad_month");
    obra_db(&db_path, &["init"]).assert().success();

    obra_db(&db_path, &["report", "--month", "13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_dashboard_lists_work_logs_newest_first() {
    let db_path = setup_test_db("report_dashboard");
    init_db_with_data(&db_path);

    let out = obra_db(&db_path, &["project", "show", "Ascensor Mayor"])
        .assert()
        .success()
        .stdout(contains("Profitability:"))
        .stdout(contains("392.00 €/h"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    let july = text.find("2025-07-01").unwrap();
    let june = text.find("2025-06-02").unwrap();
    assert!(july < june);
}
