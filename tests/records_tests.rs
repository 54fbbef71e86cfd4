use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, obra_db, setup_test_db};

#[test]
fn test_project_and_worker_listing() {
    let db_path = setup_test_db("records_listing");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["project", "list"])
        .assert()
        .success()
        .stdout(contains("Ascensor Mayor"))
        .stdout(contains("10000.00 €"))
        .stdout(contains("In progress"))
        .stdout(contains("OTIS"))
        .stdout(contains("Blocked"));

    obra_db(&db_path, &["project", "list", "--status", "blocked"])
        .assert()
        .success()
        .stdout(contains("Nave Industrial"))
        .stdout(contains("Ascensor Mayor").not());

    obra_db(&db_path, &["worker", "list"])
        .assert()
        .success()
        .stdout(contains("Luis"))
        .stdout(contains("oficial"))
        .stdout(contains("13.00 h"));
}

#[test]
fn test_parts_and_expense_listing() {
    let db_path = setup_test_db("records_parts_list");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["parts", "list", "--project", "Ascensor Mayor"])
        .assert()
        .success()
        .stdout(contains("2025-06-03"))
        .stdout(contains("12.00 h"));

    obra_db(&db_path, &["expense", "list", "--project", "2"])
        .assert()
        .success()
        .stdout(contains("Materials"))
        .stdout(contains("Fuel").not())
        .stdout(contains("Total: 500.00 €"));
}

#[test]
fn test_work_log_with_missing_worker_is_rejected() {
    let db_path = setup_test_db("records_missing_worker");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["parts", "add", "99", "1", "--hours", "8"])
        .assert()
        .failure()
        .stderr(contains("No worker matches '99'"));

    obra_db(&db_path, &["parts", "add", "Luis", "Obra fantasma", "--hours", "8"])
        .assert()
        .failure()
        .stderr(contains("No project matches 'Obra fantasma'"));
}

#[test]
fn test_description_only_for_other_expenses() {
    let db_path = setup_test_db("records_description");
    init_db_with_data(&db_path);

    obra_db(
        &db_path,
        &[
            "expense",
            "add",
            "1",
            "--category",
            "fuel",
            "--amount",
            "10",
            "--description",
            "gasoil furgoneta",
        ],
    )
    .assert()
    .failure()
    .stderr(contains("Invalid value for 'description'"));

    obra_db(
        &db_path,
        &[
            "expense",
            "add",
            "1",
            "--category",
            "otros",
            "--amount",
            "10",
            "--description",
            "alquiler andamio",
        ],
    )
    .assert()
    .success();
}

#[test]
fn test_delete_referenced_project_is_rejected() {
    let db_path = setup_test_db("records_delete_project");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["project", "del", "Ascensor Mayor"])
        .assert()
        .failure()
        .stderr(contains("has 3 work logs and 1 expense"));

    obra_db(&db_path, &["worker", "del", "Ana"])
        .assert()
        .failure()
        .stderr(contains("has 1 work log"));

    // free the worker, then delete it
    obra_db(&db_path, &["parts", "del", "2"]).assert().success();
    obra_db(&db_path, &["worker", "del", "Ana"])
        .assert()
        .success()
        .stdout(contains("Worker #2 'Ana' deleted"));
}

#[test]
fn test_finished_project_refuses_work_logs() {
    let db_path = setup_test_db("records_finished");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["project", "close", "1", "--date", "2025-07-31"])
        .assert()
        .success()
        .stdout(contains("finished on 2025-07-31"));

    obra_db(&db_path, &["parts", "add", "Luis", "1", "--date", "2025-08-01"])
        .assert()
        .failure()
        .stderr(contains("already finished"));

    obra_db(&db_path, &["project", "close", "1"])
        .assert()
        .failure()
        .stderr(contains("already finished"));
}

#[test]
fn test_ambiguous_worker_name_lists_ids() {
    let db_path = setup_test_db("records_ambiguous");
    init_db_with_data(&db_path);

    obra_db(&db_path, &["worker", "add", "luis"]).assert().success();

    obra_db(&db_path, &["parts", "add", "Luis", "1", "--hours", "4"])
        .assert()
        .failure()
        .stderr(contains("ids: 1, 3"));

    obra_db(&db_path, &["parts", "add", "3", "1", "--hours", "4"])
        .assert()
        .success();
}

#[test]
fn test_suggested_hours_on_friday() {
    let db_path = setup_test_db("records_friday");
    init_db_with_data(&db_path);

    // 2025-06-06 is a Friday
    obra_db(&db_path, &["parts", "add", "Luis", "1", "--date", "2025-06-06"])
        .assert()
        .success()
        .stdout(contains("6.00 h on 2025-06-06"));

    obra_db(&db_path, &["parts", "add", "Luis", "1", "--date", "2025-06-09"])
        .assert()
        .success()
        .stdout(contains("8.00 h on 2025-06-09"));
}

#[test]
fn test_commands_need_an_initialized_database() {
    let db_path = setup_test_db("records_no_init");

    obra_db(&db_path, &["project", "list"])
        .assert()
        .failure()
        .stderr(contains("Database not found"));

    assert!(!std::path::Path::new(&db_path).exists());
}
