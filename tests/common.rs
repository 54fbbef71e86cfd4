#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn obra() -> Command {
    cargo_bin_cmd!("obralog")
}

/// `obralog --db <db> --test <args...>`
pub fn obra_db(db_path: &str, args: &[&str]) -> Command {
    let mut cmd = obra();
    cmd.args(["--db", db_path, "--test"]).args(args);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_obralog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests.
///
/// - #1 "Ascensor Mayor": budget 10000, in progress. June 2025: 8 h + 12 h
///   and a 200 € fuel expense; July 2025: 5 h. Lifetime profitability
///   (10000 - 200) / 25 = 392.00 €/h.
/// - #2 "Nave Industrial": budget 5000, blocked, one 500 € materials
///   expense in June 2025 and no hours, so profitability 0.
pub fn init_db_with_data(db_path: &str) {
    obra_db(db_path, &["init"]).assert().success();

    obra_db(
        db_path,
        &[
            "project",
            "add",
            "Ascensor Mayor",
            "--budget",
            "10000",
            "--status",
            "in_progress",
            "--contractor",
            "OTIS",
        ],
    )
    .assert()
    .success();

    obra_db(
        db_path,
        &[
            "project",
            "add",
            "Nave Industrial",
            "--budget",
            "5000",
            "--status",
            "bloqueada",
        ],
    )
    .assert()
    .success();

    obra_db(db_path, &["worker", "add", "Luis", "--role", "oficial"])
        .assert()
        .success();
    obra_db(db_path, &["worker", "add", "Ana", "--role", "peón"])
        .assert()
        .success();

    for (worker, date, hours) in [
        ("Luis", "2025-06-02", "8"),
        ("Ana", "2025-06-03", "12"),
        ("Luis", "2025-07-01", "5"),
    ] {
        obra_db(
            db_path,
            &[
                "parts",
                "add",
                worker,
                "Ascensor Mayor",
                "--date",
                date,
                "--hours",
                hours,
            ],
        )
        .assert()
        .success();
    }

    obra_db(
        db_path,
        &[
            "expense",
            "add",
            "1",
            "--category",
            "fuel",
            "--amount",
            "200",
            "--date",
            "2025-06-04",
        ],
    )
    .assert()
    .success();

    obra_db(
        db_path,
        &[
            "expense",
            "add",
            "Nave Industrial",
            "--category",
            "materiales",
            "--amount",
            "500",
            "--date",
            "2025-06-10",
        ],
    )
    .assert()
    .success();
}
