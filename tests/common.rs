#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use tiplog::db::pool::DbPool;

/// Binary under test, with HOME pointed at a throwaway directory so a real
/// user config never leaks into the assertions.
pub fn tl() -> Command {
    let mut cmd = cargo_bin_cmd!("tiplog");
    cmd.env("HOME", test_home());
    cmd
}

pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("tiplog_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tiplog.sqlite", name));
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

/// Open a fresh ledger file through the library API
pub fn open_test_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::open(&db_path).expect("open db")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Initialize DB and log the March 2024 sample month via the CLI
pub fn init_db_with_data(db_path: &str) {
    tl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tl().args([
        "--db",
        db_path,
        "add",
        "2024-03-01",
        "--role",
        "server",
        "--hours",
        "5",
        "--tips",
        "100",
    ])
    .assert()
    .success();

    tl().args([
        "--db",
        db_path,
        "add",
        "2024-03-15",
        "--role",
        "ta",
        "--hours",
        "4",
    ])
    .assert()
    .success();
}
