use chrono::NaiveDate;
use std::io::Cursor;
use tiplog::config::Config;
use tiplog::db::pool::DbPool;
use tiplog::db::queries::{insert_shift, load_all_shifts};
use tiplog::models::role::Role;
use tiplog::models::shift::NewShift;
use tiplog::ui::menu::Menu;

/// Drive one menu session and return everything it printed.
fn run_session(pool: &DbPool, script: &str) -> String {
    let cfg = Config::default();
    let mut out: Vec<u8> = Vec::new();

    Menu::new(pool, &cfg, Cursor::new(script.as_bytes()), &mut out)
        .run()
        .expect("menu session");

    String::from_utf8(out).expect("utf8 output")
}

fn seed(pool: &DbPool, date: &str, role: Role, hours: f64, tips: f64, wage: f64) {
    insert_shift(
        &pool.conn,
        &NewShift {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            role,
            hours_worked: hours,
            tips,
            wage_rate: wage,
        },
    )
    .unwrap();
}

#[test]
fn test_log_two_shifts_then_summarize() {
    let pool = DbPool::in_memory().unwrap();

    let script = "1\n1\n2024-03-01\n100\n5\n\
                  log\n3\n2024-03-15\n4\n\
                  summary\n2024-03\n\
                  exit\n";
    let out = run_session(&pool, script);

    assert!(out.contains("Total Earnings: $115.00"));
    assert!(out.contains("Earnings Per Hour: $23.00"));
    assert!(out.contains("Total Earnings: $48.00"));
    assert!(out.contains("Shifts Logged: 2"));
    assert!(out.contains("Total Hours: 9.00"));
    assert!(out.contains("Total Tips: $100.00"));
    assert!(out.contains("Total Earnings: $163.00"));
    assert!(out.contains("Average $/hr: $18.11/hr"));
    assert!(out.contains("Goodbye!"));

    let all = load_all_shifts(&pool.conn).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].role, Role::Ta);
    assert_eq!(all[1].tips, 0.0);
}

#[test]
fn test_invalid_inputs_reprompt() {
    let pool = DbPool::in_memory().unwrap();

    // bad role, blank date (today), negative tips, non-numeric hours
    let script = "1\nchef\n2\n\n-5\n10\nabc\n3\n5\n";
    let out = run_session(&pool, script);

    assert!(out.matches("Invalid input.").count() >= 3);
    assert!(out.contains("Role: HOST"));
    assert!(out.contains("Total Earnings: $44.50"));

    let all = load_all_shifts(&pool.conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].date, tiplog::utils::date::today());
}

#[test]
fn test_unknown_option_and_help() {
    let pool = DbPool::in_memory().unwrap();
    let out = run_session(&pool, "9\n?\nq\n");

    assert!(out.contains("Invalid option."));
    assert!(out.contains("HOST   -> $11.50/hr + tips"));
    assert!(out.contains("TA     -> $12.00/hr (no tips)"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_empty_month_summary_reports_na() {
    let pool = DbPool::in_memory().unwrap();
    let out = run_session(&pool, "2\n2030-01\n5\n");

    assert!(out.contains("Shifts Logged: 0"));
    assert!(out.contains("Average $/hr: N/A"));
}

#[test]
fn test_list_month_in_ledger_order() {
    let pool = DbPool::in_memory().unwrap();
    seed(&pool, "2024-03-15", Role::Ta, 4.0, 0.0, 12.0);
    seed(&pool, "2024-03-01", Role::Server, 5.0, 100.0, 3.0);
    seed(&pool, "2024-04-01", Role::Host, 1.0, 0.0, 11.5);

    let out = run_session(&pool, "3\n2024-03\n5\n");

    let first = out.find("2024-03-01").expect("first shift listed");
    let second = out.find("2024-03-15").expect("second shift listed");
    assert!(first < second);
    assert!(!out.contains("2024-04-01"));
    assert!(out.contains("$115.00"));
}

#[test]
fn test_delete_confirmed_and_cancelled() {
    let pool = DbPool::in_memory().unwrap();
    seed(&pool, "2024-03-01", Role::Server, 5.0, 100.0, 3.0);
    seed(&pool, "2024-03-01", Role::Host, 2.0, 5.0, 11.5);

    let out = run_session(&pool, "4\n2024-03-01\nn\n5\n");
    assert!(out.contains("Operation cancelled."));
    assert_eq!(load_all_shifts(&pool.conn).unwrap().len(), 2);

    let out = run_session(&pool, "delete\n2024-03-01\ny\n5\n");
    assert!(out.contains("Deleted 2 shift(s) on 2024-03-01."));
    assert!(load_all_shifts(&pool.conn).unwrap().is_empty());

    let out = run_session(&pool, "del\n2024-03-01\n5\n");
    assert!(out.contains("No shifts found on 2024-03-01."));
}

#[test]
fn test_eof_ends_session_cleanly() {
    let pool = DbPool::in_memory().unwrap();
    run_session(&pool, "1\n1\n");
    run_session(&pool, "");
    assert!(load_all_shifts(&pool.conn).unwrap().is_empty());
}

#[test]
fn test_storage_error_is_reported_and_session_continues() {
    let pool = DbPool::in_memory().unwrap();
    pool.conn.execute_batch("DROP TABLE shifts").unwrap();

    let out = run_session(&pool, "2\n2024-03\n5\n");

    assert!(out.contains("Storage error"));
    assert!(out.contains("Goodbye!"));
}
