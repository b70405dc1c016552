use chrono::NaiveDate;
use tiplog::config::Config;
use tiplog::export::parse_range;
use tiplog::utils::formatting::{money, per_hour, round2};
use tiplog::utils::number::{parse_amount, parse_hours, parse_tips};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_money_formatting() {
    assert_eq!(money(115.0, "$"), "$115.00");
    assert_eq!(money(1234.5, "$"), "$1,234.50");
    assert_eq!(money(1_000_000.0, "€"), "€1,000,000.00");
    assert_eq!(money(0.004, "$"), "$0.00");
    assert_eq!(money(-12.5, "$"), "-$12.50");
    assert_eq!(round2(163.0 / 9.0), "18.11");
}

#[test]
fn test_per_hour_not_applicable() {
    assert_eq!(per_hour(None, "$"), "N/A");
    assert_eq!(per_hour(Some(23.0), "$"), "$23.00/hr");
}

#[test]
fn test_amount_parsing() {
    assert_eq!(parse_amount("12"), Some(12.0));
    assert_eq!(parse_amount(" $1,200.50 "), Some(1200.5));
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("inf"), None);

    assert!(parse_hours("0").is_err());
    assert!(parse_hours("-2").is_err());
    assert_eq!(parse_hours("7.5").unwrap(), 7.5);

    assert_eq!(parse_tips("0").unwrap(), 0.0);
    assert!(parse_tips("-0.5").is_err());
}

#[test]
fn test_parse_range_shapes() {
    assert_eq!(parse_range("2024").unwrap(), (d("2024-01-01"), d("2024-12-31")));
    assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
    assert_eq!(parse_range("2024-03-05").unwrap(), (d("2024-03-05"), d("2024-03-05")));
    assert_eq!(
        parse_range("2023:2024").unwrap(),
        (d("2023-01-01"), d("2024-12-31"))
    );
    assert_eq!(
        parse_range("2024-01:2024-03").unwrap(),
        (d("2024-01-01"), d("2024-03-31"))
    );
    assert_eq!(
        parse_range("2024-01-10:2024-01-20").unwrap(),
        (d("2024-01-10"), d("2024-01-20"))
    );
}

#[test]
fn test_parse_range_rejects_bad_input() {
    assert!(parse_range("2024-03:2024").is_err());
    assert!(parse_range("2024-05:2024-01").is_err());
    assert!(parse_range("24").is_err());
    assert!(parse_range("2024-13").is_err());
}

#[test]
fn test_config_file_with_custom_wages() {
    let mut path = std::env::temp_dir();
    path.push("tiplog_custom_wages.conf");
    std::fs::write(
        &path,
        "database: /tmp/x.sqlite\ndefault_role: host\nwages:\n  server: 4.5\n",
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.wages.server, 4.5);
    assert_eq!(cfg.wages.host, 11.5);
    assert_eq!(cfg.currency_symbol, "$");
    assert_eq!(cfg.default_role(), tiplog::models::role::Role::Host);
}

#[test]
fn test_config_rejects_non_positive_wage() {
    let mut path = std::env::temp_dir();
    path.push("tiplog_bad_wages.conf");
    std::fs::write(&path, "database: /tmp/x.sqlite\nwages:\n  ta: 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("TA"));
}

#[test]
fn test_init_keeps_existing_config_settings() {
    let mut path = std::env::temp_dir();
    path.push("tiplog_reinit.conf");
    std::fs::write(
        &path,
        "database: /tmp/old.sqlite\ncurrency_symbol: €\nwages:\n  host: 14.25\n",
    )
    .unwrap();

    Config::write_for_database(&path, std::path::Path::new("/tmp/new.sqlite")).unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/new.sqlite");
    assert_eq!(cfg.wages.host, 14.25);
    assert_eq!(cfg.currency_symbol, "€");
}

#[test]
fn test_init_writes_defaults_when_no_config_exists() {
    let mut path = std::env::temp_dir();
    path.push("tiplog_fresh_init.conf");
    std::fs::remove_file(&path).ok();

    Config::write_for_database(&path, std::path::Path::new("/tmp/fresh.sqlite")).unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/fresh.sqlite");
    assert_eq!(cfg.wages.host, 11.5);
}
