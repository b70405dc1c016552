use chrono::NaiveDate;
use tiplog::core::add::AddLogic;
use tiplog::core::calculator::earnings::per_shift_earnings;
use tiplog::core::calculator::summary::summarize;
use tiplog::core::wages::WageTable;
use tiplog::errors::AppError;
use tiplog::models::role::Role;
use tiplog::models::shift::Shift;
use tiplog::models::year_month::YearMonth;

mod common;
use common::assert_close;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn march() -> YearMonth {
    "2024-03".parse().unwrap()
}

fn stored(id: i64, date: &str, role: Role, hours: f64, tips: f64, wage: f64) -> Shift {
    Shift {
        id,
        date: d(date),
        role,
        hours_worked: hours,
        tips,
        wage_rate: wage,
    }
}

#[test]
fn test_server_shift_earnings() {
    let s = stored(1, "2024-03-01", Role::Server, 5.0, 100.0, 3.0);
    let e = per_shift_earnings(&s).unwrap();

    assert_close(e.wage_earnings, 15.0);
    assert_close(e.total_earnings, 115.0);
    assert_close(e.earnings_per_hour, 23.0);
}

#[test]
fn test_earnings_identity_holds_for_varied_inputs() {
    let cases = [
        (Role::Server, 0.25, 0.0, 3.0),
        (Role::Host, 7.75, 42.13, 11.5),
        (Role::Ta, 12.0, 0.0, 12.0),
        (Role::Server, 9.5, 1234.56, 3.0),
    ];

    for (i, (role, hours, tips, wage)) in cases.into_iter().enumerate() {
        let s = stored(i as i64 + 1, "2024-01-01", role, hours, tips, wage);
        let e = per_shift_earnings(&s).unwrap();

        assert_close(e.total_earnings, tips + hours * wage);
        assert_close(e.earnings_per_hour, e.total_earnings / hours);
        assert_close(s.total_earnings(), e.total_earnings);
    }
}

#[test]
fn test_zero_hours_is_a_domain_error() {
    let s = stored(7, "2024-03-01", Role::Server, 0.0, 20.0, 3.0);
    match per_shift_earnings(&s) {
        Err(AppError::Domain(msg)) => assert!(msg.contains("#7")),
        other => panic!("expected domain error, got {other:?}"),
    }
}

#[test]
fn test_summarize_empty_month_is_all_zeros() {
    let s = summarize(march(), &[]);

    assert_eq!(s.shift_count, 0);
    assert_close(s.total_hours, 0.0);
    assert_close(s.total_tips, 0.0);
    assert_close(s.total_earnings, 0.0);
    assert_eq!(s.average_per_hour(), None);
}

#[test]
fn test_summarize_march_scenario() {
    let shifts = vec![
        stored(1, "2024-03-01", Role::Server, 5.0, 100.0, 3.0),
        stored(2, "2024-03-15", Role::Ta, 4.0, 0.0, 12.0),
    ];

    let s = summarize(march(), &shifts);
    assert_eq!(s.shift_count, 2);
    assert_close(s.total_hours, 9.0);
    assert_close(s.total_tips, 100.0);
    assert_close(s.total_earnings, 163.0);
    assert_close(s.average_per_hour().unwrap(), 163.0 / 9.0);
    assert_eq!(format!("{:.2}", s.average_per_hour().unwrap()), "18.11");
}

#[test]
fn test_summarize_is_order_independent() {
    let shifts = vec![
        stored(1, "2024-03-01", Role::Server, 5.0, 100.0, 3.0),
        stored(2, "2024-03-02", Role::Host, 6.5, 37.25, 11.5),
        stored(3, "2024-03-15", Role::Ta, 4.0, 0.0, 12.0),
        stored(4, "2024-03-20", Role::Server, 3.0, 61.0, 3.0),
    ];

    let forward = summarize(march(), &shifts);

    let mut reversed = shifts.clone();
    reversed.reverse();
    let backward = summarize(march(), &reversed);

    let mut rotated = shifts.clone();
    rotated.rotate_left(2);
    let rotated = summarize(march(), &rotated);

    for other in [&backward, &rotated] {
        assert_eq!(forward.shift_count, other.shift_count);
        assert_close(forward.total_hours, other.total_hours);
        assert_close(forward.total_tips, other.total_tips);
        assert_close(forward.total_earnings, other.total_earnings);
    }
}

#[test]
fn test_wage_table_defaults() {
    let w = WageTable::default();
    assert_close(w.rate_for(Role::Server), 3.0);
    assert_close(w.rate_for(Role::Host), 11.5);
    assert_close(w.rate_for(Role::Ta), 12.0);
    assert!(w.invalid_roles().is_empty());
}

#[test]
fn test_build_freezes_wage_and_forces_ta_tips_to_zero() {
    let w = WageTable::default();

    let ta = AddLogic::build(&w, d("2024-03-15"), Role::Ta, 4.0, Some(25.0)).unwrap();
    assert_close(ta.tips, 0.0);
    assert_close(ta.wage_rate, 12.0);

    let host = AddLogic::build(&w, d("2024-03-16"), Role::Host, 2.0, None).unwrap();
    assert_close(host.tips, 0.0);
    assert_close(host.wage_rate, 11.5);
}

#[test]
fn test_build_rejects_invalid_inputs() {
    let w = WageTable::default();
    let date = d("2024-03-01");

    for hours in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            AddLogic::build(&w, date, Role::Server, hours, Some(1.0)),
            Err(AppError::Validation(_))
        ));
    }

    assert!(matches!(
        AddLogic::build(&w, date, Role::Host, 3.0, Some(-0.01)),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_build_uses_configured_table() {
    let w = WageTable {
        server: 4.25,
        ..WageTable::default()
    };
    let s = AddLogic::build(&w, d("2024-03-01"), Role::Server, 2.0, Some(10.0)).unwrap();
    assert_close(s.wage_rate, 4.25);
}

#[test]
fn test_year_month_bounds() {
    let feb_leap: YearMonth = "2024-02".parse().unwrap();
    assert_eq!(feb_leap.bounds(), (d("2024-02-01"), d("2024-02-29")));

    let feb: YearMonth = "2023-02".parse().unwrap();
    assert_eq!(feb.last_day(), d("2023-02-28"));

    let dec: YearMonth = "2024-12".parse().unwrap();
    assert_eq!(dec.bounds(), (d("2024-12-01"), d("2024-12-31")));
    assert_eq!(dec.to_string(), "2024-12");
}

#[test]
fn test_year_month_rejects_garbage() {
    for raw in ["2024-13", "2024-00", "2024-3", "24-03", "2024/03", "march", ""] {
        assert!(
            matches!(raw.parse::<YearMonth>(), Err(AppError::InvalidMonth(_))),
            "{raw} should not parse"
        );
    }
}

#[test]
fn test_role_codes() {
    assert_eq!(Role::from_code("server"), Some(Role::Server));
    assert_eq!(Role::from_code("Host"), Some(Role::Host));
    assert_eq!(Role::from_code("ta"), Some(Role::Ta));
    assert_eq!(Role::from_code("2"), Some(Role::Host));
    assert_eq!(Role::from_code("chef"), None);
    assert!(!Role::Ta.receives_tips());
}
