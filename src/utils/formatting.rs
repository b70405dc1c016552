//! Formatting utilities used for CLI and export outputs.
//! Rounding to cents happens here and nowhere else.

/// Two decimals, no symbol
pub fn round2(v: f64) -> String {
    format!("{:.2}", v)
}

/// `$1,234.50` style amount; negative values keep the sign in front.
pub fn money(v: f64, symbol: &str) -> String {
    let cents = format!("{:.2}", v.abs());
    let (int_part, frac) = cents.split_once('.').unwrap_or((&cents, "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if v < 0.0 && cents != "0.00" { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{frac}")
}

/// Hourly rate, or `N/A` when it is undefined.
pub fn per_hour(v: Option<f64>, symbol: &str) -> String {
    match v {
        Some(x) => format!("{}/hr", money(x, symbol)),
        None => "N/A".to_string(),
    }
}
