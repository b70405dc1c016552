use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour per audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "vacuum" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Cut a plain string to `max` visible chars, ending with "...".
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);

                // single op+target column
                let op_target = if target.is_empty() {
                    operation.clone()
                } else {
                    truncate(&format!("{operation} ({target})"), MAX_OP_WIDTH)
                };

                (id, date, operation, op_target, message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| r.3.chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            // paint only the operation word; padding is computed on the plain text
            let pad = op_w - op_target.chars().count();
            let (op, rest) = match op_target.split_once(' ') {
                Some((op, rest)) => (op.to_string(), format!(" {rest}")),
                None => (op_target.clone(), String::new()),
            };
            let painted = color_for_operation(&operation).paint(op).to_string();

            println!(
                "{:>id_w$}  {:<date_w$}  {}{}{}  {}",
                id,
                date,
                painted,
                rest,
                " ".repeat(pad),
                message,
                id_w = id_w,
                date_w = date_w,
            );
        }

        Ok(())
    }
}
