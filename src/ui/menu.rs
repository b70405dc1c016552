//! Interactive numbered menu.
//!
//! Input and output are injected so the loop can be driven from stdin or
//! from a test buffer. Invalid input re-prompts; storage failures are
//! reported and the session continues. EOF on input ends the session.

use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::earnings::per_shift_earnings;
use crate::core::del::DeleteLogic;
use crate::core::query::QueryLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::load_shifts_by_date;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::year_month::YearMonth;
use crate::ui::render;
use crate::utils::date::parse_date_or_today;
use crate::utils::number::{parse_hours, parse_tips};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

enum Choice {
    Log,
    Summary,
    List,
    Delete,
    Help,
    Exit,
}

impl Choice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "log" => Some(Choice::Log),
            "2" | "summary" => Some(Choice::Summary),
            "3" | "list" => Some(Choice::List),
            "4" | "delete" | "del" => Some(Choice::Delete),
            "5" | "exit" | "quit" | "q" => Some(Choice::Exit),
            "help" | "h" | "?" => Some(Choice::Help),
            _ => None,
        }
    }
}

pub struct Menu<'a, R: BufRead, W: Write> {
    pool: &'a DbPool,
    cfg: &'a Config,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(pool: &'a DbPool, cfg: &'a Config, input: R, out: W) -> Self {
        Self {
            pool,
            cfg,
            input,
            out,
        }
    }

    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Choose an option (1-5): ")? else {
                writeln!(self.out)?;
                return Ok(());
            };

            let outcome = match Choice::parse(&line) {
                Some(Choice::Log) => self.log_shift(),
                Some(Choice::Summary) => self.monthly_summary(),
                Some(Choice::List) => self.list_shifts(),
                Some(Choice::Delete) => self.delete_by_date(),
                Some(Choice::Help) => self.help(),
                Some(Choice::Exit) => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                None => {
                    writeln!(
                        self.out,
                        "Invalid option. Please enter 1-5 or type: log, summary, list, delete, help, exit."
                    )?;
                    Ok(Flow::Continue)
                }
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Eof) => {
                    writeln!(self.out)?;
                    return Ok(());
                }
                Err(e) if e.is_storage() => {
                    writeln!(self.out, "❌ Storage error: {e}")?;
                }
                Err(e) => {
                    writeln!(self.out, "❌ {e}")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> AppResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=================== Tip Log ===================")?;
        writeln!(self.out, "1. Log a shift (save to database)")?;
        writeln!(self.out, "2. Monthly summary (avg $/hr)")?;
        writeln!(self.out, "3. List shifts for a month")?;
        writeln!(self.out, "4. Delete shifts (by date)")?;
        writeln!(self.out, "5. Exit")?;
        writeln!(self.out, "Commands: log, summary, list, delete, help, exit")?;
        Ok(())
    }

    fn help(&mut self) -> AppResult<Flow> {
        writeln!(self.out, "\n=================== Help ===================")?;
        write!(
            self.out,
            "{}",
            render::roles_help(&self.cfg.wages, &self.cfg.currency_symbol)
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "Commands:")?;
        writeln!(self.out, "  log       -> Log a shift")?;
        writeln!(self.out, "  summary   -> Monthly summary")?;
        writeln!(self.out, "  list      -> List shifts")?;
        writeln!(self.out, "  delete    -> Delete shifts by date")?;
        writeln!(self.out, "  exit      -> Quit")?;
        Ok(Flow::Continue)
    }

    fn log_shift(&mut self) -> AppResult<Flow> {
        let Some(role) = self.ask(
            "\nChoose your role:\n1. Server\n2. Host\n3. TA\nChoose (1-3): ",
            |s| Role::from_code(s).ok_or_else(|| AppError::InvalidRole(s.trim().to_string())),
        )?
        else {
            return Ok(Flow::Eof);
        };

        let Some(date) = self.ask_date("Enter date (YYYY-MM-DD) or press Enter for today: ")?
        else {
            return Ok(Flow::Eof);
        };

        let tips = if role.receives_tips() {
            let Some(t) = self.ask("Tips made ($): ", parse_tips)? else {
                return Ok(Flow::Eof);
            };
            Some(t)
        } else {
            None
        };

        let Some(hours) = self.ask("Hours worked: ", parse_hours)? else {
            return Ok(Flow::Eof);
        };

        let shift = AddLogic::apply(self.pool, &self.cfg.wages, date, role, hours, tips)?;
        let earnings = per_shift_earnings(&shift)?;

        audit(
            &self.pool.conn,
            "add",
            &shift.date_str(),
            &format!("Logged {} shift #{} ({} h)", shift.role, shift.id, shift.hours_worked),
        );

        writeln!(self.out)?;
        write!(
            self.out,
            "{}",
            render::saved_shift(&shift, &earnings, &self.cfg.currency_symbol)
        )?;
        Ok(Flow::Continue)
    }

    fn monthly_summary(&mut self) -> AppResult<Flow> {
        let Some(month) = self.ask_month()? else {
            return Ok(Flow::Eof);
        };

        let summary = QueryLogic::monthly_summary(self.pool, month)?;
        writeln!(self.out)?;
        write!(
            self.out,
            "{}",
            render::monthly_summary(&summary, &self.cfg.currency_symbol)
        )?;
        Ok(Flow::Continue)
    }

    fn list_shifts(&mut self) -> AppResult<Flow> {
        let Some(month) = self.ask_month()? else {
            return Ok(Flow::Eof);
        };

        let shifts = QueryLogic::list_month(self.pool, month)?;
        if shifts.is_empty() {
            writeln!(self.out, "No shifts logged in {month}.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out)?;
        write!(
            self.out,
            "{}",
            render::shift_table(&shifts, &self.cfg.currency_symbol, self.separator())
        )?;
        Ok(Flow::Continue)
    }

    fn delete_by_date(&mut self) -> AppResult<Flow> {
        let Some(date) = self.ask_date("Enter shift date to delete (YYYY-MM-DD): ")? else {
            return Ok(Flow::Eof);
        };

        let existing = load_shifts_by_date(self.pool, &date)?;
        if existing.is_empty() {
            writeln!(self.out, "No shifts found on {date}.")?;
            return Ok(Flow::Continue);
        }

        let Some(answer) = self.prompt(&format!(
            "Delete {} shift(s) on {}? [y/N]: ",
            existing.len(),
            date
        ))?
        else {
            return Ok(Flow::Eof);
        };

        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            writeln!(self.out, "Operation cancelled.")?;
            return Ok(Flow::Continue);
        }

        let deleted = DeleteLogic::apply(self.pool, date)?;
        audit(
            &self.pool.conn,
            "del",
            &date.to_string(),
            &format!("Deleted {deleted} shift(s)"),
        );

        if deleted > 0 {
            writeln!(self.out, "Deleted {deleted} shift(s) on {date}.")?;
        } else {
            writeln!(self.out, "No shifts found on {date}.")?;
        }
        Ok(Flow::Continue)
    }

    fn separator(&self) -> char {
        self.cfg.separator_char.chars().next().unwrap_or('-')
    }

    /// Print `msg` and read one line. `None` on EOF.
    fn prompt(&mut self, msg: &str) -> AppResult<Option<String>> {
        write!(self.out, "{msg}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompt until `parse` accepts the line. `None` on EOF.
    fn ask<T, F>(&mut self, msg: &str, parse: F) -> AppResult<Option<T>>
    where
        F: Fn(&str) -> AppResult<T>,
    {
        loop {
            let Some(line) = self.prompt(msg)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(v) => return Ok(Some(v)),
                Err(e) => writeln!(self.out, "Invalid input. {e}")?,
            }
        }
    }

    fn ask_date(&mut self, msg: &str) -> AppResult<Option<NaiveDate>> {
        self.ask(msg, |s| parse_date_or_today(Some(s)))
    }

    fn ask_month(&mut self) -> AppResult<Option<YearMonth>> {
        self.ask("Enter month (YYYY-MM) or press Enter for this month: ", |s| {
            if s.trim().is_empty() {
                Ok(YearMonth::current())
            } else {
                s.parse()
            }
        })
    }
}

enum Flow {
    Continue,
    Eof,
}
