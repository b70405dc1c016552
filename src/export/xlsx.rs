// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::ShiftExport;
use crate::export::model::get_headers;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows and auto column widths.
pub(crate) fn export_xlsx(rows: &[ShiftExport], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };

        let text = Format::new()
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        let number = text.clone().set_align(FormatAlign::Right).set_num_format("0.00");
        let integer = text.clone().set_align(FormatAlign::Right);

        worksheet
            .write_with_format(row, 0, r.id as f64, &integer)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 1, r.date.as_str(), &text)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 2, r.role.as_str(), &text)
            .map_err(to_export_error)?;

        let amounts = [
            r.hours_worked,
            r.tips,
            r.wage_rate,
            r.wage_earnings,
            r.total_earnings,
        ];
        for (offset, v) in amounts.iter().enumerate() {
            write_number(worksheet, row, (3 + offset) as u16, *v, &number)?;
        }

        let shown = [
            r.id.to_string(),
            r.date.clone(),
            r.role.clone(),
            format!("{:.2}", r.hours_worked),
            format!("{:.2}", r.tips),
            format!("{:.2}", r.wage_rate),
            format!("{:.2}", r.wage_earnings),
            format!("{:.2}", r.total_earnings),
        ];
        for (c, v) in shown.iter().enumerate() {
            col_widths[c] = col_widths[c].max(UnicodeWidthStr::width(v.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;
    Ok(())
}

fn write_number(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: f64,
    fmt: &Format,
) -> AppResult<()> {
    worksheet
        .write_with_format(row, col, value, fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
