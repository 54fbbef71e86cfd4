// src/export/xlsx.rs

use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::export::model::table_headers;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export the report to XLSX: numeric cells keep their value, the number
/// format adds two decimals and the currency.
pub(crate) fn export_report_xlsx(report: &Report, currency: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet
        .write(0, 0, report.title())
        .map_err(to_io_app_error)?;

    if report.is_empty() {
        worksheet
            .write(2, 0, "No data available")
            .map_err(to_io_app_error)?;
        workbook.save(path).map_err(to_io_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = table_headers(&report.scope);
    let header_row = 2;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(header_row + 1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let money_fmt = format!("#,##0.00 \"{currency}\"");
    let hours_fmt = "0.00 \"h\"".to_string();
    let rate_fmt = format!("0.00 \"{currency}/h\"");

    // ---------------------------
    // Rows
    // ---------------------------
    for (i, r) in report.rows.iter().enumerate() {
        let row = header_row + 1 + i as u32;
        let band = if i % 2 == 0 {
            Color::RGB(0xEAF3FB)
        } else {
            Color::RGB(0xFFFFFF)
        };

        let text_cell = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        let num_cell = |fmt: &str| {
            text_cell
                .clone()
                .set_num_format(fmt)
                .set_align(FormatAlign::Right)
        };

        worksheet
            .write_with_format(row, 0, r.project.as_str(), &text_cell)
            .map_err(to_io_app_error)?;

        let numbers = [
            (r.budget, &money_fmt),
            (r.expenses, &money_fmt),
            (r.hours, &hours_fmt),
            (r.profitability, &rate_fmt),
        ];
        for (offset, (value, fmt)) in numbers.iter().enumerate() {
            worksheet
                .write_with_format(row, offset as u16 + 1, *value, &num_cell(fmt))
                .map_err(to_io_app_error)?;
        }

        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(r.project.as_str()));
        for (c, value) in [r.budget, r.expenses, r.hours, r.profitability].iter().enumerate() {
            // value + two decimals + unit suffix
            let w = format!("{value:.2}").len() + currency.len() + 3;
            col_widths[c + 1] = col_widths[c + 1].max(w);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
