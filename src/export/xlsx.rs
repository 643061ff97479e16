// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows, a total row and
/// column widths fitted to the content.
pub(crate) fn export_xlsx(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

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

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (index, r) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        let band = if index % 2 == 0 { band1 } else { band2 };

        let text = cell_format(band);
        let hours = cell_format(band).set_num_format("0.00").set_align(FormatAlign::Right);
        let seconds = cell_format(band).set_num_format("0").set_align(FormatAlign::Right);

        write_row(worksheet, row, r, &text, &hours, &seconds)?;

        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(r.task.as_str()));
        col_widths[1] = col_widths[1].max(format!("{:.2}", r.hours).len());
        col_widths[2] = col_widths[2].max(r.seconds.to_string().len());
    }

    // ---------------------------
    // Total
    // ---------------------------
    let total = RecordExport {
        task: "Total".to_string(),
        hours: rows.iter().map(|r| r.hours).sum(),
        seconds: rows.iter().map(|r| r.seconds).sum(),
    };
    let bold = Format::new().set_bold().set_border(FormatBorder::Thin);
    write_row(
        worksheet,
        (rows.len() + 1) as u32,
        &total,
        &bold,
        &bold.clone().set_num_format("0.00"),
        &bold.clone().set_num_format("0"),
    )?;
    col_widths[1] = col_widths[1].max(format!("{:.2}", total.hours).len());
    col_widths[2] = col_widths[2].max(total.seconds.to_string().len());

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    r: &RecordExport,
    text: &Format,
    hours: &Format,
    seconds: &Format,
) -> AppResult<()> {
    worksheet
        .write_with_format(row, 0, r.task.as_str(), text)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(row, 1, r.hours, hours)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(row, 2, r.seconds as f64, seconds)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
