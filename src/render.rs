use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use tracing::info;

use crate::billing::InvoiceRecord;
use crate::config::{BillerIdentity, Settings};
use crate::error::InvoiceError;
use crate::layout::{self, Cell, Style};

const SHEET_NAME: &str = "Invoice";

struct Formats {
    title: Format,
    subheader: Format,
    table_header: Format,
}

impl Formats {
    fn new() -> Self {
        let subheader = Format::new().set_bold().set_font_size(12);
        Self {
            title: Format::new().set_bold().set_font_size(16),
            table_header: subheader.clone().set_align(FormatAlign::Center),
            subheader,
        }
    }

    fn for_style(&self, style: Style) -> Option<&Format> {
        match style {
            Style::Plain => None,
            Style::Title => Some(&self.title),
            Style::Subheader => Some(&self.subheader),
            Style::TableHeader => Some(&self.table_header),
        }
    }
}

/// `invoice_<customer>_<invoice date>_<YYYYMMDD>.xlsx`
pub fn file_name(record: &InvoiceRecord, today: NaiveDate) -> String {
    format!(
        "invoice_{}_{}_{}.xlsx",
        record.customer_name.replace(' ', "_"),
        record.invoice_date,
        today.format("%Y%m%d")
    )
}

pub fn invoice_number(prefix: &str, today: NaiveDate) -> String {
    format!("{} {}", prefix, today.format("%m-%d-%y"))
}

fn write_cell(
    sheet: &mut Worksheet,
    cell: &Cell,
    formats: &Formats,
) -> Result<(), InvoiceError> {
    match formats.for_style(cell.style) {
        Some(format) => sheet
            .write_string_with_format(cell.row, cell.col, &cell.value, format)?,
        None => sheet.write_string(cell.row, cell.col, &cell.value)?,
    };
    Ok(())
}

/// Writes the invoice sheet, replacing any file of the same name.
pub fn render(
    record: &InvoiceRecord,
    biller: &BillerIdentity,
    settings: &Settings,
    today: NaiveDate,
) -> Result<PathBuf, InvoiceError> {
    let number = invoice_number(&settings.number_prefix, today);
    let cells = layout::invoice_layout(record, biller, &number);
    let path = settings.output_dir.join(file_name(record, today));

    save(&cells, &path)?;
    info!(path = %path.display(), cells = cells.len(), "invoice written");
    Ok(path)
}

pub fn render_today(
    record: &InvoiceRecord,
    biller: &BillerIdentity,
    settings: &Settings,
) -> Result<PathBuf, InvoiceError> {
    render(record, biller, settings, Local::now().date_naive())
}

fn save(cells: &[Cell], path: &Path) -> Result<(), InvoiceError> {
    let formats = Formats::new();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for cell in cells.iter() {
        write_cell(sheet, cell, &formats)?;
    }
    for (col, width) in layout::column_widths(cells) {
        sheet.set_column_width(col, width as f64)?;
    }

    workbook.save(path)?;
    Ok(())
}
