/*
 * Fixed cell layout of the invoice sheet, as plain (row, column, value,
 * style) data with zero based positions. Writing it out happens in render.
 */

use std::collections::BTreeMap;

use crate::billing::{InvoiceRecord, RunTime};
use crate::config::BillerIdentity;

pub const ITEM_HEADERS: [&str; 5] =
    ["Date", "Description", "Total Run Time", "Rate", "Total"];

const HEADER_ROW: u32 = 8;
const BOOK_TITLE_ROW: u32 = 9;
const FIRST_ITEM_ROW: u32 = 10;
const COLUMN_PADDING: usize = 2;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Style {
    Plain,
    /// Bold, large.
    Title,
    /// Bold.
    Subheader,
    /// Bold and centered.
    TableHeader,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Cell {
    pub row: u32,
    pub col: u16,
    pub value: String,
    pub style: Style,
}

impl Cell {
    fn new(row: u32, col: u16, value: impl Into<String>) -> Self {
        Self::styled(row, col, value, Style::Plain)
    }

    fn styled(row: u32, col: u16, value: impl Into<String>, style: Style) -> Self {
        Self {
            row,
            col,
            value: value.into(),
            style,
        }
    }
}

pub fn invoice_layout(
    record: &InvoiceRecord,
    biller: &BillerIdentity,
    invoice_number: &str,
) -> Vec<Cell> {
    let mut cells = vec![
        Cell::styled(0, 0, &biller.name, Style::Title),
        Cell::new(1, 0, &biller.address),
        Cell::new(2, 0, &biller.city_state_zip),
        Cell::new(3, 0, &biller.social_handle),
        Cell::styled(5, 0, "Bill To:", Style::Subheader),
        Cell::new(5, 1, &record.customer_name),
        Cell::new(6, 1, &record.customer_address),
        Cell::styled(0, 3, "INVOICE", Style::Title),
        Cell::new(2, 3, "INVOICE NUMBER"),
        Cell::new(2, 4, invoice_number),
        Cell::new(3, 3, "INVOICE DATE"),
        Cell::new(3, 4, &record.invoice_date),
    ];

    cells.extend(ITEM_HEADERS.iter().zip(0..).map(|(header, col)| {
        Cell::styled(HEADER_ROW, col, *header, Style::TableHeader)
    }));
    cells.push(Cell::styled(
        BOOK_TITLE_ROW,
        1,
        &record.book_title,
        Style::TableHeader,
    ));

    let mut row = FIRST_ITEM_ROW;
    for item in record.items.iter() {
        cells.extend([
            Cell::new(row, 0, &record.invoice_date),
            Cell::new(row, 1, title_case(&item.work_type)),
            Cell::new(row, 2, RunTime(item.hours).to_string()),
            Cell::new(row, 3, item.rate.to_string()),
            Cell::new(row, 4, item.total.to_string()),
        ]);
        row += 1;
    }

    cells.extend([
        Cell::new(row + 1, 3, "TOTAL"),
        Cell::new(row + 1, 4, record.grand_total().to_string()),
        Cell::new(row + 2, 4, "Please Pay"),
        Cell::new(row + 4, 1, "Make All Checks Payable To:"),
        Cell::new(row + 5, 1, &biller.name),
        Cell::new(row + 6, 1, &biller.address),
        Cell::new(row + 7, 1, &biller.city_state_zip),
    ]);

    cells
}

/// Width of each column holding a value: its longest value plus padding.
pub fn column_widths(cells: &[Cell]) -> BTreeMap<u16, usize> {
    let mut widths = BTreeMap::new();
    for cell in cells.iter().filter(|c| !c.value.is_empty()) {
        let width = cell.value.chars().count() + COLUMN_PADDING;
        widths
            .entry(cell.col)
            .and_modify(|w: &mut usize| *w = (*w).max(width))
            .or_insert(width);
    }
    widths
}

/// Uppercases the first letter of every word and lowercases the rest, a word
/// being any run of letters.
pub fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            titled.push(c);
            in_word = false;
        }
    }
    titled
}
