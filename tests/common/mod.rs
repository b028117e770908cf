//! Fixture workbooks and archives shaped like the Bank of England release

#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const SHEET: &str = "4. spot curve";
pub const ENTRY: &str = "OIS daily data current month.xlsx";

/// Header matching the published layout: blank date column, then maturities
pub const STANDARD_MATURITIES: [f64; 8] = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 5.0, 10.0];

/// One data row: date plus one optional rate per maturity column
pub struct FixtureRow {
    pub date: Option<(u16, u8, u8)>,
    pub label: Option<&'static str>,
    pub rates: Vec<Option<f64>>,
}

impl FixtureRow {
    pub fn dated(y: u16, m: u8, d: u8, rates: &[Option<f64>]) -> Self {
        Self {
            date: Some((y, m, d)),
            label: None,
            rates: rates.to_vec(),
        }
    }

    pub fn note(text: &'static str) -> Self {
        Self {
            date: None,
            label: Some(text),
            rates: Vec::new(),
        }
    }
}

/// Rates for the standard header, given only the 2yr, 5yr and 10yr values
pub fn standard_rates(two: Option<f64>, five: Option<f64>, ten: Option<f64>) -> Vec<Option<f64>> {
    vec![
        Some(4.9),
        Some(4.8),
        Some(4.7),
        two,
        Some(4.4),
        Some(4.3),
        five,
        ten,
    ]
}

fn write_sheet(worksheet: &mut Worksheet, maturities: &[f64], rows: &[FixtureRow]) {
    let date_format = Format::new().set_num_format("dd mmm yy");

    worksheet
        .write_string(0, 0, "OIS spot curve (annualised, continuously compounded)")
        .unwrap();
    worksheet.write_string(2, 0, "Maturity").unwrap();
    worksheet.write_string(3, 0, "years:").unwrap();
    for (col, years) in maturities.iter().enumerate() {
        worksheet.write_number(3, col as u16 + 1, *years).unwrap();
    }

    for (i, row) in rows.iter().enumerate() {
        let r = 5 + i as u32;
        if let Some((y, m, d)) = row.date {
            let date = ExcelDateTime::from_ymd(y, m, d).unwrap();
            worksheet
                .write_datetime_with_format(r, 0, &date, &date_format)
                .unwrap();
        }
        if let Some(label) = row.label {
            worksheet.write_string(r, 0, label).unwrap();
        }
        for (col, rate) in row.rates.iter().enumerate() {
            if let Some(rate) = rate {
                worksheet.write_number(r, col as u16 + 1, *rate).unwrap();
            }
        }
    }
}

/// Workbook with the spot curve sheet (plus a decoy sheet before it)
pub fn workbook(maturities: &[f64], rows: &[FixtureRow]) -> Vec<u8> {
    let mut workbook = Workbook::new();

    let info = workbook.add_worksheet();
    info.set_name("info").unwrap();
    info.write_string(0, 0, "Bank of England yield curves").unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET).unwrap();
    write_sheet(sheet, maturities, rows);

    workbook.save_to_buffer().unwrap()
}

/// Zip archive holding the workbook under the published entry name
pub fn archive(workbook: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default();

    zip.start_file("GLC Nominal daily data current month.xlsx", options)
        .unwrap();
    zip.write_all(b"unrelated").unwrap();
    zip.start_file(ENTRY, options).unwrap();
    zip.write_all(workbook).unwrap();
    zip.finish().unwrap();

    buffer
}

/// The two-day scenario used throughout: 10 June vs 7 June 2024
pub fn two_day_rows() -> Vec<FixtureRow> {
    vec![
        FixtureRow::dated(2024, 6, 7, &standard_rates(Some(4.25), Some(4.00), Some(3.70))),
        FixtureRow::dated(2024, 6, 10, &standard_rates(Some(4.50), Some(4.10), Some(3.80))),
    ]
}
