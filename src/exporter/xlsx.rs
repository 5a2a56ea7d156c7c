// file: src/exporter/xlsx.rs
// description: single-sheet spreadsheet export of a frequency table
// reference: https://docs.rs/rust_xlsxwriter

use crate::error::{PipelineError, Result};
use crate::exporter::csv::HEADER;
use crate::models::FrequencyTable;
use rust_xlsxwriter::{Format, Workbook};

// Worksheet rows available below the header.
const MAX_DATA_ROWS: usize = 1_048_575;

pub struct SpreadsheetExporter {
    sheet_name: String,
}

impl SpreadsheetExporter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    pub fn to_bytes(&self, table: &FrequencyTable) -> Result<Vec<u8>> {
        if table.len() > MAX_DATA_ROWS {
            return Err(PipelineError::Export(format!(
                "{} rows exceed the worksheet limit of {}",
                table.len(),
                MAX_DATA_ROWS
            )));
        }

        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, title) in HEADER.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }

        for (idx, row) in table.rows().iter().enumerate() {
            let line = (idx + 1) as u32;
            worksheet.write_string(line, 0, &row.word)?;
            worksheet.write_number(line, 1, row.count as f64)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}
