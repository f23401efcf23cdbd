use crate::cell::CellValue;
use crate::error::{DataError, Result};
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            // Excel stores dates as serial day numbers since 1899-12-30
            CellValue::Float(dt.as_f64())
        }
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

/// An open Excel file, reading worksheets on demand
pub(crate) struct XlsxFile {
    workbook: Xlsx<BufReader<File>>,
}

impl XlsxFile {
    /// Open an Excel file for reading
    pub(crate) fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let workbook: Xlsx<BufReader<File>> = open_workbook(path.as_ref())
            .map_err(|e: XlsxError| DataError::Workbook(e.to_string()))?;

        Ok(Self { workbook })
    }

    /// Read one worksheet by name, promoting the first row to column headers
    pub(crate) fn sheet(&mut self, name: &str) -> Result<Sheet> {
        let known = self.workbook.sheet_names().iter().any(|n| n == name);
        if !known {
            return Err(DataError::SheetNotFound {
                name: name.to_string(),
            });
        }

        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e: XlsxError| DataError::Workbook(e.to_string()))?;

        let mut data: Vec<Vec<CellValue>> = Vec::new();
        for row in range.rows() {
            let row_data: Vec<CellValue> = row.iter().map(data_to_cell_value).collect();
            data.push(row_data);
        }

        let mut sheet = Sheet::with_name(name);
        *sheet.data_mut() = data;

        if sheet.row_count() > 0 {
            sheet.name_columns_by_row(0)?;
        }

        Ok(sheet)
    }
}

impl Sheet {
    /// Load a specific worksheet from an Excel file by name.
    ///
    /// The first row is promoted to column headers.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened, the worksheet is missing,
    /// or the header row contains duplicate names.
    pub fn from_xlsx_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Self> {
        let mut file = XlsxFile::open(path)?;
        file.sheet(sheet_name)
    }
}
