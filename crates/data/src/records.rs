use crate::cell::CellValue;
use crate::error::{DataError, Result};
use crate::sheet::Sheet;
use chrono::NaiveDate;

/// One row of the e-commerce sales table (worksheet `Dash_1`)
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub revenue: Option<f64>,
    pub paid_sales: Option<f64>,
    pub ad_spend: Option<f64>,
    pub aov: Option<f64>,
    pub roas: Option<f64>,
    pub units_sold: Option<f64>,
    pub returning_users: Option<f64>,
    pub new_users: Option<f64>,
    pub organic_sales: Option<f64>,
}

impl SalesRecord {
    /// Parse all data rows of a named-column sheet into sales records.
    ///
    /// # Errors
    ///
    /// Returns error if a required column is missing or a cell cannot be
    /// parsed as its declared type.
    pub fn from_sheet(sheet: &Sheet) -> Result<Vec<Self>> {
        let date = sheet.column_index_by_name("Date")?;
        let revenue = sheet.column_index_by_name("Revenue")?;
        let paid_sales = sheet.column_index_by_name("Paid Sales")?;
        let ad_spend = sheet.column_index_by_name("Ad Spend")?;
        let aov = sheet.column_index_by_name("AOV")?;
        let roas = sheet.column_index_by_name("ROAS")?;
        let units_sold = sheet.column_index_by_name("Units Sold")?;
        let returning_users = sheet.column_index_by_name("Returning User")?;
        let new_users = sheet.column_index_by_name("New User")?;
        let organic_sales = sheet.column_index_by_name("Organic Sales")?;

        let mut records = Vec::new();
        for (row_idx, row) in sheet.data_rows() {
            if row.iter().all(CellValue::is_null) {
                continue;
            }

            records.push(SalesRecord {
                date: date_cell(sheet, row, row_idx, date, "Date")?,
                revenue: number_cell(sheet, row, row_idx, revenue, "Revenue")?,
                paid_sales: number_cell(sheet, row, row_idx, paid_sales, "Paid Sales")?,
                ad_spend: number_cell(sheet, row, row_idx, ad_spend, "Ad Spend")?,
                aov: number_cell(sheet, row, row_idx, aov, "AOV")?,
                roas: number_cell(sheet, row, row_idx, roas, "ROAS")?,
                units_sold: number_cell(sheet, row, row_idx, units_sold, "Units Sold")?,
                returning_users: number_cell(sheet, row, row_idx, returning_users, "Returning User")?,
                new_users: number_cell(sheet, row, row_idx, new_users, "New User")?,
                organic_sales: number_cell(sheet, row, row_idx, organic_sales, "Organic Sales")?,
            });
        }

        Ok(records)
    }
}

/// One row of the traffic table (worksheet `Traffic`)
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficRecord {
    pub date: NaiveDate,
    /// Sales channel type (column `Type`)
    pub kind: String,
    pub orders: Option<f64>,
    pub city: String,
    pub source: String,
    pub total_revenue: Option<f64>,
}

impl TrafficRecord {
    /// Parse all data rows of a named-column sheet into traffic records.
    ///
    /// # Errors
    ///
    /// Returns error if a required column is missing or a cell cannot be
    /// parsed as its declared type.
    pub fn from_sheet(sheet: &Sheet) -> Result<Vec<Self>> {
        let date = sheet.column_index_by_name("Date")?;
        let kind = sheet.column_index_by_name("Type")?;
        let orders = sheet.column_index_by_name("orders")?;
        let city = sheet.column_index_by_name("City")?;
        let source = sheet.column_index_by_name("Source")?;
        let total_revenue = sheet.column_index_by_name("Total Revenue")?;

        let mut records = Vec::new();
        for (row_idx, row) in sheet.data_rows() {
            if row.iter().all(CellValue::is_null) {
                continue;
            }

            records.push(TrafficRecord {
                date: date_cell(sheet, row, row_idx, date, "Date")?,
                kind: text_cell(row, kind),
                orders: number_cell(sheet, row, row_idx, orders, "orders")?,
                city: text_cell(row, city),
                source: text_cell(row, source),
                total_revenue: number_cell(sheet, row, row_idx, total_revenue, "Total Revenue")?,
            });
        }

        Ok(records)
    }
}

/// One row of the exhibition table (worksheet `Exhibition`)
#[derive(Debug, Clone, PartialEq)]
pub struct ExhibitionRecord {
    /// Exhibition name (column `Exhibition Name`)
    pub exhibition: String,
    pub orders: Option<f64>,
    pub revenue: Option<f64>,
    pub aov: Option<f64>,
    /// Best-selling collection at the exhibition (column `Popular collection`)
    pub collection: String,
}

impl ExhibitionRecord {
    /// Parse all data rows of a named-column sheet into exhibition records.
    ///
    /// # Errors
    ///
    /// Returns error if a required column is missing or a cell cannot be
    /// parsed as its declared type.
    pub fn from_sheet(sheet: &Sheet) -> Result<Vec<Self>> {
        let exhibition = sheet.column_index_by_name("Exhibition Name")?;
        let orders = sheet.column_index_by_name("Orders")?;
        let revenue = sheet.column_index_by_name("Revenue")?;
        let aov = sheet.column_index_by_name("AOV")?;
        let collection = sheet.column_index_by_name("Popular collection")?;

        let mut records = Vec::new();
        for (row_idx, row) in sheet.data_rows() {
            if row.iter().all(CellValue::is_null) {
                continue;
            }

            records.push(ExhibitionRecord {
                exhibition: text_cell(row, exhibition),
                orders: number_cell(sheet, row, row_idx, orders, "Orders")?,
                revenue: number_cell(sheet, row, row_idx, revenue, "Revenue")?,
                aov: number_cell(sheet, row, row_idx, aov, "AOV")?,
                collection: text_cell(row, collection),
            });
        }

        Ok(records)
    }
}

fn cell_at(row: &[CellValue], col: usize) -> &CellValue {
    row.get(col).unwrap_or(&CellValue::Null)
}

/// Read a numeric cell. Blank cells become `None`; anything non-blank that
/// does not parse as a number is an error.
fn number_cell(
    sheet: &Sheet,
    row: &[CellValue],
    row_idx: usize,
    col: usize,
    column: &str,
) -> Result<Option<f64>> {
    let cell = cell_at(row, col);
    if cell.is_null() {
        return Ok(None);
    }

    cell.as_float()
        .map(Some)
        .ok_or_else(|| DataError::Cell {
            sheet: sheet.name().to_string(),
            row: row_idx,
            column: column.to_string(),
            expected: "a number".to_string(),
            got: cell.as_str(),
        })
}

/// Read a categorical cell. Blank cells become the empty string.
fn text_cell(row: &[CellValue], col: usize) -> String {
    cell_at(row, col).as_str().trim().to_string()
}

/// Read a date cell: either an Excel serial number or an ISO `YYYY-MM-DD`
/// string. Dates are required.
fn date_cell(
    sheet: &Sheet,
    row: &[CellValue],
    row_idx: usize,
    col: usize,
    column: &str,
) -> Result<NaiveDate> {
    let cell = cell_at(row, col);
    let parsed = match cell {
        CellValue::Float(f) => excel_serial_to_date(*f),
        CellValue::Int(i) => excel_serial_to_date(*i as f64),
        CellValue::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    };

    parsed.ok_or_else(|| DataError::Cell {
        sheet: sheet.name().to_string(),
        row: row_idx,
        column: column.to_string(),
        expected: "a date".to_string(),
        got: cell.as_str(),
    })
}

/// Excel stores dates as serial day numbers counted from 1899-12-30.
/// Serial 2,958,465 is 9999-12-31, the last date Excel can represent.
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !(0.0..=2_958_465.0).contains(&serial) {
        return None;
    }

    let days = serial.trunc() as i64;
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_signed(chrono::Duration::days(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales_sheet(rows: Vec<Vec<CellValue>>) -> Sheet {
        let mut data = vec![vec![
            CellValue::from("Date"),
            CellValue::from("Revenue"),
            CellValue::from("Paid Sales"),
            CellValue::from("Ad Spend"),
            CellValue::from("AOV"),
            CellValue::from("ROAS"),
            CellValue::from("Units Sold"),
            CellValue::from("Returning User"),
            CellValue::from("New User"),
            CellValue::from("Organic Sales"),
        ]];
        data.extend(rows);

        let mut sheet = Sheet::from_data(data);
        sheet.name_columns_by_row(0).unwrap();
        sheet
    }

    fn sales_row(date: &str, revenue: f64) -> Vec<CellValue> {
        vec![
            CellValue::from(date),
            CellValue::from(revenue),
            CellValue::from(100.0),
            CellValue::from(40.0),
            CellValue::from(25.0),
            CellValue::from(2.5),
            CellValue::from(8.0),
            CellValue::from(3.0),
            CellValue::from(5.0),
            CellValue::from(60.0),
        ]
    }

    #[test]
    fn test_parse_sales_records() {
        let sheet = sales_sheet(vec![
            sales_row("2024-03-01", 200.0),
            sales_row("2024-03-02", 300.0),
        ]);

        let records = SalesRecord::from_sheet(&sheet).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(records[0].revenue, Some(200.0));
        assert_eq!(records[1].paid_sales, Some(100.0));
    }

    #[test]
    fn test_blank_numeric_cell_is_missing() {
        let mut row = sales_row("2024-03-01", 200.0);
        row[1] = CellValue::Null;
        let sheet = sales_sheet(vec![row]);

        let records = SalesRecord::from_sheet(&sheet).unwrap();
        assert_eq!(records[0].revenue, None);
        assert_eq!(records[0].ad_spend, Some(40.0));
    }

    #[test]
    fn test_blank_row_is_skipped() {
        let sheet = sales_sheet(vec![
            vec![CellValue::Null; 10],
            sales_row("2024-03-01", 200.0),
        ]);

        let records = SalesRecord::from_sheet(&sheet).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_malformed_number_is_fatal() {
        let mut row = sales_row("2024-03-01", 200.0);
        row[1] = CellValue::from("n/a");
        let sheet = sales_sheet(vec![row]);

        let err = SalesRecord::from_sheet(&sheet).unwrap_err();
        assert!(matches!(err, DataError::Cell { ref column, .. } if column == "Revenue"));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let mut sheet = Sheet::from_data(vec![vec!["Date"], vec!["2024-03-01"]]);
        sheet.name_columns_by_row(0).unwrap();

        let err = SalesRecord::from_sheet(&sheet).unwrap_err();
        assert!(matches!(err, DataError::ColumnNotFound { ref column, .. } if column == "Revenue"));
    }

    #[test]
    fn test_serial_date() {
        // Serial 44927 is 2023-01-01
        let mut row = sales_row("x", 200.0);
        row[0] = CellValue::Float(45000.0);
        let sheet = sales_sheet(vec![row]);

        let records = SalesRecord::from_sheet(&sheet).unwrap();
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
    }

    #[test]
    fn test_out_of_range_serial_is_fatal() {
        let mut row = sales_row("x", 200.0);
        row[0] = CellValue::Float(-1.0);
        let sheet = sales_sheet(vec![row]);

        let err = SalesRecord::from_sheet(&sheet).unwrap_err();
        assert!(matches!(err, DataError::Cell { ref column, .. } if column == "Date"));
    }

    #[test]
    fn test_parse_traffic_records() {
        let mut sheet = Sheet::from_data(vec![
            vec!["Date", "Type", "orders", "City", "Source", "Total Revenue"],
            vec!["2024-03-01", "Retail", "4", "Berlin", "Organic", "120"],
            vec!["2024-03-01", "Wholesale", "2", "Hamburg", "Ads", "300"],
        ]);
        sheet.name_columns_by_row(0).unwrap();

        let records = TrafficRecord::from_sheet(&sheet).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, "Retail");
        assert_eq!(records[0].orders, Some(4.0));
        assert_eq!(records[1].city, "Hamburg");
        assert_eq!(records[1].total_revenue, Some(300.0));
    }

    #[test]
    fn test_parse_exhibition_records() {
        let mut sheet = Sheet::from_data(vec![
            vec!["Exhibition Name", "Orders", "Revenue", "AOV", "Popular collection"],
            vec!["Spring Fair", "10", "500", "50", "Ceramics"],
        ]);
        sheet.name_columns_by_row(0).unwrap();

        let records = ExhibitionRecord::from_sheet(&sheet).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].exhibition, "Spring Fair");
        assert_eq!(records[0].collection, "Ceramics");
        assert_eq!(records[0].revenue, Some(500.0));
    }
}
