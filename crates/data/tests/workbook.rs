use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::path::Path;
use storeboard_data::{DataError, Workbook};
use tempfile::tempdir;

const SALES_HEADERS: [&str; 10] = [
    "Date",
    "Revenue",
    "Paid Sales",
    "Ad Spend",
    "AOV",
    "ROAS",
    "Units Sold",
    "Returning User",
    "New User",
    "Organic Sales",
];

const TRAFFIC_HEADERS: [&str; 6] = ["Date", "Type", "orders", "City", "Source", "Total Revenue"];

const EXHIBITION_HEADERS: [&str; 5] =
    ["Exhibition Name", "Orders", "Revenue", "AOV", "Popular collection"];

fn write_fixture(path: &Path) {
    let mut workbook = XlsxWorkbook::new();

    let sales = workbook.add_worksheet();
    sales.set_name("Dash_1").unwrap();
    for (col, header) in SALES_HEADERS.iter().enumerate() {
        sales.write_string(0, col as u16, *header).unwrap();
    }
    for (row, date) in ["2024-03-01", "2024-03-02"].iter().enumerate() {
        let row = (row + 1) as u32;
        sales.write_string(row, 0, *date).unwrap();
        for col in 1..10 {
            sales
                .write_number(row, col as u16, (row as f64) * 10.0 + col as f64)
                .unwrap();
        }
    }

    let traffic = workbook.add_worksheet();
    traffic.set_name("Traffic").unwrap();
    for (col, header) in TRAFFIC_HEADERS.iter().enumerate() {
        traffic.write_string(0, col as u16, *header).unwrap();
    }
    traffic.write_string(1, 0, "2024-03-01").unwrap();
    traffic.write_string(1, 1, "Retail").unwrap();
    traffic.write_number(1, 2, 4.0).unwrap();
    traffic.write_string(1, 3, "Berlin").unwrap();
    traffic.write_string(1, 4, "Organic").unwrap();
    traffic.write_number(1, 5, 120.0).unwrap();

    let exhibition = workbook.add_worksheet();
    exhibition.set_name("Exhibition").unwrap();
    for (col, header) in EXHIBITION_HEADERS.iter().enumerate() {
        exhibition.write_string(0, col as u16, *header).unwrap();
    }
    exhibition.write_string(1, 0, "Spring Fair").unwrap();
    exhibition.write_number(1, 1, 10.0).unwrap();
    exhibition.write_number(1, 2, 500.0).unwrap();
    exhibition.write_number(1, 3, 50.0).unwrap();
    exhibition.write_string(1, 4, "Ceramics").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn loads_all_three_tables() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dash.xlsx");
    write_fixture(&path);

    let workbook = Workbook::load(&path).unwrap();

    assert_eq!(workbook.sales.len(), 2);
    assert_eq!(workbook.traffic.len(), 1);
    assert_eq!(workbook.exhibitions.len(), 1);

    // Row 1 of Dash_1: Revenue is column 1 -> 1*10 + 1
    assert_eq!(workbook.sales[0].revenue, Some(11.0));
    // Row 2: Units Sold is column 6 -> 2*10 + 6
    assert_eq!(workbook.sales[1].units_sold, Some(26.0));

    assert_eq!(workbook.traffic[0].kind, "Retail");
    assert_eq!(workbook.traffic[0].total_revenue, Some(120.0));

    assert_eq!(workbook.exhibitions[0].exhibition, "Spring Fair");
    assert_eq!(workbook.exhibitions[0].collection, "Ceramics");
}

#[test]
fn missing_worksheet_aborts_the_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.xlsx");

    let mut workbook = XlsxWorkbook::new();
    let sales = workbook.add_worksheet();
    sales.set_name("Dash_1").unwrap();
    for (col, header) in SALES_HEADERS.iter().enumerate() {
        sales.write_string(0, col as u16, *header).unwrap();
    }
    workbook.save(&path).unwrap();

    let err = Workbook::load(&path).unwrap_err();
    assert!(matches!(err, DataError::SheetNotFound { ref name } if name == "Traffic"));
}

#[test]
fn missing_column_aborts_the_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("columns.xlsx");

    let mut workbook = XlsxWorkbook::new();
    let sales = workbook.add_worksheet();
    sales.set_name("Dash_1").unwrap();
    // Drop the last header
    for (col, header) in SALES_HEADERS[..9].iter().enumerate() {
        sales.write_string(0, col as u16, *header).unwrap();
    }
    workbook.save(&path).unwrap();

    let err = Workbook::load(&path).unwrap_err();
    assert!(
        matches!(err, DataError::ColumnNotFound { ref column, .. } if column == "Organic Sales")
    );
}
