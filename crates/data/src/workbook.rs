use crate::error::Result;
use crate::records::{ExhibitionRecord, SalesRecord, TrafficRecord};
use crate::xlsx::XlsxFile;
use std::path::Path;

/// Worksheet holding the e-commerce sales table
pub const SALES_SHEET: &str = "Dash_1";
/// Worksheet holding the traffic table
pub const TRAFFIC_SHEET: &str = "Traffic";
/// Worksheet holding the exhibition table
pub const EXHIBITION_SHEET: &str = "Exhibition";

/// The three record sets of the fixed-layout workbook.
///
/// Loaded once at startup and held read-only; the three tables are
/// independent and are aggregated separately.
#[derive(Debug, Clone)]
pub struct Workbook {
    pub sales: Vec<SalesRecord>,
    pub traffic: Vec<TrafficRecord>,
    pub exhibitions: Vec<ExhibitionRecord>,
}

impl Workbook {
    /// Load the three fixed-name worksheets from an Excel file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened, a worksheet or column is
    /// missing, or a cell cannot be parsed as its declared type.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = XlsxFile::open(path)?;

        let sales = SalesRecord::from_sheet(&file.sheet(SALES_SHEET)?)?;
        let traffic = TrafficRecord::from_sheet(&file.sheet(TRAFFIC_SHEET)?)?;
        let exhibitions = ExhibitionRecord::from_sheet(&file.sheet(EXHIBITION_SHEET)?)?;

        Ok(Self {
            sales,
            traffic,
            exhibitions,
        })
    }
}
