//! Workbook loading for storeboard
//!
//! Reads the fixed-layout Excel workbook (three worksheets: `Dash_1`,
//! `Traffic`, `Exhibition`) into typed in-memory record sets. The workbook
//! is loaded once, held read-only, and never written back.
//!
//! # Examples
//!
//! ## Loading the workbook
//!
//! ```no_run
//! use storeboard_data::Workbook;
//!
//! let workbook = Workbook::load("Dash.xlsx").unwrap();
//! println!("{} sales rows", workbook.sales.len());
//! ```
//!
//! ## Working with a raw sheet
//!
//! ```
//! use storeboard_data::Sheet;
//!
//! let mut sheet = Sheet::from_data(vec![
//!     vec!["City", "Orders"],
//!     vec!["Berlin", "12"],
//! ]);
//! sheet.name_columns_by_row(0).unwrap();
//!
//! let orders = sheet.column_by_name("Orders").unwrap();
//! assert_eq!(orders.len(), 2);
//! ```
//!
//! Blank cells in numeric columns load as missing values; non-blank cells
//! that fail to parse as their declared type abort the load with a typed
//! error. There is no recovery surface beyond that.

mod cell;
mod error;
mod records;
mod sheet;
mod workbook;
mod xlsx;

/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export error types.
pub use error::{DataError, Result};
/// Re-export typed records.
pub use records::{ExhibitionRecord, SalesRecord, TrafficRecord};
/// Re-export sheet type.
pub use sheet::Sheet;
/// Re-export the workbook bundle and worksheet names.
pub use workbook::{Workbook, EXHIBITION_SHEET, SALES_SHEET, TRAFFIC_SHEET};
