use crate::cell::CellValue;
use crate::error::{DataError, Result};
use std::collections::HashMap;

/// A worksheet as a 2D grid of cells (row-major storage)
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
    column_names: Option<Vec<String>>,
    column_index: Option<HashMap<String, usize>>,
}

impl Sheet {
    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
            column_names: None,
            column_index: None,
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
            column_names: None,
            column_index: None,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of rows (including a header row, if any)
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Check if the sheet is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a single row by index
    ///
    /// # Errors
    ///
    /// Returns `DataError::RowIndexOutOfBounds` if the index is past the end.
    pub fn row(&self, index: usize) -> Result<&[CellValue]> {
        self.data
            .get(index)
            .map(Vec::as_slice)
            .ok_or(DataError::RowIndexOutOfBounds {
                index,
                count: self.data.len(),
            })
    }

    /// Get an entire column by index (0-based)
    ///
    /// # Errors
    ///
    /// Returns `DataError::ColumnIndexOutOfBounds` if the index is past the end.
    pub fn column(&self, index: usize) -> Result<Vec<CellValue>> {
        if index >= self.col_count() {
            return Err(DataError::ColumnIndexOutOfBounds {
                index,
                count: self.col_count(),
            });
        }

        Ok(self
            .data
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or(CellValue::Null))
            .collect())
    }

    /// Get an entire column by name
    ///
    /// # Errors
    ///
    /// Returns error if columns are unnamed or the name is unknown.
    pub fn column_by_name(&self, name: &str) -> Result<Vec<CellValue>> {
        let index = self.column_index_by_name(name)?;
        self.column(index)
    }

    /// Use the specified row as column headers
    ///
    /// # Errors
    ///
    /// Returns `DataError::DuplicateColumnName` if the header row contains
    /// duplicate names.
    pub fn name_columns_by_row(&mut self, row_index: usize) -> Result<()> {
        let header_row = self.row(row_index)?;
        let names: Vec<String> = header_row.iter().map(|c| c.as_str()).collect();

        let mut index_map = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            if index_map.contains_key(name) {
                return Err(DataError::DuplicateColumnName { name: name.clone() });
            }
            index_map.insert(name.clone(), i);
        }

        self.column_names = Some(names);
        self.column_index = Some(index_map);
        Ok(())
    }

    /// Get column names (if set)
    #[must_use]
    pub fn column_names(&self) -> Option<&Vec<String>> {
        self.column_names.as_ref()
    }

    /// Get the column index by name
    pub(crate) fn column_index_by_name(&self, name: &str) -> Result<usize> {
        self.column_index
            .as_ref()
            .ok_or_else(|| {
                DataError::ColumnsNotNamed("Call name_columns_by_row() first".to_string())
            })?
            .get(name)
            .copied()
            .ok_or_else(|| DataError::ColumnNotFound {
                sheet: self.name.clone(),
                column: name.to_string(),
            })
    }

    /// Iterate over data rows, skipping the header row when columns are named
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &Vec<CellValue>)> {
        let skip = usize::from(self.column_names.is_some());
        self.data.iter().enumerate().skip(skip)
    }

    /// Get internal data reference
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Get mutable internal data reference
    pub fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }
}
