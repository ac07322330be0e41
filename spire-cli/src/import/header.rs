//! Header resolution for uploaded CSV files
//!
//! Maps logical column names to positions in an arbitrary header row.
//! Matching is case-insensitive and order-independent, and every required
//! name must resolve before any data row is read, so partial payloads are
//! never submitted.

use std::collections::HashMap;

use csv::StringRecord;

use crate::error::ImportError;

/// Logical column names recognized in an upload.
pub const PART_NO_COLUMN: &str = "Part No";
pub const ORDER_QTY_COLUMN: &str = "Order Qty";
pub const UNIT_PRICE_COLUMN: &str = "Unit Price";
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Columns every upload must provide.
pub const REQUIRED_COLUMNS: &[&str] = &[PART_NO_COLUMN, ORDER_QTY_COLUMN];
/// Columns that enrich a row when present.
pub const OPTIONAL_COLUMNS: &[&str] = &[UNIT_PRICE_COLUMN, DESCRIPTION_COLUMN];

/// Uppercased logical name -> column index, built once per upload.
#[derive(Debug, Clone)]
pub struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    /// Resolve logical names against a header row.
    ///
    /// Fails naming the first required column with no match; absent
    /// optional names are simply left unmapped. On duplicate headers the
    /// first occurrence wins.
    pub fn resolve(
        header_row: &StringRecord,
        required: &[&str],
        optional: &[&str],
    ) -> Result<Self, ImportError> {
        let uppercased: Vec<String> = header_row
            .iter()
            .map(|header| header.trim().to_uppercase())
            .collect();

        let mut columns = HashMap::new();
        for name in required {
            let key = name.to_uppercase();
            let index = uppercased
                .iter()
                .position(|header| *header == key)
                .ok_or_else(|| ImportError::MissingColumn(name.to_string()))?;
            columns.insert(key, index);
        }
        for name in optional {
            let key = name.to_uppercase();
            if let Some(index) = uppercased.iter().position(|header| *header == key) {
                columns.insert(key, index);
            }
        }
        Ok(Self { columns })
    }

    /// Position of a logical column, if it was mapped.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.columns.get(&name.to_uppercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[&str]) -> StringRecord {
        StringRecord::from(cells.to_vec())
    }

    #[test]
    fn test_resolves_any_case_and_order() {
        let headers = record(&["unit price", "ORDER QTY", "Part No"]);
        let map = HeaderMap::resolve(&headers, REQUIRED_COLUMNS, OPTIONAL_COLUMNS).unwrap();
        assert_eq!(map.index(PART_NO_COLUMN), Some(2));
        assert_eq!(map.index(ORDER_QTY_COLUMN), Some(1));
        assert_eq!(map.index(UNIT_PRICE_COLUMN), Some(0));
    }

    #[test]
    fn test_missing_required_column_is_named() {
        let headers = record(&["Part No", "Unit Price"]);
        let err = HeaderMap::resolve(&headers, REQUIRED_COLUMNS, OPTIONAL_COLUMNS).unwrap_err();
        match err {
            ImportError::MissingColumn(name) => assert_eq!(name, ORDER_QTY_COLUMN),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_optional_columns_are_unmapped() {
        let headers = record(&["Part No", "Order Qty"]);
        let map = HeaderMap::resolve(&headers, REQUIRED_COLUMNS, OPTIONAL_COLUMNS).unwrap();
        assert_eq!(map.index(UNIT_PRICE_COLUMN), None);
        assert_eq!(map.index(DESCRIPTION_COLUMN), None);
    }

    #[test]
    fn test_surrounding_whitespace_in_headers() {
        let headers = record(&[" Part No ", "Order Qty"]);
        let map = HeaderMap::resolve(&headers, REQUIRED_COLUMNS, OPTIONAL_COLUMNS).unwrap();
        assert_eq!(map.index(PART_NO_COLUMN), Some(0));
    }

    #[test]
    fn test_duplicate_headers_first_wins() {
        let headers = record(&["Part No", "Part No", "Order Qty"]);
        let map = HeaderMap::resolve(&headers, REQUIRED_COLUMNS, OPTIONAL_COLUMNS).unwrap();
        assert_eq!(map.index(PART_NO_COLUMN), Some(0));
    }
}
