//! Row translation: one CSV record into one order line item

use csv::StringRecord;
use serde::Serialize;

use crate::api::DEFAULT_WAREHOUSE;
use crate::error::ImportError;

use super::header::{
    DESCRIPTION_COLUMN, HeaderMap, ORDER_QTY_COLUMN, PART_NO_COLUMN, UNIT_PRICE_COLUMN,
};

/// Inventory reference nested inside a line item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInventory {
    pub whse: String,
    pub part_no: String,
}

/// One row of the replace payload.
///
/// Optional fields serialize only when the source column existed and the
/// cell was non-empty. Quantity passes through as a string; Spire
/// validates it downstream. The unit of measure is not set here because
/// Spire autopopulates it from the stock UOM.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub inventory: ItemInventory,
    pub order_qty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Translate one data row. `row` is the 1-based position in the file
/// (the header is row 1) and only appears in error messages.
pub fn translate_row(
    row: usize,
    record: &StringRecord,
    headers: &HeaderMap,
) -> Result<LineItem, ImportError> {
    let part_no = required_cell(row, record, headers, PART_NO_COLUMN)?;
    let order_qty = required_cell(row, record, headers, ORDER_QTY_COLUMN)?;

    let unit_price = match optional_cell(record, headers, UNIT_PRICE_COLUMN) {
        Some(raw) => Some(raw.parse::<f64>().map_err(|_| ImportError::RowParse {
            row,
            message: format!("unit price '{raw}' is not a number"),
        })?),
        None => None,
    };
    let description = optional_cell(record, headers, DESCRIPTION_COLUMN);

    Ok(LineItem {
        inventory: ItemInventory {
            whse: DEFAULT_WAREHOUSE.to_string(),
            part_no,
        },
        order_qty,
        unit_price,
        description,
    })
}

/// A required column's cell; a row too short to reach it is a
/// translation failure.
fn required_cell(
    row: usize,
    record: &StringRecord,
    headers: &HeaderMap,
    column: &str,
) -> Result<String, ImportError> {
    let index = headers
        .index(column)
        .ok_or_else(|| ImportError::MissingColumn(column.to_string()))?;
    match record.get(index) {
        Some(cell) => Ok(cell.trim().to_string()),
        None => Err(ImportError::RowParse {
            row,
            message: format!("row is too short to contain the '{column}' column"),
        }),
    }
}

/// An optional column's cell: absent column, short row, and empty cell
/// all mean "no value".
fn optional_cell(record: &StringRecord, headers: &HeaderMap, column: &str) -> Option<String> {
    let index = headers.index(column)?;
    let cell = record.get(index)?.trim();
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}
