//! Replace-items payload assembly

use std::io::Read;

use serde::Serialize;

use crate::error::ImportError;

use super::header::{HeaderMap, OPTIONAL_COLUMNS, REQUIRED_COLUMNS};
use super::row::{LineItem, translate_row};

/// The full-replace request body.
///
/// Spire swaps the order's entire item collection for this list, so input
/// row order is preserved verbatim; there is no dedup and no merge with
/// the order's existing items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaceItemsPayload {
    pub items: Vec<LineItem>,
}

impl ReplaceItemsPayload {
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parse an uploaded CSV into line items, in input row order.
///
/// The header row is resolved first, so a bad header aborts before any
/// data row is touched. Fully-empty rows are skipped.
pub fn parse_items<R: Read>(input: R) -> Result<Vec<LineItem>, ImportError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = HeaderMap::resolve(reader.headers()?, REQUIRED_COLUMNS, OPTIONAL_COLUMNS)?;

    let mut items = Vec::new();
    // Row numbers are 1-based file positions; the header is row 1.
    for (offset, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        items.push(translate_row(offset + 2, &record, &headers)?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_row_order() {
        let csv = "Part No,Order Qty,Unit Price\nA100,5,12.50\nB200,2,\nC300,1,3.99\n";
        let items = parse_items(csv.as_bytes()).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].inventory.part_no, "A100");
        assert_eq!(items[0].unit_price, Some(12.5));
        assert_eq!(items[1].inventory.part_no, "B200");
        assert_eq!(items[1].unit_price, None);
        assert_eq!(items[2].inventory.part_no, "C300");
    }

    #[test]
    fn test_header_case_and_order_do_not_matter() {
        let csv = "ORDER QTY,unit price,Part no\n5,12.50,A100\n";
        let items = parse_items(csv.as_bytes()).unwrap();
        assert_eq!(items[0].inventory.part_no, "A100");
        assert_eq!(items[0].order_qty, "5");
        assert_eq!(items[0].unit_price, Some(12.5));
    }

    #[test]
    fn test_bad_header_aborts_before_rows() {
        let csv = "Part No,Quantity\nA100,5\n";
        let err = parse_items(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn(name) if name == "Order Qty"));
    }

    #[test]
    fn test_row_errors_carry_file_position() {
        let csv = "Part No,Order Qty,Unit Price\nA100,5,12.50\nB200,2,oops\n";
        let err = parse_items(csv.as_bytes()).unwrap_err();
        match err {
            ImportError::RowParse { row, .. } => assert_eq!(row, 3),
            other => panic!("expected RowParse, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_rows_are_skipped() {
        let csv = "Part No,Order Qty\nA100,5\n,\nB200,2\n";
        let items = parse_items(csv.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].inventory.part_no, "B200");
    }

    #[test]
    fn test_quoted_cells() {
        let csv = "Part No,Order Qty,Description\n\"A,100\",5,\"Widget, large\"\n";
        let items = parse_items(csv.as_bytes()).unwrap();
        assert_eq!(items[0].inventory.part_no, "A,100");
        assert_eq!(items[0].description.as_deref(), Some("Widget, large"));
    }

    #[test]
    fn test_payload_wire_shape() {
        let csv = "Part No,Order Qty\nA100,5\n";
        let payload = ReplaceItemsPayload::from_items(parse_items(csv.as_bytes()).unwrap());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [
                    {"inventory": {"whse": "00", "partNo": "A100"}, "orderQty": "5"}
                ]
            })
        );
    }
}
