//! Purchase order lookup and full-replace update

use log::warn;

use crate::error::ImportError;
use crate::import::ReplaceItemsPayload;

use super::client::SpireClient;
use super::models::{PurchaseOrder, RecordSet};
use super::query::FilterQuery;

/// Spire purchase order numbers are always this many digits.
pub const PO_NUMBER_WIDTH: usize = 10;

const ORDERS_PATH: &str = "purchasing/orders/";
const LOOKUP_LIMIT: u32 = 50;

/// Zero-pad a user-entered order number to the fixed Spire width.
/// Inputs already at or beyond the width come back unchanged.
pub fn pad_order_number(input: &str) -> String {
    format!("{:0>width$}", input.trim(), width = PO_NUMBER_WIDTH)
}

impl SpireClient {
    /// Resolve a user-supplied order number to the ERP record.
    ///
    /// Zero records and a non-success status both resolve to
    /// `OrderNotFound`; ties among multiple matches are broken by taking
    /// the first record as Spire returned it.
    pub async fn find_purchase_order(&self, number: &str) -> Result<PurchaseOrder, ImportError> {
        let padded = pad_order_number(number);
        let query = FilterQuery::new()
            .eq("number", padded.as_str())
            .limit(LOOKUP_LIMIT);
        let response = self.get(ORDERS_PATH, Some(&query)).await?;
        if !response.is_success() {
            warn!(
                "purchase order lookup for {padded} returned status {}",
                response.status
            );
            return Err(ImportError::OrderNotFound(padded));
        }
        let set: RecordSet<PurchaseOrder> = response.json()?;
        set.records
            .into_iter()
            .next()
            .ok_or(ImportError::OrderNotFound(padded))
    }

    /// Replace the order's entire item collection.
    ///
    /// This is a full overwrite at the Spire boundary, not a merge; on
    /// success Spire returns the updated order, which is passed through
    /// verbatim.
    pub async fn replace_order_items(
        &self,
        order_id: i64,
        payload: &ReplaceItemsPayload,
    ) -> Result<serde_json::Value, ImportError> {
        let path = format!("purchasing/orders/{order_id}");
        let response = self.put(&path, payload).await?;
        if !response.is_success() {
            return Err(ImportError::Upstream {
                status: response.status,
                body: response.body,
            });
        }
        response.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_short_number() {
        assert_eq!(pad_order_number("64405"), "0000064405");
    }

    #[test]
    fn test_pad_is_idempotent() {
        assert_eq!(pad_order_number("0000064405"), "0000064405");
        assert_eq!(
            pad_order_number(&pad_order_number("7")),
            pad_order_number("7")
        );
    }

    #[test]
    fn test_pad_leaves_wide_numbers_alone() {
        assert_eq!(pad_order_number("12345678901"), "12345678901");
    }

    #[test]
    fn test_pad_trims_whitespace() {
        assert_eq!(pad_order_number("  42 "), "0000000042");
    }
}
