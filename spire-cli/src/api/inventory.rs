//! Inventory catalog lookups and creation
//!
//! Used by the reconcile pass: check whether a part number exists in the
//! catalog and create it when the CSV row carries enough data.

use log::debug;
use serde::Serialize;

use crate::error::ImportError;

use super::client::SpireClient;
use super::models::{InventoryRecord, RecordSet};
use super::query::FilterQuery;

/// Default warehouse code for line items and new catalog entries.
pub const DEFAULT_WAREHOUSE: &str = "00";

const ITEMS_PATH: &str = "inventory/items/";

/// Margin divisor used to derive a sell price from an imported cost.
const SELL_PRICE_DIVISOR: f64 = 0.55;

/// Catalog sell price for a unit cost: cost / 0.55, rounded to 2 decimals.
pub fn sell_price(cost: f64) -> f64 {
    (cost / SELL_PRICE_DIVISOR * 100.0).round() / 100.0
}

/// Payload for creating a missing inventory item. Cost and sell price are
/// carried only when the source row priced the item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub whse: String,
    pub part_no: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,
}

impl SpireClient {
    /// Exact-match existence check on part number.
    pub async fn inventory_exists(&self, part_no: &str) -> Result<bool, ImportError> {
        let query = FilterQuery::new().eq("partNo", part_no).limit(1);
        let response = self.get(ITEMS_PATH, Some(&query)).await?;
        if !response.is_success() {
            return Err(ImportError::Upstream {
                status: response.status,
                body: response.body,
            });
        }
        let set: RecordSet<InventoryRecord> = response.json()?;
        debug!("inventory lookup for {part_no}: {} record(s)", set.records.len());
        Ok(!set.records.is_empty())
    }

    /// Create a catalog entry; surfaces Spire's error body on rejection.
    pub async fn create_inventory_item(&self, item: &NewInventoryItem) -> Result<(), ImportError> {
        let response = self.post(ITEMS_PATH, item).await?;
        if !response.is_success() {
            return Err(ImportError::InventoryCreate {
                part_no: item.part_no.clone(),
                status: response.status,
                body: response.body,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sell_price_margin() {
        assert_eq!(sell_price(10.0), 18.18);
        assert_eq!(sell_price(5.5), 10.0);
        assert_eq!(sell_price(0.0), 0.0);
    }

    #[test]
    fn test_sell_price_rounds_to_two_decimals() {
        // 1.0 / 0.55 = 1.8181..., rounds to 1.82
        assert_eq!(sell_price(1.0), 1.82);
        assert_eq!(sell_price(0.01), 0.02);
    }

    #[test]
    fn test_create_payload_shape() {
        let item = NewInventoryItem {
            whse: DEFAULT_WAREHOUSE.into(),
            part_no: "A100".into(),
            description: "Widget".into(),
            current_cost: Some(10.0),
            sell_price: Some(sell_price(10.0)),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "whse": "00",
                "partNo": "A100",
                "description": "Widget",
                "currentCost": 10.0,
                "sellPrice": 18.18
            })
        );
    }

    #[test]
    fn test_create_payload_omits_missing_pricing() {
        let item = NewInventoryItem {
            whse: DEFAULT_WAREHOUSE.into(),
            part_no: "B200".into(),
            description: "Unpriced widget".into(),
            current_cost: None,
            sell_price: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("currentCost").is_none());
        assert!(json.get("sellPrice").is_none());
    }
}
