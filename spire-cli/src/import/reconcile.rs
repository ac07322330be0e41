//! Inventory reconciliation for imported rows
//!
//! Optionally checks each part number against the Spire catalog and
//! creates missing entries when the row carries a description. Creation
//! is advisory: a row with no description still imports, with a warning.

use log::warn;

use crate::api::{DEFAULT_WAREHOUSE, NewInventoryItem, SpireClient, sell_price};
use crate::error::ImportError;

use super::row::LineItem;

/// What the reconcile pass did for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Part already exists in the catalog
    Exists,
    /// Part was missing and a catalog entry was created
    Created,
    /// Part was missing but the row had no description to create it from
    SkippedNoDescription,
}

/// Build the create payload for a line item, or `None` when the row lacks
/// a description. The description becomes the catalog description and the
/// unit price the current cost, with the sell price derived from it; an
/// unpriced row leaves both cost fields to Spire's defaults.
pub fn plan_creation(item: &LineItem) -> Option<NewInventoryItem> {
    let description = item.description.clone()?;
    Some(NewInventoryItem {
        whse: DEFAULT_WAREHOUSE.to_string(),
        part_no: item.inventory.part_no.clone(),
        description,
        current_cost: item.unit_price,
        sell_price: item.unit_price.map(sell_price),
    })
}

/// Check-then-create for one line item.
///
/// The two calls are not atomic: concurrent uploads may both observe
/// "not found", and Spire's response to the second create decides the
/// outcome.
pub async fn reconcile_line_item(
    client: &SpireClient,
    item: &LineItem,
) -> Result<ReconcileOutcome, ImportError> {
    if client.inventory_exists(&item.inventory.part_no).await? {
        return Ok(ReconcileOutcome::Exists);
    }
    match plan_creation(item) {
        Some(new_item) => {
            client.create_inventory_item(&new_item).await?;
            Ok(ReconcileOutcome::Created)
        }
        None => {
            warn!(
                "part {} is not in the catalog and the row has no description; skipping creation",
                item.inventory.part_no
            );
            Ok(ReconcileOutcome::SkippedNoDescription)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::row::ItemInventory;

    fn item(unit_price: Option<f64>, description: Option<&str>) -> LineItem {
        LineItem {
            inventory: ItemInventory {
                whse: DEFAULT_WAREHOUSE.into(),
                part_no: "A100".into(),
            },
            order_qty: "5".into(),
            unit_price,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_plan_with_description_and_price() {
        let planned = plan_creation(&item(Some(10.0), Some("Widget"))).unwrap();
        assert_eq!(planned.part_no, "A100");
        assert_eq!(planned.whse, "00");
        assert_eq!(planned.description, "Widget");
        assert_eq!(planned.current_cost, Some(10.0));
        assert_eq!(planned.sell_price, Some(18.18));
    }

    #[test]
    fn test_plan_with_description_but_no_price() {
        let planned = plan_creation(&item(None, Some("Widget"))).unwrap();
        assert_eq!(planned.current_cost, None);
        assert_eq!(planned.sell_price, None);
    }

    #[test]
    fn test_no_description_means_no_creation() {
        assert!(plan_creation(&item(Some(10.0), None)).is_none());
        assert!(plan_creation(&item(None, None)).is_none());
    }
}
