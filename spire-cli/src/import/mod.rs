//! CSV import pipeline
//!
//! Header resolution, row translation, inventory reconciliation, and the
//! orchestrated upload against Spire. The pipeline is fail-fast and
//! sequential: the whole file is parsed before any mutating call, rows
//! are processed in input order because Spire item ordering is
//! positional, and the final update is a single full-replace PUT.

pub mod header;
pub mod payload;
pub mod reconcile;
pub mod row;

pub use header::HeaderMap;
pub use payload::{ReplaceItemsPayload, parse_items};
pub use reconcile::{ReconcileOutcome, plan_creation, reconcile_line_item};
pub use row::LineItem;

use std::io::Read;

use log::info;

use crate::api::SpireClient;
use crate::error::ImportError;

/// Per-upload switches.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    /// Create inventory items missing from the catalog (advisory).
    pub reconcile_inventory: bool,
}

/// What a successful upload produced.
#[derive(Debug)]
pub struct UploadOutcome {
    /// Canonical (zero-padded) order number from the lookup
    pub order_number: String,
    /// Number of items submitted in the replace payload
    pub item_count: usize,
    /// Advisory warnings collected along the way
    pub warnings: Vec<String>,
    /// Spire's updated-order response, verbatim
    pub response: serde_json::Value,
}

/// Replace a purchase order's items with rows parsed from `input`.
///
/// Sequence, failing fast at each stage: validate inputs, resolve the
/// order, parse the whole file, reconcile and assemble per row, then
/// issue the single replace call. A parse failure anywhere aborts before
/// any mutation; reconcile creates are interleaved per row, each issued
/// before its line item is appended to the payload.
pub async fn upload_order_items<R: Read>(
    client: &SpireClient,
    order_number: &str,
    input: R,
    options: &UploadOptions,
) -> Result<UploadOutcome, ImportError> {
    if order_number.trim().is_empty() {
        return Err(ImportError::Validation(
            "an order number is required".to_string(),
        ));
    }

    let order = client.find_purchase_order(order_number).await?;
    info!("resolved purchase order {} (id {})", order.number, order.id);

    let items = parse_items(input)?;
    if items.is_empty() {
        return Err(ImportError::Validation(
            "the uploaded file contains no data rows".to_string(),
        ));
    }

    let mut payload = ReplaceItemsPayload::default();
    let mut warnings = Vec::new();
    for item in items {
        if options.reconcile_inventory {
            let outcome = reconcile_line_item(client, &item).await?;
            if outcome == ReconcileOutcome::SkippedNoDescription {
                warnings.push(format!(
                    "part {} is not in the catalog and has no description; imported without creating it",
                    item.inventory.part_no
                ));
            }
        }
        payload.push(item);
    }

    let item_count = payload.len();
    let response = client.replace_order_items(order.id, &payload).await?;
    info!(
        "replaced {item_count} item(s) on purchase order {}",
        order.number
    );

    Ok(UploadOutcome {
        order_number: order.number,
        item_count,
        warnings,
        response,
    })
}
