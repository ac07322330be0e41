//! Wire models for Spire API responses

use serde::Deserialize;

/// Envelope returned by Spire list endpoints.
#[derive(Debug, Deserialize)]
pub struct RecordSet<T> {
    #[serde(default)]
    pub records: Vec<T>,
}

/// A purchase order as returned by the lookup.
///
/// `id` is opaque and only ever used to form the update URL; `number` is
/// the canonical zero-padded order number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    pub number: String,
}

/// An inventory catalog record, as much of it as the importer reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: i64,
    pub part_no: String,
    #[serde(default)]
    pub whse: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
