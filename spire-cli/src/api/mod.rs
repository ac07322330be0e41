//! Spire ERP REST API client
//!
//! A thin typed surface over the handful of Spire endpoints the importer
//! touches: purchase order lookup and full-replace update, and inventory
//! existence checks and creation. All calls use basic authentication and
//! `accept: application/json`; list endpoints are filtered with a
//! URL-encoded JSON filter query parameter.

pub mod client;
pub mod inventory;
pub mod models;
pub mod orders;
pub mod query;

pub use client::SpireClient;
pub use inventory::{DEFAULT_WAREHOUSE, NewInventoryItem, sell_price};
pub use models::{InventoryRecord, PurchaseOrder, RecordSet};
pub use orders::{PO_NUMBER_WIDTH, pad_order_number};
pub use query::FilterQuery;
