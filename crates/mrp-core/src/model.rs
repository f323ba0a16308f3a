//! Input data model (spec §3, §6).
//!
//! These types are read-only once a planning run starts; the engine never
//! mutates them, it only builds derived tables from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable integer identifier for an item (`Index` in the external tables).
pub type ItemId = i64;

/// Purchase-vs-make policy for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemPolicy {
    /// Bought from a supplier; never has BOM children of its own as a
    /// manufactured parent.
    Purchase,
    /// Manufactured in-house; may appear as the parent of a BOM edge.
    Output,
}

/// Per-item master data (`item_master` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,
    pub code: String,
    pub policy: ItemPolicy,
    /// Lead time in days, already validated/defaulted by the loader that
    /// produced this table (see `mrp_calc::aggregator` for the cleaning
    /// step when loading from raw, possibly-garbage input).
    pub lead_time_days: u32,
}

/// One BOM edge: `(parent_id, child_id, qty_per)`, already filtered to
/// Output parents and deduplicated by summing (C1 does this; this struct
/// is the raw input before that filtering happens).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BomEdge {
    pub parent_id: ItemId,
    pub child_id: ItemId,
    pub qty_per: f64,
}

/// `(item_id, date, qty)` plus the customer the order is for — a single
/// sales-order demand line. `customer` is free-form and exists so a run
/// can be scoped to a caller-supplied customer selection (§6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderLine {
    pub item_id: ItemId,
    pub customer: String,
    pub date: NaiveDate,
    pub qty: f64,
}

/// `(item_id, expected_receipt_date, qty)` — a single open purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpenPurchase {
    pub item_id: ItemId,
    pub expected_receipt_date: NaiveDate,
    pub qty: f64,
}

/// `item_id → on_hand_qty`, one row per item (`inventory` table).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub item_id: ItemId,
    pub on_hand_qty: f64,
}
