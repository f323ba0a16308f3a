//! Per-item plan storage (spec §3, §4.6) and the row shapes emitted by
//! the BOM Exploder (C2) and the Reporting Assembler (C9).

use crate::horizon::Horizon;
use crate::model::ItemId;
use chrono::NaiveDate;

/// Six parallel series over the horizon for a single item, allocated once
/// per item (Design Note: "a fixed plan struct... allocated once per
/// item", replacing dynamic frame mutation).
#[derive(Debug, Clone, PartialEq)]
pub struct PerItemPlan {
    pub item_id: ItemId,
    pub gross_requirement: Vec<f64>,
    pub scheduled_receipt: Vec<f64>,
    pub projected_on_hand: Vec<f64>,
    pub net_requirement: Vec<f64>,
    pub planned_receipt: Vec<f64>,
    pub planned_release: Vec<f64>,
    /// Parallel to `planned_release`: true at `day_index == 0` (`H_start`)
    /// when the value there includes quantity clamped in from a release
    /// day that fell before the horizon (open question 3). Used by the
    /// Action Extractor (C8) to mark such quantities as expedites
    /// unconditionally.
    pub release_clamped_from_before_horizon: bool,
}

impl PerItemPlan {
    /// Allocates an all-zero plan spanning `horizon`.
    pub fn zeroed(item_id: ItemId, horizon: &Horizon) -> Self {
        let n = horizon.len_days();
        Self {
            item_id,
            gross_requirement: vec![0.0; n],
            scheduled_receipt: vec![0.0; n],
            projected_on_hand: vec![0.0; n],
            net_requirement: vec![0.0; n],
            planned_receipt: vec![0.0; n],
            planned_release: vec![0.0; n],
            release_clamped_from_before_horizon: false,
        }
    }

    pub fn len(&self) -> usize {
        self.gross_requirement.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One row of the indented BOM hierarchy emitted by C2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HierarchyRow {
    pub order_seq: u64,
    pub top_item_id: ItemId,
    pub parent_id: ItemId,
    pub child_id: ItemId,
    pub level: u32,
    pub qty_per: f64,
    pub cumulative_qty: f64,
}

/// One flattened plan row, emitted by C9.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionRow {
    pub order_seq: u64,
    pub item_id: ItemId,
    pub date: NaiveDate,
    pub gross_requirement: f64,
    pub scheduled_receipt: f64,
    pub net_requirement: f64,
    pub planned_receipt: f64,
    pub planned_release: f64,
    pub starting_inventory: f64,
    pub ending_inventory: f64,
}

/// One row of the Action Extractor's (C8) expedite output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpediteRow {
    pub item_id: ItemId,
    pub required_date: NaiveDate,
    pub expedite_qty: f64,
}

/// One row of the Action Extractor's (C8) future-purchase output, already
/// aggregated by `(item, placement_date)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseRow {
    pub item_id: ItemId,
    pub purchase_qty: f64,
    pub placement_date: NaiveDate,
    pub expected_receipt_date: NaiveDate,
}

/// Per-item ending inventory summary (`inventory_out` table).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndingInventoryRow {
    pub item_id: ItemId,
    pub ending_inventory: f64,
}
