//! Reporting Assembler (C9, spec §4.9).
//!
//! Flattens the completed per-item plans into ordered transaction rows and
//! a per-item ending-inventory summary. This is the only component that
//! imposes a stable row order on the outputs; everything upstream works
//! over unordered maps.

use mrp_core::{EndingInventoryRow, Horizon, ItemId, PerItemPlan, TransactionRow};
use std::collections::HashMap;

/// Flattens `plans` into one [`TransactionRow`] per `(item, day)`, sorted
/// by `(date ASC, item_id ASC)` with `order_seq` assigned sequentially
/// over that order (§4.9).
pub fn assemble_transactions(plans: &HashMap<ItemId, PerItemPlan>, horizon: &Horizon) -> Vec<TransactionRow> {
    let mut item_ids: Vec<ItemId> = plans.keys().copied().collect();
    item_ids.sort_unstable();

    let mut rows = Vec::with_capacity(item_ids.len() * horizon.len_days());

    for d in 0..horizon.len_days() {
        let date = horizon.date_at(d);
        for &item_id in &item_ids {
            let plan = &plans[&item_id];
            // Recovers on_hand (projected_{-1}) from day 0's recorded
            // values: projected[0] == available - gross[0] + net_req[0]
            // (the shortage and no-shortage branches of §4.6 both reduce
            // to this), and available == on_hand + sched_recv[0].
            let starting_inventory = if d == 0 {
                plan.projected_on_hand[0] + plan.gross_requirement[0] - plan.net_requirement[0]
                    - plan.scheduled_receipt[0]
            } else {
                plan.projected_on_hand[d - 1]
            };

            rows.push(TransactionRow {
                order_seq: 0, // assigned below, after the full ordering is known
                item_id,
                date,
                gross_requirement: plan.gross_requirement[d],
                scheduled_receipt: plan.scheduled_receipt[d],
                net_requirement: plan.net_requirement[d],
                planned_receipt: plan.planned_receipt[d],
                planned_release: plan.planned_release[d],
                starting_inventory,
                ending_inventory: plan.projected_on_hand[d],
            });
        }
    }

    for (i, row) in rows.iter_mut().enumerate() {
        row.order_seq = i as u64 + 1;
    }

    rows
}

/// Per-item ending inventory at `H_end` (`inventory_out` table, §4.9).
pub fn assemble_ending_inventory(plans: &HashMap<ItemId, PerItemPlan>) -> Vec<EndingInventoryRow> {
    let mut rows: Vec<EndingInventoryRow> = plans
        .values()
        .map(|plan| EndingInventoryRow {
            item_id: plan.item_id,
            ending_inventory: plan.projected_on_hand.last().copied().unwrap_or(0.0),
        })
        .collect();
    rows.sort_by_key(|r| r.item_id);
    rows
}
