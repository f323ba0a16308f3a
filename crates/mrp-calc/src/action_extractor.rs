//! Action Extractor (C8, spec §4.8).
//!
//! Derives expedite requests and future planned purchases for
//! Purchase-class items from completed per-item plans. Resolves open
//! question 2 (explicit `as_of_date` rather than the source's buggy
//! min-of-horizon convention) and open question 3 (a release clamped in
//! from before the horizon is always an expedite, never a purchase,
//! regardless of where `as_of_date` falls).

use mrp_core::{numeric, EngineConfig, ExpediteRow, Horizon, Item, ItemId, ItemPolicy, PerItemPlan, PurchaseRow};
use std::collections::HashMap;

/// Splits every positive planned release of a Purchase-class item into an
/// expedite row (release day already past `as_of_date`, or clamped in
/// from before the horizon) or a future purchase row, aggregating
/// purchase rows by `(item_id, placement_date)` per §4.8.
pub fn extract_actions(
    plans: &HashMap<ItemId, PerItemPlan>,
    items: &HashMap<ItemId, Item>,
    horizon: &Horizon,
    config: &EngineConfig,
) -> (Vec<ExpediteRow>, Vec<PurchaseRow>) {
    let as_of_date = config.resolved_as_of_date();
    let mut expedites = Vec::new();
    // (item_id, placement_date) -> (qty, expected_receipt_date)
    let mut purchases: HashMap<(ItemId, chrono::NaiveDate), (f64, chrono::NaiveDate)> = HashMap::new();

    for (&item_id, plan) in plans {
        let Some(item) = items.get(&item_id) else { continue };
        if item.policy != ItemPolicy::Purchase {
            continue;
        }

        for (d, &release) in plan.planned_release.iter().enumerate() {
            if !numeric::approx_positive(release, config.epsilon) {
                continue;
            }

            let release_date = horizon.date_at(d);
            let receipt_date = release_date + chrono::Duration::days(item.lead_time_days as i64);
            let clamped = d == 0 && plan.release_clamped_from_before_horizon;

            if clamped || release_date < as_of_date {
                expedites.push(ExpediteRow {
                    item_id,
                    required_date: receipt_date,
                    expedite_qty: release,
                });
            } else {
                let entry = purchases
                    .entry((item_id, release_date))
                    .or_insert((0.0, receipt_date));
                entry.0 += release;
            }
        }
    }

    let mut purchase_rows: Vec<PurchaseRow> = purchases
        .into_iter()
        .map(|((item_id, placement_date), (qty, expected_receipt_date))| PurchaseRow {
            item_id,
            purchase_qty: qty,
            placement_date,
            expected_receipt_date,
        })
        .collect();

    expedites.sort_by_key(|r| (r.required_date, r.item_id));
    purchase_rows.sort_by_key(|r| (r.placement_date, r.item_id));

    (expedites, purchase_rows)
}
