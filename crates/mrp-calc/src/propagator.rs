//! Requirements Propagator (C7, spec §4.7).
//!
//! The outer loop that makes this an MRP engine rather than a per-item
//! planner: items are planned strictly in ascending BOM-level order, and
//! each item's planned releases become its children's gross requirements
//! before any lower-level item is planned. Parallelism (§5) is only ever
//! used *within* a level: each item in a level computes its own plan and
//! its own list of child deltas independently, and those deltas are
//! folded into the next level's gross-requirement series sequentially
//! afterwards — an associative, commutative sum, safe regardless of fold
//! order.

use crate::aggregator::DaySeries;
use crate::per_item_planner::plan_item;
use mrp_bom::BomGraph;
use mrp_core::{EngineConfig, Horizon, Item, ItemId, PerItemPlan, Result};
use rayon::prelude::*;
use std::collections::HashMap;

type ChildDelta = (ItemId, usize, f64);

struct LevelItemResult {
    item_id: ItemId,
    plan: Result<PerItemPlan>,
    child_deltas: Vec<ChildDelta>,
}

#[tracing::instrument(skip_all, fields(max_level = max_level))]
pub fn propagate(
    graph: &BomGraph,
    items: &HashMap<ItemId, Item>,
    levels: &HashMap<ItemId, u32>,
    max_level: u32,
    mut gross_req: DaySeries,
    sched_recv: &DaySeries,
    on_hand: &HashMap<ItemId, f64>,
    horizon: &Horizon,
    config: &EngineConfig,
) -> Result<HashMap<ItemId, PerItemPlan>> {
    let n = horizon.len_days();
    let mut plans: HashMap<ItemId, PerItemPlan> = HashMap::new();

    for level in 0..=max_level {
        let mut items_at_level: Vec<ItemId> =
            levels.iter().filter(|&(_, &l)| l == level).map(|(&id, _)| id).collect();
        items_at_level.sort_unstable(); // tie-break: ascending item_id (§4.7)

        tracing::debug!(level, item_count = items_at_level.len(), "planning level");

        let process = |&item_id: &ItemId| -> LevelItemResult {
            let gross = gross_req.get(&item_id).cloned().unwrap_or_else(|| vec![0.0; n]);
            let sched = sched_recv.get(&item_id).cloned().unwrap_or_else(|| vec![0.0; n]);
            let on_hand_qty = on_hand.get(&item_id).copied().unwrap_or(0.0);
            let lead_time_days = items.get(&item_id).map(|i| i.lead_time_days).unwrap_or(0);

            let plan = plan_item(item_id, &gross, &sched, on_hand_qty, lead_time_days, horizon, config);

            let mut child_deltas = Vec::new();
            if let Ok(plan) = &plan {
                for &(child_id, qty_per) in graph.children(item_id) {
                    if !items.contains_key(&child_id) {
                        continue;
                    }
                    for (d, &release) in plan.planned_release.iter().enumerate() {
                        if release > 0.0 {
                            child_deltas.push((child_id, d, release * qty_per));
                        }
                    }
                }
            }

            LevelItemResult { item_id, plan, child_deltas }
        };

        let results: Vec<LevelItemResult> = if config.enable_level_parallelism {
            items_at_level.par_iter().map(process).collect()
        } else {
            items_at_level.iter().map(process).collect()
        };

        for result in results {
            let plan = result.plan?;
            for (child_id, d, delta) in result.child_deltas {
                let series = gross_req.entry(child_id).or_insert_with(|| vec![0.0; n]);
                series[d] += delta;
            }
            plans.insert(result.item_id, plan);
        }
    }

    Ok(plans)
}
