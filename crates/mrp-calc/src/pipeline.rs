//! Top-level planning entry point: wires C1–C9 into the single pipeline
//! the spec describes as "C1→C2 build structure; C3, C4 prepare horizon
//! and bucketed demand/supply; C5 orders items; C6+C7 drive the level
//! sweep; C8, C9 materialize outputs" (§2).

use mrp_core::{
    BomEdge, Diagnostics, EndingInventoryRow, EngineConfig, EngineError, ExpediteRow, HierarchyRow,
    InventorySnapshot, Item, ItemId, OpenPurchase, PurchaseRow, Result, SalesOrderLine, TransactionRow,
};
use std::collections::HashMap;

use crate::{
    aggregator, action_extractor, horizon_planner, item_master, level_assigner, propagator, reporting_assembler,
};

/// Everything a single planning run produces: the BOM hierarchy (C2), the
/// flattened plan transactions and ending-inventory summary (C9), the
/// derived expedite/purchase actions (C8), and the non-fatal diagnostics
/// accumulated along the way (§7).
#[derive(Debug, Clone)]
pub struct RunResult {
    pub bom_hierarchy: Vec<HierarchyRow>,
    /// `(parent_id, child_id)` edges excluded by the BOM Exploder because
    /// `child_id` was already an ancestor on the current path (§4.2).
    pub cycles: Vec<(ItemId, ItemId)>,
    pub transactions: Vec<TransactionRow>,
    pub ending_inventory: Vec<EndingInventoryRow>,
    pub expedites: Vec<ExpediteRow>,
    pub purchases: Vec<PurchaseRow>,
    pub diagnostics: Diagnostics,
}

/// Runs the full planning pipeline for one batch: BOM explosion, horizon
/// computation, demand/supply aggregation, level assignment, the
/// level-ordered MRP sweep, and action/report extraction.
///
/// `item_master_rows` must be non-empty (`EngineError::InputShape`
/// otherwise, §7). `selected_customers` scopes `sales_orders`; an empty
/// selection is a fatal `EngineError::EmptyCustomerSelection` (§6), not a
/// silent no-op.
#[tracing::instrument(skip_all)]
pub fn run(
    item_master_rows: Vec<Item>,
    bom_edges: &[BomEdge],
    sales_orders: &[SalesOrderLine],
    purchases: &[OpenPurchase],
    inventory: &[InventorySnapshot],
    selected_customers: &[String],
    config: &EngineConfig,
) -> Result<RunResult> {
    if item_master_rows.is_empty() {
        return Err(EngineError::InputShape("item_master is empty".to_string()));
    }

    let mut diagnostics = Diagnostics::new();

    // Load item master, resolving open question 1 (degenerate lead times).
    let items: HashMap<ItemId, Item> = item_master::load_items(item_master_rows, config, &mut diagnostics);

    // Scope to the caller-selected customers (§6); fatal if none chosen.
    let filtered_sales_orders = aggregator::filter_by_customers(sales_orders, selected_customers)?;

    // C1: BOM Graph Builder.
    let graph = mrp_bom::build_graph(bom_edges, &items, &mut diagnostics);

    // Top-level demanded items: distinct item ids referenced by the
    // filtered sales orders that exist in the item master, deduplicated
    // preserving first occurrence (§4.2).
    let mut top_ids: Vec<ItemId> = Vec::new();
    let mut seen_tops = std::collections::HashSet::new();
    for line in &filtered_sales_orders {
        if items.contains_key(&line.item_id) && seen_tops.insert(line.item_id) {
            top_ids.push(line.item_id);
        }
    }

    // C2: BOM Exploder.
    let explosion = mrp_bom::explode(&graph, &top_ids, &mut diagnostics);

    // C3: Horizon Planner.
    let max_lead_time = item_master::max_lead_time_days(&items);
    let horizon = horizon_planner::compute_horizon(
        &filtered_sales_orders,
        purchases,
        max_lead_time,
        config.horizon_lead_time_cap_days,
        config.degenerate_lead_time_default_days,
    );

    let Some(horizon) = horizon else {
        // No demand and no supply dates at all: nothing to plan.
        return Ok(RunResult {
            bom_hierarchy: explosion.rows,
            cycles: explosion.cycles,
            transactions: Vec::new(),
            ending_inventory: Vec::new(),
            expedites: Vec::new(),
            purchases: Vec::new(),
            diagnostics,
        });
    };

    // C4: Demand & Supply Aggregator.
    let (gross_req_init, sched_recv) =
        aggregator::aggregate(&filtered_sales_orders, purchases, &items, &horizon, &mut diagnostics);

    // C5: Level Assigner. `graph` itself still contains any cycle (C1
    // only filters by Output policy and sums duplicates); exclude the
    // closing edges the BOM Exploder's DFS (C2) already found so
    // relaxation here runs over a DAG, per the Level Assigner's contract.
    let levels = level_assigner::assign_levels(&graph, &top_ids, &explosion.cycles);
    let max_level = level_assigner::max_level(&levels);

    let on_hand: HashMap<ItemId, f64> = inventory.iter().map(|snap| (snap.item_id, snap.on_hand_qty)).collect();

    // C6 + C7: MRP Per-Item Planner driven by the Requirements Propagator.
    let plans = propagator::propagate(
        &graph,
        &items,
        &levels,
        max_level,
        gross_req_init,
        &sched_recv,
        &on_hand,
        &horizon,
        config,
    )?;

    // C8: Action Extractor.
    let (expedites, purchase_rows) = action_extractor::extract_actions(&plans, &items, &horizon, config);

    // C9: Reporting Assembler.
    let transactions = reporting_assembler::assemble_transactions(&plans, &horizon);
    let ending_inventory = reporting_assembler::assemble_ending_inventory(&plans);

    Ok(RunResult {
        bom_hierarchy: explosion.rows,
        cycles: explosion.cycles,
        transactions,
        ending_inventory,
        expedites,
        purchases: purchase_rows,
        diagnostics,
    })
}
