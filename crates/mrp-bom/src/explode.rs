//! BOM Exploder (C2, spec §4.2).
//!
//! A single DFS per top-level item, walking a path stack so that an
//! ancestor re-entry is detected and excluded without aborting the whole
//! traversal (Design Note: "Cycle detection during DFS" — path stack as a
//! set + stack; on cycle, record and `continue`, never unwind).

use crate::graph::BomGraph;
use mrp_core::{DiagnosticKind, Diagnostics, HierarchyRow, ItemId};
use std::collections::HashSet;

/// Result of exploding one or more top-level items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplosionResult {
    pub rows: Vec<HierarchyRow>,
    /// `(parent_id, child_id)` edges excluded because `child_id` was
    /// already an ancestor on the current path.
    pub cycles: Vec<(ItemId, ItemId)>,
}

/// Explodes each item in `top_ids`, deduplicated preserving first
/// occurrence, emitting one hierarchy row per visited edge with a single
/// `order_seq` counter shared across the whole call.
#[tracing::instrument(skip_all, fields(top_count = top_ids.len()))]
pub fn explode(graph: &BomGraph, top_ids: &[ItemId], diagnostics: &mut Diagnostics) -> ExplosionResult {
    let mut result = ExplosionResult::default();
    let mut order_seq: u64 = 0;
    let mut seen_tops = HashSet::new();

    for &top in top_ids {
        if !seen_tops.insert(top) {
            continue;
        }

        let mut path: Vec<ItemId> = vec![top];
        explode_from(graph, top, top, 1.0, 0, &mut path, &mut order_seq, &mut result, diagnostics);
    }

    result
}

#[allow(clippy::too_many_arguments)]
fn explode_from(
    graph: &BomGraph,
    top_id: ItemId,
    parent_id: ItemId,
    parent_cumulative_qty: f64,
    level: u32,
    path: &mut Vec<ItemId>,
    order_seq: &mut u64,
    result: &mut ExplosionResult,
    diagnostics: &mut Diagnostics,
) {
    for &(child_id, qty_per) in graph.children(parent_id) {
        if path.contains(&child_id) {
            result.cycles.push((parent_id, child_id));
            diagnostics.push(DiagnosticKind::CycleDetected { parent_id, child_id });
            continue;
        }

        let cumulative_qty = parent_cumulative_qty * qty_per;
        *order_seq += 1;
        result.rows.push(HierarchyRow {
            order_seq: *order_seq,
            top_item_id: top_id,
            parent_id,
            child_id,
            level,
            qty_per,
            cumulative_qty,
        });

        if graph.has_children(child_id) {
            path.push(child_id);
            explode_from(graph, top_id, child_id, cumulative_qty, level + 1, path, order_seq, result, diagnostics);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrp_core::{BomEdge, Item, ItemPolicy};
    use std::collections::HashMap;

    fn build(edges: Vec<BomEdge>, ids: &[ItemId]) -> BomGraph {
        let mut items = HashMap::new();
        for &id in ids {
            items.insert(
                id,
                Item { item_id: id, code: format!("I{id}"), policy: ItemPolicy::Output, lead_time_days: 1 },
            );
        }
        let mut diagnostics = Diagnostics::new();
        crate::graph::build_graph(&edges, &items, &mut diagnostics)
    }

    #[test]
    fn acyclic_multilevel_chain_emits_one_row_per_edge() {
        // A(1) -> B(2, qty=2) -> C(3, qty=3)
        let graph = build(
            vec![
                BomEdge { parent_id: 1, child_id: 2, qty_per: 2.0 },
                BomEdge { parent_id: 2, child_id: 3, qty_per: 3.0 },
            ],
            &[1, 2, 3],
        );
        let mut diagnostics = Diagnostics::new();
        let result = explode(&graph, &[1], &mut diagnostics);

        assert_eq!(result.rows.len(), 2);
        assert!(result.cycles.is_empty());

        let ab = result.rows.iter().find(|r| r.parent_id == 1 && r.child_id == 2).unwrap();
        assert_eq!(ab.level, 0);
        assert_eq!(ab.cumulative_qty, 2.0);

        let bc = result.rows.iter().find(|r| r.parent_id == 2 && r.child_id == 3).unwrap();
        assert_eq!(bc.level, 1);
        assert_eq!(bc.cumulative_qty, 6.0);
    }

    #[test]
    fn shared_child_under_two_parents_yields_two_rows() {
        // A(1) -> B(2, qty=1), A(1) -> C(3, qty=1), B(2) -> D(4, qty=2), C(3) -> D(4, qty=3)
        let graph = build(
            vec![
                BomEdge { parent_id: 1, child_id: 2, qty_per: 1.0 },
                BomEdge { parent_id: 1, child_id: 3, qty_per: 1.0 },
                BomEdge { parent_id: 2, child_id: 4, qty_per: 2.0 },
                BomEdge { parent_id: 3, child_id: 4, qty_per: 3.0 },
            ],
            &[1, 2, 3, 4],
        );
        let mut diagnostics = Diagnostics::new();
        let result = explode(&graph, &[1], &mut diagnostics);

        let d_rows: Vec<_> = result.rows.iter().filter(|r| r.child_id == 4).collect();
        assert_eq!(d_rows.len(), 2);
        let total: f64 = d_rows.iter().map(|r| r.cumulative_qty).sum();
        assert_eq!(total, 5.0); // 2 + 3
    }

    #[test]
    fn cycle_is_detected_and_excluded_without_aborting() {
        // 1 -> 2, 2 -> 1
        let graph = build(
            vec![
                BomEdge { parent_id: 1, child_id: 2, qty_per: 1.0 },
                BomEdge { parent_id: 2, child_id: 1, qty_per: 1.0 },
            ],
            &[1, 2],
        );
        let mut diagnostics = Diagnostics::new();
        let result = explode(&graph, &[1], &mut diagnostics);

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].parent_id, 1);
        assert_eq!(result.rows[0].child_id, 2);
        assert_eq!(result.rows[0].level, 0);

        assert_eq!(result.cycles, vec![(2, 1)]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn duplicate_top_ids_are_only_exploded_once() {
        let graph = build(vec![BomEdge { parent_id: 1, child_id: 2, qty_per: 1.0 }], &[1, 2]);
        let mut diagnostics = Diagnostics::new();
        let result = explode(&graph, &[1, 1], &mut diagnostics);
        assert_eq!(result.rows.len(), 1);
    }
}
