//! Level Assigner (C5, spec §4.5).

use mrp_bom::BomGraph;
use mrp_core::ItemId;
use std::collections::{HashMap, HashSet};

/// Assigns every item reachable from any root its longest path from any
/// root, by relaxation to a fixed point. Items unreachable from every
/// root never appear in the returned map (§4.5: "not planned").
///
/// The contract assumes a DAG: `excluded_edges` must carry the
/// `(parent_id, child_id)` pairs the BOM Exploder's cycle detection
/// (§4.2) found closing a cycle, since `graph` itself (built by
/// `mrp_bom::build_graph`) only filters by Output policy and sums
/// duplicate edges — it never removes cycles. Relaxation over a graph
/// that still contains a cycle never reaches a fixed point, so an
/// iteration cap bounds the loop defensively even if a caller passes an
/// incomplete exclusion set.
#[tracing::instrument(skip_all, fields(root_count = roots.len()))]
pub fn assign_levels(graph: &BomGraph, roots: &[ItemId], excluded_edges: &[(ItemId, ItemId)]) -> HashMap<ItemId, u32> {
    let excluded: HashSet<(ItemId, ItemId)> = excluded_edges.iter().copied().collect();
    let mut level: HashMap<ItemId, u32> = roots.iter().map(|&r| (r, 0)).collect();
    let edges: Vec<(ItemId, ItemId)> = graph.edges().filter(|edge| !excluded.contains(edge)).collect();

    // On the DAG this contract assumes, relaxation reaches a fixed point
    // in at most |edges| passes (§4.5: "terminates in ≤ depth
    // iterations"). Cap passes at that bound so a cycle the caller failed
    // to exclude can never spin the loop forever.
    let max_passes = edges.len() + 1;
    let mut changed = true;
    let mut passes = 0;
    while changed && passes < max_passes {
        changed = false;
        passes += 1;
        for &(p, c) in &edges {
            let Some(&level_p) = level.get(&p) else { continue };
            let candidate = level_p + 1;
            let improve = match level.get(&c) {
                Some(&level_c) => candidate > level_c,
                None => true,
            };
            if improve {
                level.insert(c, candidate);
                changed = true;
            }
        }
    }

    level
}

pub fn max_level(levels: &HashMap<ItemId, u32>) -> u32 {
    levels.values().copied().max().unwrap_or(0)
}
