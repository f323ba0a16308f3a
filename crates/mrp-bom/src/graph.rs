//! BOM Graph Builder (C1, spec §4.1).

use mrp_core::{BomEdge, DiagnosticKind, Diagnostics, Item, ItemId, ItemPolicy};
use std::collections::HashMap;

/// `parent_id → list of (child_id, qty_per)`, already filtered to Output
/// parents with duplicate edges summed and zero-qty rows discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BomGraph {
    adjacency: HashMap<ItemId, Vec<(ItemId, f64)>>,
}

impl BomGraph {
    pub fn children(&self, parent_id: ItemId) -> &[(ItemId, f64)] {
        self.adjacency
            .get(&parent_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All edges as `(parent_id, child_id)` pairs, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (ItemId, ItemId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&parent, children)| children.iter().map(move |&(child, _)| (parent, child)))
    }

    pub fn has_children(&self, parent_id: ItemId) -> bool {
        self.adjacency
            .get(&parent_id)
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    }
}

/// Builds the filtered, deduplicated adjacency from raw BOM edges.
#[tracing::instrument(skip_all, fields(edge_count = raw_edges.len()))]
pub fn build_graph(
    raw_edges: &[BomEdge],
    items: &HashMap<ItemId, Item>,
    diagnostics: &mut Diagnostics,
) -> BomGraph {
    // (parent_id, child_id) -> summed qty_per, insertion order preserved
    // via a side vector so the final adjacency lists are deterministic.
    let mut summed: HashMap<(ItemId, ItemId), f64> = HashMap::new();
    let mut order: Vec<(ItemId, ItemId)> = Vec::new();

    for edge in raw_edges {
        match items.get(&edge.parent_id) {
            None => {
                diagnostics.push(DiagnosticKind::UnknownItem {
                    item_code: edge.parent_id.to_string(),
                });
                continue;
            }
            Some(parent) if parent.policy != ItemPolicy::Output => continue,
            Some(_) => {}
        }

        let key = (edge.parent_id, edge.child_id);
        if !summed.contains_key(&key) {
            order.push(key);
        }
        *summed.entry(key).or_insert(0.0) += edge.qty_per;
    }

    let mut adjacency: HashMap<ItemId, Vec<(ItemId, f64)>> = HashMap::new();
    for (parent_id, child_id) in order {
        let qty_per = summed[&(parent_id, child_id)];
        if qty_per == 0.0 {
            continue;
        }
        adjacency.entry(parent_id).or_default().push((child_id, qty_per));
    }

    BomGraph { adjacency }
}
