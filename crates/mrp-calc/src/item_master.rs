//! Item-master loading and lead-time cleaning (resolves open question 1).
//!
//! Parsing raw, possibly-garbage lead-time fields out of an upstream
//! system is an external collaborator's job (§1); by the time an `Item`
//! reaches this engine its `lead_time_days` is already a `u32`. What is
//! still this engine's job is deciding whether that number is usable, and
//! substituting a default when it is not.

use mrp_core::{DiagnosticKind, Diagnostics, EngineConfig, Item, ItemId};
use std::collections::HashMap;

/// Indexes items by id, substituting `degenerate_lead_time_default_days`
/// for any lead time strictly greater than
/// `degenerate_lead_time_threshold_days`, recording a `DegenerateLeadTime`
/// diagnostic for each substitution.
pub fn load_items(items: Vec<Item>, config: &EngineConfig, diagnostics: &mut Diagnostics) -> HashMap<ItemId, Item> {
    items
        .into_iter()
        .map(|mut item| {
            if item.lead_time_days > config.degenerate_lead_time_threshold_days {
                diagnostics.push(DiagnosticKind::DegenerateLeadTime {
                    item_id: item.item_id,
                    raw: item.lead_time_days.to_string(),
                    substituted_days: config.degenerate_lead_time_default_days,
                });
                item.lead_time_days = config.degenerate_lead_time_default_days;
            }
            (item.item_id, item)
        })
        .collect()
}

/// Maximum lead time across all loaded items, used by the Horizon
/// Planner (C3). Returns 0 if there are no items.
pub fn max_lead_time_days(items: &HashMap<ItemId, Item>) -> u32 {
    items.values().map(|i| i.lead_time_days).max().unwrap_or(0)
}
