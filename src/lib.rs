//! # MRP
//!
//! Facade crate re-exporting the public surface of `mrp-core`, `mrp-bom`,
//! and `mrp-calc` for downstream consumers that want one dependency
//! rather than three. The workspace's actual logic lives in those member
//! crates; this crate adds nothing beyond wiring and re-exports.
//!
//! ```no_run
//! use mrp::{run, EngineConfig};
//!
//! # fn example() -> mrp::Result<()> {
//! let config = EngineConfig::new();
//! let result = run(vec![], &[], &[], &[], &[], &["ACME".to_string()], &config)?;
//! println!("{} transactions produced", result.transactions.len());
//! # Ok(())
//! # }
//! ```

pub use mrp_bom::{build_graph, explode, BomGraph, ExplosionResult};
pub use mrp_calc::{run, RunResult};
pub use mrp_core::{
    BomEdge, Diagnostic, DiagnosticKind, Diagnostics, EndingInventoryRow, EngineConfig, EngineError,
    ExpediteRow, HierarchyRow, Horizon, InventorySnapshot, Item, ItemId, ItemPolicy, OpenPurchase, PerItemPlan,
    PurchaseRow, Result, SalesOrderLine, TransactionRow,
};
