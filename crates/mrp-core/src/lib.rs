//! Core data model, error taxonomy, diagnostics, and configuration for the
//! MRP engine. No planning logic lives here — see `mrp-bom` for BOM
//! explosion and `mrp-calc` for the time-phased planning pipeline.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod horizon;
pub mod model;
pub mod numeric;
pub mod plan;

pub use config::EngineConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{EngineError, Result};
pub use horizon::Horizon;
pub use model::{BomEdge, InventorySnapshot, Item, ItemId, ItemPolicy, OpenPurchase, SalesOrderLine};
pub use plan::{EndingInventoryRow, ExpediteRow, HierarchyRow, PerItemPlan, PurchaseRow, TransactionRow};
