//! Row-level and edge-level warning side-channel (spec §7).
//!
//! Fatal problems abort a run via [`crate::error::EngineError`]; everything
//! here is non-fatal and gets attached to a successful result instead of
//! propagated as an error.

use std::fmt;

/// One entry of the warning half of the error taxonomy.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// A sales-order or purchase row referenced an item not in the master.
    UnknownItem { item_code: String },
    /// A row's date fell outside the computed horizon.
    OutOfHorizon { item_id: i64, date: chrono::NaiveDate },
    /// A cycle was found during BOM explosion; the closing edge was excluded.
    CycleDetected { parent_id: i64, child_id: i64 },
    /// A parsed lead time was unusable and a default was substituted.
    DegenerateLeadTime { item_id: i64, raw: String, substituted_days: u32 },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnknownItem { item_code } => {
                write!(f, "unknown item {item_code:?}, row skipped")
            }
            DiagnosticKind::OutOfHorizon { item_id, date } => {
                write!(f, "item {item_id} date {date} falls outside the planning horizon, row skipped")
            }
            DiagnosticKind::CycleDetected { parent_id, child_id } => {
                write!(f, "cycle detected: {child_id} already an ancestor of {parent_id}, edge excluded")
            }
            DiagnosticKind::DegenerateLeadTime { item_id, raw, substituted_days } => {
                write!(f, "item {item_id} has degenerate lead time ({raw:?}), substituted {substituted_days} days")
            }
        }
    }
}

/// A single diagnostic entry, ready to attach to a successful run result.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Collector threaded through every component of a planning run.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: DiagnosticKind) {
        tracing::warn!(%kind, "diagnostic recorded");
        self.0.push(Diagnostic::new(kind));
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
