//! Fatal error taxonomy for the engine.
//!
//! Row-level and edge-level problems are not errors — they are
//! [`crate::diagnostics::Diagnostic`]s attached to a successful result.
//! `EngineError` is reserved for conditions that make a planning run
//! meaningless to continue.

use thiserror::Error;

/// The fatal half of the engine's error taxonomy (see spec §7).
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required column was missing, a date was unparseable, or
    /// `item_master` was empty.
    #[error("input shape error: {0}")]
    InputShape(String),

    /// The caller-supplied customer filter selection was empty. Per §6,
    /// an empty selection is a user error, not a silent no-op.
    #[error("empty customer filter selection")]
    EmptyCustomerSelection,

    /// An invariant the algorithm guarantees was violated at runtime —
    /// always a bug in the engine, never a consequence of bad input.
    #[error("arithmetic invariant violated: {0}")]
    ArithmeticInvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
