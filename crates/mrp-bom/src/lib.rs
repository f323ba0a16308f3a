//! BOM graph construction and explosion (C1, C2).

pub mod explode;
pub mod graph;

pub use explode::{explode, ExplosionResult};
pub use graph::{build_graph, BomGraph};
