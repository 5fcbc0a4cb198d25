//! Shared models

mod graph;
mod hit;

pub use graph::{Graph, SparseGraph, FEATURE_NAMES, FEATURE_SCALE};
pub use hit::{group_by_layer, Hit, HitsTable};
