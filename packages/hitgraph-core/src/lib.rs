/*
 * hitgraph-core - LHC hit-graph construction
 *
 * Turns per-event detector hit tables into GNN-ready graph tensors:
 * - shared/    : Common models (Hit, HitsTable, Graph, SparseGraph)
 * - geometry   : Pairwise compatibility kernels (dphi, phi_slope, z0)
 * - features/  : Segment selection and per-event graph construction
 * - config     : Construction settings (YAML, validated)
 * - ingest     : CSV hits-table reader
 *
 * Combinatorics are pruned with layer-pair adjacency plus phi-slope and
 * extrapolated-z0 cuts; edges are labeled true when both hits share a truth
 * particle barcode. Rayon fans the per-event construction out across events.
 */

/// Shared models and utilities
pub mod shared;

/// Pairwise geometric compatibility kernels
pub mod geometry;

/// Feature modules (segments, graph builder)
pub mod features;

/// Configuration system
pub mod config;

/// Hits-table ingestion
pub mod ingest;

/// Error types
pub mod errors;

pub use config::GraphBuilderConfig;
pub use errors::{HitGraphError, Result};
pub use features::graph_builder::GraphBuilder;
pub use features::segments::{Segment, SegmentSelector};
pub use shared::models::{Graph, Hit, HitsTable, SparseGraph, FEATURE_NAMES, FEATURE_SCALE};
