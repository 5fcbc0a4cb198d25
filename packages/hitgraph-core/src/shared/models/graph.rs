//! Hit-graph tensor representations.
//!
//! A hit graph is the GNN-ready view of one event: node features `x` for
//! every hit, incidence matrices `ri`/`ro` mapping hits onto their incoming
//! and outgoing edges, and per-edge truth labels `y`.
//!
//! Two representations are provided:
//! - [`Graph`]: dense `[n_hits, n_edges]` incidence matrices
//! - [`SparseGraph`]: the nonzero coordinates of those matrices, one
//!   (hit, edge) entry per edge per matrix
//!
//! The sparse form is what gets serialized; `dense -> sparse -> dense` is an
//! exact round trip.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Node feature names, column order of `x`.
pub const FEATURE_NAMES: [&str; 3] = ["r", "phi", "z"];

/// Per-column scale divisors applied to (r, phi, z) node features.
pub const FEATURE_SCALE: [f64; 3] = [1000.0, std::f64::consts::PI, 1000.0];

/// Dense hit graph for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Node features, shape `[n_hits, 3]`, scaled (r, phi, z)
    pub x: Array2<f32>,
    /// Incoming incidence: `ri[hit, edge] = 1` when the edge ends at the hit
    pub ri: Array2<u8>,
    /// Outgoing incidence: `ro[hit, edge] = 1` when the edge starts at the hit
    pub ro: Array2<u8>,
    /// Edge truth labels in {0.0, 1.0}, length `n_edges`
    pub y: Array1<f32>,
}

impl Graph {
    /// Number of nodes (hits).
    pub fn n_nodes(&self) -> usize {
        self.x.nrows()
    }

    /// Number of candidate edges (segments).
    pub fn n_edges(&self) -> usize {
        self.y.len()
    }
}

/// Index-based hit graph, the nonzero coordinates of the incidence matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseGraph {
    /// Node features, shape `[n_hits, 3]`
    pub x: Array2<f32>,
    /// Hit index of each incoming-incidence entry
    pub ri_rows: Vec<u32>,
    /// Edge index of each incoming-incidence entry
    pub ri_cols: Vec<u32>,
    /// Hit index of each outgoing-incidence entry
    pub ro_rows: Vec<u32>,
    /// Edge index of each outgoing-incidence entry
    pub ro_cols: Vec<u32>,
    /// Edge truth labels in {0.0, 1.0}
    pub y: Vec<f32>,
}

impl SparseGraph {
    /// Number of nodes (hits).
    pub fn n_nodes(&self) -> usize {
        self.x.nrows()
    }

    /// Number of candidate edges (segments).
    pub fn n_edges(&self) -> usize {
        self.y.len()
    }

    /// Collect the nonzero coordinates of a dense graph, row-major.
    pub fn from_dense(graph: &Graph) -> Self {
        let (ri_rows, ri_cols) = nonzero(&graph.ri);
        let (ro_rows, ro_cols) = nonzero(&graph.ro);
        Self {
            x: graph.x.clone(),
            ri_rows,
            ri_cols,
            ro_rows,
            ro_cols,
            y: graph.y.to_vec(),
        }
    }

    /// Rebuild the dense incidence matrices from the stored coordinates.
    pub fn to_dense(&self) -> Graph {
        let n_nodes = self.n_nodes();
        let n_edges = self.n_edges();
        let mut ri = Array2::<u8>::zeros((n_nodes, n_edges));
        let mut ro = Array2::<u8>::zeros((n_nodes, n_edges));
        for (&row, &col) in self.ri_rows.iter().zip(&self.ri_cols) {
            ri[[row as usize, col as usize]] = 1;
        }
        for (&row, &col) in self.ro_rows.iter().zip(&self.ro_cols) {
            ro[[row as usize, col as usize]] = 1;
        }
        Graph {
            x: self.x.clone(),
            ri,
            ro,
            y: Array1::from_vec(self.y.clone()),
        }
    }
}

fn nonzero(matrix: &Array2<u8>) -> (Vec<u32>, Vec<u32>) {
    let mut rows = Vec::new();
    let mut cols = Vec::new();
    for ((row, col), &value) in matrix.indexed_iter() {
        if value != 0 {
            rows.push(row as u32);
            cols.push(col as u32);
        }
    }
    (rows, cols)
}
