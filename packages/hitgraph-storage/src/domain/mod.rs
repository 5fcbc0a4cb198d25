//! Storage domain: the graph-store contract.
//!
//! A graph store persists serialized per-event graph records keyed by file
//! path and loads them back exactly. The store is generic over the record
//! type so the tensor models stay out of this crate.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File extension for serialized graph records.
pub const GRAPH_EXTENSION: &str = "graph.mpk";

/// Conventional file name for one event's graph.
///
/// Event ids are non-negative in practice; a negative id keeps its sign and
/// the six-digit padding applies to the magnitude.
pub fn graph_file_name(evtid: i64) -> String {
    if evtid < 0 {
        format!("event-{:06}.{GRAPH_EXTENSION}", evtid.unsigned_abs())
    } else {
        format!("event{evtid:06}.{GRAPH_EXTENSION}")
    }
}

/// Persistent store for per-event graph records.
pub trait GraphStore<T> {
    /// Write one graph record to `path`, creating parent directories.
    fn save_graph(&self, path: &Path, graph: &T) -> Result<()>;

    /// Read one graph record back from `path`.
    fn load_graph(&self, path: &Path) -> Result<T>;

    /// Whether a record exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Write a batch of records, one per path.
    fn save_graphs<'a, I>(&self, items: I) -> Result<()>
    where
        T: 'a,
        I: IntoIterator<Item = (&'a Path, &'a T)>,
        Self: Sized,
    {
        for (path, graph) in items {
            self.save_graph(path, graph)?;
        }
        Ok(())
    }

    /// Read a batch of records, preserving path order.
    fn load_graphs(&self, paths: &[PathBuf]) -> Result<Vec<T>>
    where
        Self: Sized,
    {
        paths.iter().map(|path| self.load_graph(path)).collect()
    }
}
