//! hitgraph-storage - on-disk persistence for per-event hit graphs
//!
//! Serialized graph records round-trip exactly: saving a record and loading
//! it back reproduces the indices verbatim and the f32 payloads bit for bit.
//!
//! - `domain/`         : the [`GraphStore`] contract and file-name convention
//! - `infrastructure/` : the MessagePack filesystem adapter
//!
//! The store is generic over the record type; `hitgraph-core` plugs its
//! `SparseGraph` in without this crate depending on the tensor models.

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{graph_file_name, GraphStore, GRAPH_EXTENSION};
pub use error::{ErrorKind, Result, StorageError};
pub use infrastructure::FsGraphStore;
