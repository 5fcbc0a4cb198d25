//! Filesystem graph store.
//!
//! One MessagePack file per graph record. Records are written with field
//! names so a file remains readable across field reordering.

use std::marker::PhantomData;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::domain::GraphStore;
use crate::error::{Result, StorageError};

/// Stores graph records as MessagePack files on the local filesystem.
#[derive(Debug, Default)]
pub struct FsGraphStore<T> {
    _record: PhantomData<T>,
}

impl<T> FsGraphStore<T> {
    /// Create a filesystem store.
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> GraphStore<T> for FsGraphStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn save_graph(&self, path: &Path, graph: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let bytes = rmp_serde::to_vec_named(graph).map_err(|e| {
            StorageError::serialization(format!("encode {}: {e}", path.display()))
        })?;
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), n_bytes = bytes.len(), "saved graph");
        Ok(())
    }

    fn load_graph(&self, path: &Path) -> Result<T> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                StorageError::not_found(format!("no graph file at {}", path.display()))
            }
            _ => StorageError::from(e),
        })?;
        rmp_serde::from_slice(&bytes).map_err(|e| {
            StorageError::serialization(format!("decode {}: {e}", path.display()))
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
