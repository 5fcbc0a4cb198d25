//! Filesystem store round-trip tests.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

use hitgraph_storage::{graph_file_name, ErrorKind, FsGraphStore, GraphStore};

/// Stand-in for a sparse graph record: index vectors plus f32 payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TestRecord {
    rows: Vec<u32>,
    cols: Vec<u32>,
    y: Vec<f32>,
}

fn record(seed: u32) -> TestRecord {
    TestRecord {
        rows: vec![seed, seed + 1, seed + 2],
        cols: vec![0, 1, 2],
        y: vec![1.0, 0.0, 0.25 + seed as f32],
    }
}

#[test]
fn save_then_load_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsGraphStore::<TestRecord>::new();
    let path = dir.path().join(graph_file_name(7));

    let original = record(10);
    store.save_graph(&path, &original).unwrap();
    assert!(store.exists(&path));

    let loaded = store.load_graph(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsGraphStore::<TestRecord>::new();
    let path = dir.path().join("run-001").join(graph_file_name(1));

    store.save_graph(&path, &record(1)).unwrap();
    assert!(store.exists(&path));
}

#[test]
fn batch_save_and_load_preserve_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsGraphStore::<TestRecord>::new();

    let records: Vec<TestRecord> = (0..3).map(record).collect();
    let paths: Vec<PathBuf> = (0..3)
        .map(|evtid| dir.path().join(graph_file_name(evtid)))
        .collect();

    let items = paths
        .iter()
        .map(|p| p.as_path())
        .zip(records.iter())
        .collect::<Vec<_>>();
    store.save_graphs(items).unwrap();

    let loaded = store.load_graphs(&paths).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsGraphStore::<TestRecord>::new();
    let err = store
        .load_graph(&dir.path().join("nothing.graph.mpk"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn truncated_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsGraphStore::<TestRecord>::new();
    let path = dir.path().join(graph_file_name(3));

    store.save_graph(&path, &record(3)).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let err = store.load_graph(&path).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Serialization);
}
