//! Storage infrastructure adapters

pub mod fs;

pub use fs::FsGraphStore;
