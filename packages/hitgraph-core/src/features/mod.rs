//! Feature modules (selection and construction stages)

pub mod graph_builder;
pub mod segments;
