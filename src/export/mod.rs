// src/export/mod.rs
pub mod exporter;
pub mod types;

pub use exporter::ContactExporter;
pub use types::ExportStats;
