// src/extractor/mod.rs
pub mod contact_extractor;

pub use contact_extractor::ContactExtractor;
