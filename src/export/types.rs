// src/export/types.rs
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ExportStats {
    pub total_records: usize,
    pub with_phone: usize,
    pub email_only: usize,
    pub by_domain: HashMap<String, usize>,
    pub exported_at: String,
}
