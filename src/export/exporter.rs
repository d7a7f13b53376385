// src/export/exporter.rs
use super::types::ExportStats;
use crate::models::ContactRecord;
use chrono::Utc;
use std::collections::HashMap;

pub struct ContactExporter;

impl ContactExporter {
    pub fn new() -> Self {
        Self
    }

    /// Encodes records as `Email,Phone` CSV. Rows are joined by newline with
    /// no trailing newline; field values are written as-is, without quoting
    /// or escaping embedded commas.
    pub fn to_csv(&self, records: &[ContactRecord]) -> String {
        let rows = records
            .iter()
            .map(|rec| format!("{},{}", rec.email, rec.phone))
            .collect::<Vec<_>>()
            .join("\n");

        format!("Email,Phone\n{}", rows)
    }

    pub fn generate_stats(&self, records: &[ContactRecord]) -> ExportStats {
        let mut by_domain: HashMap<String, usize> = HashMap::new();

        for rec in records {
            let domain = rec.email.split('@').nth(1).unwrap_or("unknown");
            *by_domain.entry(domain.to_string()).or_insert(0) += 1;
        }

        let with_phone = records.iter().filter(|r| !r.phone.is_empty()).count();

        ExportStats {
            total_records: records.len(),
            with_phone,
            email_only: records.len() - with_phone,
            by_domain,
            exported_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn print_stats(&self, stats: &ExportStats) {
        println!("\n📊 Export Statistics:");
        println!("━━━━━━━━━━━━━━━━━━━━━");
        println!("📇 Total records: {}", stats.total_records);
        println!("📱 With phone: {}", stats.with_phone);
        println!("📧 Email only: {}", stats.email_only);

        println!("\n🌐 By Domain:");
        for (domain, count) in &stats.by_domain {
            println!("   {}: {}", domain, count);
        }

        println!("\n🕒 Exported at: {}", stats.exported_at);
    }
}

impl Default for ContactExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str, phone: &str) -> ContactRecord {
        ContactRecord {
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn empty_records_produce_header_only_csv() {
        let exporter = ContactExporter::new();
        assert_eq!(exporter.to_csv(&[]), "Email,Phone\n");
    }

    #[test]
    fn csv_has_no_trailing_newline() {
        let exporter = ContactExporter::new();
        let csv = exporter.to_csv(&[record("a@b.com", "9123456789")]);
        assert_eq!(csv, "Email,Phone\na@b.com,9123456789");
    }

    #[test]
    fn csv_writes_one_row_per_record_in_order() {
        let exporter = ContactExporter::new();
        let csv = exporter.to_csv(&[
            record("a@b.com", "9123456789"),
            record("b@c.com", ""),
            record("c@d.com", "7000000000"),
        ]);
        assert_eq!(
            csv,
            "Email,Phone\na@b.com,9123456789\nb@c.com,\nc@d.com,7000000000"
        );
    }

    #[test]
    fn encoded_extraction_always_begins_with_header() {
        let extractor = crate::extractor::ContactExtractor::new();
        let exporter = ContactExporter::new();
        for text in ["", "no matches here", "a@b.com 9123456789", "6123456789"] {
            let csv = exporter.to_csv(&extractor.extract(text));
            assert!(csv.starts_with("Email,Phone\n"), "bad csv: {:?}", csv);
        }
    }

    #[test]
    fn stats_count_phones_and_domains() {
        let exporter = ContactExporter::new();
        let stats = exporter.generate_stats(&[
            record("a@b.com", "9123456789"),
            record("x@b.com", ""),
            record("y@c.org", "8123456789"),
        ]);
        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.with_phone, 2);
        assert_eq!(stats.email_only, 1);
        assert_eq!(stats.by_domain.get("b.com"), Some(&2));
        assert_eq!(stats.by_domain.get("c.org"), Some(&1));
    }
}
