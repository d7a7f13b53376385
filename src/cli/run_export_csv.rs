// src/cli/run_export_csv.rs
use crate::io_adapter::{IoAdapter, CSV_MIME_TYPE};
use crate::models::{CliApp, InputMode, Result};

impl CliApp {
    /// Export always emits the current parsed contacts, re-extracting first
    /// when pasted text is present. With no records the CSV is header-only.
    pub async fn run_export_csv(&mut self) -> Result<()> {
        println!("\n📤 Contact Export");
        println!("━━━━━━━━━━━━━━━━━━━━━");

        let pasted = match &self.session.input {
            InputMode::Pasted(text) if !text.trim().is_empty() => Some(text.clone()),
            _ => None,
        };
        if let Some(text) = pasted {
            self.session.parsed = self.extractor.extract(&text);
        }

        if self.session.parsed.is_empty() {
            println!("⚠️  No contacts parsed; exporting header-only CSV");
        }

        let csv = self.exporter.to_csv(&self.session.parsed);
        self.adapter
            .emit(&self.config.output.filename, CSV_MIME_TYPE, &csv)
            .await?;

        println!("\n✅ Export completed!");
        println!(
            "📁 File: {}/{}",
            self.config.output.directory, self.config.output.filename
        );

        let stats = self.exporter.generate_stats(&self.session.parsed);
        self.exporter.print_stats(&stats);

        Ok(())
    }
}
