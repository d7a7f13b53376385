// src/cli/show_parsed_contacts.rs
use crate::models::{CliApp, InputMode};

impl CliApp {
    pub fn show_parsed_contacts(&self) {
        println!("\n📋 Parsed Contacts:");
        println!("━━━━━━━━━━━━━━━━━━━━━");

        match &self.session.input {
            InputMode::Empty => println!("   (no input loaded)"),
            InputMode::File { path } => println!("   Source: file {}", path),
            InputMode::Pasted(_) => println!("   Source: pasted text (not yet extracted)"),
        }

        let preview_rows = self.config.logging.preview_rows;
        for (i, rec) in self.session.parsed.iter().take(preview_rows).enumerate() {
            let phone_display = if rec.phone.is_empty() {
                "-"
            } else {
                rec.phone.as_str()
            };
            println!("{}. {} - {}", i + 1, rec.email, phone_display);
        }

        if self.session.parsed.len() > preview_rows {
            println!("   ... and {} more", self.session.parsed.len() - preview_rows);
        }

        let stats = self.exporter.generate_stats(&self.session.parsed);
        self.exporter.print_stats(&stats);
    }
}
