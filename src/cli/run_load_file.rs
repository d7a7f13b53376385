// src/cli/run_load_file.rs
use crate::io_adapter::IoAdapter;
use crate::models::{CliApp, InputMode, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::info;

impl CliApp {
    /// Loading a file replaces any pasted text and re-runs extraction
    /// immediately, so the parsed contacts reflect the file content right
    /// away. An empty path is a silent no-op.
    pub async fn run_load_file(&mut self) -> Result<()> {
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Path to text file")
            .allow_empty(true)
            .interact_text()?;

        let path = path.trim().to_string();
        if path.is_empty() {
            println!("❌ No file selected");
            return Ok(());
        }

        let text = self.adapter.read_all_text(&path).await?;
        info!("Loaded {} characters from {}", text.len(), path);

        self.session.parsed = self.extractor.extract(&text);
        self.session.input = InputMode::File { path };

        println!("✅ Parsed {} contact records", self.session.parsed.len());
        Ok(())
    }
}
