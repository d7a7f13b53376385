// src/cli/run_paste_text.rs
use crate::models::{CliApp, InputMode, Result};
use dialoguer::{theme::ColorfulTheme, Input};

impl CliApp {
    /// Pasting text drops any file reference but does not extract yet; the
    /// text is held verbatim until an export re-runs extraction on it.
    pub fn run_paste_text(&mut self) -> Result<()> {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Paste text")
            .allow_empty(true)
            .interact_text()?;

        self.session.input = InputMode::Pasted(text);

        println!("✅ Text stored; extraction runs on export");
        Ok(())
    }
}
