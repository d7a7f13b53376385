use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
};
use tracing::error;

impl CliApp {
    pub async fn run(&mut self) -> Result<()> {
        println!("\n🚀 Welcome to Contact Sift!");
        println!("═══════════════════════════════════════");

        loop {
            let actions = vec![
                MenuAction::LoadFile,
                MenuAction::PasteText,
                MenuAction::ExportCsv,
                MenuAction::ShowParsedContacts,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect an action")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::LoadFile => {
                    if let Err(e) = self.run_load_file().await {
                        error!("File load failed: {}", e);
                    }
                }
                MenuAction::PasteText => {
                    if let Err(e) = self.run_paste_text() {
                        error!("Text input failed: {}", e);
                    }
                }
                MenuAction::ExportCsv => {
                    if let Err(e) = self.run_export_csv().await {
                        error!("CSV export failed: {}", e);
                    }
                }
                MenuAction::ShowParsedContacts => {
                    self.show_parsed_contacts();
                }
                MenuAction::Exit => {
                    println!("\n👋 Thanks for using Contact Sift!");
                    break;
                }
            }
        }

        Ok(())
    }
}
