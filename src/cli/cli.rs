use crate::config::Config;
use crate::export::ContactExporter;
use crate::extractor::ContactExtractor;
use crate::io_adapter::FsAdapter;
use crate::models::{CliApp, Result, Session};

#[derive(Debug, Clone)]
pub enum MenuAction {
    LoadFile,
    PasteText,
    ExportCsv,
    ShowParsedContacts,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::LoadFile => write!(f, "📄 Load a text file"),
            MenuAction::PasteText => write!(f, "✏️  Paste text"),
            MenuAction::ExportCsv => write!(f, "📤 Export contacts to CSV"),
            MenuAction::ShowParsedContacts => write!(f, "📋 Show parsed contacts"),
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        let adapter = FsAdapter::new(config.output.directory.clone());

        Ok(Self {
            config,
            extractor: ContactExtractor::new(),
            exporter: ContactExporter::new(),
            adapter,
            session: Session::default(),
        })
    }
}
