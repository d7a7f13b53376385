use serde::{Deserialize, Serialize};

use crate::{
    config::Config, export::ContactExporter, extractor::ContactExtractor, io_adapter::FsAdapter,
};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One extracted (email, phone) pair. Either field may be empty; the phone
/// defaults to the empty string when no match exists at the same index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub email: String,
    pub phone: String,
}

/// Where the next extraction input comes from. Pasted text is held verbatim
/// and only extracted when an export is requested; a loaded file is extracted
/// immediately, so only its path is kept for display.
#[derive(Debug, Clone, Default)]
pub enum InputMode {
    #[default]
    Empty,
    File {
        path: String,
    },
    Pasted(String),
}

/// The two mutable fields of a session: the current input mode and the
/// deduplicated result of the most recent extraction. Recomputed in full on
/// every extraction; the last completed extraction wins.
#[derive(Debug, Default)]
pub struct Session {
    pub input: InputMode,
    pub parsed: Vec<ContactRecord>,
}

pub struct CliApp {
    pub config: Config,
    pub extractor: ContactExtractor,
    pub exporter: ContactExporter,
    pub adapter: FsAdapter,
    pub session: Session,
}
