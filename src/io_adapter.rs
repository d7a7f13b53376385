// src/io_adapter.rs
use crate::models::Result;
use std::path::Path;
use tracing::{debug, info};

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Capability boundary between the extraction core and the outside world:
/// reading a text source and materializing a named download. Everything the
/// core produces or consumes goes through these two calls, so the core stays
/// testable without any filesystem.
#[async_trait::async_trait]
pub trait IoAdapter {
    async fn read_all_text(&self, source: &str) -> Result<String>;
    async fn emit(&self, filename: &str, mime_type: &str, content: &str) -> Result<()>;
}

pub struct FsAdapter {
    output_directory: String,
}

impl FsAdapter {
    pub fn new(output_directory: String) -> Self {
        Self { output_directory }
    }
}

#[async_trait::async_trait]
impl IoAdapter for FsAdapter {
    /// Reads the whole file as UTF-8 text. Invalid UTF-8 is replaced, not
    /// reported: binary content flows through and may yield garbage matches
    /// downstream, which is accepted behavior.
    async fn read_all_text(&self, source: &str) -> Result<String> {
        let bytes = tokio::fs::read(source).await?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        debug!("Read {} bytes of text from {}", text.len(), source);
        Ok(text)
    }

    async fn emit(&self, filename: &str, mime_type: &str, content: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.output_directory).await?;

        let path = Path::new(&self.output_directory).join(filename);
        tokio::fs::write(&path, content).await?;

        info!(
            "Emitted {} ({}, {} bytes)",
            path.display(),
            mime_type,
            content.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_all_text_returns_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("input.txt");
        tokio::fs::write(&file, "a@b.com 9123456789").await.unwrap();

        let adapter = FsAdapter::new(dir.path().to_string_lossy().into_owned());
        let text = adapter.read_all_text(file.to_str().unwrap()).await.unwrap();
        assert_eq!(text, "a@b.com 9123456789");
    }

    #[tokio::test]
    async fn read_all_text_passes_invalid_utf8_through_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("binary.bin");
        tokio::fs::write(&file, [0x61, 0xff, 0x62]).await.unwrap();

        let adapter = FsAdapter::new(dir.path().to_string_lossy().into_owned());
        let text = adapter.read_all_text(file.to_str().unwrap()).await.unwrap();
        assert_eq!(text, "a\u{fffd}b");
    }

    #[tokio::test]
    async fn read_all_text_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = FsAdapter::new(dir.path().to_string_lossy().into_owned());
        assert!(adapter.read_all_text("no-such-file.txt").await.is_err());
    }

    #[tokio::test]
    async fn emit_writes_content_under_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        let adapter = FsAdapter::new(out.to_string_lossy().into_owned());
        adapter
            .emit("contacts.csv", CSV_MIME_TYPE, "Email,Phone\n")
            .await
            .unwrap();

        let written = tokio::fs::read_to_string(out.join("contacts.csv"))
            .await
            .unwrap();
        assert_eq!(written, "Email,Phone\n");
    }
}
