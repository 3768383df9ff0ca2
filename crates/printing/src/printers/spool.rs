//! Printer that appends rendered receipts to a file or device node.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use super::{PrinterError, PrinterSink};
use crate::receipt::Receipt;

/// Appends each receipt as plain text to `path`.
///
/// `path` can be a regular spool file or a character device such as a line
/// printer node; no printer control codes are emitted.
#[derive(Debug, Clone)]
pub struct SpoolPrinter {
    path: PathBuf,
}

impl SpoolPrinter {
    /// Creates a spool printer writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PrinterSink for SpoolPrinter {
    async fn send(&self, receipt: &Receipt) -> Result<(), PrinterError> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| PrinterError::Offline(format!("{}: {e}", self.path.display())))?;

        let mut text = receipt.render_text();
        text.push_str("\n\n");
        file.write_all(text.as_bytes())
            .await
            .map_err(|e| PrinterError::Io(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| PrinterError::Io(e.to_string()))?;
        Ok(())
    }
}
