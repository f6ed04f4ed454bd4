use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::interfaces::adapters::InsertionSink;

/// Inserts text into a file on disk at a byte offset fixed at creation.
pub struct DocumentFileSink {
    document_path: PathBuf,
    cursor: usize,
}

impl DocumentFileSink {
    /// Captures the cursor for `document_path`. Without an explicit offset
    /// the cursor sits at the end of the current contents.
    pub fn capture(document_path: &Path, cursor: Option<usize>) -> Result<Self> {
        let contents = Self::read_document(document_path)?;

        let cursor = match cursor {
            Some(offset) => {
                Self::validate_cursor(&contents, offset)?;
                offset
            }
            None => contents.len(),
        };

        log::debug!(
            "[DOCUMENT] Captured cursor {} in {:?}",
            cursor,
            document_path
        );

        Ok(Self {
            document_path: document_path.to_path_buf(),
            cursor,
        })
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn read_document(document_path: &Path) -> Result<String> {
        if !document_path.exists() {
            return Ok(String::new());
        }

        std::fs::read_to_string(document_path)
            .with_context(|| format!("failed to read document {:?}", document_path))
    }

    fn validate_cursor(contents: &str, cursor: usize) -> Result<()> {
        if cursor > contents.len() || !contents.is_char_boundary(cursor) {
            anyhow::bail!(
                "cursor {} is not a valid position in a {} byte document",
                cursor,
                contents.len()
            );
        }
        Ok(())
    }
}

impl InsertionSink for DocumentFileSink {
    fn insert_at_cursor(&self, text: &str) -> Result<()> {
        let mut contents = Self::read_document(&self.document_path)?;
        Self::validate_cursor(&contents, self.cursor)?;

        contents.insert_str(self.cursor, text);

        std::fs::write(&self.document_path, contents)
            .with_context(|| format!("failed to write document {:?}", self.document_path))?;

        log::info!(
            "[DOCUMENT] Inserted {} bytes at {} in {:?}",
            text.len(),
            self.cursor,
            self.document_path
        );
        Ok(())
    }
}
