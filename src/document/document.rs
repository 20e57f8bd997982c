use thiserror::Error;

use crate::text::{TextToolkit, Tokenizer};
use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// The atomic unit of a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub content: String,
    /// Filtered tokens of `content`, in order, duplicates kept.
    pub tokens: Vec<String>,
}

impl Document {
    /// Ingest raw bytes into a Document.
    ///
    /// This is the ONLY way to construct a Document.
    /// Content is validated, versioned and tokenized exactly once.
    pub fn ingest<T: TextToolkit>(
        id: DocumentId,
        raw_content: Vec<u8>,
        tokenizer: &Tokenizer<T>,
    ) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;

        let version = DocumentVersion::from_content(content.as_bytes());
        let tokens = tokenizer.tokenize(&content);

        Ok(Document {
            id,
            version,
            content,
            tokens,
        })
    }

    /// Lines of the raw text; sentences never span a line break.
    pub fn passages(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}
