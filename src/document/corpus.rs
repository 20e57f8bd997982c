// Built once, read-only afterwards:
// no mutation
// no incremental updates

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::document::{Document, DocumentError};
use crate::text::{TextToolkit, Tokenizer};
use crate::types::identifiers::{DocumentId, DocumentIdError};

pub const DOCUMENT_EXTENSION: &str = ".txt";

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Corpus directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Corpus path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
    #[error("Invalid document name: {0}")]
    DocumentId(#[from] DocumentIdError),
    #[error("Duplicate document ID: {0}")]
    DuplicateDocumentId(String),
    #[error("Corpus contains no documents")]
    Empty,
}

/// All documents available for querying, keyed by name.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: BTreeMap<DocumentId, Document>,
}

impl Corpus {
    /// Load every `.txt` file directly inside `dir`.
    ///
    /// Subdirectories and other files are ignored. File names that are not
    /// valid UTF-8 are skipped with a warning.
    pub fn load_dir<T: TextToolkit>(
        dir: &Path,
        tokenizer: &Tokenizer<T>,
    ) -> Result<Self, CorpusError> {
        if !dir.exists() {
            return Err(CorpusError::NotFound(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(CorpusError::NotADirectory(dir.to_path_buf()));
        }

        let mut documents = BTreeMap::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::warn!(file = ?file_name, "skipping file with non UTF-8 name");
                continue;
            };
            if !name.ends_with(DOCUMENT_EXTENSION) {
                continue;
            }

            let path = entry.path();
            let id = DocumentId::from_path(dir, &path)?;
            let raw = fs::read(&path)?;
            let doc = Document::ingest(id, raw, tokenizer)
                .map_err(|source| CorpusError::Document { path: path.clone(), source })?;

            tracing::debug!(document = %doc.id, tokens = doc.tokens.len(), "loaded document");
            documents.insert(doc.id.clone(), doc);
        }

        Self::from_documents(documents)
    }

    /// Build a corpus from in-memory `(name, text)` pairs.
    pub fn from_texts<T, I, N, C>(texts: I, tokenizer: &Tokenizer<T>) -> Result<Self, CorpusError>
    where
        T: TextToolkit,
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut documents = BTreeMap::new();
        for (name, content) in texts {
            let id = DocumentId::new(name)?;
            if documents.contains_key(&id) {
                return Err(CorpusError::DuplicateDocumentId(id.as_str().to_string()));
            }
            let path = PathBuf::from(id.as_str());
            let content: String = content.into();
            let doc = Document::ingest(id, content.into_bytes(), tokenizer)
                .map_err(|source| CorpusError::Document { path, source })?;
            documents.insert(doc.id.clone(), doc);
        }

        Self::from_documents(documents)
    }

    fn from_documents(documents: BTreeMap<DocumentId, Document>) -> Result<Self, CorpusError> {
        if documents.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { documents })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    /// Documents in name order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// `(name, tokens)` pairs in name order, the shape the rankers consume.
    pub fn token_units(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.documents
            .values()
            .map(|doc| (doc.id.as_str(), doc.tokens.as_slice()))
    }
}
