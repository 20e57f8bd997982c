pub mod corpus;
pub mod document;
pub mod sentences;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use corpus::{Corpus, CorpusError};
pub use document::{Document, DocumentError};
pub use sentences::{Sentence, SentenceSet};
