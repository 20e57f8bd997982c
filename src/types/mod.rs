pub mod answer;
pub mod identifiers;

pub use answer::{Answer, AnswerMetadata, Query, RankedDocument, RankedSentence};
pub use identifiers::{DocumentId, DocumentIdError, DocumentVersion};
