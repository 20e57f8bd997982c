pub mod documents;
pub mod idf;
pub mod sentences;

pub use documents::{rank_documents, tf_idf_score, top_documents, ScoredDocument};
pub use idf::{compute_idf, IdfTable};
pub use sentences::{
    extract_sentences, matching_word_measure, query_term_density, rank_sentences, top_sentences,
    ScoredSentence,
};
