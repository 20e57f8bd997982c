//! Deterministic TF-IDF question answering over a small text corpus.
//!
//! `answer-core` tokenizes documents, computes inverse document frequencies,
//! picks the most relevant document(s) for a query by summed TF-IDF, then the
//! most relevant sentence(s) inside them by summed IDF with a query-term
//! density tie-break. Identical inputs always produce identical outputs.

pub mod document;
pub mod pipeline;
pub mod ranking;
pub mod text;
pub mod types;
