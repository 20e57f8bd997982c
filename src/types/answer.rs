use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::text::{TextToolkit, Tokenizer};

/// A normalized query: the distinct tokens of the user's input.
///
/// Terms go through the same tokenizer as documents, so stopwords and
/// punctuation never reach the rankers. A `BTreeSet` keeps score summation
/// order fixed across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    pub terms: BTreeSet<String>,
}

impl Query {
    pub fn parse<T: TextToolkit>(raw: impl Into<String>, tokenizer: &Tokenizer<T>) -> Self {
        let raw = raw.into();
        let terms = tokenizer.tokenize(&raw).into_iter().collect();
        Self { raw, terms }
    }

    /// Build a query from already-normalized terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: BTreeSet<String> = terms.into_iter().map(Into::into).collect();
        let raw = terms.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
        Self { raw, terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A document chosen by the document ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    pub id: String,
    pub version: String,
    /// Summed TF-IDF of the query terms.
    pub score: f64,
}

/// A sentence chosen by the sentence ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    /// Original sentence text, before token filtering.
    pub text: String,
    /// Sum of the sentence-level IDF of each distinct query term present.
    pub matching_word_measure: f64,
    /// Share of the sentence's tokens that are query terms.
    pub query_term_density: f64,
}

/// Metadata describing how an answer was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerMetadata {
    pub query: String,
    pub query_terms: Vec<String>,

    pub file_matches: usize,
    pub sentence_matches: usize,

    pub documents_considered: usize,
    pub sentences_considered: usize,
}

/// The final result of answering one query against a corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub documents: Vec<RankedDocument>,
    pub sentences: Vec<RankedSentence>,
    pub metadata: AnswerMetadata,
}

impl Answer {
    /// Answer sentences in rank order.
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }
}
