use std::cmp::Ordering;

use super::idf::IdfTable;
use crate::document::{Document, SentenceSet};
use crate::text::{TextToolkit, Tokenizer};
use crate::types::Query;

/// A sentence with both ranking keys, before truncation to `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub text: String,
    pub matching_word_measure: f64,
    pub query_term_density: f64,
}

/// Split the given documents into sentences, line by line.
///
/// Sentences whose tokens are all filtered away are dropped; a repeated
/// sentence text is kept once, at its first position.
pub fn extract_sentences<'a, T, I>(documents: I, tokenizer: &Tokenizer<T>) -> SentenceSet
where
    T: TextToolkit,
    I: IntoIterator<Item = &'a Document>,
{
    let mut sentences = SentenceSet::new();
    for doc in documents {
        for passage in doc.passages() {
            for sentence in tokenizer.toolkit().split_sentences(passage) {
                let tokens = tokenizer.tokenize(sentence);
                sentences.insert(sentence, tokens);
            }
        }
    }
    sentences
}

/// Sum of `idf` over distinct query terms present in `tokens`, each once.
pub fn matching_word_measure(query: &Query, tokens: &[String], idf: &IdfTable) -> f64 {
    query
        .terms
        .iter()
        .filter(|term| tokens.contains(*term))
        .filter_map(|term| idf.get(term))
        .sum()
}

/// Fraction of `tokens` that are query terms, repeats included.
///
/// Zero for an empty sequence; sentence sets never hold one.
pub fn query_term_density(query: &Query, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let matches = tokens
        .iter()
        .filter(|token| query.terms.contains(token.as_str()))
        .count();
    matches as f64 / tokens.len() as f64
}

/// Score and sort every sentence: matching-word measure descending, then
/// query-term density descending, then input order.
pub fn rank_sentences<I, K, V>(query: &Query, sentences: I, idf: &IdfTable) -> Vec<ScoredSentence>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<[String]>,
{
    let mut scored: Vec<ScoredSentence> = sentences
        .into_iter()
        .map(|(text, tokens)| {
            let tokens = tokens.as_ref();
            ScoredSentence {
                text: text.as_ref().to_string(),
                matching_word_measure: matching_word_measure(query, tokens, idf),
                query_term_density: query_term_density(query, tokens),
            }
        })
        .collect();

    // Stable: equal keys keep input order.
    scored.sort_by(|a, b| {
        b.matching_word_measure
            .partial_cmp(&a.matching_word_measure)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.query_term_density
                    .partial_cmp(&a.query_term_density)
                    .unwrap_or(Ordering::Equal)
            })
    });

    scored
}

/// Texts of the `n` best sentences for `query`.
pub fn top_sentences<I, K, V>(query: &Query, sentences: I, idf: &IdfTable, n: usize) -> Vec<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<[String]>,
{
    rank_sentences(query, sentences, idf)
        .into_iter()
        .take(n)
        .map(|sentence| sentence.text)
        .collect()
}
