use std::cmp::Ordering;

use super::idf::IdfTable;
use crate::types::Query;

/// A document with its summed TF-IDF score, before truncation to `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub name: String,
    pub score: f64,
}

/// Σ over query terms known to `idf` of `tf(term) × idf(term)`.
///
/// Terms missing from `idf` are skipped, not errors.
pub fn tf_idf_score(query: &Query, tokens: &[String], idf: &IdfTable) -> f64 {
    let mut score = 0.0;
    for term in &query.terms {
        let Some(weight) = idf.get(term) else {
            continue;
        };
        let tf = tokens.iter().filter(|token| *token == term).count();
        score += tf as f64 * weight;
    }
    score
}

/// Score and sort every document: score descending, then name ascending.
pub fn rank_documents<I, K, V>(query: &Query, documents: I, idf: &IdfTable) -> Vec<ScoredDocument>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<[String]>,
{
    let mut scored: Vec<ScoredDocument> = documents
        .into_iter()
        .map(|(name, tokens)| ScoredDocument {
            name: name.as_ref().to_string(),
            score: tf_idf_score(query, tokens.as_ref(), idf),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    debug_assert!(scored.windows(2).all(|w| {
        let a = &w[0];
        let b = &w[1];
        a.score > b.score || (a.score == b.score && a.name <= b.name)
    }));

    scored
}

/// Names of the `n` best documents for `query`.
///
/// Returns every document when fewer than `n` exist. A query matching
/// nothing still returns `n` names, ordered by name.
pub fn top_documents<I, K, V>(query: &Query, documents: I, idf: &IdfTable, n: usize) -> Vec<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<[String]>,
{
    rank_documents(query, documents, idf)
        .into_iter()
        .take(n)
        .map(|doc| doc.name)
        .collect()
}
