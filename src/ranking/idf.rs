use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// Word → inverse document frequency, relative to one collection.
///
/// A word is a key iff it occurs in at least one member of the collection the
/// table was computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdfTable {
    inner: BTreeMap<String, f64>,
}

impl IdfTable {
    pub fn get(&self, word: &str) -> Option<f64> {
        self.inner.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.inner.iter().map(|(w, idf)| (w.as_str(), *idf))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for IdfTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(|(w, idf)| (w.into(), idf)).collect(),
        }
    }
}

/// Compute `idf(w) = ln(N / df(w))` over a collection of token sequences.
///
/// `N` is the number of members; `df(w)` counts members containing `w` at
/// least once. Member names are not used. Document frequencies are gathered in
/// a single pass, so every key has `df >= 1` and the logarithm is always
/// defined.
pub fn compute_idf<I, K, V>(collection: I) -> IdfTable
where
    I: IntoIterator<Item = (K, V)>,
    V: AsRef<[String]>,
{
    let mut total = 0usize;
    let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

    for (_, tokens) in collection {
        total += 1;
        let distinct: HashSet<&str> = tokens.as_ref().iter().map(String::as_str).collect();
        for word in distinct {
            match document_frequency.get_mut(word) {
                Some(df) => *df += 1,
                None => {
                    document_frequency.insert(word.to_string(), 1);
                }
            }
        }
    }

    let inner = document_frequency
        .into_iter()
        .map(|(word, df)| {
            debug_assert!(df >= 1 && df <= total);
            let idf = (total as f64 / df as f64).ln();
            (word, idf)
        })
        .collect();

    IdfTable { inner }
}
