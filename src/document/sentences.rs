use std::collections::HashSet;

/// A sentence paired with its filtered tokens. Never has zero tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<String>,
}

/// Sentences keyed by text, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SentenceSet {
    sentences: Vec<Sentence>,
    seen: HashSet<String>,
}

impl SentenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sentence. Returns false (and keeps the set unchanged) when
    /// `tokens` is empty or the text is already present.
    pub fn insert(&mut self, text: impl Into<String>, tokens: Vec<String>) -> bool {
        if tokens.is_empty() {
            return false;
        }
        let text = text.into();
        if !self.seen.insert(text.clone()) {
            return false;
        }
        self.sentences.push(Sentence { text, tokens });
        true
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter()
    }

    /// `(text, tokens)` pairs in insertion order, the shape the rankers consume.
    pub fn token_units(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sentences
            .iter()
            .map(|s| (s.text.as_str(), s.tokens.as_slice()))
    }
}
