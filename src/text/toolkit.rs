use std::collections::HashSet;
use std::sync::OnceLock;

use unicode_segmentation::UnicodeSegmentation;

/// Language resources the tokenizer is built on.
///
/// Word and sentence boundary detection and the stopword list live behind this
/// trait so ranking never depends on a particular segmentation backend.
pub trait TextToolkit {
    /// Split text into word units, in order. Punctuation units may be returned;
    /// filtering them is the tokenizer's job.
    fn split_words<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// Split a passage into sentences, in order, without surrounding whitespace.
    fn split_sentences<'t>(&self, text: &'t str) -> Vec<&'t str>;

    fn is_stopword(&self, word: &str) -> bool;
}

/// English stopwords (the standard 179-word list).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "that'll", "these", "those", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
    "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

fn english_stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH_STOPWORDS.iter().copied().collect())
}

/// UAX #29 segmentation with the English stopword list.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishToolkit;

impl TextToolkit for EnglishToolkit {
    fn split_words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_word_bounds()
            .filter(|unit| !unit.trim().is_empty())
            .collect()
    }

    fn split_sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    fn is_stopword(&self, word: &str) -> bool {
        english_stopwords().contains(word)
    }
}
