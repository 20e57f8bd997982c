use super::toolkit::{EnglishToolkit, TextToolkit};

/// Normalizes raw text into an ordered sequence of word tokens.
///
/// Rules, applied in order:
/// - Lowercase the whole input and fold typographic apostrophes to `'`
/// - Split into word units with the toolkit
/// - Drop stopwords and units made only of punctuation
///
/// Order and multiplicity are preserved: term frequency depends on both.
#[derive(Debug, Default, Clone)]
pub struct Tokenizer<T = EnglishToolkit> {
    toolkit: T,
}

impl Tokenizer<EnglishToolkit> {
    pub fn english() -> Self {
        Self {
            toolkit: EnglishToolkit,
        }
    }
}

impl<T: TextToolkit> Tokenizer<T> {
    pub fn new(toolkit: T) -> Self {
        Self { toolkit }
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase().replace(['\u{2018}', '\u{2019}'], "'");
        self.toolkit
            .split_words(&lowered)
            .into_iter()
            .filter(|unit| !unit.is_empty())
            .filter(|unit| !self.toolkit.is_stopword(unit))
            .filter(|unit| !is_punctuation_only(unit))
            .map(str::to_string)
            .collect()
    }
}

/// True when every char of `unit` is punctuation. Applies to whatever unit
/// the toolkit returns: numbers and mixed alphanumerics such as `3.14` or
/// `r2d2` are not.
pub fn is_punctuation_only(unit: &str) -> bool {
    unit.chars().all(is_punctuation)
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2018}' // ‘
                | '\u{2019}' // ’
                | '\u{201C}' // “
                | '\u{201D}' // ”
                | '\u{2013}' // –
                | '\u{2014}' // —
                | '\u{2026}' // …
                | '\u{00AB}' // «
                | '\u{00BB}' // »
                | '\u{00BF}' // ¿
                | '\u{00A1}' // ¡
        )
}
