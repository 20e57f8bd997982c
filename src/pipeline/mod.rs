pub mod config;

use crate::document::Corpus;
use crate::ranking::{compute_idf, extract_sentences, rank_documents, rank_sentences};
use crate::text::{EnglishToolkit, TextToolkit, Tokenizer};
use crate::types::{Answer, AnswerMetadata, Query, RankedDocument, RankedSentence};
pub use config::{AnswerConfig, ConfigError};

/// Two-stage answerer: best documents by TF-IDF, then best sentences in them.
pub struct QuestionAnswerer<T = EnglishToolkit> {
    tokenizer: Tokenizer<T>,
    config: AnswerConfig,
}

impl Default for QuestionAnswerer<EnglishToolkit> {
    fn default() -> Self {
        Self {
            tokenizer: Tokenizer::english(),
            config: AnswerConfig::v0(),
        }
    }
}

impl<T: TextToolkit> QuestionAnswerer<T> {
    pub fn new(tokenizer: Tokenizer<T>, config: AnswerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { tokenizer, config })
    }

    pub fn tokenizer(&self) -> &Tokenizer<T> {
        &self.tokenizer
    }

    pub fn config(&self) -> &AnswerConfig {
        &self.config
    }

    /// Answer `raw_query` from `corpus`.
    ///
    /// `corpus` must have been tokenized with the same toolkit as this
    /// answerer for scores to be meaningful.
    pub fn answer(&self, corpus: &Corpus, raw_query: &str) -> Answer {
        // 1. Document-level IDF
        let document_idf = compute_idf(corpus.token_units());

        // 2. Query
        let query = Query::parse(raw_query, &self.tokenizer);
        tracing::debug!(terms = ?query.terms, "parsed query");

        // 3. Document ranking
        let ranked = rank_documents(&query, corpus.token_units(), &document_idf);
        let documents: Vec<RankedDocument> = ranked
            .into_iter()
            .take(self.config.file_matches)
            .filter_map(|scored| {
                let doc = corpus.get(&scored.name)?;
                Some(RankedDocument {
                    id: scored.name,
                    version: doc.version.as_str().to_string(),
                    score: scored.score,
                })
            })
            .collect();
        tracing::debug!(
            considered = corpus.len(),
            selected = documents.len(),
            "ranked documents"
        );

        // 4. Sentence-level IDF over the selected documents only
        let selected = documents.iter().filter_map(|d| corpus.get(&d.id));
        let sentence_set = extract_sentences(selected, &self.tokenizer);
        let sentence_idf = compute_idf(sentence_set.token_units());

        // 5. Sentence ranking
        let ranked = rank_sentences(&query, sentence_set.token_units(), &sentence_idf);
        let sentences: Vec<RankedSentence> = ranked
            .into_iter()
            .take(self.config.sentence_matches)
            .map(|scored| RankedSentence {
                text: scored.text,
                matching_word_measure: scored.matching_word_measure,
                query_term_density: scored.query_term_density,
            })
            .collect();
        tracing::debug!(
            considered = sentence_set.len(),
            selected = sentences.len(),
            "ranked sentences"
        );

        let metadata = AnswerMetadata {
            query: query.raw.clone(),
            query_terms: query.terms.iter().cloned().collect(),
            file_matches: self.config.file_matches,
            sentence_matches: self.config.sentence_matches,
            documents_considered: corpus.len(),
            sentences_considered: sentence_set.len(),
        };

        Answer {
            documents,
            sentences,
            metadata,
        }
    }
}
