pub mod toolkit;
pub mod tokenizer;

pub use toolkit::{EnglishToolkit, TextToolkit, ENGLISH_STOPWORDS};
pub use tokenizer::{is_punctuation_only, Tokenizer};
