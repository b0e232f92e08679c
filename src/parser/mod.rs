pub mod arabic;
pub mod normalize;
pub mod stopwords;
pub mod tokenizer;

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("Normalization policy mismatch: {0}")]
   PolicyMismatch(String),
}

pub type Result<T> = std::result::Result<T, ParserError>;

pub trait TextParser: Sync + Send {
    /// Canonicalize orthographic variants according to the parser's policy
    fn normalize_text(&self, text: &str) -> String;

    /// Normalize and split text into Arabic word tokens
    fn tokenize_text(&self, text: &str) -> Vec<Token>;

    /// Drop stopwords and tokens shorter than the configured minimum length
    fn remove_stopwords(&self, tokens: Vec<Token>) -> Result<Vec<Token>>;

    /// Load additional stop words from a file
    fn load_stop_words<P: AsRef<Path>>(&mut self, path: P) -> Result<()>;
}

pub use self::arabic::ArabicParser;
pub use self::normalize::NormalizationPolicy;
pub use self::stopwords::{StopwordSet, BASE_STOPWORDS};
pub use self::tokenizer::{tokenize, Token, Tokens};
