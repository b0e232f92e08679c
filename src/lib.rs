//! tahlil is a library for Arabic text preprocessing and descriptive statistics.
//! It normalizes orthographic variants, tokenizes into Arabic word forms,
//! removes stopwords under the same normalization policy, stems words to
//! approximate roots, and reports top-K frequencies, PMI-ranked bigram
//! collocations and regex-extracted emails, dates and numbers.

// Module declarations
pub mod error;
pub mod parser;
pub mod stemmer;
pub mod ngram;
pub mod extract;
pub mod pipeline;
pub mod utils;
pub mod config;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use parser::{ArabicParser, NormalizationPolicy, StopwordSet, TextParser, Token};
pub use stemmer::{FallbackPolicy, StemVariant, Stemmer};
pub use pipeline::Pipeline;
pub use types::AnalysisReport;

// Re-export the config from config module
pub use config::TahlilConfig;
