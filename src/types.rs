use serde::{Serialize, Deserialize};

use crate::stemmer::StemVariant;

/// Everything one pipeline run produces, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub counts: TokenCounts,
    pub stem_variant: StemVariant,
    pub top_tokens: Vec<TokenFrequency>,
    pub collocations: Vec<ScoredBigram>,
    pub extracted: ExtractedPatterns,
    pub stem_examples: Vec<StemExample>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounts {
    pub tokens_before_filter: usize,
    pub tokens_after_filter: usize,
    pub stem_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenFrequency {
    pub token: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredBigram {
    pub first: String,
    pub second: String,
    pub count: usize,
    pub pmi: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPatterns {
    pub emails: Vec<String>,
    pub dates: Vec<String>,
    pub numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemExample {
    pub original: String,
    pub stemmed: String,
}

/// A match over the raw input text. Offsets are byte positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractionSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl ExtractionSpan {
    pub fn overlaps(&self, other: &ExtractionSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}
