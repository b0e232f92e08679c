// End-to-end analysis: normalize, tokenize, filter, stem, count, score, extract

use ahash::AHashSet;
use log::{debug, info};
use rayon::prelude::*;

use crate::config::subsystems::AnalysisConfig;
use crate::config::TahlilConfig;
use crate::error::Result;
use crate::extract::extract_patterns;
use crate::ngram::{CollocationScorer, FrequencyTable};
use crate::parser::{ArabicParser, TextParser, Token};
use crate::stemmer::{StemVariant, Stemmer};
use crate::types::{AnalysisReport, StemExample, TokenCounts};

/// A configured run. The parser (policy + stopwords) and the stemmer tables
/// are built once and only read afterwards, so one pipeline can serve many
/// texts.
pub struct Pipeline<P: TextParser = ArabicParser> {
    parser: P,
    stemmer: Box<dyn Stemmer>,
    settings: AnalysisConfig,
}

impl Pipeline<ArabicParser> {
    pub fn from_config(config: &TahlilConfig) -> Result<Self> {
        config.parser.validate()?;
        let parser = ArabicParser::new(&config.parser)?;
        Self::new(parser, config.analysis.clone())
    }
}

impl<P: TextParser> Pipeline<P> {
    pub fn new(parser: P, settings: AnalysisConfig) -> Result<Self> {
        settings.validate()?;
        let stemmer = settings.stem_variant.build(settings.stem_fallback);
        debug!("{}", settings.describe());
        Ok(Self {
            parser,
            stemmer,
            settings,
        })
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn settings(&self) -> &AnalysisConfig {
        &self.settings
    }

    pub fn stem_variant(&self) -> StemVariant {
        self.settings.stem_variant
    }

    /// Tokens that survive stopword and length filtering.
    pub fn clean_tokens(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = self.parser.tokenize_text(text);
        Ok(self.parser.remove_stopwords(tokens)?)
    }

    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let tokens = self.parser.tokenize_text(text);
        let tokens_before_filter = tokens.len();

        let kept = self.parser.remove_stopwords(tokens)?;
        let stems: Vec<String> = kept.iter().map(|t| self.stemmer.stem(t.as_str())).collect();

        info!(
            "Tokens: {} before filtering, {} after, {} stems ({})",
            tokens_before_filter,
            kept.len(),
            stems.len(),
            self.stemmer.name()
        );

        let top_tokens = FrequencyTable::count(&stems).top_k(self.settings.top_k);

        let mut collocations = CollocationScorer::new(self.settings.min_bigram_freq).score(&stems);
        collocations.truncate(self.settings.max_collocations);

        Ok(AnalysisReport {
            counts: TokenCounts {
                tokens_before_filter,
                tokens_after_filter: kept.len(),
                stem_count: stems.len(),
            },
            stem_variant: self.settings.stem_variant,
            top_tokens,
            collocations,
            extracted: extract_patterns(text),
            stem_examples: self.stem_examples(&kept, &stems),
        })
    }

    /// Analyze independent texts in parallel, sharing this pipeline.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Result<AnalysisReport>> {
        info!("Analyzing batch of {} texts", texts.len());
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }

    // First distinct surviving tokens next to their stems
    fn stem_examples(&self, tokens: &[Token], stems: &[String]) -> Vec<StemExample> {
        if self.settings.stem_variant == StemVariant::None {
            return Vec::new();
        }

        let mut seen = AHashSet::new();
        tokens
            .iter()
            .zip(stems)
            .filter(|(token, _)| seen.insert(token.as_str()))
            .take(self.settings.stem_examples)
            .map(|(token, stem)| StemExample {
                original: token.to_string(),
                stemmed: stem.clone(),
            })
            .collect()
    }
}
