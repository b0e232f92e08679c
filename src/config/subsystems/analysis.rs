// src/config/subsystems/analysis.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::{parse_positive, FromIni};
use crate::stemmer::{FallbackPolicy, StemVariant};
use log::LevelFilter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    // Number of most frequent tokens to report
    pub top_k: usize,

    // Bigrams seen fewer times than this are dropped before PMI scoring
    pub min_bigram_freq: usize,

    // Number of ranked collocations to report
    pub max_collocations: usize,

    pub stem_variant: StemVariant,
    pub stem_fallback: FallbackPolicy,

    // Number of (token, stem) pairs to include in the report
    pub stem_examples: usize,

    pub log_level: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: 20,
            min_bigram_freq: 2,
            max_collocations: 10,
            stem_variant: StemVariant::default(),
            stem_fallback: FallbackPolicy::default(),
            stem_examples: 5,
            log_level: "info".to_string(),
        }
    }
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        "none" | "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

impl FromIni for AnalysisConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "analysis" {
            return None;
        }

        match key {
            "top_k" => Some(parse_positive(key, value).map(|k| {
                self.top_k = k;
            })),
            "min_bigram_freq" => Some(parse_positive(key, value).map(|f| {
                self.min_bigram_freq = f;
            })),
            "max_collocations" => Some(parse_positive(key, value).map(|n| {
                self.max_collocations = n;
            })),
            "stem_variant" => {
                match StemVariant::from_str(value) {
                    Some(variant) => {
                        self.stem_variant = variant;
                        Some(Ok(()))
                    },
                    None => Some(Err(Error::Config(
                        format!("Invalid stem_variant (must be 'aggressive', 'light' or 'none'): {}", value)
                    ))),
                }
            },
            "stem_fallback" => {
                match FallbackPolicy::from_str(value) {
                    Some(policy) => {
                        self.stem_fallback = policy;
                        Some(Ok(()))
                    },
                    None => Some(Err(Error::Config(
                        format!("Invalid stem_fallback (must be 'unchanged' or 'truncate'): {}", value)
                    ))),
                }
            },
            "stem_examples" => {
                match value.parse() {
                    Ok(n) => {
                        self.stem_examples = n;
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid stem_examples (must be a non-negative integer): {}", value)
                    ))),
                }
            },
            "log_level" => {
                let level = value.trim().to_lowercase();
                Some(match parse_level(&level) {
                    Some(_) => {
                        self.log_level = level;
                        Ok(())
                    },
                    None => Err(Error::Config(
                        format!("Invalid log level '{}'. Must be one of: none, error, warn, info, debug, trace", value)
                    )),
                })
            },
            _ => None,
        }
    }
}

impl AnalysisConfig {
    pub fn get_log_level(&self) -> LevelFilter {
        parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::Config(
                "top_k must be greater than 0".to_string()
            ));
        }
        if self.min_bigram_freq == 0 {
            return Err(Error::Config(
                "min_bigram_freq must be greater than 0".to_string()
            ));
        }
        if self.max_collocations == 0 {
            return Err(Error::Config(
                "max_collocations must be greater than 0".to_string()
            ));
        }
        if parse_level(&self.log_level).is_none() {
            return Err(Error::Config(
                format!("Invalid log level '{}'", self.log_level)
            ));
        }
        Ok(())
    }

    /// Returns a human-readable description of the configuration
    pub fn describe(&self) -> String {
        format!(
            "Analysis configuration:\n\
             - Top-K tokens: {}\n\
             - Minimum bigram frequency: {}\n\
             - Collocations reported: {}\n\
             - Stemmer: {} (fallback: {})",
            self.top_k,
            self.min_bigram_freq,
            self.max_collocations,
            self.stem_variant.as_str(),
            self.stem_fallback.as_str(),
        )
    }
}
