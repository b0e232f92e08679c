// src/config/subsystems/parser.rs

use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use crate::error::{Error, Result};
use crate::config::{parse_flag, parse_positive, unquote, FromIni};
use crate::parser::stopwords::split_extra;
use crate::parser::NormalizationPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    // Leave ta-marbuta alone instead of folding it to haa
    pub keep_ta_marbuta: bool,

    // Extra stopwords on top of the bundled list
    pub extra_stopwords: Vec<String>,

    pub min_token_len: usize,

    // Optional file with additional stop words, one per line
    pub stop_words_file: Option<PathBuf>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            keep_ta_marbuta: false,
            extra_stopwords: Vec::new(),
            min_token_len: 2,
            stop_words_file: None,
        }
    }
}

impl FromIni for ParserConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "text_processing" {
            return None;
        }

        match key {
            "keep_ta_marbuta" => Some(parse_flag(key, value).map(|flag| {
                self.keep_ta_marbuta = flag;
            })),
            "extra_stopwords" => {
                self.extra_stopwords = split_extra(unquote(value));
                Some(Ok(()))
            },
            "min_token_len" => Some(parse_positive(key, value).map(|len| {
                self.min_token_len = len;
            })),
            "stop_words_file" => {
                let path = unquote(value);
                self.stop_words_file = (!path.is_empty()).then(|| PathBuf::from(path));
                Some(Ok(()))
            },
            _ => None,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_token_len == 0 {
            return Err(Error::Config(
                "min_token_len must be greater than 0".to_string()
            ));
        }
        if let Some(path) = &self.stop_words_file {
            if !path.exists() {
                return Err(Error::Config(
                    format!("Stop words file not found: {:?}", path)
                ));
            }
        }
        Ok(())
    }

    /// The one normalization policy every text stage of a run shares
    pub fn policy(&self) -> NormalizationPolicy {
        NormalizationPolicy::new(self.keep_ta_marbuta)
    }

    /// Returns a description of the current text processing configuration
    pub fn describe(&self) -> String {
        let mut description = vec![
            "removing diacritics and tatweel".to_string(),
            "unifying alef and hamza carriers".to_string(),
            self.policy().describe().to_string(),
            format!("dropping tokens shorter than {}", self.min_token_len),
        ];
        if !self.extra_stopwords.is_empty() {
            description.push(format!("{} extra stopwords", self.extra_stopwords.len()));
        }
        if let Some(path) = &self.stop_words_file {
            description.push(format!("using stop words from {:?}", path));
        }
        description.join(", ")
    }
}
