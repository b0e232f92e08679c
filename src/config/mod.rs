pub mod file;
pub mod subsystems;

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use crate::error::{Error, Result};
use log::{warn, trace};

pub trait FromIni {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TahlilConfig {
    // File paths
    pub files: file::FileConfig,

    // Subsystem configs
    pub parser: subsystems::ParserConfig,
    pub analysis: subsystems::AnalysisConfig,
}

impl TahlilConfig {
    pub fn validate(&self) -> Result<()> {
        self.files.validate()?;
        self.parser.validate()?;
        self.analysis.validate()?;
        Ok(())
    }

    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_ini(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_ini_str(content: &str) -> Result<Self> {
        let config = Self::parse_ini_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an INI file without the final cross-field validation, for callers
    /// that still apply overrides before calling [`validate`](Self::validate).
    pub fn read_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        trace!("Loading configuration from: {:?}", path.as_ref());
        let content = fs::read_to_string(&path)?;
        Self::parse_ini_str(&content)
    }

    /// Parse INI text. Invalid values are configuration errors; unknown keys
    /// are only warned about. File paths are not checked here.
    pub fn parse_ini_str(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len()-1].trim().to_string();
                trace!("  Line {}: Found section: [{}]", line_num + 1, current_section);
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                let handled = match current_section.as_str() {
                    "files" => config.files.from_ini_section(&current_section, key, value),
                    "text_processing" => config.parser.from_ini_section(&current_section, key, value),
                    "analysis" => config.analysis.from_ini_section(&current_section, key, value),
                    _ => None,
                };

                match handled {
                    Some(Err(Error::Config(msg))) => {
                        return Err(Error::config(format!("line {}: {}", line_num + 1, msg)));
                    },
                    Some(Err(e)) => return Err(e),
                    Some(Ok(())) => {},
                    None => {
                        warn!("Unrecognized config key: {}={} in section [{}]", key, value, current_section);
                    },
                }
            } else {
                warn!("Ignoring malformed config line {}: {}", line_num + 1, line);
            }
        }

        Ok(config)
    }
}

pub(crate) fn parse_flag(key: &str, value: &str) -> Result<bool> {
    value.parse().map_err(|_| Error::Config(
        format!("Invalid {} value (must be true/false): {}", key, value)
    ))
}

pub(crate) fn parse_positive(key: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Config(
            format!("Invalid {} (must be > 0): {}", key, value)
        )),
    }
}

pub(crate) fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}
