// src/config/file.rs

use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use crate::error::{Error, Result};
use super::{unquote, FromIni};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub input_file: Option<PathBuf>,
    // JSON report destination, written by the CLI only
    pub output_file: Option<PathBuf>,
}

impl FromIni for FileConfig {
    fn from_ini_section(&mut self, _section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        let value = unquote(value);
        match key {
            "input_file" => {
                self.input_file = (!value.is_empty()).then(|| PathBuf::from(value));
                Some(Ok(()))
            },
            "output_file" => {
                self.output_file = (!value.is_empty()).then(|| PathBuf::from(value));
                Some(Ok(()))
            },
            _ => None,
        }
    }
}

impl FileConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input_file {
            if !path.is_file() {
                return Err(Error::Config(
                    format!("Input file does not exist: {:?}", path)
                ));
            }
        }
        Ok(())
    }
}
