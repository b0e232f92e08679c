// ArabicParser: one normalization policy shared by token production and stopword matching

use log::{debug, info, trace};
use std::fs;
use std::path::Path;
use crate::config::subsystems::ParserConfig;

use super::normalize::NormalizationPolicy;
use super::stopwords::{stopword_entries, StopwordSet, BASE_STOPWORDS};
use super::tokenizer::{tokenize, Token};
use super::{Result, TextParser};

#[derive(Debug, Clone)]
pub struct ArabicParser {
    policy: NormalizationPolicy,
    stopwords: StopwordSet,
    min_token_len: usize,
}

impl ArabicParser {
    /// Build a parser from settings: bundled stopwords, the configured
    /// stop words file if any, and the extra list, all under one policy.
    pub fn new(settings: &ParserConfig) -> Result<Self> {
        let policy = settings.policy();
        let mut parser = Self::with_stopwords(
            policy,
            stopword_entries(BASE_STOPWORDS),
            &settings.extra_stopwords,
            settings.min_token_len,
        );
        parser.load_stop_words_from_config(settings)?;
        info!(
            "Arabic parser ready: {} stopwords, min token length {}, {}",
            parser.stopwords.len(),
            parser.min_token_len,
            policy.describe()
        );
        Ok(parser)
    }

    /// Build a parser over a caller-supplied stopword corpus.
    pub fn with_stopwords<B, E, S, T>(
        policy: NormalizationPolicy,
        base: B,
        extra: E,
        min_token_len: usize,
    ) -> Self
    where
        B: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            policy,
            stopwords: StopwordSet::build(base, extra, policy),
            min_token_len,
        }
    }

    pub fn new_with_defaults() -> Result<Self> {
        Self::new(&ParserConfig::default())
    }

    pub fn load_stop_words_from_config(&mut self, config: &ParserConfig) -> Result<()> {
        if let Some(path) = &config.stop_words_file {
            debug!("Loading stop words from config path: {:?}", path);
            self.load_stop_words(path)
        } else {
            debug!("No stop words file specified in config");
            Ok(())
        }
    }

    pub fn policy(&self) -> NormalizationPolicy {
        self.policy
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn min_token_len(&self) -> usize {
        self.min_token_len
    }
}

impl TextParser for ArabicParser {
    fn normalize_text(&self, text: &str) -> String {
        self.policy.normalize(text)
    }

    fn tokenize_text(&self, text: &str) -> Vec<Token> {
        let normalized = self.normalize_text(text);
        let tokens: Vec<Token> = tokenize(&normalized)
            .map(|word| Token::new(word, self.policy))
            .collect();
        trace!("Tokenized {} bytes into {} tokens", text.len(), tokens.len());
        tokens
    }

    fn remove_stopwords(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        self.stopwords.filter(tokens, self.min_token_len)
    }

    fn load_stop_words<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path_ref = path.as_ref();
        info!("Attempting to load stop words from: {:?}", path_ref);

        let content = fs::read_to_string(path_ref)?;

        let added = self.stopwords.extend(stopword_entries(&content));
        info!("Successfully loaded {} new stop words from {:?}", added, path_ref);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use crate::parser::ParserError;

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_tokenize_normalizes_first() {
        let parser = ArabicParser::new_with_defaults().unwrap();
        let tokens = parser.tokenize_text("وَالْتِزَامُ بِحِمَايَةِ البَيَانَاتِ");
        assert_eq!(words(&tokens), vec!["والتزام", "بحمايه", "البيانات"]);
    }

    #[test]
    fn test_unnormalized_stopwords_still_match() {
        let parser = ArabicParser::new_with_defaults().unwrap();
        // "على" and "إلى" are listed with alef maqsura and hamza; live text uses
        // diacritics as well
        let tokens = parser.tokenize_text("ذهب عَلَى الطريق إِلَى المدرسة");
        let kept = parser.remove_stopwords(tokens).unwrap();
        assert_eq!(words(&kept), vec!["ذهب", "الطريق", "المدرسه"]);
    }

    #[test]
    fn test_keep_ta_marbuta_round_trip() {
        let config = ParserConfig {
            keep_ta_marbuta: true,
            extra_stopwords: vec!["الشركة".to_string()],
            ..ParserConfig::default()
        };
        let parser = ArabicParser::new(&config).unwrap();
        let tokens = parser.tokenize_text("تلتزم الشركة بحماية");
        let kept = parser.remove_stopwords(tokens).unwrap();
        assert_eq!(words(&kept), vec!["تلتزم", "بحماية"]);
    }

    #[test]
    fn test_load_stop_words_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# domain words").unwrap();
        writeln!(file, "").unwrap();
        writeln!(file, "  بيانات  ").unwrap();
        writeln!(file, "العملاء").unwrap();

        let mut parser = ArabicParser::new_with_defaults().unwrap();
        let before = parser.stopwords().len();
        parser.load_stop_words(file.path()).unwrap();
        assert_eq!(parser.stopwords().len(), before + 2);

        let kept = parser
            .remove_stopwords(parser.tokenize_text("حماية بيانات العملاء"))
            .unwrap();
        assert_eq!(words(&kept), vec!["حمايه"]);
    }

    #[test]
    fn test_missing_stop_words_file_is_an_error() {
        let mut parser = ArabicParser::new_with_defaults().unwrap();
        let result = parser.load_stop_words("definitely/not/here.txt");
        assert!(matches!(result, Err(ParserError::IoError(_))));
    }
}
