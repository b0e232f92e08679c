use super::Stemmer;

// Longest first; only one suffix is removed per word.
const LIGHT_SUFFIXES: &[&str] = &[
    "هما", "كما",
    "ات", "ون", "ين", "ان", "ها", "هم", "هن", "كم", "نا", "يه", "ية",
    "ه", "ة", "ي",
];

/// Stem must keep at least this many letters
const MIN_STEM_LEN: usize = 3;

/// Suffix-only stemmer: no prefix stripping and no root templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightStemmer;

impl LightStemmer {
    pub fn new() -> Self {
        Self
    }
}

impl Stemmer for LightStemmer {
    fn stem(&self, word: &str) -> String {
        let len = word.chars().count();
        for suffix in LIGHT_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if len - suffix.chars().count() >= MIN_STEM_LEN {
                    return stem.to_string();
                }
            }
        }
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "light"
    }
}
