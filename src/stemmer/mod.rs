//! Word stemmers.
//!
//! Three interchangeable implementations sit behind [`Stemmer`]:
//! an aggressive root stemmer driven by affix and pattern tables
//! ([`RootStemmer`]), a light suffix stripper ([`LightStemmer`]) and the
//! identity ([`IdentityStemmer`]). Every stemmer is total: it never fails,
//! never lengthens a word and never turns a non-empty word into an empty one.

mod light;
pub mod patterns;
mod root;

use serde::{Serialize, Deserialize};

pub use self::light::LightStemmer;
pub use self::root::RootStemmer;

pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;

    fn name(&self) -> &'static str;

    fn stem_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<String>
    where
        Self: Sized,
    {
        words.iter().map(|w| self.stem(w.as_ref())).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemVariant {
    #[default]
    Aggressive,
    Light,
    None,
}

impl StemVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            StemVariant::Aggressive => "aggressive",
            StemVariant::Light => "light",
            StemVariant::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "aggressive" | "isri" | "root" => Some(Self::Aggressive),
            "light" | "snowball" => Some(Self::Light),
            "none" | "off" => Some(Self::None),
            _ => None,
        }
    }

    /// Instantiate the stemmer this variant names.
    pub fn build(&self, fallback: FallbackPolicy) -> Box<dyn Stemmer> {
        match self {
            StemVariant::Aggressive => Box::new(RootStemmer::new(fallback)),
            StemVariant::Light => Box::new(LightStemmer::new()),
            StemVariant::None => Box::new(IdentityStemmer),
        }
    }
}

/// What the root stemmer does with a 4-7 letter word that no
/// reduction pattern matched, even after shedding a single-letter affix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Keep the word as left by prefix and suffix stripping
    #[default]
    Unchanged,
    /// Keep only the first three letters
    Truncate,
}

impl FallbackPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackPolicy::Unchanged => "unchanged",
            FallbackPolicy::Truncate => "truncate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "unchanged" | "keep" => Some(Self::Unchanged),
            "truncate" => Some(Self::Truncate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[&str] = &[
        "الكتابات", "تطبيقات", "بالمدارس", "معلوماتهم", "والالتزام",
        "مستشفى", "استخدام", "مكتوب", "كاتب", "و", "من", "ا", "يستطيعون",
        "بببببببببب", "تتتت", "اااااا",
    ];

    #[test]
    fn test_variant_names_round_trip() {
        for variant in [StemVariant::Aggressive, StemVariant::Light, StemVariant::None] {
            assert_eq!(StemVariant::from_str(variant.as_str()), Some(variant));
            assert_eq!(variant.build(FallbackPolicy::default()).name(), variant.as_str());
        }
        assert_eq!(StemVariant::from_str("ISRI"), Some(StemVariant::Aggressive));
        assert_eq!(StemVariant::from_str("lancaster"), None);
    }

    #[test]
    fn test_identity() {
        assert_eq!(IdentityStemmer.stem("الكتابات"), "الكتابات");
        assert_eq!(IdentityStemmer.stem_all(&["ا", "ب"]), vec!["ا", "ب"]);
    }

    #[test]
    fn test_every_stemmer_is_total_and_non_expanding() {
        let stemmers = [
            StemVariant::Aggressive.build(FallbackPolicy::Unchanged),
            StemVariant::Aggressive.build(FallbackPolicy::Truncate),
            StemVariant::Light.build(FallbackPolicy::Unchanged),
            StemVariant::None.build(FallbackPolicy::Unchanged),
        ];
        for stemmer in &stemmers {
            for word in SAMPLE {
                let stem = stemmer.stem(word);
                assert!(!stem.is_empty(), "{} emptied '{}'", stemmer.name(), word);
                assert!(
                    stem.chars().count() <= word.chars().count(),
                    "{} lengthened '{}' to '{}'", stemmer.name(), word, stem
                );
            }
        }
    }

    #[test]
    fn test_light_is_no_more_aggressive_than_root() {
        let root = RootStemmer::default();
        let light = LightStemmer::new();
        for word in SAMPLE {
            assert!(light.stem(word).chars().count() >= root.stem(word).chars().count());
        }
    }
}
