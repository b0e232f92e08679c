use lazy_static::lazy_static;
use regex::{Matches, Regex};
use std::fmt;

use super::normalize::NormalizationPolicy;

lazy_static! {
    // Basic Arabic alphabet (hamza through ghain, faa through yaa)
    static ref ARABIC_WORD: Regex = Regex::new(r"[\u{0621}-\u{063A}\u{0641}-\u{064A}]+").unwrap();
}

#[inline]
pub fn is_arabic_letter(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}')
}

/// Lazy left-to-right scan over the maximal Arabic letter runs of a text.
pub struct Tokens<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| m.as_str())
    }
}

/// Split text into Arabic word forms. Anything outside the Arabic letter
/// block separates tokens. Calling it again on the same text yields the
/// same sequence.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        matches: ARABIC_WORD.find_iter(text),
    }
}

/// A word form produced under a specific normalization policy.
///
/// Tokens can only be built inside the crate, by a parser that normalized
/// the text first, so the policy they carry is the one that shaped them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    policy: NormalizationPolicy,
}

impl Token {
    pub(crate) fn new(text: impl Into<String>, policy: NormalizationPolicy) -> Self {
        Self {
            text: text.into(),
            policy,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in letters, not bytes
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn policy(&self) -> NormalizationPolicy {
        self.policy
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
