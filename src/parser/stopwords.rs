use ahash::AHashSet;
use log::{debug, trace};

use super::normalize::NormalizationPolicy;
use super::tokenizer::Token;
use super::{ParserError, Result};

/// Bundled Arabic stopword corpus, one entry per line
pub const BASE_STOPWORDS: &str = include_str!("../../filters/stop_words.txt");

/// Iterate the entries of a stopword file body, skipping blanks and `#` comments.
pub fn stopword_entries(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Split a comma-separated list of extra stopwords.
pub fn split_extra(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalized stopwords, tied to the policy that normalized them.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: AHashSet<String>,
    policy: NormalizationPolicy,
}

impl StopwordSet {
    /// Normalize both lists with `policy` and union them.
    pub fn build<B, E, S, T>(base: B, extra: E, policy: NormalizationPolicy) -> Self
    where
        B: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut set = Self::empty(policy);
        set.extend(base);
        set.extend(extra);
        debug!("Built stopword set with {} entries ({})", set.len(), policy.describe());
        set
    }

    pub fn empty(policy: NormalizationPolicy) -> Self {
        Self {
            words: AHashSet::new(),
            policy,
        }
    }

    /// Add entries, normalizing each with the set's own policy.
    /// Returns how many new entries were inserted.
    pub fn extend<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            let normalized = self.policy.normalize(word.as_ref().trim());
            if normalized.is_empty() {
                continue;
            }
            trace!("Stopword '{}' -> '{}'", word.as_ref(), normalized);
            if self.words.insert(normalized) {
                added += 1;
            }
        }
        added
    }

    pub fn policy(&self) -> NormalizationPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership for an already normalized word form.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Keep tokens at least `min_len` letters long that are not stopwords.
    /// Order is preserved. Tokens normalized under another policy are rejected.
    pub fn filter(&self, tokens: Vec<Token>, min_len: usize) -> Result<Vec<Token>> {
        if let Some(stray) = tokens.iter().find(|t| t.policy() != self.policy) {
            return Err(ParserError::PolicyMismatch(format!(
                "token '{}' was produced {}, stopwords were built {}",
                stray,
                stray.policy().describe(),
                self.policy.describe()
            )));
        }

        let before = tokens.len();
        let kept: Vec<Token> = tokens
            .into_iter()
            .filter(|t| t.len() >= min_len && !self.words.contains(t.as_str()))
            .collect();
        debug!("Stopword filter kept {} of {} tokens", kept.len(), before);
        Ok(kept)
    }
}
