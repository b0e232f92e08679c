use ahash::AHashMap;
use log::debug;

use crate::types::TokenFrequency;

/// Token counts that remember the order in which tokens were first seen.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<TokenFrequency>,
    index: AHashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref());
        }
        debug!("Counted {} tokens, {} distinct", table.total, table.entries.len());
        table
    }

    pub fn add(&mut self, token: &str) {
        self.total += 1;
        match self.index.get(token) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push(TokenFrequency {
                    token: token.to_string(),
                    count: 1,
                });
            },
        }
    }

    pub fn get(&self, token: &str) -> usize {
        self.index.get(token).map_or(0, |&i| self.entries[i].count)
    }

    /// Number of tokens counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[TokenFrequency] {
        &self.entries
    }

    /// The `k` most frequent tokens. Ties keep first-seen order.
    pub fn top_k(&self, k: usize) -> Vec<TokenFrequency> {
        let mut ranked = self.entries.clone();
        // stable: equal counts stay in insertion order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(k);
        ranked
    }
}
