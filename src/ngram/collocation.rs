// PMI-ranked bigram collocations

use ahash::AHashMap;
use log::{debug, trace};
use std::cmp::Ordering;

use crate::types::ScoredBigram;
use super::frequency::FrequencyTable;
use super::types::BigramRecord;

/// Scores adjacent token pairs by pointwise mutual information.
///
/// Pairs seen fewer than `min_freq` times are discarded before any score is
/// computed; PMI over rare pairs is dominated by noise.
#[derive(Debug, Clone, Copy)]
pub struct CollocationScorer {
    min_freq: usize,
}

impl Default for CollocationScorer {
    fn default() -> Self {
        Self { min_freq: 2 }
    }
}

impl CollocationScorer {
    pub fn new(min_freq: usize) -> Self {
        Self { min_freq }
    }

    pub fn min_freq(&self) -> usize {
        self.min_freq
    }

    /// Every adjacent pair with its count, in first-seen order.
    pub fn bigrams<S: AsRef<str>>(tokens: &[S]) -> Vec<BigramRecord> {
        let mut records: Vec<BigramRecord> = Vec::new();
        let mut index: AHashMap<(&str, &str), usize> = AHashMap::new();

        for window in tokens.windows(2) {
            let key = (window[0].as_ref(), window[1].as_ref());
            let i = *index.entry(key).or_insert_with(|| {
                records.push(BigramRecord::new(key.0, key.1));
                records.len() - 1
            });
            records[i].count += 1;
        }
        records
    }

    /// Ranked by PMI descending, then count descending, then first appearance.
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<ScoredBigram> {
        if tokens.len() < 2 {
            return Vec::new();
        }

        let unigrams = FrequencyTable::count(tokens);
        let n = tokens.len() as u128;

        let bigrams = Self::bigrams(tokens);
        let total = bigrams.len();
        let mut scored: Vec<ScoredBigram> = bigrams
            .into_iter()
            .filter(|b| b.count >= self.min_freq)
            .map(|b| {
                // (c12 / (N-1)) / ((c1 / N) * (c2 / N)) as one reduced fraction
                let ratio = exact_ratio(
                    b.count as u128 * n * n,
                    (n - 1) * unigrams.get(&b.first) as u128 * unigrams.get(&b.second) as u128,
                );
                let pmi = ratio.log2();
                trace!("PMI({}) = {:.4} over {} occurrences", b, pmi, b.count);
                ScoredBigram {
                    first: b.first,
                    second: b.second,
                    count: b.count,
                    pmi,
                }
            })
            .collect();

        debug!(
            "{} of {} distinct bigrams reach min_freq {}",
            scored.len(), total, self.min_freq
        );

        scored.sort_by(|a, b| match b.pmi.total_cmp(&a.pmi) {
            Ordering::Equal => b.count.cmp(&a.count),
            other => other,
        });
        scored
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `num / den` reduced to lowest terms first, so equal fractions always
/// produce the same float.
fn exact_ratio(num: u128, den: u128) -> f64 {
    let g = gcd(num, den);
    (num / g) as f64 / (den / g) as f64
}

pub fn collocations<S: AsRef<str>>(tokens: &[S], min_freq: usize) -> Vec<ScoredBigram> {
    CollocationScorer::new(min_freq).score(tokens)
}
