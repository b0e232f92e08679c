use log::trace;

use crate::parser::normalize::is_diacritic;
use super::patterns::{
    first_match, Affix, Template, FIVE_TO_FOUR, FIVE_TO_THREE, FOUR_TO_THREE, PREFIXES,
    SHORT_PREFIXES, SHORT_SUFFIXES, SIX_TO_FOUR, SIX_TO_THREE, SUFFIXES,
};
use super::{FallbackPolicy, Stemmer};

/// Rule-based root extraction in the ISRI family.
///
/// Stages: drop harakat, strip one long prefix, strip one long suffix,
/// collapse a doubled leading waw, unify an initial hamza-alef, then reduce 4-7 letter words
/// through the length-specific template tables. Shorter words pass through.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootStemmer {
    fallback: FallbackPolicy,
}

fn starts_with(letters: &[char], affix: &str) -> bool {
    let n = affix.chars().count();
    letters.len() >= n && letters[..n].iter().copied().eq(affix.chars())
}

fn ends_with(letters: &[char], affix: &str) -> bool {
    let n = affix.chars().count();
    letters.len() >= n && starts_with(&letters[letters.len() - n..], affix)
}

fn apply_template(table: &[Template], letters: &[char]) -> Option<Vec<char>> {
    first_match(table, letters).map(|t| {
        trace!("Template {} matched", t.name);
        t.apply(letters)
    })
}

impl RootStemmer {
    pub fn new(fallback: FallbackPolicy) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    fn strip_prefix(mut letters: Vec<char>, table: &[Affix]) -> Vec<char> {
        if let Some(a) = table
            .iter()
            .find(|a| letters.len() >= a.min_len && starts_with(&letters, a.text))
        {
            letters.drain(..a.text.chars().count());
        }
        letters
    }

    fn strip_suffix(mut letters: Vec<char>, table: &[Affix]) -> Vec<char> {
        if let Some(a) = table
            .iter()
            .find(|a| letters.len() >= a.min_len && ends_with(&letters, a.text))
        {
            letters.truncate(letters.len() - a.text.chars().count());
        }
        letters
    }

    // و + و-initial word: the first waw is the conjunction
    fn drop_doubled_waw(mut letters: Vec<char>) -> Vec<char> {
        if letters.len() >= 4 && letters[0] == 'و' && letters[1] == 'و' {
            letters.remove(0);
        }
        letters
    }

    fn shed_suffix(mut letters: Vec<char>) -> Vec<char> {
        if letters.last().map_or(false, |c| SHORT_SUFFIXES.contains(c)) {
            letters.pop();
        }
        letters
    }

    fn shed_prefix(mut letters: Vec<char>) -> Vec<char> {
        if letters.first().map_or(false, |c| SHORT_PREFIXES.contains(c)) {
            letters.remove(0);
        }
        letters
    }

    /// Shed one short suffix and, if that did nothing, one short prefix.
    fn shed_short_affix(letters: Vec<char>) -> Vec<char> {
        let len = letters.len();
        let letters = Self::shed_suffix(letters);
        if letters.len() == len {
            Self::shed_prefix(letters)
        } else {
            letters
        }
    }

    fn reduce_four(letters: &[char]) -> Option<Vec<char>> {
        apply_template(FOUR_TO_THREE, letters)
    }

    fn reduce_five(letters: &[char]) -> Option<Vec<char>> {
        apply_template(FIVE_TO_THREE, letters).or_else(|| {
            let shed = Self::shed_short_affix(letters.to_vec());
            match shed.len() {
                4 => Self::reduce_four(&shed),
                5 => apply_template(FIVE_TO_FOUR, &shed),
                _ => None,
            }
        })
    }

    fn reduce_six(letters: &[char]) -> Option<Vec<char>> {
        apply_template(SIX_TO_THREE, letters).or_else(|| {
            let shed = Self::shed_short_affix(letters.to_vec());
            match shed.len() {
                5 => Self::reduce_five(&shed),
                6 => apply_template(SIX_TO_FOUR, &shed),
                _ => None,
            }
        })
    }

    fn reduce_seven(letters: &[char]) -> Option<Vec<char>> {
        let shed = Self::shed_short_affix(letters.to_vec());
        if shed.len() == 6 {
            Self::reduce_six(&shed)
        } else {
            None
        }
    }

    /// A word no template reduced: kept as it was after affix stripping,
    /// or cut to its first three letters.
    fn apply_fallback(&self, mut letters: Vec<char>) -> Vec<char> {
        if self.fallback == FallbackPolicy::Truncate && letters.len() > 3 {
            letters.truncate(3);
        }
        letters
    }
}

impl Stemmer for RootStemmer {
    fn stem(&self, word: &str) -> String {
        let letters: Vec<char> = word.chars().filter(|&c| !is_diacritic(c)).collect();
        if letters.is_empty() {
            return word.to_string();
        }

        let letters = Self::strip_prefix(letters, PREFIXES);
        let letters = Self::strip_suffix(letters, SUFFIXES);
        let mut letters = Self::drop_doubled_waw(letters);
        if matches!(letters[0], 'آ' | 'أ' | 'إ') {
            letters[0] = 'ا';
        }

        let reduced = match letters.len() {
            4 => Self::reduce_four(&letters),
            5 => Self::reduce_five(&letters),
            6 => Self::reduce_six(&letters),
            7 => Self::reduce_seven(&letters),
            _ => return letters.into_iter().collect(),
        };
        let letters = reduced.unwrap_or_else(|| self.apply_fallback(letters));

        let stem: String = letters.into_iter().collect();
        trace!("Root stem '{}' -> '{}'", word, stem);
        stem
    }

    fn name(&self) -> &'static str {
        "aggressive"
    }
}
