//! Character-level canonicalization of Arabic orthography.
//!
//! Rules are applied per character, in this order:
//! 1. harakat (U+0617..U+061A, U+064B..U+0652) are deleted
//! 2. tatweel (U+0640) is deleted
//! 3. أ إ آ ا become ا
//! 4. ى becomes ي
//! 5. ؤ becomes و
//! 6. ئ becomes ي
//! 7. ة becomes ه unless ta-marbuta is kept
//!
//! No rule produces a character that an earlier rule consumes, so the
//! result is idempotent.

use serde::{Serialize, Deserialize};

const TATWEEL: char = '\u{0640}';
const ALEF: char = '\u{0627}';
const YAA: char = '\u{064A}';
const WAW: char = '\u{0648}';
const HAA: char = '\u{0647}';
const TA_MARBUTA: char = '\u{0629}';

#[inline]
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{0617}'..='\u{061A}' | '\u{064B}'..='\u{0652}')
}

/// The normalization rules for one run.
///
/// Every component that needs to compare words (token production and
/// stopword construction) must go through the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizationPolicy {
    keep_ta_marbuta: bool,
}

impl NormalizationPolicy {
    pub fn new(keep_ta_marbuta: bool) -> Self {
        Self { keep_ta_marbuta }
    }

    pub fn keep_ta_marbuta(&self) -> bool {
        self.keep_ta_marbuta
    }

    /// Map a single character, `None` when the character is deleted.
    pub fn normalize_char(&self, c: char) -> Option<char> {
        if is_diacritic(c) || c == TATWEEL {
            return None;
        }

        let mapped = match c {
            '\u{0623}' | '\u{0625}' | '\u{0622}' => ALEF,
            '\u{0649}' => YAA,
            '\u{0624}' => WAW,
            '\u{0626}' => YAA,
            TA_MARBUTA if !self.keep_ta_marbuta => HAA,
            _ => c,
        };
        Some(mapped)
    }

    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = String::with_capacity(text.len());
        normalized.extend(text.chars().filter_map(|c| self.normalize_char(c)));
        normalized
    }

    pub fn describe(&self) -> &'static str {
        if self.keep_ta_marbuta {
            "keeping ta-marbuta"
        } else {
            "folding ta-marbuta to haa"
        }
    }
}
