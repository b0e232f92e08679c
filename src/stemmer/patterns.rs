//! Affix lists and morphological templates for the root stemmer.
//!
//! Every table is ordered: the first entry that applies wins. Templates are
//! written against letter positions of the word after affix stripping, e.g.
//! `مفعول` is "position 0 is م and position 3 is و; keep 1, 2, 4".

/// Bumped whenever an entry is added, removed or reordered.
pub const TABLE_VERSION: u32 = 1;

/// A prefix or suffix, stripped only if the word has at least `min_len` letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affix {
    pub text: &'static str,
    pub min_len: usize,
}

const fn affix(text: &'static str, min_len: usize) -> Affix {
    Affix { text, min_len }
}

/// Three-letter then two-letter prefixes (article and conjunction combinations).
/// The length guard leaves at least three letters behind.
pub const PREFIXES: &[Affix] = &[
    affix("كال", 6),
    affix("بال", 6),
    affix("ولل", 6),
    affix("وال", 6),
    affix("ال", 5),
    affix("لل", 5),
];

/// Three-letter then two-letter pronominal and plural suffixes.
pub const SUFFIXES: &[Affix] = &[
    affix("تمل", 6),
    affix("همل", 6),
    affix("تان", 6),
    affix("تين", 6),
    affix("كمل", 6),
    affix("ون", 5),
    affix("ات", 5),
    affix("ان", 5),
    affix("ين", 5),
    affix("تن", 5),
    affix("كم", 5),
    affix("هن", 5),
    affix("نا", 5),
    affix("يا", 5),
    affix("ها", 5),
    affix("تم", 5),
    affix("كن", 5),
    affix("ني", 5),
    affix("وا", 5),
    affix("ما", 5),
    affix("هم", 5),
];

/// Single letters shed when a template does not apply.
pub const SHORT_PREFIXES: &[char] = &['ل', 'ب', 'ف', 'س', 'و', 'ي', 'ت', 'ن', 'ا'];
pub const SHORT_SUFFIXES: &[char] = &['ة', 'ه', 'ي', 'ك', 'ت', 'ا', 'ن'];

/// A positional test inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The letter at this position is one of these
    Is(usize, &'static str),
    /// The letters at both positions are the same (doubled radical)
    Repeat(usize, usize),
}

impl Slot {
    fn holds(&self, letters: &[char]) -> bool {
        match *self {
            Slot::Is(pos, allowed) => letters
                .get(pos)
                .map_or(false, |c| allowed.contains(*c)),
            Slot::Repeat(a, b) => match (letters.get(a), letters.get(b)) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

/// A morphological template for words of one length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub when: &'static [Slot],
    pub keep: &'static [usize],
}

impl Template {
    pub fn matches(&self, letters: &[char]) -> bool {
        self.when.iter().all(|slot| slot.holds(letters))
    }

    pub fn apply(&self, letters: &[char]) -> Vec<char> {
        self.keep.iter().filter_map(|&i| letters.get(i).copied()).collect()
    }
}

const fn template(name: &'static str, when: &'static [Slot], keep: &'static [usize]) -> Template {
    Template { name, when, keep }
}

use Slot::{Is, Repeat};

/// Four letters to a triliteral root.
pub const FOUR_TO_THREE: &[Template] = &[
    template("مفعل", &[Is(0, "م")], &[1, 2, 3]),
    template("فاعل", &[Is(1, "ا")], &[0, 2, 3]),
    template("فعال", &[Is(2, "اوي")], &[0, 1, 3]),
    template("فعلة", &[Is(3, "ةه")], &[0, 1, 2]),
];

/// Five letters to a triliteral root.
pub const FIVE_TO_THREE: &[Template] = &[
    template("افتعل", &[Is(2, "ات"), Is(0, "ا")], &[1, 3, 4]),
    template("مفعول", &[Is(3, "ايو"), Is(0, "م")], &[1, 2, 4]),
    template("مفعلة", &[Is(0, "اتم"), Is(4, "ة")], &[1, 2, 3]),
    template("مفتعل", &[Is(0, "ميت"), Is(2, "ت")], &[1, 3, 4]),
    template("مفاعل", &[Is(0, "مت"), Is(2, "ا")], &[1, 3, 4]),
    template("فعولة", &[Is(2, "او"), Is(4, "ة")], &[0, 1, 3]),
    template("انفعل", &[Is(0, "ام"), Is(1, "ن")], &[2, 3, 4]),
    template("افعال", &[Is(3, "ا"), Is(0, "ا")], &[1, 2, 4]),
    template("فعلان", &[Is(4, "ن"), Is(3, "ا")], &[0, 1, 2]),
    template("تفعيل", &[Is(3, "ي"), Is(0, "ت")], &[1, 2, 4]),
    template("فاعول", &[Is(3, "و"), Is(1, "ا")], &[0, 2, 4]),
    template("فواعل", &[Is(2, "ا"), Is(1, "و")], &[0, 3, 4]),
    template("فعائل", &[Is(3, "ئ"), Is(2, "ا")], &[0, 1, 4]),
    template("فاعلة", &[Is(4, "ة"), Is(1, "ا")], &[0, 2, 3]),
    template("فعالي", &[Is(4, "ي"), Is(2, "ا")], &[0, 1, 3]),
];

/// Five letters to a quadriliteral root.
pub const FIVE_TO_FOUR: &[Template] = &[
    template("تفعلل", &[Is(0, "اتم")], &[1, 2, 3, 4]),
    template("فعللة", &[Is(4, "ة")], &[0, 1, 2, 3]),
    template("فعالل", &[Is(2, "ا")], &[0, 1, 3, 4]),
];

/// Six letters to a triliteral root.
pub const SIX_TO_THREE: &[Template] = &[
    template("استفعل", &[Is(0, "ام"), Is(1, "س"), Is(2, "ت")], &[3, 4, 5]),
    template("مفعالة", &[Is(0, "م"), Is(3, "ا"), Is(5, "ة")], &[1, 2, 4]),
    template("افتعال", &[Is(0, "ا"), Is(2, "ت"), Is(4, "ا")], &[1, 3, 5]),
    template("افعوعل", &[Is(0, "ا"), Is(3, "و"), Repeat(2, 4)], &[1, 4, 5]),
    template("تفاعيل", &[Is(0, "ت"), Is(2, "ا"), Is(4, "ي")], &[1, 3, 5]),
];

/// Six letters to a quadriliteral root.
pub const SIX_TO_FOUR: &[Template] = &[
    template("افعلال", &[Is(0, "ا"), Is(4, "ا")], &[1, 2, 3, 5]),
    template("متفعلل", &[Is(0, "م"), Is(1, "ت")], &[2, 3, 4, 5]),
];

/// First template in `table` that fits `letters`.
pub fn first_match<'t>(table: &'t [Template], letters: &[char]) -> Option<&'t Template> {
    table.iter().find(|t| t.matches(letters))
}
