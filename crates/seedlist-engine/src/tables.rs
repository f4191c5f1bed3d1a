// Fixed substitution tables and augmentation sets
//
// All tables are process-lifetime constants, shared by reference and never
// mutated. Their sizes feed the closed-form size estimator, so any change
// here changes the estimate as well.

use std::ops::RangeInclusive;

// =========================================================================
// Substitution tables
// =========================================================================

/// Mapping from a lowercase ASCII letter to one or more replacement glyphs.
pub struct SubstitutionTable {
    entries: &'static [(char, &'static [&'static str])],
}

impl SubstitutionTable {
    /// Replacement glyphs for `c` (case-insensitive), in table order.
    /// Empty when `c` has no registered replacement.
    pub fn lookup(&self, c: char) -> &'static [&'static str] {
        let lower = c.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(from, _)| *from == lower)
            .map(|(_, glyphs)| *glyphs)
            .unwrap_or(&[])
    }

    /// Number of alternatives registered for `c`.
    pub fn alternatives(&self, c: char) -> usize {
        self.lookup(c).len()
    }
}

/// Multi-alternative leetspeak table used by the `Leet` method.
pub static LEET_TABLE: SubstitutionTable = SubstitutionTable {
    entries: &[
        ('a', &["@", "4"]),
        ('e', &["3"]),
        ('i', &["1", "!"]),
        ('o', &["0"]),
        ('s', &["$", "5"]),
        ('t', &["7", "+"]),
        ('b', &["8"]),
        ('g', &["9"]),
        ('l', &["1"]),
        ('z', &["2"]),
        ('h', &["#"]),
        ('x', &["*"]),
        ('c', &["(", "{"]),
        ('n', &["^"]),
        ('w', &["uu", "vv"]),
        ('v', &["\\/"]),
        ('m', &["nn"]),
        ('k', &["|<"]),
        ('d', &["|)"]),
    ],
};

/// Single-alternative table used by the `Complex` power set and by the
/// cross-token patterns. Exactly one glyph per letter.
pub const SIMPLE_SUBSTITUTIONS: &[(char, char)] = &[
    ('a', '@'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '$'),
    ('t', '7'),
    ('b', '8'),
    ('g', '9'),
    ('l', '1'),
    ('z', '2'),
];

/// Prefix of [`SIMPLE_SUBSTITUTIONS`] used by the cross-token patterns
/// (vowels and `s` only).
pub const PATTERN_SUBSTITUTIONS: &[(char, char)] = SIMPLE_SUBSTITUTIONS.split_at(5).0;

/// The single glyph registered for `c` in [`SIMPLE_SUBSTITUTIONS`].
pub fn simple_substitution(c: char) -> Option<char> {
    let lower = c.to_ascii_lowercase();
    SIMPLE_SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|&(_, to)| to)
}

// =========================================================================
// Augmentation sets
// =========================================================================

/// The four read-only reference sets crossed with token variants.
pub struct AugmentationSets {
    years: RangeInclusive<u16>,
    pub common_numbers: &'static [&'static str],
    pub special_chars: &'static [char],
    pub contextual_suffixes: &'static [&'static str],
}

impl AugmentationSets {
    /// Years appended as suffixes, inclusive on both ends.
    pub fn years(&self) -> RangeInclusive<u16> {
        self.years.clone()
    }

    pub fn year_count(&self) -> u64 {
        u64::from(self.years.end() - self.years.start()) + 1
    }

    /// The special characters that wrap years in the `Advanced` recipe.
    pub fn year_wrapping_chars(&self) -> &'static [char] {
        &self.special_chars[..YEAR_WRAPPING_CHARS]
    }
}

/// Number of leading special characters used around years by `Advanced`.
const YEAR_WRAPPING_CHARS: usize = 4;

pub static AUGMENTATION: AugmentationSets = AugmentationSets {
    years: 1960..=2023,
    common_numbers: &["123", "1234", "12345", "111", "000", "666", "777", "888", "999"],
    special_chars: &['!', '@', '#', '$', '%', '&', '*', '?', '.', '-', '_', '+'],
    contextual_suffixes: &[
        "123", "1234", "12345", "abc", "xyz", "qwerty", "111", "000", "!@#", "$%^", "...",
        "___", "pass", "pwd", "password",
    ],
};

/// Number of two-digit indices (`00`..`99`) used by the `Advanced` recipe.
pub const ADVANCED_INDEX_COUNT: u8 = 100;

/// Number of numeric suffixes (`0`..`99`) used by the cross-token patterns.
pub const PATTERN_NUMBER_COUNT: u8 = 100;

/// Symbols drawn for the `[symbol]` placeholder of a custom pattern.
pub const CUSTOM_SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '&', '*', '?'];

/// Largest value drawn for the `[number]` placeholder of a custom pattern.
pub const CUSTOM_NUMBER_MAX: u16 = 999;
