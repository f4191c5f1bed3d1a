// Substitution engine: leetspeak expansion and single-glyph power sets
//
// Two distinct algorithms live here:
//
//   - `LeetVariants` branches at every substitutable position once per
//     registered glyph plus once for the original character, giving
//     prod(r_i + 1) outputs for a token.
//   - `PowersetVariants` chooses, for every subset of substitutable
//     positions, to apply the single glyph of `SIMPLE_SUBSTITUTIONS`,
//     giving 2^k outputs.
//
// Neither bounds its output. Growth is multiplicative in the number of
// substitutable characters, so callers that accept arbitrary input should
// cap token length before expanding; the aggregator is what bounds the run.

use crate::tables::{LEET_TABLE, SubstitutionTable, simple_substitution};

// ---------------------------------------------------------------------------
// Leet expansion
// ---------------------------------------------------------------------------

/// Lazy depth-first leetspeak expansion of one token.
///
/// The expansion uses an explicit worklist instead of recursion, so stack
/// depth does not grow with token length, and callers can stop pulling at any
/// point. Output order matches a recursive expansion that tries each glyph in
/// table order before keeping the original character.
///
/// Characters without a table entry pass through unchanged; so does the
/// original character on the "keep" branch of a substitutable position.
/// Duplicate outputs (two glyphs producing the same string) are not removed.
pub struct LeetVariants {
    chars: Vec<char>,
    table: &'static SubstitutionTable,
    /// Pending branches: (next position, prefix built so far).
    stack: Vec<(usize, String)>,
}

impl LeetVariants {
    pub fn new(token: &str) -> Self {
        Self::with_table(token, &LEET_TABLE)
    }

    pub fn with_table(token: &str, table: &'static SubstitutionTable) -> Self {
        Self {
            chars: token.chars().collect(),
            table,
            stack: vec![(0, String::with_capacity(token.len()))],
        }
    }
}

impl Iterator for LeetVariants {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((mut pos, mut prefix)) = self.stack.pop() {
            // Copy through the run of characters that have no replacement.
            while pos < self.chars.len() && self.table.lookup(self.chars[pos]).is_empty() {
                prefix.push(self.chars[pos]);
                pos += 1;
            }
            if pos == self.chars.len() {
                return Some(prefix);
            }

            let original = self.chars[pos];
            let glyphs = self.table.lookup(original);

            // LIFO: push the "keep" branch first so it is expanded last.
            let mut keep = prefix.clone();
            keep.push(original);
            self.stack.push((pos + 1, keep));
            for glyph in glyphs.iter().rev() {
                let mut branch = prefix.clone();
                branch.push_str(glyph);
                self.stack.push((pos + 1, branch));
            }
        }
        None
    }
}

/// Every leetspeak variant of `token`, duplicates included.
pub fn leet_variants(token: &str) -> Vec<String> {
    LeetVariants::new(token).collect()
}

/// Number of strings [`leet_variants`] yields for `token`, computed without
/// expanding: the product of `alternatives + 1` over substitutable positions.
/// Saturates at `u64::MAX`.
pub fn leet_variant_count(token: &str) -> u64 {
    token
        .chars()
        .map(|c| LEET_TABLE.alternatives(c) as u64 + 1)
        .fold(1u64, u64::saturating_mul)
}

// ---------------------------------------------------------------------------
// Single-glyph power set
// ---------------------------------------------------------------------------

/// Lazy power-set substitution over the lowercased token.
///
/// Each substitutable position is a binary digit; the iterator counts from
/// "nothing substituted" upward, with the first substitutable position as the
/// least significant digit. A `Vec<bool>` counter is used so tokens with more
/// than 64 substitutable positions do not overflow.
pub struct PowersetVariants {
    chars: Vec<char>,
    positions: Vec<usize>,
    mask: Vec<bool>,
    exhausted: bool,
}

impl PowersetVariants {
    pub fn new(token: &str) -> Self {
        let chars: Vec<char> = token.to_lowercase().chars().collect();
        let positions: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| simple_substitution(**c).is_some())
            .map(|(i, _)| i)
            .collect();
        let mask = vec![false; positions.len()];
        Self {
            chars,
            positions,
            mask,
            exhausted: false,
        }
    }

    fn render(&self) -> String {
        let mut chars = self.chars.clone();
        for (&pos, _) in self.positions.iter().zip(&self.mask).filter(|(_, set)| **set) {
            if let Some(glyph) = simple_substitution(chars[pos]) {
                chars[pos] = glyph;
            }
        }
        chars.into_iter().collect()
    }

    /// Binary increment; marks the iterator exhausted on overflow.
    fn advance(&mut self) {
        for bit in self.mask.iter_mut() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return;
            }
        }
        self.exhausted = true;
    }
}

impl Iterator for PowersetVariants {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let out = self.render();
        self.advance();
        Some(out)
    }
}

/// Every power-set substitution variant of `token` (`2^k` strings).
pub fn powerset_variants(token: &str) -> Vec<String> {
    PowersetVariants::new(token).collect()
}

/// Number of single-table substitutable positions in `token`.
pub fn substitutable_positions(token: &str) -> usize {
    token
        .to_lowercase()
        .chars()
        .filter(|&c| simple_substitution(c).is_some())
        .count()
}

/// `2^k` for the power set of `token`, saturating at `u64::MAX`.
pub fn powerset_variant_count(token: &str) -> u64 {
    let k = substitutable_positions(token);
    u32::try_from(k)
        .ok()
        .and_then(|k| 1u64.checked_shl(k))
        .unwrap_or(u64::MAX)
}
