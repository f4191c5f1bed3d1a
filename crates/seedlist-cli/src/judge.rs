// Heuristic strength judge: entropy estimate with pattern penalties
//
// Scores follow the usual 0..=4 guess-count bands:
//
//   score | estimated guesses
//   ------+------------------
//     0   | < 10^3
//     1   | < 10^6
//     2   | < 10^8
//     3   | < 10^10
//     4   | otherwise
//
// Guesses are estimated as 2^bits, where every character contributes
// log2(pool) bits, except characters that continue a repeat or an ASCII run
// (one bit each). A capital that is only the first letter does not widen the
// pool, and a trailing year or a well-known weak fragment is charged as a
// single dictionary lookup.

use seedlist_core::CollaboratorError;
use seedlist_core::case::{CaseType, detect_case};
use seedlist_core::character::{CharClass, char_class, is_sequential};
use seedlist_engine::StrengthJudge;

/// Bit thresholds for scores 1 through 4 (log2 of 10^3, 10^6, 10^8, 10^10).
const SCORE_BITS: [f64; 4] = [9.97, 19.93, 26.58, 33.22];

/// Fragments that appear in nearly every leaked password list.
const WEAK_FRAGMENTS: &[&str] = &[
    "password", "passwd", "qwerty", "123456", "letmein", "welcome", "iloveyou", "admin",
    "abc123", "111111", "monkey", "dragon",
];

/// Bits charged for a fragment found in [`WEAK_FRAGMENTS`].
const FRAGMENT_BITS: f64 = 4.0;

/// Bits charged for a trailing four-digit year (roughly 130 plausible years).
const YEAR_BITS: f64 = 7.0;

/// Offline strength judge used by the command-line tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicJudge;

impl HeuristicJudge {
    /// Estimated entropy of `password` in bits.
    pub fn entropy_bits(&self, password: &str) -> f64 {
        let chars: Vec<char> = password.chars().collect();
        if chars.is_empty() {
            return 0.0;
        }

        let mut covered = vec![false; chars.len()];
        let mut bits = 0.0;

        let lower: String = chars.iter().map(|c| c.to_ascii_lowercase()).collect();
        for &fragment in WEAK_FRAGMENTS {
            if let Some(byte_idx) = lower.find(fragment) {
                let start = lower[..byte_idx].chars().count();
                let end = (start + fragment.chars().count()).min(chars.len());
                if covered[start..end].iter().all(|c| !c) {
                    covered[start..end].fill(true);
                    bits += FRAGMENT_BITS;
                }
            }
        }

        if let Some(start) = trailing_year(&chars) {
            if covered[start..].iter().all(|c| !c) {
                covered[start..].fill(true);
                bits += YEAR_BITS;
            }
        }

        let per_char = pool_size(&chars, password).log2();
        for (i, &c) in chars.iter().enumerate() {
            if covered[i] {
                continue;
            }
            let predictable = i > 0 && (chars[i - 1] == c || is_sequential(chars[i - 1], c));
            bits += if predictable { 1.0 } else { per_char };
        }
        bits
    }

    /// Score `password` on the 0..=4 scale.
    pub fn score(&self, password: &str) -> u8 {
        let bits = self.entropy_bits(password);
        SCORE_BITS.iter().filter(|&&threshold| bits >= threshold).count() as u8
    }
}

impl StrengthJudge for HeuristicJudge {
    fn judge(&self, password: &str) -> Result<u8, CollaboratorError> {
        Ok(self.score(password))
    }
}

/// Alphabet size implied by the character classes present in `chars`.
fn pool_size(chars: &[char], password: &str) -> f64 {
    let mut classes: Vec<CharClass> = chars.iter().map(|&c| char_class(c)).collect();
    classes.sort();
    classes.dedup();

    // A leading capital on an otherwise lowercase word is the first thing
    // tried; it does not widen the pool.
    if detect_case(password) == CaseType::FirstUpper
        && chars.first().is_some_and(|c| c.is_ascii_uppercase())
    {
        classes.retain(|&class| class != CharClass::Upper);
        if !classes.contains(&CharClass::Lower) {
            classes.push(CharClass::Lower);
        }
    }

    let pool: u32 = classes.iter().map(|class| class.pool_size()).sum();
    f64::from(pool.max(2))
}

/// Start index of a four-digit year (1900..=2099) that ends the password.
fn trailing_year(chars: &[char]) -> Option<usize> {
    let start = chars.len().checked_sub(4)?;
    let tail: String = chars[start..].iter().collect();
    let year: u16 = tail.parse().ok()?;
    if (1900..=2099).contains(&year) && (start == 0 || !chars[start - 1].is_ascii_digit()) {
        Some(start)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(password: &str) -> u8 {
        HeuristicJudge.score(password)
    }

    #[test]
    fn empty_and_trivial_passwords_are_weak() {
        assert_eq!(score(""), 0);
        assert_eq!(score("aaaa"), 0);
        assert!(score("password") <= 1);
        assert!(score("12345678") <= 1);
    }

    #[test]
    fn name_and_year_is_middling() {
        let s = score("John1990");
        assert!((1..=3).contains(&s), "John1990 scored {s}");
    }

    #[test]
    fn long_mixed_passwords_are_strong() {
        assert_eq!(score("Tr0ub4dor&3xK!q"), 4);
        assert!(score("john_smith!42x") >= 3);
    }

    #[test]
    fn leading_capital_adds_little() {
        let lower = HeuristicJudge.entropy_bits("marianne");
        let capital = HeuristicJudge.entropy_bits("Marianne");
        assert!((capital - lower).abs() < 1e-9);
        assert!(HeuristicJudge.entropy_bits("mARianne") > lower);
    }

    #[test]
    fn runs_and_repeats_are_discounted() {
        assert!(
            HeuristicJudge.entropy_bits("abcdefgh") < HeuristicJudge.entropy_bits("qzmxnwbv")
        );
        assert!(
            HeuristicJudge.entropy_bits("zzzzzzzz") < HeuristicJudge.entropy_bits("qzmxnwbv")
        );
    }

    #[test]
    fn trailing_year_detection() {
        let chars: Vec<char> = "anna1987".chars().collect();
        assert_eq!(trailing_year(&chars), Some(4));
        let chars: Vec<char> = "anna31987".chars().collect();
        assert_eq!(trailing_year(&chars), None);
        let chars: Vec<char> = "anna2187".chars().collect();
        assert_eq!(trailing_year(&chars), None);
    }

    #[test]
    fn judge_trait_never_fails() {
        let judge: &dyn StrengthJudge = &HeuristicJudge;
        assert_eq!(judge.judge("x"), Ok(0));
    }
}
