// Strength filter: keep candidates that are long enough and judged strong

use seedlist_core::CollaboratorError;
use seedlist_core::config::{MAX_STRENGTH_SCORE, STRENGTH_THRESHOLD};
use serde::Serialize;

use crate::collaborator::StrengthJudge;

/// Result of [`filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Surviving candidates, in input order.
    pub kept: Vec<String>,
    /// Candidates shorter than the requested minimum length.
    pub too_short: usize,
    /// Candidates the judge scored below the threshold.
    pub too_weak: usize,
    /// Candidates dropped because the judge failed on them.
    pub judge_failures: usize,
    /// The first judge failure, kept for the run report.
    #[serde(skip)]
    pub first_failure: Option<CollaboratorError>,
}

/// Keep every candidate with at least `min_length` characters that `judge`
/// scores at or above [`STRENGTH_THRESHOLD`].
///
/// The length check runs first, so the judge never sees a candidate that
/// would be dropped anyway. A judge error, or a score above
/// [`MAX_STRENGTH_SCORE`], drops only that candidate and counts as a failure.
pub fn filter<J>(candidates: Vec<String>, min_length: usize, judge: &J) -> FilterOutcome
where
    J: StrengthJudge + ?Sized,
{
    let mut outcome = FilterOutcome {
        kept: Vec::with_capacity(candidates.len()),
        ..FilterOutcome::default()
    };

    for candidate in candidates {
        if candidate.chars().count() < min_length {
            outcome.too_short += 1;
            continue;
        }
        let verdict = judge.judge(&candidate).and_then(|score| {
            if score > MAX_STRENGTH_SCORE {
                Err(CollaboratorError::Judge(format!(
                    "score {score} for {candidate:?} is outside 0..={MAX_STRENGTH_SCORE}"
                )))
            } else {
                Ok(score)
            }
        });
        match verdict {
            Ok(score) if score >= STRENGTH_THRESHOLD => outcome.kept.push(candidate),
            Ok(_) => outcome.too_weak += 1,
            Err(err) => {
                outcome.judge_failures += 1;
                outcome.first_failure.get_or_insert(err);
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_strong_and_long_enough_in_order() {
        let judge = |p: &str| -> u8 { if p.contains('!') { 4 } else { 1 } };
        let out = filter(owned(&["abcdefg!", "abcdefgh", "ab!", "zzzzzzz!"]), 8, &judge);
        assert_eq!(out.kept, ["abcdefg!", "zzzzzzz!"]);
        assert_eq!(out.too_short, 1);
        assert_eq!(out.too_weak, 1);
    }

    #[test]
    fn threshold_is_inclusive() {
        let judge = |p: &str| -> u8 { p.len() as u8 - 8 };
        let out = filter(owned(&["aaaaaaaaa", "aaaaaaaaaa", "aaaaaaaaaaa"]), 8, &judge);
        assert_eq!(out.kept, ["aaaaaaaaaaa"]);
    }

    #[test]
    fn length_check_runs_before_judge() {
        let calls = Cell::new(0);
        let judge = |_: &str| -> u8 {
            calls.set(calls.get() + 1);
            4
        };
        let out = filter(owned(&["short", "long enough"]), 8, &judge);
        assert_eq!(out.kept, ["long enough"]);
        assert_eq!(calls.get(), 1);
    }

    struct Flaky;

    impl StrengthJudge for Flaky {
        fn judge(&self, password: &str) -> Result<u8, CollaboratorError> {
            if password.starts_with('x') {
                Err(CollaboratorError::Judge(format!("cannot score {password}")))
            } else {
                Ok(4)
            }
        }
    }

    #[test]
    fn judge_failures_drop_only_that_candidate() {
        let out = filter(owned(&["xaaaaaaa", "baaaaaaa", "xbbbbbbb"]), 8, &Flaky);
        assert_eq!(out.kept, ["baaaaaaa"]);
        assert_eq!(out.judge_failures, 2);
        assert_eq!(
            out.first_failure,
            Some(CollaboratorError::Judge("cannot score xaaaaaaa".into()))
        );
    }

    #[test]
    fn out_of_range_scores_are_judge_failures() {
        let judge = |p: &str| -> u8 { if p.starts_with('b') { 200 } else { 4 } };
        let out = filter(owned(&["aaaaaaaa", "bbbbbbbb", "cccccccc"]), 8, &judge);
        assert_eq!(out.kept, ["aaaaaaaa", "cccccccc"]);
        assert_eq!(out.too_weak, 0);
        assert_eq!(out.judge_failures, 1);
        assert!(matches!(out.first_failure, Some(CollaboratorError::Judge(_))));
    }

    #[test]
    fn dyn_judges_are_accepted() {
        let judge: &dyn StrengthJudge = &Flaky;
        let out = filter(owned(&["aaaaaaaa"]), 8, judge);
        assert_eq!(out.kept.len(), 1);
    }
}
