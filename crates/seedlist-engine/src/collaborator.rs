// External collaborators: strength judgment and sequence proposal
//
// The engine never implements either itself. The command-line tools supply a
// heuristic judge and a character-level Markov model; tests supply closures.

use seedlist_core::CollaboratorError;

/// Scores a candidate's guess resistance on a `0..=4` scale.
///
/// Scores of [`STRENGTH_THRESHOLD`](seedlist_core::config::STRENGTH_THRESHOLD)
/// and above pass the strength filter. An error drops that one candidate.
pub trait StrengthJudge {
    fn judge(&self, password: &str) -> Result<u8, CollaboratorError>;
}

/// Any infallible scoring function is a judge.
impl<F> StrengthJudge for F
where
    F: Fn(&str) -> u8,
{
    fn judge(&self, password: &str) -> Result<u8, CollaboratorError> {
        Ok(self(password))
    }
}

/// Proposes password-like strings continuing from a seed.
///
/// Implementations must return at most `count` strings, each at most
/// `max_length` characters; the engine truncates the list to `count` but
/// does not check lengths beyond the usual floor.
pub trait SequenceModel {
    fn propose(
        &self,
        seed: &str,
        count: usize,
        max_length: usize,
    ) -> Result<Vec<String>, CollaboratorError>;
}

impl<M: SequenceModel + ?Sized> SequenceModel for Box<M> {
    fn propose(
        &self,
        seed: &str,
        count: usize,
        max_length: usize,
    ) -> Result<Vec<String>, CollaboratorError> {
        (**self).propose(seed, count, max_length)
    }
}

/// A model that always proposes the same list. Useful as a fixture and for
/// replaying a previously sampled batch.
#[derive(Debug, Clone, Default)]
pub struct FixedModel {
    proposals: Vec<String>,
}

impl FixedModel {
    pub fn new<I, S>(proposals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            proposals: proposals.into_iter().map(Into::into).collect(),
        }
    }
}

impl SequenceModel for FixedModel {
    fn propose(
        &self,
        _seed: &str,
        count: usize,
        _max_length: usize,
    ) -> Result<Vec<String>, CollaboratorError> {
        Ok(self.proposals.iter().take(count).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl StrengthJudge for Failing {
        fn judge(&self, _: &str) -> Result<u8, CollaboratorError> {
            Err(CollaboratorError::Judge("offline".into()))
        }
    }

    #[test]
    fn closures_are_judges() {
        let judge = |p: &str| -> u8 { if p.len() > 3 { 4 } else { 0 } };
        assert_eq!(judge.judge("abcd"), Ok(4));
        assert_eq!(judge.judge("ab"), Ok(0));
    }

    #[test]
    fn judge_errors_pass_through() {
        let judge: &dyn StrengthJudge = &Failing;
        assert!(matches!(judge.judge("x"), Err(CollaboratorError::Judge(_))));
    }

    #[test]
    fn fixed_model_honours_count() {
        let model: Box<dyn SequenceModel> = Box::new(FixedModel::new(["one", "two", "three"]));
        assert_eq!(model.propose("seed", 2, 16).unwrap(), ["one", "two"]);
        assert_eq!(model.propose("seed", 10, 16).unwrap().len(), 3);
    }
}
