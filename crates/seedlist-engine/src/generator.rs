// Generator: top-level handle that runs the whole pipeline
//
// Owns the validated configuration, the prepared token list and the optional
// sequence model. Each run builds the five candidate streams, merges them
// through the aggregator and hands the capped list to the strength filter.
//
// Design notes:
// - A fresh `RunRng` is created per run from `config.seed`, so two runs of
//   the same seeded generator produce identical output.
// - The method stream owns its `RunRng` and draws lazily, token by token.
//   Tokens the aggregator never reaches consume no randomness.
// - Collaborator failures never abort a run. They are logged and returned
//   as `RunWarning`s alongside the result.

use seedlist_core::config::ENGINE_MIN_LENGTH;
use seedlist_core::{CollaboratorError, ConfigError, GenerationConfig, SeedToken};

use crate::aggregator::{Aggregate, AggregateReport, CandidateStream, StreamSource, aggregate};
use crate::augmentation::augment;
use crate::collaborator::{SequenceModel, StrengthJudge};
use crate::estimator::{SizeEstimate, estimate_tokens};
use crate::filter::filter;
use crate::pairwise::combine_pairs;
use crate::patterns::{cross_token_patterns, token_transforms};
use crate::rng::RunRng;
use crate::sanitizer::prepare_tokens;

/// A non-fatal problem encountered during a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunWarning {
    /// `use_model` was set but no model is attached to the generator.
    #[error("model stream requested but no sequence model is attached")]
    ModelUnavailable,

    /// The model failed; its stream was skipped.
    #[error("model stream skipped: {0}")]
    ModelFailed(CollaboratorError),

    /// The model returned nothing.
    #[error("model proposed no candidates")]
    ModelEmpty,

    /// The judge failed on some candidates; those candidates were dropped.
    #[error("strength judge failed on {count} candidate(s), first error: {first}")]
    JudgeFailures {
        count: usize,
        first: CollaboratorError,
    },
}

/// Everything one run produced.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Final password list, in priority order.
    pub passwords: Vec<String>,
    /// `true` when no token survived sanitization.
    pub empty_input: bool,
    /// Per-stream aggregation counters.
    pub aggregate: AggregateReport,
    /// Length of the capped list handed to the strength filter.
    pub candidates: usize,
    /// Candidates below the requested minimum length.
    pub too_short: usize,
    /// Candidates judged below the strength threshold.
    pub too_weak: usize,
    /// Candidates dropped because the judge failed.
    pub judge_failures: usize,
    pub warnings: Vec<RunWarning>,
}

impl GenerationReport {
    fn empty_input() -> Self {
        Self {
            empty_input: true,
            ..Self::default()
        }
    }
}

/// Top-level handle for password candidate generation.
///
/// ```ignore
/// let config = GenerationConfig::new(["John", "1990"]).with_max_count(5000);
/// let generator = Generator::new(config)?;
/// let report = generator.run(&|password: &str| -> u8 { score(password) });
/// ```
pub struct Generator {
    config: GenerationConfig,
    tokens: Vec<SeedToken>,
    model: Option<Box<dyn SequenceModel>>,
}

impl Generator {
    /// Validate `config` and sanitize its tokens.
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tokens = prepare_tokens(&config.tokens);
        tracing::debug!(
            raw = config.tokens.len(),
            usable = tokens.len(),
            method = config.method.name(),
            "prepared seed tokens"
        );
        Ok(Self {
            config,
            tokens,
            model: None,
        })
    }

    /// Attach the sequence model consulted when `use_model` is set.
    pub fn with_model(mut self, model: Box<dyn SequenceModel>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Tokens left after sanitization, in input order.
    pub fn tokens(&self) -> &[SeedToken] {
        &self.tokens
    }

    /// Closed-form upper bound on the candidate count, per stream.
    pub fn estimate(&self) -> SizeEstimate {
        estimate_tokens(&self.tokens, &self.config)
    }

    /// The capped, deduplicated candidate list before strength filtering.
    ///
    /// Warnings are logged but not returned; use [`run`](Self::run) for the
    /// full report.
    pub fn candidates(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        self.collect(&mut warnings).candidates
    }

    /// Run the whole pipeline and score the result with `judge`.
    pub fn run<J>(&self, judge: &J) -> GenerationReport
    where
        J: StrengthJudge + ?Sized,
    {
        if self.tokens.is_empty() {
            tracing::info!("no usable seed tokens; nothing to generate");
            return GenerationReport::empty_input();
        }

        let mut warnings = Vec::new();
        let Aggregate { candidates, report } = self.collect(&mut warnings);
        let candidate_count = candidates.len();

        let outcome = filter(candidates, self.config.effective_min_length(), judge);
        if let Some(first) = outcome.first_failure {
            let warning = RunWarning::JudgeFailures {
                count: outcome.judge_failures,
                first,
            };
            tracing::warn!("{warning}");
            warnings.push(warning);
        }

        tracing::info!(
            candidates = candidate_count,
            kept = outcome.kept.len(),
            too_weak = outcome.too_weak,
            saturated = report.saturated,
            "generation finished"
        );

        GenerationReport {
            passwords: outcome.kept,
            empty_input: false,
            aggregate: report,
            candidates: candidate_count,
            too_short: outcome.too_short,
            too_weak: outcome.too_weak,
            judge_failures: outcome.judge_failures,
            warnings,
        }
    }

    fn collect(&self, warnings: &mut Vec<RunWarning>) -> Aggregate {
        let streams = self.streams(warnings);
        aggregate(streams, self.config.max_count, ENGINE_MIN_LENGTH)
    }

    /// The five candidate streams of one run, in priority order.
    fn streams(&self, warnings: &mut Vec<RunWarning>) -> Vec<CandidateStream<'_>> {
        let mut rng = RunRng::new(self.config.seed);
        let method = self.config.method.clone();
        let method_stream = self
            .tokens
            .iter()
            .flat_map(move |token| augment(token, &method, &mut rng));

        let mut streams = vec![
            CandidateStream::new(StreamSource::MethodTransforms, method_stream),
            CandidateStream::new(
                StreamSource::CrossTokenPatterns,
                cross_token_patterns(&self.tokens),
            ),
        ];
        if let Some(proposals) = self.model_proposals(warnings) {
            streams.push(CandidateStream::new(StreamSource::ExternalModel, proposals));
        }
        streams.push(CandidateStream::new(
            StreamSource::Pairwise,
            combine_pairs(&self.tokens),
        ));
        streams.push(CandidateStream::new(
            StreamSource::TokenTransforms,
            token_transforms(&self.tokens),
        ));
        streams
    }

    /// Ask the model for proposals seeded with the first token. Any failure
    /// becomes a warning and the stream is skipped.
    fn model_proposals(&self, warnings: &mut Vec<RunWarning>) -> Option<Vec<String>> {
        if !self.config.use_model {
            return None;
        }
        let seed = self.tokens.first()?;
        let Some(model) = self.model.as_ref() else {
            tracing::warn!("model stream requested but no sequence model is attached");
            warnings.push(RunWarning::ModelUnavailable);
            return None;
        };

        match model.propose(seed, self.config.model_count, self.config.model_max_length) {
            Ok(mut proposals) if !proposals.is_empty() => {
                proposals.truncate(self.config.model_count);
                tracing::debug!(count = proposals.len(), "model proposals");
                Some(proposals)
            }
            Ok(_) => {
                tracing::warn!("model proposed no candidates");
                warnings.push(RunWarning::ModelEmpty);
                None
            }
            Err(err) => {
                tracing::warn!(%err, "model stream skipped");
                warnings.push(RunWarning::ModelFailed(err));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborator::FixedModel;
    use seedlist_core::TransformMethod;

    fn always_strong(_: &str) -> u8 {
        4
    }

    struct BrokenModel;

    impl SequenceModel for BrokenModel {
        fn propose(&self, _: &str, _: usize, _: usize) -> Result<Vec<String>, CollaboratorError> {
            Err(CollaboratorError::Model("weights missing".into()))
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let config = GenerationConfig::new(["john"]).with_max_count(0);
        assert_eq!(Generator::new(config).err(), Some(ConfigError::ZeroMaxCount));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let generator = Generator::new(GenerationConfig::new(["<NAME>", "!!!"])).unwrap();
        let report = generator.run(&always_strong);
        assert!(report.empty_input);
        assert!(report.passwords.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn model_proposals_take_their_priority_slot() {
        let config = GenerationConfig::new(["zq"])
            .with_method(TransformMethod::Custom("[word]".into()))
            .with_model(2, 16);
        let model = FixedModel::new(["modelcand1", "modelcand2", "modelcand3"]);
        let generator = Generator::new(config).unwrap().with_model(Box::new(model));
        let report = generator.run(&always_strong);
        let model_stats = report.aggregate.stats(StreamSource::ExternalModel);
        assert_eq!(model_stats.pulled, 2);
        // every other stream is below the length floor for a two-letter token
        assert_eq!(report.passwords, ["modelcand1", "modelcand2"]);
    }

    #[test]
    fn model_failure_is_isolated() {
        let config = GenerationConfig::new(["john", "smith"]).with_model(5, 16);
        let generator = Generator::new(config).unwrap().with_model(Box::new(BrokenModel));
        let report = generator.run(&always_strong);
        assert!(!report.passwords.is_empty());
        assert_eq!(
            report.warnings,
            [RunWarning::ModelFailed(CollaboratorError::Model(
                "weights missing".into()
            ))]
        );
        assert_eq!(report.aggregate.stats(StreamSource::ExternalModel).pulled, 0);
    }

    #[test]
    fn missing_model_is_a_warning() {
        let config = GenerationConfig::new(["john"]).with_model(5, 16);
        let report = Generator::new(config).unwrap().run(&always_strong);
        assert_eq!(report.warnings, [RunWarning::ModelUnavailable]);
        assert!(!report.passwords.is_empty());
    }

    #[test]
    fn empty_model_output_is_a_warning() {
        let config = GenerationConfig::new(["john"]).with_model(5, 16);
        let generator = Generator::new(config)
            .unwrap()
            .with_model(Box::new(FixedModel::default()));
        let report = generator.run(&always_strong);
        assert_eq!(report.warnings, [RunWarning::ModelEmpty]);
    }

    #[test]
    fn judge_failures_are_aggregated_into_one_warning() {
        struct OddJudge;
        impl StrengthJudge for OddJudge {
            fn judge(&self, password: &str) -> Result<u8, CollaboratorError> {
                if password.len() % 2 == 1 {
                    Err(CollaboratorError::Judge("odd".into()))
                } else {
                    Ok(4)
                }
            }
        }
        let config = GenerationConfig::new(["john", "1990"]).with_max_count(2000);
        let report = Generator::new(config).unwrap().run(&OddJudge);
        assert!(report.judge_failures > 0);
        assert!(report.passwords.iter().all(|p| p.len() % 2 == 0));
        let judge_warnings = report
            .warnings
            .iter()
            .filter(|w| matches!(w, RunWarning::JudgeFailures { .. }))
            .count();
        assert_eq!(judge_warnings, 1);
        assert_eq!(
            report.passwords.len() + report.judge_failures + report.too_weak + report.too_short,
            report.candidates
        );
    }

    #[test]
    fn estimate_bounds_candidates() {
        let config = GenerationConfig::new(["Kim", "2001"])
            .with_method(TransformMethod::Complex)
            .with_max_count(1_000_000);
        let generator = Generator::new(config).unwrap();
        let candidates = generator.candidates();
        let estimate = generator.estimate();
        assert!(candidates.len() as u64 <= estimate.bounded());
        assert!(!candidates.is_empty());
    }
}
