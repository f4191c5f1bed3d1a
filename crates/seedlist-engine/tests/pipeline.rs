//! End-to-end tests for the generation pipeline.
//!
//! Run: cargo test -p seedlist-engine --test pipeline

use std::collections::HashSet;

use seedlist_core::{CollaboratorError, GenerationConfig, TransformMethod};
use seedlist_engine::collaborator::FixedModel;
use seedlist_engine::substitution::leet_variants;
use seedlist_engine::{
    Generator, RunWarning, SequenceModel, StreamSource, StrengthJudge, estimate_size,
};

// ---------------------------------------------------------------------------
// Judges
// ---------------------------------------------------------------------------

fn always_strong(_: &str) -> u8 {
    4
}

/// Strong iff the candidate mixes letters and digits.
fn mixed(password: &str) -> u8 {
    let letters = password.chars().any(char::is_alphabetic);
    let digits = password.chars().any(|c| c.is_ascii_digit());
    if letters && digits { 3 } else { 1 }
}

fn run(config: GenerationConfig) -> Vec<String> {
    Generator::new(config).unwrap().run(&always_strong).passwords
}

// ---------------------------------------------------------------------------
// Determinism and dedup
// ---------------------------------------------------------------------------

#[test]
fn deterministic_methods_repeat_exactly() {
    for method in [
        TransformMethod::Basic,
        TransformMethod::Advanced,
        TransformMethod::Complex,
        TransformMethod::Leet,
    ] {
        let config = GenerationConfig::new(["Maria", "Rossi", "1985"])
            .with_method(method.clone())
            .with_max_count(5000);
        assert_eq!(run(config.clone()), run(config), "{method} is not deterministic");
    }
}

#[test]
fn seeded_random_and_custom_repeat_exactly() {
    let random = GenerationConfig::new(["anna", "berg", "london", "2001"])
        .with_method(TransformMethod::Random)
        .with_max_count(20_000)
        .with_seed(7);
    assert_eq!(run(random.clone()), run(random));

    let custom = GenerationConfig::new(["anna", "berg"])
        .with_method(TransformMethod::Custom("[name]_[word][number][symbol]".into()))
        .with_seed(7);
    let first = run(custom.clone());
    assert_eq!(first, run(custom));
    assert!(first.iter().any(|p| p.starts_with("Anna_anna")));
}

#[test]
fn output_has_no_duplicates() {
    let config = GenerationConfig::new(["sam", "sam", "Sam", "2020"])
        .with_method(TransformMethod::Leet)
        .with_max_count(50_000);
    let out = run(config);
    let unique: HashSet<&String> = out.iter().collect();
    assert_eq!(unique.len(), out.len());
}

// ---------------------------------------------------------------------------
// Cap, floor and filter ordering
// ---------------------------------------------------------------------------

#[test]
fn truncation_happens_before_filtering() {
    // The first ten candidates are "John1960".."John1969"; none contains '!'.
    let config = GenerationConfig::new(["John"]).with_max_count(10);
    let generator = Generator::new(config).unwrap();
    let bang = |p: &str| -> u8 { if p.contains('!') { 4 } else { 0 } };
    let report = generator.run(&bang);
    assert_eq!(report.candidates, 10);
    assert!(report.passwords.is_empty());
    assert_eq!(report.too_weak, 10);
}

#[test]
fn filter_is_applied_to_the_capped_list_in_order() {
    let config = GenerationConfig::new(["Lena", "Ek", "1999"]).with_max_count(400);
    let generator = Generator::new(config).unwrap();
    let capped = generator.candidates();
    assert_eq!(capped.len(), 400);
    let expected: Vec<String> = capped.into_iter().filter(|p| mixed(p) >= 3).collect();
    assert_eq!(generator.run(&mixed).passwords, expected);
}

#[test]
fn length_floor_is_max_of_eight_and_min_length() {
    let tokens = ["al", "bo", "cy"];
    let loose = run(GenerationConfig::new(tokens).with_min_length(3));
    assert!(!loose.is_empty());
    assert!(loose.iter().all(|p| p.chars().count() >= 8));

    let strict = run(GenerationConfig::new(tokens).with_min_length(12));
    assert!(!strict.is_empty());
    assert!(strict.iter().all(|p| p.chars().count() >= 12));
}

// ---------------------------------------------------------------------------
// Cardinalities
// ---------------------------------------------------------------------------

#[test]
fn leet_covers_all_27_variants_of_pass() {
    let variants = leet_variants("pass");
    assert_eq!(variants.len(), 27);
    let out: HashSet<String> = run(
        GenerationConfig::new(["pass"])
            .with_method(TransformMethod::Leet)
            .with_max_count(1_000_000),
    )
    .into_iter()
    .collect();
    for variant in &variants {
        assert!(out.contains(&format!("{variant}1990")), "missing {variant}1990");
    }
}

#[test]
fn three_tokens_give_21_pairwise_candidates() {
    let config = GenerationConfig::new(["alpha", "beta", "gamma"])
        .with_method(TransformMethod::Custom("[word]".into()))
        .with_max_count(1_000_000);
    let report = Generator::new(config).unwrap().run(&always_strong);
    let pairwise = report.aggregate.stats(StreamSource::Pairwise);
    assert_eq!(pairwise.pulled, 21);
    assert!(!report.aggregate.saturated);
}

#[test]
fn estimate_bounds_every_method() {
    let tokens = ["Eva", "Lind", "1977", "<PHONE>"];
    for method in [
        TransformMethod::Basic,
        TransformMethod::Advanced,
        TransformMethod::Complex,
        TransformMethod::Leet,
        TransformMethod::Random,
        TransformMethod::Custom("[word][number]".into()),
    ] {
        let config = GenerationConfig::new(tokens)
            .with_method(method.clone())
            .with_max_count(10_000_000)
            .with_seed(3);
        let generator = Generator::new(config.clone()).unwrap();
        let produced = generator.candidates().len() as u64;
        assert!(produced <= estimate_size(&config), "{method}: {produced}");
        assert!(produced <= generator.estimate().bounded());
    }
}

#[test]
fn saturated_run_fills_the_cap_exactly() {
    let config = GenerationConfig::new(["Oskar", "1968"])
        .with_method(TransformMethod::Advanced)
        .with_max_count(777);
    let generator = Generator::new(config).unwrap();
    let report = generator.run(&always_strong);
    assert!(report.aggregate.saturated);
    assert_eq!(report.candidates, 777);
    assert_eq!(report.passwords.len(), 777);
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[test]
fn john_1990_basic_scenario() {
    let config = GenerationConfig::new(["John", "1990"]).with_max_count(100_000);
    let report = Generator::new(config).unwrap().run(&mixed);
    let out = &report.passwords;

    assert_eq!(out.first().map(String::as_str), Some("John1960"));
    for expected in ["John1990", "john1990", "JOHN1990", "John1990abc", "John_1990", "John-1990"] {
        assert!(out.iter().any(|p| p == expected), "missing {expected}");
    }
    // shorter than eight characters
    assert!(!out.iter().any(|p| p == "John123"));
    // no digits: rejected by the judge
    assert!(!out.iter().any(|p| p == "Johnpassword"));
    assert!(out.iter().all(|p| p.chars().count() >= 8));

    let position = |needle: &str| out.iter().position(|p| p == needle);
    // method transforms precede cross-token patterns
    assert!(position("john2023").unwrap() < position("John_1990").unwrap());
    assert!(report.warnings.is_empty());
    assert!(!report.empty_input);
}

/// Strong iff at least ten characters mixing letters and digits.
fn long_and_mixed(password: &str) -> u8 {
    if password.chars().count() >= 10 && mixed(password) >= 3 { 3 } else { 1 }
}

#[test]
fn john_1990_capped_at_500() {
    let config = GenerationConfig::new(["John", "1990"])
        .with_method(TransformMethod::Basic)
        .with_max_count(500)
        .with_min_length(8);
    let report = Generator::new(config).unwrap().run(&long_and_mixed);
    let out = &report.passwords;

    assert_eq!(report.candidates, 500);
    assert!(!out.is_empty());
    assert!(out.len() <= 500);
    let unique: HashSet<&String> = out.iter().collect();
    assert_eq!(unique.len(), out.len());
    assert!(out.iter().all(|p| p.chars().count() >= 10), "{out:?}");

    // the bare 8-character year forms fill the cap but fail the judge
    assert!(!out.iter().any(|p| p == "John1990"));
    assert_eq!(out.first().map(String::as_str), Some("John1960123"));
    for expected in ["John1960123", "John1960password", "John1961pass"] {
        assert!(out.iter().any(|p| p == expected), "missing {expected}");
    }
}

// ---------------------------------------------------------------------------
// Collaborator isolation
// ---------------------------------------------------------------------------

struct Unreachable;

impl SequenceModel for Unreachable {
    fn propose(&self, _: &str, _: usize, _: usize) -> Result<Vec<String>, CollaboratorError> {
        Err(CollaboratorError::Model("connection refused".into()))
    }
}

struct PickyJudge;

impl StrengthJudge for PickyJudge {
    fn judge(&self, password: &str) -> Result<u8, CollaboratorError> {
        if password.contains('@') {
            Err(CollaboratorError::Judge(format!("unsupported glyph in {password}")))
        } else {
            Ok(4)
        }
    }
}

#[test]
fn collaborator_failures_never_abort_a_run() {
    let config = GenerationConfig::new(["alice", "wonder"])
        .with_method(TransformMethod::Leet)
        .with_model(10, 16)
        .with_max_count(5000);
    let report = Generator::new(config)
        .unwrap()
        .with_model(Box::new(Unreachable))
        .run(&PickyJudge);

    assert!(!report.passwords.is_empty());
    assert!(report.passwords.iter().all(|p| !p.contains('@')));
    assert_eq!(report.warnings.len(), 2);
    assert!(matches!(report.warnings[0], RunWarning::ModelFailed(_)));
    assert!(matches!(
        report.warnings[1],
        RunWarning::JudgeFailures { count, .. } if count == report.judge_failures
    ));
}

#[test]
fn model_candidates_rank_after_patterns_and_before_pairs() {
    let config = GenerationConfig::new(["ab", "cd"])
        .with_method(TransformMethod::Custom("[word]".into()))
        .with_model(1, 16);
    let model = FixedModel::new(["proposal-one", "proposal-two"]);
    let report = Generator::new(config)
        .unwrap()
        .with_model(Box::new(model))
        .run(&always_strong);
    // patterns and pairs of two-letter tokens never reach eight characters
    assert_eq!(report.passwords, ["proposal-one"]);
}
