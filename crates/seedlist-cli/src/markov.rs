// Character-level Markov model: the sequence model behind --use-model
//
// Trained on a password corpus (one password per line). Transitions are
// counted for every context length from 0 up to the model order, and
// sampling backs off to the longest context that was seen in training.
// Candidate lists per context keep first-seen order, so a seeded model
// samples reproducibly. A trained table can be saved as JSON and loaded
// again instead of retraining.

use std::cell::RefCell;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use hashbrown::HashMap;
use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use seedlist_core::CollaboratorError;
use seedlist_core::config::ENGINE_MIN_LENGTH;
use seedlist_engine::SequenceModel;

use crate::CliError;

/// Default context length in characters.
pub const DEFAULT_ORDER: usize = 3;

/// Size of the generated fallback corpus.
pub const RANDOM_CORPUS_SIZE: usize = 1000;

/// Length range of fallback corpus entries.
const RANDOM_LENGTHS: RangeInclusive<usize> = 8..=16;

/// Printable ASCII without space.
const PRINTABLE: RangeInclusive<u8> = 0x21..=0x7e;

/// End-of-password marker in the transition table.
const END: char = '\0';

/// On-disk form of a trained model. Contexts are sorted so the same
/// training data always saves to the same file.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    order: usize,
    transitions: Vec<(String, Vec<(char, u32)>)>,
}

/// Character-level Markov chain with back-off.
#[derive(Debug)]
pub struct MarkovModel {
    order: usize,
    transitions: HashMap<String, Vec<(char, u32)>>,
    rng: RefCell<ChaCha8Rng>,
}

impl MarkovModel {
    /// Train on `corpus`. `seed` fixes the sampling sequence; `None` seeds
    /// from OS entropy.
    pub fn train<I, S>(corpus: I, order: usize, seed: Option<u64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut transitions: HashMap<String, Vec<(char, u32)>> = HashMap::new();
        let mut trained = 0usize;

        for password in corpus {
            let chars: Vec<char> = password.as_ref().chars().collect();
            if chars.is_empty() {
                continue;
            }
            trained += 1;
            for i in 0..=chars.len() {
                let next = chars.get(i).copied().unwrap_or(END);
                for k in 0..=order.min(i) {
                    let context: String = chars[i - k..i].iter().collect();
                    let options = transitions.entry(context).or_default();
                    match options.iter_mut().find(|(c, _)| *c == next) {
                        Some((_, count)) => *count += 1,
                        None => options.push((next, 1)),
                    }
                }
            }
        }

        tracing::debug!(
            passwords = trained,
            contexts = transitions.len(),
            order,
            "trained markov model"
        );

        Self {
            order,
            transitions,
            rng: RefCell::new(sampling_rng(seed)),
        }
    }

    /// Train on the given dataset files, or on a random corpus when none is
    /// given or all are empty.
    pub fn from_datasets<P: AsRef<Path>>(
        paths: &[P],
        order: usize,
        seed: Option<u64>,
    ) -> Result<Self, CliError> {
        let mut corpus = load_datasets(paths)?;
        if corpus.is_empty() {
            tracing::info!("no dataset passwords; training on a random corpus");
            let mut rng = sampling_rng(seed);
            corpus = random_corpus(&mut rng, RANDOM_CORPUS_SIZE);
        }
        Ok(Self::train(&corpus, order, seed))
    }

    /// Load the model cached at `model_path`, or train one from `datasets`
    /// and save it there. Without a path the model is always trained.
    pub fn load_or_train<P: AsRef<Path>>(
        model_path: Option<&Path>,
        datasets: &[P],
        order: usize,
        seed: Option<u64>,
    ) -> Result<Self, CliError> {
        match model_path {
            Some(path) if path.is_file() => {
                if !datasets.is_empty() {
                    tracing::warn!(path = %path.display(), "using cached model; --datasets ignored");
                }
                Self::load(path, seed)
            }
            Some(path) => {
                let model = Self::from_datasets(datasets, order, seed)?;
                model.save(path)?;
                Ok(model)
            }
            None => Self::from_datasets(datasets, order, seed),
        }
    }

    /// Write the transition table to `path` as JSON.
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let mut transitions: Vec<(String, Vec<(char, u32)>)> = self
            .transitions
            .iter()
            .map(|(context, options)| (context.clone(), options.clone()))
            .collect();
        transitions.sort_by(|a, b| a.0.cmp(&b.0));
        let snapshot = Snapshot {
            order: self.order,
            transitions,
        };
        let json = serde_json::to_string(&snapshot).map_err(|source| CliError::Json {
            context: path.display().to_string(),
            source,
        })?;
        fs::write(path, json).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), contexts = snapshot.transitions.len(), "saved markov model");
        Ok(())
    }

    /// Read a model written by [`save`](Self::save). `seed` fixes sampling
    /// as in [`train`](Self::train).
    pub fn load(path: &Path, seed: Option<u64>) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot = serde_json::from_str(&text).map_err(|source| CliError::Json {
            context: path.display().to_string(),
            source,
        })?;
        let model = Self {
            order: snapshot.order,
            transitions: snapshot.transitions.into_iter().collect(),
            rng: RefCell::new(sampling_rng(seed)),
        };
        tracing::debug!(
            path = %path.display(),
            contexts = model.transitions.len(),
            order = model.order(),
            "loaded markov model"
        );
        Ok(model)
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Draw the character that follows `prefix`, backing off to shorter
    /// contexts when the full one was never seen.
    fn next_char(&self, prefix: &[char], rng: &mut ChaCha8Rng) -> Result<char, CollaboratorError> {
        for k in (0..=self.order.min(prefix.len())).rev() {
            let context: String = prefix[prefix.len() - k..].iter().collect();
            let Some(options) = self.transitions.get(&context) else {
                continue;
            };
            let dist = WeightedIndex::new(options.iter().map(|&(_, count)| count))
                .map_err(|e| CollaboratorError::Model(format!("bad transition weights: {e}")))?;
            return Ok(options[dist.sample(rng)].0);
        }
        Ok(END)
    }
}

impl SequenceModel for MarkovModel {
    /// Extend `seed` character by character up to `max_length`. Samples that
    /// end shorter than the engine floor or equal to the seed are discarded,
    /// so fewer than `count` strings may come back.
    fn propose(
        &self,
        seed: &str,
        count: usize,
        max_length: usize,
    ) -> Result<Vec<String>, CollaboratorError> {
        if self.is_empty() {
            return Err(CollaboratorError::Model("model has no training data".into()));
        }

        let mut rng = self.rng.borrow_mut();
        let start: Vec<char> = seed.chars().take(max_length).collect();
        let mut proposals = Vec::with_capacity(count);

        for _ in 0..count {
            let mut out = start.clone();
            while out.len() < max_length {
                let next = self.next_char(&out, &mut rng)?;
                if next == END {
                    break;
                }
                out.push(next);
            }
            if out.len() >= ENGINE_MIN_LENGTH && out != start {
                proposals.push(out.into_iter().collect());
            }
        }
        Ok(proposals)
    }
}

fn sampling_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Read password datasets, one entry per non-empty trimmed line.
pub fn load_datasets<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>, CliError> {
    let mut corpus = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let before = corpus.len();
        corpus.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
        tracing::debug!(path = %path.display(), entries = corpus.len() - before, "loaded dataset");
    }
    Ok(corpus)
}

/// `count` random printable passwords of 8 to 16 characters.
pub fn random_corpus<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(RANDOM_LENGTHS);
            (0..len)
                .map(|_| char::from(rng.gen_range(PRINTABLE)))
                .collect()
        })
        .collect()
}
