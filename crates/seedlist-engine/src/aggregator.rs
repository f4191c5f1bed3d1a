// Candidate aggregator: priority merge, length floor, first-seen dedup, cap
//
// Streams are drained one after another in `StreamSource` rank order. Each
// candidate that meets the floor and has not been seen before is accepted;
// once `max_count` candidates are held the aggregator stops pulling from
// every stream. Because acceptance is in priority order and dedup keeps the
// first occurrence, stopping early yields exactly the prefix that a full
// dedup followed by truncation would.

use hashbrown::HashSet;
use serde::Serialize;

/// Origin of a candidate stream. The declaration order is the merge priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamSource {
    MethodTransforms,
    CrossTokenPatterns,
    ExternalModel,
    Pairwise,
    TokenTransforms,
}

impl StreamSource {
    pub const ALL: [StreamSource; 5] = [
        StreamSource::MethodTransforms,
        StreamSource::CrossTokenPatterns,
        StreamSource::ExternalModel,
        StreamSource::Pairwise,
        StreamSource::TokenTransforms,
    ];

    /// Merge priority; lower drains first.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            StreamSource::MethodTransforms => "method transforms",
            StreamSource::CrossTokenPatterns => "cross-token patterns",
            StreamSource::ExternalModel => "external model",
            StreamSource::Pairwise => "pairwise combinations",
            StreamSource::TokenTransforms => "token transforms",
        }
    }
}

/// A lazily evaluated candidate sequence tagged with its origin.
pub struct CandidateStream<'a> {
    pub source: StreamSource,
    pub candidates: Box<dyn Iterator<Item = String> + 'a>,
}

impl<'a> CandidateStream<'a> {
    pub fn new<I>(source: StreamSource, candidates: I) -> Self
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: 'a,
    {
        Self {
            source,
            candidates: Box::new(candidates.into_iter()),
        }
    }
}

/// Per-source counters collected while aggregating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    /// Candidates pulled from the stream.
    pub pulled: u64,
    /// Candidates dropped by the length floor.
    pub too_short: u64,
    /// Candidates already held from an earlier position.
    pub duplicates: u64,
    /// Candidates accepted into the list.
    pub accepted: u64,
}

/// What happened during one aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    /// Counters in priority order, one entry per stream that was offered.
    pub sources: Vec<(StreamSource, SourceStats)>,
    /// `true` when the cap was reached and remaining candidates were not
    /// pulled.
    pub saturated: bool,
}

impl AggregateReport {
    pub fn stats(&self, source: StreamSource) -> SourceStats {
        self.sources
            .iter()
            .filter(|(s, _)| *s == source)
            .fold(SourceStats::default(), |mut acc, (_, stats)| {
                acc.pulled += stats.pulled;
                acc.too_short += stats.too_short;
                acc.duplicates += stats.duplicates;
                acc.accepted += stats.accepted;
                acc
            })
    }
}

/// Result of [`aggregate`].
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub candidates: Vec<String>,
    pub report: AggregateReport,
}

/// Why [`Aggregator::offer`] did or did not take a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Accepted,
    TooShort,
    Duplicate,
    Full,
}

/// Collects unique candidates up to a cap.
///
/// Use [`aggregate`] for the whole priority merge; the aggregator itself is
/// exposed for callers that feed candidates one at a time.
pub struct Aggregator {
    max_count: usize,
    floor_length: usize,
    candidates: Vec<String>,
    seen: HashSet<String>,
}

impl Aggregator {
    pub fn new(max_count: usize, floor_length: usize) -> Self {
        // The cap may be far larger than what the streams produce.
        let capacity = max_count.min(1 << 16);
        Self {
            max_count,
            floor_length,
            candidates: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` once `max_count` candidates are held.
    pub fn is_full(&self) -> bool {
        self.candidates.len() >= self.max_count
    }

    /// Offer one candidate. Candidates shorter than the floor (in characters)
    /// and repeats of an accepted candidate are ignored.
    pub fn offer(&mut self, candidate: String) -> Offer {
        if self.is_full() {
            return Offer::Full;
        }
        if candidate.chars().count() < self.floor_length {
            return Offer::TooShort;
        }
        if self.seen.contains(candidate.as_str()) {
            return Offer::Duplicate;
        }
        self.seen.insert(candidate.clone());
        self.candidates.push(candidate);
        Offer::Accepted
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Accepted candidates in acceptance order.
    pub fn into_candidates(self) -> Vec<String> {
        self.candidates
    }
}

/// Merge `streams` in priority order into at most `max_count` unique
/// candidates of at least `floor_length` characters.
///
/// Streams of equal rank keep their relative order. Streams after the point
/// where the cap is reached are never pulled.
pub fn aggregate(
    mut streams: Vec<CandidateStream<'_>>,
    max_count: usize,
    floor_length: usize,
) -> Aggregate {
    streams.sort_by_key(|stream| stream.source.rank());

    let mut aggregator = Aggregator::new(max_count, floor_length);
    let mut report = AggregateReport::default();

    for stream in streams {
        if aggregator.is_full() {
            break;
        }
        let mut stats = SourceStats::default();
        for candidate in stream.candidates {
            stats.pulled += 1;
            match aggregator.offer(candidate) {
                Offer::Accepted => stats.accepted += 1,
                Offer::TooShort => stats.too_short += 1,
                Offer::Duplicate => stats.duplicates += 1,
                Offer::Full => break,
            }
            if aggregator.is_full() {
                break;
            }
        }
        tracing::debug!(
            source = stream.source.name(),
            pulled = stats.pulled,
            accepted = stats.accepted,
            "aggregated stream"
        );
        report.sources.push((stream.source, stats));
    }

    report.saturated = aggregator.is_full();
    Aggregate {
        candidates: aggregator.into_candidates(),
        report,
    }
}
