// ============================================================
// Layer 4 — Parallel Corpus Loader
// ============================================================
// Reads a source file and a target file in lockstep and keeps
// only the line pairs that make useful training examples.
//
//   line i of train.en ─┐
//                       ├─► encode both ─► filter ─► PairSink
//   line i of train.de ─┘
//
// Filter rules, checked in this order (first failure wins):
//   1. empty     — either side has 0 tokens
//   2. too long  — either side has more than max_length tokens
//   3. ratio     — longer / shorter > max_length_ratio
// Both bounds are inclusive: a pair exactly at the limit is kept.
// Rejected pairs are counted, never reported as errors.
//
// If one file ends before the other the whole load fails with
// MisalignedCorpus; nothing collected so far is returned.
//
// The same loop produces two output shapes through PairSink:
//   - SplitSink  → (Vec<EncodedSentence>, Vec<EncodedSentence>)
//   - SampleSink → Vec<Sample>
//
// Reference: Rust Book §10 (Generics and Traits)
//            Rust Book §13 (Iterators)

use std::{io::BufRead, path::Path};

use serde::{Deserialize, Serialize};

use crate::data::{line_reader::LineReader, loader::read_encoded};
use crate::domain::{
    error::{CorpusError, CorpusResult, Side},
    sample::{length_ratio, EncodedSentence, Sample},
    traits::Vocabulary,
};

// ─── Filter Configuration ─────────────────────────────────────────────────────
/// Length limits applied to every candidate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Maximum tokens on either side (inclusive), must be >= 1
    pub max_length: usize,

    /// Maximum longer/shorter length ratio (inclusive), must be >= 1.0
    pub max_length_ratio: f64,
}

impl FilterConfig {
    pub fn new(max_length: usize, max_length_ratio: f64) -> Self {
        Self { max_length, max_length_ratio }
    }

    /// Check the documented ranges before any file is touched.
    pub fn validate(&self) -> CorpusResult<()> {
        if self.max_length == 0 {
            return Err(CorpusError::InvalidFilter(
                "max_length must be at least 1".to_string(),
            ));
        }
        if !self.max_length_ratio.is_finite() || self.max_length_ratio < 1.0 {
            return Err(CorpusError::InvalidFilter(format!(
                "max_length_ratio must be a finite number >= 1.0, got {}",
                self.max_length_ratio
            )));
        }
        Ok(())
    }

    /// Decide what happens to a pair with these token counts.
    pub fn check(&self, src_len: usize, trg_len: usize) -> Verdict {
        if src_len == 0 || trg_len == 0 {
            return Verdict::Empty;
        }
        if src_len > self.max_length || trg_len > self.max_length {
            return Verdict::TooLong;
        }
        match length_ratio(src_len, trg_len) {
            Some(r) if r > self.max_length_ratio => Verdict::BadRatio,
            _ => Verdict::Keep,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_length:       100,
            max_length_ratio: 3.0,
        }
    }
}

/// Outcome of FilterConfig::check for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Empty,
    TooLong,
    BadRatio,
}

// ─── Filter Statistics ────────────────────────────────────────────────────────
/// Counts of what happened to each line pair during one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    /// Line pairs read from the two files
    pub read:      usize,
    pub kept:      usize,
    pub empty:     usize,
    pub too_long:  usize,
    pub bad_ratio: usize,
}

impl FilterStats {
    fn record(&mut self, verdict: Verdict) {
        self.read += 1;
        match verdict {
            Verdict::Keep     => self.kept += 1,
            Verdict::Empty    => self.empty += 1,
            Verdict::TooLong  => self.too_long += 1,
            Verdict::BadRatio => self.bad_ratio += 1,
        }
    }

    pub fn rejected(&self) -> usize {
        self.read - self.kept
    }
}

// ─── Output Assembly ──────────────────────────────────────────────────────────
/// Receives every retained pair in file order and builds the final output.
pub trait PairSink {
    type Output;

    fn push(&mut self, source: EncodedSentence, target: EncodedSentence);

    fn finish(self) -> Self::Output;
}

/// Collects retained pairs into two index-aligned Vecs.
#[derive(Debug, Default)]
pub struct SplitSink {
    sources: Vec<EncodedSentence>,
    targets: Vec<EncodedSentence>,
}

impl PairSink for SplitSink {
    type Output = (Vec<EncodedSentence>, Vec<EncodedSentence>);

    fn push(&mut self, source: EncodedSentence, target: EncodedSentence) {
        self.sources.push(source);
        self.targets.push(target);
    }

    fn finish(self) -> Self::Output {
        (self.sources, self.targets)
    }
}

/// Collects retained pairs as Sample records.
#[derive(Debug, Default)]
pub struct SampleSink {
    samples: Vec<Sample>,
}

impl PairSink for SampleSink {
    type Output = Vec<Sample>;

    fn push(&mut self, source: EncodedSentence, target: EncodedSentence) {
        self.samples.push(Sample::new(source, target));
    }

    fn finish(self) -> Self::Output {
        self.samples
    }
}

// ─── Entry Points ─────────────────────────────────────────────────────────────

/// Load a parallel corpus as two aligned sequences (sources, targets).
pub fn load_parallel_split<VS, VT>(
    src_path:  impl AsRef<Path>,
    trg_path:  impl AsRef<Path>,
    src_vocab: &VS,
    trg_vocab: &VT,
    filter:    FilterConfig,
) -> CorpusResult<(Vec<EncodedSentence>, Vec<EncodedSentence>)>
where
    VS: Vocabulary + ?Sized,
    VT: Vocabulary + ?Sized,
{
    let (out, _stats) =
        load_parallel_with(src_path, trg_path, src_vocab, trg_vocab, filter, SplitSink::default())?;
    Ok(out)
}

/// Load a parallel corpus as a sequence of Sample records.
pub fn load_parallel_samples<VS, VT>(
    src_path:  impl AsRef<Path>,
    trg_path:  impl AsRef<Path>,
    src_vocab: &VS,
    trg_vocab: &VT,
    filter:    FilterConfig,
) -> CorpusResult<Vec<Sample>>
where
    VS: Vocabulary + ?Sized,
    VT: Vocabulary + ?Sized,
{
    let (out, _stats) =
        load_parallel_with(src_path, trg_path, src_vocab, trg_vocab, filter, SampleSink::default())?;
    Ok(out)
}

/// Open both files and run the alignment loop into `sink`.
///
/// The filter is validated before either file is opened. Both
/// file handles are dropped when this function returns, on
/// success and on every error path.
pub fn load_parallel_with<VS, VT, S>(
    src_path:  impl AsRef<Path>,
    trg_path:  impl AsRef<Path>,
    src_vocab: &VS,
    trg_vocab: &VT,
    filter:    FilterConfig,
    sink:      S,
) -> CorpusResult<(S::Output, FilterStats)>
where
    VS: Vocabulary + ?Sized,
    VT: Vocabulary + ?Sized,
    S:  PairSink,
{
    filter.validate()?;

    let src = LineReader::open(src_path.as_ref())?;
    let trg = LineReader::open(trg_path.as_ref())?;

    let (out, stats) = align_readers(src, trg, src_vocab, trg_vocab, filter, sink)?;

    tracing::info!(
        "Parallel corpus '{}' / '{}': read {} pairs, kept {} \
         (empty {}, too long {}, bad ratio {})",
        src_path.as_ref().display(),
        trg_path.as_ref().display(),
        stats.read,
        stats.kept,
        stats.empty,
        stats.too_long,
        stats.bad_ratio,
    );
    if stats.kept == 0 && stats.read > 0 {
        tracing::warn!(
            "No pairs survived filtering (max_length={}, max_length_ratio={})",
            filter.max_length,
            filter.max_length_ratio
        );
    }

    Ok((out, stats))
}

/// The alignment loop itself, over any two line readers.
pub fn align_readers<RS, RT, VS, VT, S>(
    mut src:   LineReader<RS>,
    mut trg:   LineReader<RT>,
    src_vocab: &VS,
    trg_vocab: &VT,
    filter:    FilterConfig,
    mut sink:  S,
) -> CorpusResult<(S::Output, FilterStats)>
where
    RS: BufRead,
    RT: BufRead,
    VS: Vocabulary + ?Sized,
    VT: Vocabulary + ?Sized,
    S:  PairSink,
{
    let mut stats = FilterStats::default();

    loop {
        let src_next = read_encoded(&mut src, src_vocab)?;
        let trg_next = read_encoded(&mut trg, trg_vocab)?;

        let (src_ids, trg_ids) = match (src_next, trg_next) {
            (Some(s), Some(t)) => (s, t),
            (None, None)       => break,
            (None, Some(_))    => return Err(misaligned(Side::Source, &src, &trg)),
            (Some(_), None)    => return Err(misaligned(Side::Target, &trg, &src)),
        };

        let verdict = filter.check(src_ids.len(), trg_ids.len());
        stats.record(verdict);

        if verdict == Verdict::Keep {
            sink.push(src_ids, trg_ids);
        } else {
            tracing::trace!(
                "Skipping line {} ({:?}): {} / {} tokens",
                stats.read,
                verdict,
                src_ids.len(),
                trg_ids.len()
            );
        }
    }

    Ok((sink.finish(), stats))
}

fn misaligned<A, B>(shorter: Side, ended: &LineReader<A>, other: &LineReader<B>) -> CorpusError
where
    A: BufRead,
    B: BufRead,
{
    CorpusError::MisalignedCorpus {
        shorter,
        shorter_path: ended.path().to_path_buf(),
        longer_path:  other.path().to_path_buf(),
        lines:        ended.lines_read(),
    }
}
