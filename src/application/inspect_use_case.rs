// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Loads ONE corpus file with a saved vocabulary and summarises
// it: how many sentences, how many tokens, how many of them the
// vocabulary does not know. Useful for choosing max_length and
// vocab sizes before running `prepare`.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::loader::load_single;
use crate::domain::{
    sample::{EncodedSentence, TokenId},
    traits::Vocabulary,
};
use crate::infra::vocab_store::VocabStore;

/// Corpus-level counts for one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusSummary {
    pub sentences:      usize,
    pub tokens:         usize,
    pub empty_lines:    usize,
    pub unknown_tokens: usize,
    pub longest:        usize,
}

impl CorpusSummary {
    pub fn from_sentences(sentences: &[EncodedSentence], unk_id: TokenId) -> Self {
        let mut summary = Self { sentences: sentences.len(), ..Self::default() };
        for s in sentences {
            summary.tokens += s.len();
            summary.longest = summary.longest.max(s.len());
            summary.unknown_tokens += s.iter().filter(|&&id| id == unk_id).count();
            if s.is_empty() {
                summary.empty_lines += 1;
            }
        }
        summary
    }

    /// Fraction of tokens mapped to the unknown ID (0.0 for an empty corpus)
    pub fn unknown_rate(&self) -> f64 {
        if self.tokens == 0 {
            return 0.0;
        }
        self.unknown_tokens as f64 / self.tokens as f64
    }

    pub fn mean_length(&self) -> f64 {
        if self.sentences == 0 {
            return 0.0;
        }
        self.tokens as f64 / self.sentences as f64
    }
}

pub struct InspectUseCase {
    corpus:    PathBuf,
    vocab_dir: PathBuf,
}

impl InspectUseCase {
    pub fn new(corpus: impl Into<PathBuf>, vocab_dir: impl Into<PathBuf>) -> Self {
        Self {
            corpus:    corpus.into(),
            vocab_dir: vocab_dir.into(),
        }
    }

    pub fn execute(&self) -> Result<CorpusSummary> {
        let vocab = VocabStore::new(&self.vocab_dir).load()?;

        let sentences = load_single(&self.corpus, &vocab)
            .with_context(|| format!("Cannot inspect '{}'", self.corpus.display()))?;

        Ok(CorpusSummary::from_sentences(&sentences, vocab.unknown_id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let sentences = vec![vec![3, 0, 4], vec![], vec![0]];
        let s = CorpusSummary::from_sentences(&sentences, 0);
        assert_eq!(s.sentences, 3);
        assert_eq!(s.tokens, 4);
        assert_eq!(s.empty_lines, 1);
        assert_eq!(s.unknown_tokens, 2);
        assert_eq!(s.longest, 3);
        assert!((s.unknown_rate() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_corpus_rates_are_zero() {
        let s = CorpusSummary::from_sentences(&[], 0);
        assert_eq!(s.unknown_rate(), 0.0);
        assert_eq!(s.mean_length(), 0.0);
    }

    #[test]
    fn test_inspect_with_built_vocab() {
        let dir    = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("train.src");
        std::fs::write(&corpus, "a a b\n\nc\n").unwrap();

        let vocab_dir = dir.path().join("vocab");
        VocabStore::new(&vocab_dir).build_and_save(&corpus, 5).unwrap();

        let s = InspectUseCase::new(&corpus, &vocab_dir).execute().unwrap();
        assert_eq!(s.sentences, 3);
        assert_eq!(s.tokens, 4);
        assert_eq!(s.empty_lines, 1);
        // vocab_size 5 leaves room for "a" and "b" only
        assert_eq!(s.unknown_tokens, 1);
    }

    #[test]
    fn test_inspect_without_vocab_fails() {
        let dir = tempfile::tempdir().unwrap();
        let res = InspectUseCase::new(dir.path().join("x"), dir.path().join("none")).execute();
        assert!(res.is_err());
    }
}
