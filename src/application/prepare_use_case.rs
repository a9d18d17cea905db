// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates training-data preparation in order:
//
//   Step 1: Check filter settings       (Layer 4 - data)
//   Step 2: Build / load vocabularies   (Layer 6 - infra)
//   Step 3: Load + filter parallel data (Layer 4 - data)
//   Step 4: Save samples, stats, config (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::{
    dataset::ParallelDataset,
    parallel::{load_parallel_with, FilterConfig, FilterStats, SampleSink},
};
use crate::infra::{sample_store::SampleStore, vocab_store::VocabStore};

// ─── Preparation Configuration ───────────────────────────────────────────────
// Everything needed to reproduce one prepare run.
// Saved next to the samples as prepare_config.json.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub src_path:         String,
    pub trg_path:         String,
    pub output_dir:       String,
    pub src_vocab_size:   usize,
    pub trg_vocab_size:   usize,
    pub max_length:       usize,
    pub max_length_ratio: f64,
}

impl PrepareConfig {
    pub fn filter(&self) -> FilterConfig {
        FilterConfig::new(self.max_length, self.max_length_ratio)
    }

    pub fn src_vocab_dir(&self) -> PathBuf {
        Path::new(&self.output_dir).join("src_vocab")
    }

    pub fn trg_vocab_dir(&self) -> PathBuf {
        Path::new(&self.output_dir).join("trg_vocab")
    }
}

impl Default for PrepareConfig {
    fn default() -> Self {
        let filter = FilterConfig::default();
        Self {
            src_path:         "data/train.src".to_string(),
            trg_path:         "data/train.trg".to_string(),
            output_dir:       "prepared".to_string(),
            src_vocab_size:   4000,
            trg_vocab_size:   4000,
            max_length:       filter.max_length,
            max_length_ratio: filter.max_length_ratio,
        }
    }
}

/// What a prepare run produced.
#[derive(Debug, Clone)]
pub struct PrepareReport {
    pub stats:         FilterStats,
    pub src_tokens:    usize,
    pub trg_tokens:    usize,
    pub samples_path:  PathBuf,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<PrepareReport> {
        let cfg    = &self.config;
        let filter = cfg.filter();

        // ── Step 1: Reject bad settings before touching any file ─────────────
        filter.validate()?;

        let store = SampleStore::new(&cfg.output_dir)?;

        // ── Step 2: Vocabularies, one per language ────────────────────────────
        let src_vocab = VocabStore::new(cfg.src_vocab_dir())
            .load_or_build(Path::new(&cfg.src_path), cfg.src_vocab_size)
            .context("Cannot prepare source vocabulary")?;
        let trg_vocab = VocabStore::new(cfg.trg_vocab_dir())
            .load_or_build(Path::new(&cfg.trg_path), cfg.trg_vocab_size)
            .context("Cannot prepare target vocabulary")?;

        // ── Step 3: Lockstep load with length / ratio filtering ───────────────
        let (samples, stats) = load_parallel_with(
            &cfg.src_path,
            &cfg.trg_path,
            &src_vocab,
            &trg_vocab,
            filter,
            SampleSink::default(),
        )
        .with_context(|| {
            format!("Cannot load parallel corpus '{}' / '{}'", cfg.src_path, cfg.trg_path)
        })?;

        let dataset = ParallelDataset::new(samples);
        let (src_tokens, trg_tokens) = dataset.token_totals();
        tracing::info!(
            "Prepared {} samples ({} source tokens, {} target tokens)",
            dataset.sample_count(),
            src_tokens,
            trg_tokens
        );

        // ── Step 4: Persist everything needed downstream ──────────────────────
        store.save_samples(&dataset.into_samples())?;
        store.save_stats(&stats)?;
        store.save_config(cfg)?;

        Ok(PrepareReport {
            stats,
            src_tokens,
            trg_tokens,
            samples_path: store.dir().join("samples.json"),
        })
    }
}
