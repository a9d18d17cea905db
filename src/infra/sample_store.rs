// ============================================================
// Layer 6 — Sample Store
// ============================================================
// Saves the output of a prepare run so a training job can pick
// it up later without re-reading the raw corpus.
//
// File layout:
//   output_dir/
//     samples.json          ← retained samples, file order
//     filter_stats.json     ← how many pairs each rule dropped
//     prepare_config.json   ← the exact settings of the run
//     src_vocab/tokenizer.json, src_vocab/vocab_meta.json
//     trg_vocab/tokenizer.json, trg_vocab/vocab_meta.json
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::application::prepare_use_case::PrepareConfig;
use crate::data::parallel::FilterStats;
use crate::domain::sample::Sample;

const SAMPLES_FILE: &str = "samples.json";
const STATS_FILE:   &str = "filter_stats.json";
const CONFIG_FILE:  &str = "prepare_config.json";

/// Reads and writes prepared-corpus artifacts in one directory.
pub struct SampleStore {
    dir: PathBuf,
}

impl SampleStore {
    /// Create the store, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_samples(&self, samples: &[Sample]) -> Result<()> {
        let path = self.dir.join(SAMPLES_FILE);
        let file = File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;

        let mut out = BufWriter::new(file);
        serde_json::to_writer(&mut out, samples)
            .with_context(|| format!("Cannot write samples to '{}'", path.display()))?;
        out.flush()?;

        tracing::debug!("Saved {} samples to '{}'", samples.len(), path.display());
        Ok(())
    }

    pub fn load_samples(&self) -> Result<Vec<Sample>> {
        self.read_json(SAMPLES_FILE)
    }

    pub fn save_stats(&self, stats: &FilterStats) -> Result<()> {
        self.write_json(STATS_FILE, stats)
    }

    pub fn load_stats(&self) -> Result<FilterStats> {
        self.read_json(STATS_FILE)
    }

    pub fn save_config(&self, cfg: &PrepareConfig) -> Result<()> {
        self.write_json(CONFIG_FILE, cfg)
    }

    pub fn load_config(&self) -> Result<PrepareConfig> {
        self.read_json(CONFIG_FILE)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        tracing::debug!("Saved '{}'", path.display());
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.dir.join(name);
        let file = File::open(&path).with_context(|| {
            format!(
                "Cannot read '{}'. Has 'prepare' been run for this directory?",
                path.display()
            )
        })?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Malformed JSON in '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_survive_save_and_load() {
        let dir   = tempfile::tempdir().unwrap();
        let store = SampleStore::new(dir.path().join("out")).unwrap();
        let samples = vec![
            Sample::new(vec![3, 4], vec![5]),
            Sample::new(vec![6], vec![7, 0]),
        ];

        store.save_samples(&samples).unwrap();
        assert_eq!(store.load_samples().unwrap(), samples);
    }

    #[test]
    fn test_stats_survive_save_and_load() {
        let dir   = tempfile::tempdir().unwrap();
        let store = SampleStore::new(dir.path()).unwrap();
        let stats = FilterStats { read: 10, kept: 6, empty: 1, too_long: 2, bad_ratio: 1 };

        store.save_stats(&stats).unwrap();
        assert_eq!(store.load_stats().unwrap(), stats);
    }

    #[test]
    fn test_missing_samples_file_is_error() {
        let dir   = tempfile::tempdir().unwrap();
        let store = SampleStore::new(dir.path()).unwrap();
        let err   = store.load_samples().unwrap_err();
        assert!(err.to_string().contains("samples.json"));
    }
}
