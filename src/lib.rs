//! Loads tokenized parallel corpora and turns them into aligned,
//! length-filtered training samples.
//!
//! ```no_run
//! use nmt_corpus::data::parallel::{load_parallel_samples, FilterConfig};
//! use nmt_corpus::infra::vocab_store::VocabStore;
//!
//! # fn main() -> anyhow::Result<()> {
//! let src_vocab = VocabStore::new("prepared/src_vocab").load()?;
//! let trg_vocab = VocabStore::new("prepared/trg_vocab").load()?;
//! let samples = load_parallel_samples(
//!     "train.en",
//!     "train.de",
//!     &src_vocab,
//!     &trg_vocab,
//!     FilterConfig::new(50, 2.0),
//! )?;
//! # let _ = samples;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
