// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `inspect`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::prepare_use_case::PrepareConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build vocabularies and write filtered, aligned training samples
    Prepare(PrepareArgs),

    /// Summarise one corpus file against a saved vocabulary
    Inspect(InspectArgs),
}

/// All arguments for the `prepare` command.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Tokenized source-language corpus, one sentence per line
    #[arg(long)]
    pub src: String,

    /// Tokenized target-language corpus, line-aligned with --src
    #[arg(long)]
    pub trg: String,

    /// Directory for vocabularies, samples, and run metadata
    #[arg(long, default_value = "prepared")]
    pub output_dir: String,

    /// Source vocabulary size, including <unk>, <s>, </s>
    #[arg(long, default_value_t = 4000)]
    pub src_vocab_size: usize,

    /// Target vocabulary size, including <unk>, <s>, </s>
    #[arg(long, default_value_t = 4000)]
    pub trg_vocab_size: usize,

    /// Pairs with more tokens than this on either side are skipped
    #[arg(long, default_value_t = 100)]
    pub max_length: usize,

    /// Pairs whose longer/shorter length ratio exceeds this are skipped
    #[arg(long, default_value_t = 3.0)]
    pub max_length_ratio: f64,
}

/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            src_path:         a.src,
            trg_path:         a.trg,
            output_dir:       a.output_dir,
            src_vocab_size:   a.src_vocab_size,
            trg_vocab_size:   a.trg_vocab_size,
            max_length:       a.max_length,
            max_length_ratio: a.max_length_ratio,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Corpus file to summarise
    #[arg(long)]
    pub corpus: String,

    /// Directory holding tokenizer.json (e.g. prepared/src_vocab)
    #[arg(long)]
    pub vocab_dir: String,
}
