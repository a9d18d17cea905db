// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and hands off to
// Layer 2 (application). Printing results happens only here.
//
// Two commands are supported:
//   1. `prepare` — builds vocabularies and writes training samples
//   2. `inspect` — prints statistics for one corpus file
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, PrepareArgs};

#[derive(Parser, Debug)]
#[command(
    name = "nmt-corpus",
    version,
    about = "Load, align and length-filter tokenized parallel corpora into training samples."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    tracing::info!("Preparing parallel corpus '{}' / '{}'", args.src, args.trg);

    let report = PrepareUseCase::new(args.into()).execute()?;
    let stats  = report.stats;

    println!("Read {} line pairs, kept {}.", stats.read, stats.kept);
    println!(
        "Skipped: {} empty, {} too long, {} over the length ratio.",
        stats.empty, stats.too_long, stats.bad_ratio
    );
    println!(
        "Tokens: {} source, {} target. Samples written to {}",
        report.src_tokens,
        report.trg_tokens,
        report.samples_path.display()
    );
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let summary = InspectUseCase::new(&args.corpus, &args.vocab_dir).execute()?;

    println!("Corpus:          {}", args.corpus);
    println!("Sentences:       {}", summary.sentences);
    println!("Empty lines:     {}", summary.empty_lines);
    println!("Tokens:          {}", summary.tokens);
    println!("Mean length:     {:.2}", summary.mean_length());
    println!("Longest:         {}", summary.longest);
    println!("Unknown tokens:  {} ({:.2}%)", summary.unknown_tokens, summary.unknown_rate() * 100.0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_args_parse_with_defaults() {
        let cli = Cli::try_parse_from(["nmt-corpus", "prepare", "--src", "a.en", "--trg", "a.de"])
            .unwrap();
        match cli.command {
            Commands::Prepare(args) => {
                assert_eq!(args.max_length, 100);
                assert_eq!(args.max_length_ratio, 3.0);
                assert_eq!(args.output_dir, "prepared");
            }
            other => panic!("expected prepare, got {other:?}"),
        }
    }

    #[test]
    fn test_prepare_requires_both_files() {
        assert!(Cli::try_parse_from(["nmt-corpus", "prepare", "--src", "a.en"]).is_err());
    }
}
