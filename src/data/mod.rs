// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Turns tokenized text files into aligned ID sequences.
//
// The pipeline flows in this order:
//
//   train.en          train.de
//       │                 │
//       ▼                 ▼
//   LineReader        LineReader     → one line at a time
//       │                 │
//       ▼                 ▼
//   encode()          encode()       → token strings to IDs
//       │                 │
//       └──────┬──────────┘
//              ▼
//   parallel filter   → drops empty, too long, bad ratio pairs
//              │
//              ▼
//   ParallelDataset   → implements Burn's Dataset trait
//
// load_single() uses the left half only, for one file.
//
// Reference: Burn Book §4 (Datasets)
//            Rust Book §13 (Iterators and Closures)

/// Reads one line at a time from a corpus stream
pub mod line_reader;

/// Maps whitespace tokens to vocabulary IDs
pub mod encoder;

/// Loads and encodes a single corpus file
pub mod loader;

/// Lockstep loading and filtering of source/target files
pub mod parallel;

/// Implements Burn's Dataset trait for aligned samples
pub mod dataset;

#[cfg(test)]
pub(crate) mod test_vocab;
