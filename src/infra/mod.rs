// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// On-disk state that sits around the loading core:
//
//   vocab_store.rs  — Vocabulary persistence
//                     Builds a word-level vocabulary from a
//                     corpus file if none exists, or loads a
//                     previously saved one, so every run over
//                     the same output directory uses the same IDs.
//
//   sample_store.rs — Prepared-corpus persistence
//                     Writes retained samples, filter statistics
//                     and the run configuration as JSON.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Vocabulary building, saving, and loading
pub mod vocab_store;

/// Prepared samples, stats and config as JSON
pub mod sample_store;
