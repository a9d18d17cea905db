// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits that describe a parallel corpus:
// what a token ID is, what a training sample is, what can go
// wrong while loading, and what a vocabulary must provide.
//
// Rules for this layer:
//   - NO Burn framework types
//   - NO file I/O
//   - Only structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Error taxonomy for corpus loading
pub mod error;

// An aligned (source, target) training sample
pub mod sample;

// The Vocabulary abstraction consumed by the encoder
pub mod traits;
