// ============================================================
// Layer 4 — Token Encoder
// ============================================================
// Converts one line of whitespace-separated tokens into IDs.
//
//   "the  cat sat\t"  →  ["the", "cat", "sat"]  →  [12, 87, 403]
//
// split_whitespace() treats any run of Unicode whitespace as a
// single separator and never yields empty tokens, so leading,
// trailing and repeated spaces are harmless. An empty line
// encodes to an empty Vec.
//
// Length limits are NOT applied here; see parallel.rs.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use crate::domain::{sample::EncodedSentence, traits::Vocabulary};

/// Encode one line with `vocab`. Unknown tokens become `vocab.unknown_id()`.
pub fn encode<V: Vocabulary + ?Sized>(vocab: &V, line: &str) -> EncodedSentence {
    line.split_whitespace().map(|tok| vocab.lookup(tok)).collect()
}

/// Number of tokens `encode` would produce for `line`.
pub fn token_count(line: &str) -> usize {
    line.split_whitespace().count()
}
