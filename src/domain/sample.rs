// ============================================================
// Layer 3 — Sample Domain Type
// ============================================================
// One aligned training example: the encoded source sentence and
// the encoded target sentence that came from the SAME line index
// of their respective files.
//
// Example (line 0 of both files):
//   train.en: "the cat sat"   → [12, 87, 403]
//   train.de: "die katze sass" → [9, 1570, 0]   (0 = <unk>)
//   Sample { source: [12, 87, 403], target: [9, 1570, 0] }
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// Integer ID assigned to a token by a vocabulary.
pub type TokenId = u32;

/// One line of a corpus after vocabulary lookup.
/// Position i holds the ID of the i-th whitespace token.
pub type EncodedSentence = Vec<TokenId>;

/// An aligned (source, target) pair retained for training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub source: EncodedSentence,
    pub target: EncodedSentence,
}

impl Sample {
    pub fn new(source: EncodedSentence, target: EncodedSentence) -> Self {
        Self { source, target }
    }

    /// (source length, target length) in tokens
    pub fn lengths(&self) -> (usize, usize) {
        (self.source.len(), self.target.len())
    }

    /// Longer side divided by shorter side.
    /// Returns None when either side is empty.
    pub fn length_ratio(&self) -> Option<f64> {
        let (s, t) = self.lengths();
        length_ratio(s, t)
    }
}

/// max(a, b) / min(a, b), or None if either length is zero.
pub fn length_ratio(a: usize, b: usize) -> Option<f64> {
    let shorter = a.min(b);
    if shorter == 0 {
        return None;
    }
    Some(a.max(b) as f64 / shorter as f64)
}
