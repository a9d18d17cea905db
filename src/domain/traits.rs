// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The loading core never looks inside a vocabulary. It only
// asks "what is the ID of this token?" and relies on the
// vocabulary to answer with its unknown ID for anything it
// does not contain.
//
// Implementations:
//   - WordLevelVocab (infra::vocab_store) → a HuggingFace
//     WordLevel tokenizer built from the training corpus
//   - any HashMap-backed table, e.g. the test fixtures
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::sample::TokenId;

// ─── Vocabulary ───────────────────────────────────────────────────────────────
/// Maps a token string to a stable integer ID.
///
/// `lookup` never fails: tokens the vocabulary does not know
/// must map to `unknown_id()`, and the same token must map to
/// the same ID on every call.
pub trait Vocabulary {
    /// ID for `token`, or `unknown_id()` if it is not in the vocabulary.
    fn lookup(&self, token: &str) -> TokenId;

    /// The sentinel ID shared by all unknown tokens.
    fn unknown_id(&self) -> TokenId;
}

impl<V: Vocabulary + ?Sized> Vocabulary for &V {
    fn lookup(&self, token: &str) -> TokenId {
        (**self).lookup(token)
    }

    fn unknown_id(&self) -> TokenId {
        (**self).unknown_id()
    }
}
