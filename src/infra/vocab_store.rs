// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Builds, saves, and loads the word-level vocabulary for one
// language of the parallel corpus.
//
// The vocabulary is stored as a HuggingFace tokenizer.json with
// a WordLevel model, so any tool that reads that format can use
// the same IDs. We only ever call token_to_id() on it; the
// corpus is already tokenized.
//
// Reserved IDs:
//   <unk> = 0   (every out-of-vocabulary token)
//   <s>   = 1
//   </s>  = 2
// Corpus words start at 3, most frequent first. Ties are broken
// alphabetically so the same corpus always gives the same IDs.
//
// vocab_meta.json records which corpus and vocab_size produced
// tokenizer.json. A saved vocabulary is only reused when both match
// the current request; otherwise it is rebuilt.
//
// Reference: tokenizers crate documentation (WordLevel model)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use tokenizers::Tokenizer;

use crate::data::line_reader::LineReader;
use crate::domain::{sample::TokenId, traits::Vocabulary};

pub const UNK_TOKEN: &str = "<unk>";
pub const BOS_TOKEN: &str = "<s>";
pub const EOS_TOKEN: &str = "</s>";

/// Special tokens in ID order
const SPECIALS: [&str; 3] = [UNK_TOKEN, BOS_TOKEN, EOS_TOKEN];

const VOCAB_FILE: &str = "tokenizer.json";
const META_FILE:  &str = "vocab_meta.json";

/// Where a saved vocabulary came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabMeta {
    pub corpus:     String,
    pub vocab_size: usize,
}

impl VocabMeta {
    pub fn new(corpus: &Path, vocab_size: usize) -> Self {
        Self {
            corpus: corpus.to_string_lossy().into_owned(),
            vocab_size,
        }
    }
}

// ─── WordLevelVocab ───────────────────────────────────────────────────────────
/// A loaded WordLevel tokenizer used as a Vocabulary.
pub struct WordLevelVocab {
    tokenizer: Tokenizer,
    unk_id:    TokenId,
}

impl WordLevelVocab {
    /// Wrap a tokenizer; it must contain the `<unk>` token.
    pub fn from_tokenizer(tokenizer: Tokenizer) -> Result<Self> {
        let unk_id = tokenizer
            .token_to_id(UNK_TOKEN)
            .with_context(|| format!("Vocabulary has no '{UNK_TOKEN}' token"))?;
        Ok(Self { tokenizer, unk_id })
    }

    /// Number of entries, special tokens included
    pub fn len(&self) -> usize {
        self.tokenizer.get_vocab(true).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn id_to_token(&self, id: TokenId) -> Option<String> {
        self.tokenizer.id_to_token(id)
    }
}

impl Vocabulary for WordLevelVocab {
    fn lookup(&self, token: &str) -> TokenId {
        self.tokenizer.token_to_id(token).unwrap_or(self.unk_id)
    }

    fn unknown_id(&self) -> TokenId {
        self.unk_id
    }
}

// ─── VocabStore ───────────────────────────────────────────────────────────────
pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(VOCAB_FILE)
    }

    pub fn meta_path(&self) -> PathBuf {
        self.dir.join(META_FILE)
    }

    /// Load the saved vocabulary if it was built from the same `corpus`
    /// with the same `vocab_size`; build a new one otherwise.
    pub fn load_or_build(&self, corpus: &Path, vocab_size: usize) -> Result<WordLevelVocab> {
        let wanted = VocabMeta::new(corpus, vocab_size);

        match self.load_meta()? {
            Some(saved) if saved == wanted && self.path().exists() => {
                tracing::info!("Loading existing vocabulary from '{}'", self.path().display());
                return self.load();
            }
            Some(saved) => {
                tracing::warn!(
                    "Vocabulary in '{}' was built from '{}' (vocab_size={}); rebuilding",
                    self.dir.display(),
                    saved.corpus,
                    saved.vocab_size
                );
            }
            None => {}
        }

        tracing::info!(
            "Building vocabulary from '{}' (vocab_size={})",
            corpus.display(),
            vocab_size
        );
        self.build_and_save(corpus, vocab_size)
    }

    /// Read vocab_meta.json, or None if this directory has none
    pub fn load_meta(&self) -> Result<Option<VocabMeta>> {
        let path = self.meta_path();
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;
        let meta = serde_json::from_str(&json)
            .with_context(|| format!("Malformed JSON in '{}'", path.display()))?;
        Ok(Some(meta))
    }

    /// Load a previously saved vocabulary
    pub fn load(&self) -> Result<WordLevelVocab> {
        let path = self.path();
        let tokenizer = Tokenizer::from_file(&path).map_err(|e| {
            anyhow::anyhow!("Cannot load vocabulary from '{}': {}", path.display(), e)
        })?;
        WordLevelVocab::from_tokenizer(tokenizer)
    }

    /// Count words in `corpus`, keep the top `vocab_size - 3`, and
    /// write them as a WordLevel tokenizer.json.
    pub fn build_and_save(&self, corpus: &Path, vocab_size: usize) -> Result<WordLevelVocab> {
        anyhow::ensure!(
            vocab_size > SPECIALS.len(),
            "vocab_size must be greater than {} (reserved special tokens), got {}",
            SPECIALS.len(),
            vocab_size
        );

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        // ── Step 1: Count word frequencies ────────────────────────────────────
        let mut freq: HashMap<String, usize> = HashMap::new();
        let mut reader = LineReader::open(corpus)?;
        while let Some(line) = reader.read_line()? {
            for word in line.split_whitespace() {
                *freq.entry(word.to_string()).or_insert(0) += 1;
            }
        }

        let words = top_words(freq, vocab_size - SPECIALS.len());

        // ── Step 2: Assign IDs ────────────────────────────────────────────────
        let mut vocab = serde_json::Map::new();
        for (id, tok) in SPECIALS.iter().enumerate() {
            vocab.insert(tok.to_string(), serde_json::json!(id));
        }
        for word in &words {
            if !vocab.contains_key(word) {
                let id = vocab.len();
                vocab.insert(word.clone(), serde_json::json!(id));
            }
        }
        let total = vocab.len();

        // ── Step 3: Write tokenizer JSON in HuggingFace format ────────────────
        let added_tokens: Vec<serde_json::Value> = SPECIALS
            .iter()
            .enumerate()
            .map(|(id, tok)| {
                serde_json::json!({
                    "id": id, "content": tok, "single_word": false, "lstrip": false,
                    "rstrip": false, "normalized": false, "special": true
                })
            })
            .collect();

        let tokenizer_json = serde_json::json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": added_tokens,
            "normalizer": null,
            "pre_tokenizer": { "type": "WhitespaceSplit" },
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": vocab,
                "unk_token": UNK_TOKEN
            }
        });

        let path = self.path();
        std::fs::write(&path, serde_json::to_string_pretty(&tokenizer_json)?)
            .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;

        let meta_path = self.meta_path();
        let meta      = VocabMeta::new(corpus, vocab_size);
        std::fs::write(&meta_path, serde_json::to_string_pretty(&meta)?)
            .with_context(|| format!("Cannot write '{}'", meta_path.display()))?;

        tracing::info!("Vocabulary built with {} entries, saved to '{}'", total, path.display());

        self.load()
    }
}

/// The `limit` most frequent words, ties broken alphabetically.
fn top_words(freq: HashMap<String, usize>, limit: usize) -> Vec<String> {
    let mut words: Vec<(String, usize)> = freq.into_iter().collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words.truncate(limit);
    words.into_iter().map(|(w, _)| w).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn corpus(text: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(text.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_top_words_orders_by_frequency_then_name() {
        let freq = HashMap::from([
            ("b".to_string(), 2),
            ("a".to_string(), 2),
            ("c".to_string(), 5),
            ("d".to_string(), 1),
        ]);
        assert_eq!(top_words(freq, 3), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_build_assigns_reserved_and_frequency_ids() {
        let dir  = tempfile::tempdir().unwrap();
        let file = corpus("the cat\nthe dog\nthe cat sat\n");
        let v    = VocabStore::new(dir.path()).build_and_save(file.path(), 5).unwrap();

        assert_eq!(v.lookup(UNK_TOKEN), 0);
        assert_eq!(v.lookup(BOS_TOKEN), 1);
        assert_eq!(v.lookup(EOS_TOKEN), 2);
        assert_eq!(v.lookup("the"), 3);
        assert_eq!(v.lookup("cat"), 4);
        // "dog" and "sat" did not fit into vocab_size 5
        assert_eq!(v.lookup("dog"), v.unknown_id());
        assert_eq!(v.lookup("never-seen"), 0);
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn test_load_or_build_reuses_matching_vocab() {
        let dir   = tempfile::tempdir().unwrap();
        let store = VocabStore::new(dir.path());
        let file  = corpus("b a b\n");
        let first = store.load_or_build(file.path(), 10).unwrap();

        // Corpus edited on disk, but path and size unchanged: saved vocab is reused
        std::fs::write(file.path(), "z z z\n").unwrap();
        let second = store.load_or_build(file.path(), 10).unwrap();
        assert_eq!(first.lookup("b"), second.lookup("b"));
        assert_eq!(second.lookup("z"), second.unknown_id());
        assert_eq!(second.id_to_token(3).as_deref(), Some("b"));
    }

    #[test]
    fn test_load_or_build_rebuilds_for_other_corpus() {
        let dir   = tempfile::tempdir().unwrap();
        let store = VocabStore::new(dir.path());
        store.load_or_build(corpus("b a b\n").path(), 10).unwrap();

        let other = corpus("z z y\n");
        let v     = store.load_or_build(other.path(), 10).unwrap();
        assert_eq!(v.lookup("z"), 3);
        assert_eq!(v.lookup("b"), v.unknown_id());
        assert_eq!(store.load_meta().unwrap(), Some(VocabMeta::new(other.path(), 10)));
    }

    #[test]
    fn test_load_or_build_rebuilds_for_other_size() {
        let dir   = tempfile::tempdir().unwrap();
        let store = VocabStore::new(dir.path());
        let file  = corpus("a a b c\n");

        assert_eq!(store.load_or_build(file.path(), 4).unwrap().len(), 4);
        assert_eq!(store.load_or_build(file.path(), 10).unwrap().len(), 6);
    }

    #[test]
    fn test_vocab_without_meta_is_rebuilt() {
        let dir   = tempfile::tempdir().unwrap();
        let store = VocabStore::new(dir.path());
        let file  = corpus("q\n");
        store.build_and_save(file.path(), 5).unwrap();
        std::fs::remove_file(store.meta_path()).unwrap();

        let v = store.load_or_build(file.path(), 5).unwrap();
        assert_eq!(v.lookup("q"), 3);
        assert!(store.meta_path().exists());
    }

    #[test]
    fn test_vocab_size_must_exceed_specials() {
        let dir = tempfile::tempdir().unwrap();
        let res = VocabStore::new(dir.path()).build_and_save(corpus("a\n").path(), 3);
        assert!(res.is_err());
    }
}
