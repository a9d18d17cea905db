// ============================================================
// Layer 4 — Single Corpus Loader
// ============================================================
// Loads every line of ONE tokenized corpus file and encodes it.
//
//   train.en
//       │  LineReader   → one String per line
//       ▼
//   encode()          → one EncodedSentence per line
//       │
//       ▼
//   Vec<EncodedSentence>  (same length and order as the file)
//
// No filtering happens here. Empty lines become empty
// sentences so the output index always equals the line index.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O)

use std::{io::BufRead, path::Path};

use crate::data::{encoder::encode, line_reader::LineReader};
use crate::domain::{
    error::CorpusResult,
    sample::EncodedSentence,
    traits::Vocabulary,
};

/// Load and encode every line of the corpus at `path`.
///
/// Fails with `CorpusError::FileOpen` if the file cannot be
/// opened, and with `Read`/`Decode` on I/O or UTF-8 problems.
pub fn load_single<V>(path: impl AsRef<Path>, vocab: &V) -> CorpusResult<Vec<EncodedSentence>>
where
    V: Vocabulary + ?Sized,
{
    let reader    = LineReader::open(path.as_ref())?;
    let sentences = encode_lines(reader, vocab)?;

    tracing::info!(
        "Loaded {} sentences from '{}'",
        sentences.len(),
        path.as_ref().display()
    );
    Ok(sentences)
}

/// Read the next line of `reader` and encode it with `vocab`.
/// Returns Ok(None) at end of stream.
pub fn read_encoded<R, V>(reader: &mut LineReader<R>, vocab: &V) -> CorpusResult<Option<EncodedSentence>>
where
    R: BufRead,
    V: Vocabulary + ?Sized,
{
    Ok(reader.read_line()?.map(|line| encode(vocab, &line)))
}

/// Encode every remaining line of `reader`.
pub fn encode_lines<R, V>(mut reader: LineReader<R>, vocab: &V) -> CorpusResult<Vec<EncodedSentence>>
where
    R: BufRead,
    V: Vocabulary + ?Sized,
{
    let mut sentences = Vec::new();

    while let Some(ids) = read_encoded(&mut reader, vocab)? {
        sentences.push(ids);
    }

    tracing::debug!(
        "Encoded {} lines from '{}'",
        reader.lines_read(),
        reader.path().display()
    );
    Ok(sentences)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_vocab::TestVocab;
    use crate::domain::error::CorpusError;
    use std::io::{Cursor, Write};

    #[test]
    fn test_one_sentence_per_line() {
        let v      = TestVocab::new(&["a", "b"]);
        let reader = LineReader::new(Cursor::new("a b\nb\n\na q"), "mem");
        let out    = encode_lines(reader, &v).unwrap();
        assert_eq!(out, vec![vec![1, 2], vec![2], vec![], vec![1, 0]]);
    }

    #[test]
    fn test_read_encoded_one_line_at_a_time() {
        let v          = TestVocab::new(&["a", "b"]);
        let mut reader = LineReader::new(Cursor::new("b a\n\nz"), "mem");

        assert_eq!(read_encoded(&mut reader, &v).unwrap(), Some(vec![2, 1]));
        assert_eq!(read_encoded(&mut reader, &v).unwrap(), Some(vec![]));
        assert_eq!(read_encoded(&mut reader, &v).unwrap(), Some(vec![0]));
        assert_eq!(read_encoded(&mut reader, &v).unwrap(), None);
        assert_eq!(reader.lines_read(), 3);
    }

    #[test]
    fn test_load_single_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a\nb a\n   \nb").unwrap();

        let v   = TestVocab::new(&["a", "b"]);
        let out = load_single(file.path(), &v).unwrap();

        // Four lines, the last one without a trailing newline
        assert_eq!(out.len(), 4);
        assert_eq!(out[1], vec![2, 1]);
        assert!(out[2].is_empty());
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir  = tempfile::tempdir().unwrap();
        let v    = TestVocab::new(&[]);
        let err  = load_single(dir.path().join("nope.txt"), &v).unwrap_err();
        assert!(matches!(err, CorpusError::FileOpen { .. }));
    }

    #[test]
    fn test_empty_file_gives_empty_corpus() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let v    = TestVocab::new(&["a"]);
        assert!(load_single(file.path(), &v).unwrap().is_empty());
    }
}
