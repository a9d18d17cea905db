// ============================================================
// Layer 4 — Line Reader
// ============================================================
// Reads a corpus one line at a time.
//
// Each call to read_line():
//   1. reads raw bytes up to and including the next '\n'
//   2. strips the '\n' and a preceding '\r' (Windows files)
//   3. decodes the bytes as UTF-8
//
// End of stream is reported as Ok(None) only when nothing is
// pending, so a final line without a trailing newline is still
// returned.
//
// Reading bytes first (instead of BufRead::read_line) lets us
// report the exact line number of malformed UTF-8.
//
// Reference: Rust Book §12 (Reading a File)
//            std::io::BufRead documentation

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::domain::error::{CorpusError, CorpusResult};

/// Line-oriented reader over any buffered stream.
///
/// The path is only used for error messages; in-memory readers
/// can pass any descriptive name.
pub struct LineReader<R> {
    inner: R,
    path:  PathBuf,
    /// Number of lines returned so far
    lines: usize,
    buf:   Vec<u8>,
}

impl LineReader<BufReader<File>> {
    /// Open a corpus file for reading.
    pub fn open(path: impl AsRef<Path>) -> CorpusResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CorpusError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Opened corpus file '{}'", path.display());
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path:  path.into(),
            lines: 0,
            buf:   Vec::new(),
        }
    }

    /// Read the next line without its terminator.
    /// Returns Ok(None) at end of stream.
    pub fn read_line(&mut self) -> CorpusResult<Option<String>> {
        self.buf.clear();

        let n = self
            .inner
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| CorpusError::Read {
                path: self.path.clone(),
                source,
            })?;

        // Nothing left and nothing pending → end of stream
        if n == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        self.lines += 1;

        // mem::take hands the bytes to String without copying
        let bytes = std::mem::take(&mut self.buf);
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|source| CorpusError::Decode {
                path: self.path.clone(),
                line: self.lines,
                source,
            })
    }

    /// How many lines have been returned so far.
    pub fn lines_read(&self) -> usize {
        self.lines
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Iterate lines until end of stream or the first error.
impl<R: BufRead> Iterator for LineReader<R> {
    type Item = CorpusResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &'static [u8]) -> LineReader<Cursor<&'static [u8]>> {
        LineReader::new(Cursor::new(text), "mem")
    }

    #[test]
    fn test_reads_lines_without_terminators() {
        let mut r = reader(b"a b\nc d\n");
        assert_eq!(r.read_line().unwrap().as_deref(), Some("a b"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("c d"));
        assert_eq!(r.read_line().unwrap(), None);
        assert_eq!(r.lines_read(), 2);
    }

    #[test]
    fn test_final_line_without_newline() {
        let lines: Vec<String> = reader(b"one\ntwo")
            .collect::<CorpusResult<_>>()
            .unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_strips_carriage_return() {
        let mut r = reader(b"hello\r\nworld\r\n");
        assert_eq!(r.read_line().unwrap().as_deref(), Some("hello"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("world"));
    }

    #[test]
    fn test_empty_lines_are_returned() {
        let lines: Vec<String> = reader(b"\n\nx\n")
            .collect::<CorpusResult<_>>()
            .unwrap();
        assert_eq!(lines, vec!["", "", "x"]);
    }

    #[test]
    fn test_empty_stream_is_end() {
        let mut r = reader(b"");
        assert_eq!(r.read_line().unwrap(), None);
        // Stays at end on repeated calls
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_reports_line_number() {
        let mut r = reader(b"ok\n\xff\xfe\n");
        assert!(r.read_line().unwrap().is_some());
        match r.read_line() {
            Err(CorpusError::Decode { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let err = LineReader::open("/definitely/not/here.txt").err().unwrap();
        assert!(matches!(err, CorpusError::FileOpen { .. }));
    }
}
