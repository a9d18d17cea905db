// ============================================================
// Layer 3 — Corpus Errors
// ============================================================
// Every failure the loading core can report. Length and ratio
// rejections are NOT here: a filtered pair is skipped, not failed.
//
// The upper layers (application, cli) wrap these in anyhow
// with extra context; the core keeps them typed so callers can
// match on MisalignedCorpus separately from I/O problems.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use std::path::PathBuf;
use thiserror::Error;

/// Which side of a parallel corpus a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Target => write!(f, "target"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be opened for reading.
    #[error("cannot open corpus file '{}'", .path.display())]
    FileOpen {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but reading from it failed.
    #[error("cannot read corpus file '{}'", .path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line is not valid UTF-8. `line` is 1-based.
    #[error("invalid UTF-8 in '{}' at line {line}", .path.display())]
    Decode {
        path:   PathBuf,
        line:   usize,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// One side of a parallel corpus ran out of lines before the other.
    /// `lines` is how many lines the shorter side contained.
    #[error(
        "misaligned parallel corpus: {shorter} file '{}' ends after {lines} lines \
         but '{}' has more",
        .shorter_path.display(),
        .longer_path.display()
    )]
    MisalignedCorpus {
        shorter:      Side,
        shorter_path: PathBuf,
        longer_path:  PathBuf,
        lines:        usize,
    },

    /// The filter parameters are outside their documented ranges.
    #[error("invalid filter configuration: {0}")]
    InvalidFilter(String),
}

/// Result alias used throughout the loading core.
pub type CorpusResult<T> = Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misaligned_message_names_both_files() {
        let err = CorpusError::MisalignedCorpus {
            shorter:      Side::Target,
            shorter_path: PathBuf::from("train.de"),
            longer_path:  PathBuf::from("train.en"),
            lines:        4,
        };
        let msg = err.to_string();
        assert!(msg.contains("target"));
        assert!(msg.contains("train.de"));
        assert!(msg.contains("train.en"));
        assert!(msg.contains("4 lines"));
    }

    #[test]
    fn test_file_open_keeps_io_source() {
        use std::error::Error as _;
        let err = CorpusError::FileOpen {
            path:   PathBuf::from("missing.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.txt"));
    }
}
