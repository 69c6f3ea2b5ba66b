//! Graph loading error types.

use std::path::PathBuf;

use crate::domain::{EdgeError, TimeError};

/// A single field that could not be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid cost: {0:?}")]
    Cost(String),

    #[error("invalid duration: {0:?}")]
    Duration(String),

    #[error("unknown edge type {0:?}, expected \"fixed\" or \"flexible\"")]
    EdgeType(String),

    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Errors that can occur when loading a graph description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A field on a line could not be parsed
    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },

    /// The route field has no direction arrow
    #[error("line {line}: expected `->`, `<-` or `<->` between two node names")]
    MissingArrow { line: usize },

    /// The offer parsed but describes an invalid edge
    #[error("line {line}: {source}")]
    Edge { line: usize, source: EdgeError },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LoadError::Parse {
            line: 3,
            source: ParseError::Cost("abc".into()),
        };
        assert_eq!(err.to_string(), "line 3: invalid cost: \"abc\"");

        let err = LoadError::MissingArrow { line: 7 };
        assert!(err.to_string().starts_with("line 7: expected"));

        let err = LoadError::Edge {
            line: 2,
            source: EdgeError::NonPositiveDuration,
        };
        assert_eq!(err.to_string(), "line 2: duration must be positive");

        let err = LoadError::Io {
            path: PathBuf::from("edges.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read edges.txt: missing");
    }
}
