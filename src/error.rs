use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Airport,
    Airline,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Airport => write!(f, "airport"),
            RecordKind::Airline => write!(f, "airline"),
        }
    }
}

/// Failures raised by the knowledge base. None of them is retried: the
/// caller aborts the current row.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("no {kind} found for code {code}")]
    NotFound { kind: RecordKind, code: String },

    #[error("found {count} {kind}s matching code {code}")]
    Ambiguous {
        kind: RecordKind,
        code: String,
        count: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "can't compute duration for {} {from} {} {to}",
        .departure.as_deref().unwrap_or(""),
        .arrival.as_deref().unwrap_or("")
    )]
    MissingInput {
        departure: Option<String>,
        from: String,
        arrival: Option<String>,
        to: String,
    },

    #[error("unknown continent for time zone {0}")]
    UnknownContinent(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV table: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON table: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("row {line}: {source}")]
    Row {
        line: usize,
        #[source]
        source: KnowledgeError,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
