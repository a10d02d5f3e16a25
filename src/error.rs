use thiserror::Error;

/// Fatal errors surfaced to the caller of a document session.
#[derive(Debug, Error)]
pub enum Error {
    #[error("document session is not initialized; call initialize() first")]
    Initialization,

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("invalid report JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-line drawing failure. Recovered by skipping the line.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("font {font} has no glyph for {ch:?}")]
    UnsupportedGlyph { font: String, ch: char },
}

/// Per-field formatting failure. Recovered by substituting a fallback line.
#[derive(Debug, Error, PartialEq)]
pub enum FormattingError {
    #[error("expected a list of records, got {0}")]
    NotAList(&'static str),

    #[error("record {index} is {kind}, expected an object or text")]
    InvalidRecord { index: usize, kind: &'static str },
}
