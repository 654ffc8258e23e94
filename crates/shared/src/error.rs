use thiserror::Error;

/// A line of an action log that could not be decoded into an action.
#[derive(Debug, Error)]
#[error("malformed action on line {line}: {source}")]
pub struct ActionDecodeError {
    pub line: usize,
    #[source]
    pub source: serde_json::Error,
}

impl ActionDecodeError {
    pub fn new(line: usize, source: serde_json::Error) -> Self {
        Self { line, source }
    }
}
