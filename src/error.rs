use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("empty move token")]
    Empty,

    #[error("unknown move '{0}'")]
    UnknownBase(char),

    #[error("unknown modifier '{0}', expected nothing, ' or 2")]
    UnknownModifier(String),
}

/// The first token of an algorithm that failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move notation '{token}' at position {index}: {source}")]
pub struct AlgorithmError {
    pub index: usize,
    pub token: String,
    pub source: ParseMoveError,
}
