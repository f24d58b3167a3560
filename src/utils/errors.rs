use thiserror::Error;

/// Failures of a card store lookup itself, as opposed to a lookup that
/// found no record. These are never downgraded to "no match" so callers
/// can retry or alert instead of treating a deck as genuinely incomplete.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("card store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("card store returned unusable card data: {0}")]
    InvalidCardData(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("a deck must contain exactly {expected} cards to generate a deckcode, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("`{0}` must be provided for the selected validation mode")]
    MissingParameter(&'static str),

    #[error("invalid validation mode: `{0}`")]
    InvalidMode(String),
}
