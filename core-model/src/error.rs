use thiserror::Error;

/// Errors produced while parsing a persisted media record.
///
/// These never escape the decode surface: a malformed record decodes to
/// `None` and the caller starts fresh with no prior state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("record has {found} fields, expected {expected}")]
    FieldCount { found: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, WireError>;
