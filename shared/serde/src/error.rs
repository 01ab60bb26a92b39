use thiserror::Error;

/// A read ran past the end of the underlying buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ran out of bytes while deserializing")]
pub struct SerdeErr;
