use replink_serde::SerdeErr;
use thiserror::Error;

/// Errors that can occur while decoding a single record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Leading byte is not one of the known transform kind tags
    #[error("unknown transform kind tag {tag}. The record stream cannot be resynchronized past this point")]
    UnknownKindTag {
        tag: u8,
    },

    /// Fewer bytes remain than the record's kind requires
    #[error("record requires {required} bytes but only {remaining} remain")]
    ShortBuffer {
        required: usize,
        remaining: usize,
    },

    /// Action payload length is not a whole number of records
    #[error("action payload of {len} bytes is not a multiple of the {record_size}-byte record size")]
    Misaligned {
        len: usize,
        record_size: usize,
    },

    /// Underlying reader ran out of bytes mid-record
    #[error("unexpected end of buffer while decoding record")]
    UnexpectedEnd,
}

impl From<SerdeErr> for RecordError {
    fn from(_: SerdeErr) -> Self {
        RecordError::UnexpectedEnd
    }
}

/// Errors that can occur while parsing a whole batch.
///
/// Any of these rejects the batch wholesale: records before the failure are
/// discarded along with it, never partially dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// Empty payload, not even a family tag
    #[error("empty payload: missing batch family tag")]
    MissingFamilyTag,

    /// First byte is not a known family tag
    #[error("unknown batch family tag {tag}")]
    UnknownFamily {
        tag: u8,
    },

    /// A record's declared size would read past the end of the payload
    #[error("batch truncated: {0}")]
    TruncatedBatch(#[source] RecordError),

    /// A record in the batch could not be decoded
    #[error("malformed record in batch: {0}")]
    MalformedRecord(#[source] RecordError),
}
