use replink_serde::{ByteReader, ByteWriter};

use crate::messages::{
    action_invoke::{decode_action_array, ActionInvoke},
    error::{BatchError, RecordError},
    transform_update::TransformUpdate,
};

/// Batch-level category written as the first byte of every transport
/// payload. It determines how everything after the tag must be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchFamily {
    Transform,
    Action,
}

impl BatchFamily {
    const TAG_TRANSFORM: u8 = 0;
    const TAG_ACTION: u8 = 1;

    pub fn tag(self) -> u8 {
        match self {
            BatchFamily::Transform => Self::TAG_TRANSFORM,
            BatchFamily::Action => Self::TAG_ACTION,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            Self::TAG_TRANSFORM => Some(BatchFamily::Transform),
            Self::TAG_ACTION => Some(BatchFamily::Action),
            _ => None,
        }
    }
}

/// A parsed transport payload: every record it carried, in wire order.
///
/// Families are never mixed in one payload. Records are concatenated with
/// no padding and no count field; boundaries are reconstructed from each
/// transform record's own kind tag, or by the fixed action record size.
#[derive(Clone, Debug, PartialEq)]
pub enum Batch {
    Transforms(Vec<TransformUpdate>),
    Actions(Vec<ActionInvoke>),
}

impl Batch {
    pub fn family(&self) -> BatchFamily {
        match self {
            Batch::Transforms(_) => BatchFamily::Transform,
            Batch::Actions(_) => BatchFamily::Action,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Batch::Transforms(records) => records.len(),
            Batch::Actions(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parses one received payload back into typed records.
    ///
    /// Failure rejects the payload as a unit; records decoded before the
    /// failure are never dispatched.
    pub fn parse(payload: &[u8]) -> Result<Self, BatchError> {
        let Some((&tag, body)) = payload.split_first() else {
            return Err(BatchError::MissingFamilyTag);
        };
        let family = BatchFamily::from_tag(tag).ok_or(BatchError::UnknownFamily { tag })?;

        match family {
            BatchFamily::Transform => {
                let mut reader = ByteReader::new(body);
                let mut records = Vec::new();
                while !reader.is_empty() {
                    let record = TransformUpdate::de(&mut reader).map_err(|err| match err {
                        RecordError::UnknownKindTag { .. } => BatchError::MalformedRecord(err),
                        _ => BatchError::TruncatedBatch(err),
                    })?;
                    records.push(record);
                }
                Ok(Batch::Transforms(records))
            }
            BatchFamily::Action => {
                let records = decode_action_array(body).map_err(BatchError::TruncatedBatch)?;
                Ok(Batch::Actions(records))
            }
        }
    }
}

/// Frames one tick's transform records into a single payload: family tag
/// followed by each record's encoding in enumeration order.
pub fn frame_transform_batch(records: &[TransformUpdate]) -> Vec<u8> {
    let payload_len = 1 + records.iter().map(TransformUpdate::encoded_len).sum::<usize>();
    let mut writer = ByteWriter::with_capacity(payload_len);
    writer.write_u8(BatchFamily::Transform.tag());
    for record in records {
        record.ser(&mut writer);
    }
    writer.to_bytes()
}

/// Frames one tick's action records: family tag followed by the
/// concatenation of the fixed-size encodings.
pub fn frame_action_batch(records: &[ActionInvoke]) -> Vec<u8> {
    let mut writer = ByteWriter::with_capacity(1 + records.len() * ActionInvoke::WIRE_SIZE);
    writer.write_u8(BatchFamily::Action.tag());
    for record in records {
        record.ser(&mut writer);
    }
    writer.to_bytes()
}

/// Splits accumulated transform records into as many framed payloads as
/// needed so that none exceeds `max_payload` bytes. Every payload re-carries
/// the family tag. A payload always holds at least one record, even if that
/// record alone overflows the cap.
pub fn frame_transform_batches(
    records: &[TransformUpdate],
    max_payload: usize,
) -> Vec<Vec<u8>> {
    chunk_records(records, max_payload, |record| record.encoded_len())
        .into_iter()
        .map(frame_transform_batch)
        .collect()
}

/// Action-family counterpart of [`frame_transform_batches`].
pub fn frame_action_batches(records: &[ActionInvoke], max_payload: usize) -> Vec<Vec<u8>> {
    chunk_records(records, max_payload, |_| ActionInvoke::WIRE_SIZE)
        .into_iter()
        .map(frame_action_batch)
        .collect()
}

fn chunk_records<'r, R>(
    records: &'r [R],
    max_payload: usize,
    encoded_len: impl Fn(&R) -> usize,
) -> Vec<&'r [R]> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut chunk_start = 0;
    let mut chunk_len = 1;
    for (index, record) in records.iter().enumerate() {
        let record_len = encoded_len(record);
        if index > chunk_start && chunk_len + record_len > max_payload {
            chunks.push(&records[chunk_start..index]);
            chunk_start = index;
            chunk_len = 1;
        }
        chunk_len += record_len;
    }
    chunks.push(&records[chunk_start..]);
    chunks
}
