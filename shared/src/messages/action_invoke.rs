use replink_serde::{ByteReader, ByteWriter};

use crate::{
    messages::error::RecordError,
    types::{ActionIndex, EntityId},
};

/// A discrete action invocation targeting one entity.
///
/// Fixed 16-byte wire layout (12-byte id, u32 index) with no leading tag:
/// the record's family is established solely by the batch that carries it,
/// so an action payload is reinterpreted as a flat record array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionInvoke {
    pub id: EntityId,
    pub index: ActionIndex,
}

impl ActionInvoke {
    /// Encoded size of one record.
    pub const WIRE_SIZE: usize = 16;

    pub fn new(id: EntityId, index: ActionIndex) -> Self {
        Self { id, index }
    }

    pub fn ser(&self, writer: &mut ByteWriter) {
        writer.write_bytes(&self.id.to_bytes());
        writer.write_u32(self.index);
    }

    pub fn de(reader: &mut ByteReader) -> Result<Self, RecordError> {
        if reader.remaining() < Self::WIRE_SIZE {
            return Err(RecordError::ShortBuffer {
                required: Self::WIRE_SIZE,
                remaining: reader.remaining(),
            });
        }
        let id = EntityId::from_bytes(reader.read_array()?);
        let index = reader.read_u32()?;
        Ok(Self { id, index })
    }
}

/// Reinterprets a whole action payload as a flat array of fixed-size
/// records.
pub fn decode_action_array(payload: &[u8]) -> Result<Vec<ActionInvoke>, RecordError> {
    if payload.len() % ActionInvoke::WIRE_SIZE != 0 {
        return Err(RecordError::Misaligned {
            len: payload.len(),
            record_size: ActionInvoke::WIRE_SIZE,
        });
    }

    let mut reader = ByteReader::new(payload);
    let mut records = Vec::with_capacity(payload.len() / ActionInvoke::WIRE_SIZE);
    while !reader.is_empty() {
        records.push(ActionInvoke::de(&mut reader)?);
    }
    Ok(records)
}
