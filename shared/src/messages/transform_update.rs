use replink_serde::{ByteReader, ByteWriter, SerdeErr};

use crate::{
    messages::error::RecordError,
    types::{EntityId, Position, Rotation},
};

/// Discriminates the three transform record layouts on the wire.
///
/// The kind tag is the first byte of every transform record; everything
/// about the record's size follows from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    Full,
    PositionOnly,
    RotationOnly,
}

impl TransformKind {
    const TAG_FULL: u8 = 0;
    const TAG_POSITION: u8 = 1;
    const TAG_ROTATION: u8 = 2;

    pub fn tag(self) -> u8 {
        match self {
            TransformKind::Full => Self::TAG_FULL,
            TransformKind::PositionOnly => Self::TAG_POSITION,
            TransformKind::RotationOnly => Self::TAG_ROTATION,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            Self::TAG_FULL => Some(TransformKind::Full),
            Self::TAG_POSITION => Some(TransformKind::PositionOnly),
            Self::TAG_ROTATION => Some(TransformKind::RotationOnly),
            _ => None,
        }
    }

    /// Total encoded size of a record of this kind, kind tag included.
    ///
    /// Independent of field values: tag + 12-byte id, plus 12 bytes of
    /// position and/or 16 bytes of rotation.
    pub fn encoded_len(self) -> usize {
        match self {
            TransformKind::Full => 41,
            TransformKind::PositionOnly => 25,
            TransformKind::RotationOnly => 29,
        }
    }
}

/// One transform snapshot for a single entity.
///
/// The position-only and rotation-only variants exist so producers can ship
/// just the half of the transform that changed; the receiving entity keeps
/// its previous value for the half that is absent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformUpdate {
    Full {
        id: EntityId,
        position: Position,
        rotation: Rotation,
    },
    PositionOnly {
        id: EntityId,
        position: Position,
    },
    RotationOnly {
        id: EntityId,
        rotation: Rotation,
    },
}

impl TransformUpdate {
    pub fn kind(&self) -> TransformKind {
        match self {
            TransformUpdate::Full { .. } => TransformKind::Full,
            TransformUpdate::PositionOnly { .. } => TransformKind::PositionOnly,
            TransformUpdate::RotationOnly { .. } => TransformKind::RotationOnly,
        }
    }

    pub fn id(&self) -> EntityId {
        match self {
            TransformUpdate::Full { id, .. }
            | TransformUpdate::PositionOnly { id, .. }
            | TransformUpdate::RotationOnly { id, .. } => *id,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            TransformUpdate::Full { position, .. }
            | TransformUpdate::PositionOnly { position, .. } => Some(*position),
            TransformUpdate::RotationOnly { .. } => None,
        }
    }

    pub fn rotation(&self) -> Option<Rotation> {
        match self {
            TransformUpdate::Full { rotation, .. }
            | TransformUpdate::RotationOnly { rotation, .. } => Some(*rotation),
            TransformUpdate::PositionOnly { .. } => None,
        }
    }

    pub fn encoded_len(&self) -> usize {
        self.kind().encoded_len()
    }

    /// Appends the record's wire encoding: kind tag, id, then the fields the
    /// kind carries (position before rotation).
    pub fn ser(&self, writer: &mut ByteWriter) {
        writer.write_u8(self.kind().tag());
        writer.write_bytes(&self.id().to_bytes());
        if let Some(position) = self.position() {
            for component in position {
                writer.write_f32(component);
            }
        }
        if let Some(rotation) = self.rotation() {
            for component in rotation {
                writer.write_f32(component);
            }
        }
    }

    /// Decodes one record from the reader's current position.
    ///
    /// On error the reader has consumed nothing, so a malformed tail is left
    /// in place for the caller to discard as a unit.
    pub fn de(reader: &mut ByteReader) -> Result<Self, RecordError> {
        let tag = reader.peek_u8()?;
        let kind = TransformKind::from_tag(tag).ok_or(RecordError::UnknownKindTag { tag })?;
        if reader.remaining() < kind.encoded_len() {
            return Err(RecordError::ShortBuffer {
                required: kind.encoded_len(),
                remaining: reader.remaining(),
            });
        }

        reader.read_u8()?;
        let id = EntityId::from_bytes(reader.read_array()?);
        let record = match kind {
            TransformKind::Full => TransformUpdate::Full {
                id,
                position: read_position(reader)?,
                rotation: read_rotation(reader)?,
            },
            TransformKind::PositionOnly => TransformUpdate::PositionOnly {
                id,
                position: read_position(reader)?,
            },
            TransformKind::RotationOnly => TransformUpdate::RotationOnly {
                id,
                rotation: read_rotation(reader)?,
            },
        };
        Ok(record)
    }
}

fn read_position(reader: &mut ByteReader) -> Result<Position, SerdeErr> {
    Ok([reader.read_f32()?, reader.read_f32()?, reader.read_f32()?])
}

fn read_rotation(reader: &mut ByteReader) -> Result<Rotation, SerdeErr> {
    Ok([
        reader.read_f32()?,
        reader.read_f32()?,
        reader.read_f32()?,
        reader.read_f32()?,
    ])
}
