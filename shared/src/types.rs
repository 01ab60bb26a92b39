use std::fmt;

/// Index of an action slot on the receiving entity.
pub type ActionIndex = u32;

/// Receipt handed back by the transport for one accepted send.
pub type MessageId = u64;

/// Position component of a transform snapshot, in world units.
pub type Position = [f32; 3];

/// Rotation component of a transform snapshot, as a quaternion (x, y, z, w).
pub type Rotation = [f32; 4];

/// Opaque handle identifying the remote peer for the lifetime of a
/// connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PeerId(u64);

impl PeerId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier routing a record to a live entity instance.
///
/// Assigned once at entity spawn and identical on both peers, 12 bytes wide
/// on the wire. An identifier is never derived from the entity's current
/// position: a key that changes when the entity moves can no longer find the
/// entity that moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityId([u8; 12]);

impl EntityId {
    /// Encoded width inside every record that carries an identifier.
    pub const WIRE_SIZE: usize = 12;

    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Builds an identifier from a counter value, zero-extended to the full
    /// wire width.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 12];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 12] {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
