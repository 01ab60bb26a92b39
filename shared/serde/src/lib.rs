//! # Replink Serde
//! Byte-level serialization primitives shared by both sides of the wire.
//!
//! Every multi-byte value is encoded little-endian, in both directions.
//! The protocol is closed between exactly two peers, so the two sides only
//! need to agree with each other, not with the network at large.

mod error;
mod reader;
mod writer;

pub use error::SerdeErr;
pub use reader::ByteReader;
pub use writer::ByteWriter;
