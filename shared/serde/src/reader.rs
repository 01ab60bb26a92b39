use crate::SerdeErr;

/// A zero-copy cursor over a received payload.
///
/// The reader borrows the transport's buffer directly; nothing is copied
/// until a record is materialized. All reads are bounds-checked and return
/// `SerdeErr` instead of panicking, since the buffer is untrusted network
/// data.
pub struct ByteReader<'b> {
    buffer: &'b [u8],
    cursor: usize,
}

impl<'b> ByteReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8, SerdeErr> {
        self.buffer.get(self.cursor).copied().ok_or(SerdeErr)
    }

    pub fn read_u8(&mut self) -> Result<u8, SerdeErr> {
        let value = self.peek_u8()?;
        self.cursor += 1;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, SerdeErr> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_f32(&mut self) -> Result<f32, SerdeErr> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    /// Borrows the next `len` bytes out of the underlying buffer.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'b [u8], SerdeErr> {
        if self.remaining() < len {
            return Err(SerdeErr);
        }
        let slice = &self.buffer[self.cursor..self.cursor + len];
        self.cursor += len;
        Ok(slice)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SerdeErr> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}
