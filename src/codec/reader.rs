// src/codec/reader.rs
use crate::error::{MrdError, Result};
use crate::header::SIGNATURE;
use crate::layout::LayoutField;
use crate::types::Element;
use crate::utils::decode_attribute_string;
use byteorder::{ByteOrder, LittleEndian};

/// Bounds-checked little-endian cursor over an encoded record stream
///
/// Every read checks the remaining length first, so a short buffer surfaces
/// as [`MrdError::TruncatedInput`] instead of a panic, and declared array
/// lengths are never trusted for allocation before the bytes are known to
/// be present.
///
/// # Example
///
/// ```
/// use mrd_records::codec::ByteReader;
///
/// let data = [3u8, 0, 0, 0, 1, 0, 2, 0, 3, 0];
/// let mut reader = ByteReader::new(&data);
///
/// let values: Vec<i16> = reader.read_array("values").unwrap();
/// assert_eq!(values, vec![1, 2, 3]);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ByteReader { buf, pos: 0 }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail with `TruncatedInput` unless `needed` more bytes are available
    pub fn ensure(&self, needed: usize, context: &'static str) -> Result<()> {
        if self.remaining() < needed {
            return Err(MrdError::TruncatedInput {
                context,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Consume exactly `len` bytes
    pub fn take(&mut self, len: usize, context: &'static str) -> Result<&'a [u8]> {
        self.ensure(len, context)?;
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_u32(&mut self, context: &'static str) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4, context)?))
    }

    /// Read a leading signature without consuming it
    pub fn peek_signature(&self) -> Result<u32> {
        self.ensure(4, "signature")?;
        Ok(LittleEndian::read_u32(&self.buf[self.pos..self.pos + 4]))
    }

    /// Read a fixed-layout header that starts with the format signature.
    ///
    /// The signature is validated before the header length, so a short
    /// buffer with a foreign magic reports `FormatMismatch`.
    pub fn read_header<H: LayoutField>(&mut self) -> Result<H> {
        let found = self.peek_signature()?;
        if found != SIGNATURE {
            return Err(MrdError::FormatMismatch {
                expected: SIGNATURE,
                found,
            });
        }
        self.ensure(H::SIZE, "header")?;
        H::decode(self)
    }

    /// Read a `u32` element count followed by that many elements
    pub fn read_array<E: Element>(&mut self, context: &'static str) -> Result<Vec<E>> {
        let count = self.read_u32(context)? as usize;
        if count == 0 {
            return Ok(Vec::new());
        }

        let size = E::KIND.size();
        let byte_count = count.checked_mul(size).ok_or(MrdError::TruncatedInput {
            context,
            needed: usize::MAX,
            available: self.remaining(),
        })?;
        let bytes = self.take(byte_count, context)?;

        Ok(bytes.chunks_exact(size).map(E::read_le).collect())
    }

    /// Read a `u32` byte length followed by UTF-8 text
    pub fn read_string(&mut self, context: &'static str) -> Result<String> {
        let len = self.read_u32(context)? as usize;
        let bytes = self.take(len, context)?;
        decode_attribute_string(bytes)
    }
}
