// src/codec/buffer.rs
use bytes::{BufMut, Bytes, BytesMut};
use std::mem;

use crate::codec::Record;
use crate::types::Element;

/// Efficient buffer for accumulating encoded records back to back
///
/// Each pushed record is appended in its wire layout. The buffer tracks how
/// many records it holds and uses `BytesMut` so the finished stream can be
/// handed off without copying.
///
/// # Example
///
/// ```
/// use mrd_records::codec::RecordBuffer;
/// use mrd_records::Acquisition;
///
/// let mut acq = Acquisition::<f32>::new();
/// acq.resize(16, 2).unwrap();
///
/// let mut buffer = RecordBuffer::new();
/// buffer.push(&acq);
/// buffer.push(&acq);
///
/// assert_eq!(buffer.record_count(), 2);
/// assert_eq!(buffer.byte_len(), 2 * acq.serialized_len());
/// ```
pub struct RecordBuffer {
    buffer: BytesMut,
    record_count: u64,
}

impl RecordBuffer {
    /// Create a new buffer with default capacity (8192 bytes)
    pub fn new() -> Self {
        Self::with_capacity(8192)
    }

    /// Create a new buffer with specified capacity in bytes
    pub fn with_capacity(capacity: usize) -> Self {
        RecordBuffer {
            buffer: BytesMut::with_capacity(capacity),
            record_count: 0,
        }
    }

    /// Append one record in its wire layout
    pub fn push<R: Record>(&mut self, record: &R) {
        self.buffer.reserve(record.encoded_len());
        record.encode(&mut self.buffer);
        self.record_count += 1;
    }

    /// Get the number of records written to this buffer
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Get the total size in bytes
    pub fn byte_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer, resetting the record count
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.record_count = 0;
    }

    /// Take the buffer contents, leaving an empty buffer
    pub fn take(&mut self) -> Bytes {
        self.record_count = 0;
        mem::take(&mut self.buffer).freeze()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }
}

impl Default for RecordBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// Implement Debug manually to avoid printing large buffers
impl std::fmt::Debug for RecordBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordBuffer")
            .field("record_count", &self.record_count)
            .field("byte_len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

/// Encoded size of a length-prefixed array of `len` elements
pub(crate) fn array_encoded_len<E: Element>(len: usize) -> usize {
    4 + len * E::KIND.size()
}

/// Write a `u32` element count followed by the elements.
///
/// Callers guarantee `values.len()` fits in `u32`; record resize enforces it.
pub(crate) fn put_array<E: Element>(buf: &mut BytesMut, values: &[E]) {
    buf.reserve(array_encoded_len::<E>(values.len()));
    buf.put_u32_le(values.len() as u32);
    for value in values {
        value.put_le(buf);
    }
}

/// Write a `u32` byte length followed by UTF-8 text
pub(crate) fn put_string(buf: &mut BytesMut, value: &str) {
    buf.put_u32_le(value.len() as u32);
    buf.extend_from_slice(value.as_bytes());
}
