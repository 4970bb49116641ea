// src/codec/mod.rs
//! Serialization codec for acquisition and image records
//!
//! A record is encoded as its fixed header in declared field order
//! (little-endian, no padding) followed by its variable-length payloads,
//! each written as a `u32` element count and the raw elements:
//!
//! - acquisitions: trajectory (`f32`) then data (`Complex<T>`, real/imag interleaved)
//! - images: attribute string (UTF-8 bytes) then pixel data (`T`)
//!
//! - [`RecordBuffer`] - Accumulates encoded records back to back
//! - [`ByteReader`] - Bounds-checked cursor used to decode them
//!
//! # Examples
//!
//! ```
//! use mrd_records::codec;
//! use mrd_records::Acquisition;
//!
//! let mut acq = Acquisition::<i16>::new();
//! acq.resize(72, 32).unwrap();
//!
//! let bytes = codec::serialize(&acq);
//! let decoded: Acquisition<i16> = codec::deserialize(&bytes).unwrap();
//! assert_eq!(acq, decoded);
//! ```

mod buffer;
mod reader;

pub use buffer::RecordBuffer;
pub use reader::ByteReader;

pub(crate) use buffer::{array_encoded_len, put_array, put_string};

use bytes::{Bytes, BytesMut};

use crate::error::Result;

/// A header-plus-payload value with a stable wire layout
pub trait Record: Sized {
    /// Exact number of bytes [`Record::encode`] appends
    fn encoded_len(&self) -> usize;

    fn encode(&self, buf: &mut BytesMut);

    /// Decode one record from the reader's current position
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self>;
}

/// Encode a record into a freshly allocated buffer
pub fn serialize<R: Record>(record: &R) -> Bytes {
    let mut buf = BytesMut::with_capacity(record.encoded_len());
    record.encode(&mut buf);
    buf.freeze()
}

/// Decode one record from the start of `bytes`, ignoring anything after it
pub fn deserialize<R: Record>(bytes: &[u8]) -> Result<R> {
    deserialize_prefix(bytes).map(|(record, _)| record)
}

/// Decode one record from the start of `bytes` and report how many bytes it used
pub fn deserialize_prefix<R: Record>(bytes: &[u8]) -> Result<(R, usize)> {
    let mut reader = ByteReader::new(bytes);
    let record = R::decode(&mut reader)?;
    Ok((record, reader.position()))
}

/// Iterator over records stored back to back in one buffer
///
/// Stops after the last complete record; a malformed record yields its
/// error once and then ends the iteration.
pub struct RecordIter<'a, R> {
    reader: ByteReader<'a>,
    failed: bool,
    _record: std::marker::PhantomData<R>,
}

impl<'a, R: Record> RecordIter<'a, R> {
    pub fn new(bytes: &'a [u8]) -> Self {
        RecordIter {
            reader: ByteReader::new(bytes),
            failed: false,
            _record: std::marker::PhantomData,
        }
    }
}

impl<'a, R: Record> Iterator for RecordIter<'a, R> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_empty() {
            return None;
        }
        let result = R::decode(&mut self.reader);
        self.failed = result.is_err();
        Some(result)
    }
}
