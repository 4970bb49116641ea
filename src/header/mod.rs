// src/header/mod.rs
//! Fixed-layout record headers
//!
//! - [`EncodingCounters`] - sequence-loop indices, nested inside acquisition headers
//! - [`AcquisitionHeader`] - one raw-data readout (408 bytes)
//! - [`ImageHeader`] - one reconstructed image (232 bytes)
//! - [`IndexEntry`] - stream/index pair for record index datasets
//!
//! Scalar fields are public. Fixed-array fields additionally get checked
//! `field(index)` / `set_field(index, value)` accessors that report
//! [`MrdError::IndexOutOfRange`] instead of panicking.

use crate::error::{MrdError, Result};
use crate::layout::fixed_layout;

/// Number of user-defined integer slots
pub const USER_INTS: usize = 8;
/// Number of user-defined float slots
pub const USER_FLOATS: usize = 8;
/// Number of physiological time stamps
pub const PHYS_STAMPS: usize = 3;
/// Number of 64-bit channel masks (one bit per channel)
pub const CHANNEL_MASKS: usize = 16;
pub const POSITION_LENGTH: usize = 3;
pub const DIRECTION_LENGTH: usize = 3;

/// Leading magic value of every header; encodes as the bytes `MRD2`
pub const SIGNATURE: u32 = u32::from_le_bytes(*b"MRD2");

pub(crate) fn checked_get<T: Copy>(values: &[T], field: &'static str, index: usize) -> Result<T> {
    values.get(index).copied().ok_or(MrdError::IndexOutOfRange {
        field,
        index,
        len: values.len(),
    })
}

pub(crate) fn checked_set<T>(values: &mut [T], field: &'static str, index: usize, value: T) -> Result<()> {
    let len = values.len();
    let slot = values
        .get_mut(index)
        .ok_or(MrdError::IndexOutOfRange { field, index, len })?;
    *slot = value;
    Ok(())
}

macro_rules! array_accessors {
    ($( $field:ident, $setter:ident: $elem:ty; )*) => {
        $(
            pub fn $field(&self, index: usize) -> $crate::error::Result<$elem> {
                $crate::header::checked_get(&self.$field, stringify!($field), index)
            }

            pub fn $setter(&mut self, index: usize, value: $elem) -> $crate::error::Result<()> {
                $crate::header::checked_set(&mut self.$field, stringify!($field), index, value)
            }
        )*
    };
}

mod acquisition_header;
mod encoding_counters;
mod flags;
mod image_header;

pub use acquisition_header::AcquisitionHeader;
pub use encoding_counters::EncodingCounters;
pub use flags::{AcquisitionFlag, ImageFlag, ImageType};
pub use image_header::ImageHeader;

fixed_layout! {
    /// Locates one record inside a stream: `(stream, index)`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct IndexEntry {
        pub stream: u32,
        pub index: u32,
    }
}
