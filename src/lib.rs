// src/lib.rs
//! # mrd-records
//!
//! Fixed-layout binary records for MR raw-data acquisitions and reconstructed
//! images: packed little-endian headers, typed payloads and the type
//! descriptors an external persistence layer needs to store them.
//!
//! ## Features
//!
//! - 📐 **Explicit Layouts**: Headers are packed field by field, never copied from host memory
//! - 🔒 **Consistent Records**: Payload lengths always match the header counts
//! - 🧬 **Typed Payloads**: Generic over sample and pixel types, with runtime-typed wrappers
//! - 📦 **Self-Describing**: Every record type exposes a deterministic [`TypeDescriptor`]
//!
//! ## Quick Start
//!
//! ### Building and serializing an acquisition
//!
//! ```rust
//! use mrd_records::*;
//! use num_complex::Complex;
//!
//! fn main() -> Result<()> {
//!     let mut acq = Acquisition::<i16>::new();
//!     acq.resize(72, 32)?;
//!     acq.set_flag(AcquisitionFlag::FirstInSlice);
//!     acq.set_sample(0, 3, Complex::new(100, -100))?;
//!
//!     let bytes = acq.serialize();
//!     let decoded = Acquisition::<i16>::deserialize(&bytes)?;
//!     assert_eq!(decoded, acq);
//!     Ok(())
//! }
//! ```
//!
//! ### Images with attributes
//!
//! ```rust
//! use mrd_records::*;
//!
//! fn main() -> Result<()> {
//!     let mut image = Image::<f32>::with_dimensions([64, 64, 1], 1)?;
//!     image.set_attribute_string("<ismrmrdMeta/>")?;
//!     image.set_pixel(10, 20, 0, 0, 1.0)?;
//!
//!     let record = ImageRecord::deserialize(ElementKind::F32, &image.serialize())?;
//!     assert_eq!(record.attribute_string(), "<ismrmrdMeta/>");
//!     Ok(())
//! }
//! ```
//!
//! ### Describing records for storage
//!
//! ```rust
//! use mrd_records::*;
//!
//! let desc = acquisition_descriptor(ElementKind::ComplexF32).unwrap();
//! assert_eq!(desc.field("head").unwrap().ty.size(), AcquisitionHeader::SIZE);
//! ```

// Modules
pub mod error;
pub mod types;
pub mod layout;
pub mod header;
pub mod record;
pub mod codec;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{MrdError, Result};

// Type exports
pub use types::{
    Element,
    ElementKind,
    ImageElement,
    PrimitiveType,
    RecordKind,
    Sample,
};

// Layout exports
pub use layout::{
    FieldDescriptor,
    FieldType,
    TypeDescriptor,
    VARLEN_SLOT_SIZE,
};

// Header exports
pub use header::{
    AcquisitionFlag,
    AcquisitionHeader,
    EncodingCounters,
    ImageFlag,
    ImageHeader,
    ImageType,
    IndexEntry,
    CHANNEL_MASKS,
    DIRECTION_LENGTH,
    PHYS_STAMPS,
    POSITION_LENGTH,
    SIGNATURE,
    USER_FLOATS,
    USER_INTS,
};

// Record exports
pub use record::{
    acquisition_descriptor,
    image_descriptor,
    record_descriptor,
    Acquisition,
    AcquisitionRecord,
    Image,
    ImageRecord,
};

// Codec exports
pub use codec::{
    ByteReader,
    Record,
    RecordBuffer,
    RecordIter,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use mrd_records::prelude::*;
    //! ```

    pub use crate::error::{MrdError, Result};
    pub use crate::header::{AcquisitionFlag, AcquisitionHeader, ImageFlag, ImageHeader};
    pub use crate::record::{Acquisition, AcquisitionRecord, Image, ImageRecord};
    pub use crate::types::ElementKind;
    pub use num_complex::Complex;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!LIBRARY_VERSION.is_empty());
        assert_eq!(&SIGNATURE.to_le_bytes(), b"MRD2");
    }

    #[test]
    fn test_header_sizes() {
        assert_eq!(EncodingCounters::SIZE, 72);
        assert_eq!(AcquisitionHeader::SIZE, 408);
        assert_eq!(ImageHeader::SIZE, 232);
        assert_eq!(IndexEntry::SIZE, 8);
    }

    #[test]
    fn test_format_constants() {
        assert_eq!(USER_INTS, 8);
        assert_eq!(USER_FLOATS, 8);
        assert_eq!(PHYS_STAMPS, 3);
        assert_eq!(CHANNEL_MASKS, 16);
        assert_eq!(POSITION_LENGTH, 3);
        assert_eq!(DIRECTION_LENGTH, 3);
    }

    #[test]
    fn test_prelude_round_trip() {
        use crate::prelude::*;

        let mut acq = Acquisition::<f32>::new();
        acq.resize(4, 1).unwrap();
        acq.data_mut()[0] = Complex::new(1.0, 2.0);
        let decoded = Acquisition::<f32>::deserialize(&acq.serialize()).unwrap();
        assert_eq!(decoded, acq);
    }

    #[test]
    fn test_error_display() {
        let err = MrdError::UnsupportedElementType {
            record: RecordKind::Image,
            element: ElementKind::ComplexI16,
        };
        assert_eq!(err.to_string(), "Element type ComplexI16 is not supported by Image records");

        let err = MrdError::FormatMismatch { expected: SIGNATURE, found: 0 };
        assert!(err.to_string().contains("0x00000000"));
    }
}
