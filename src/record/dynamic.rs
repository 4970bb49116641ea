// src/record/dynamic.rs
use bytes::{Bytes, BytesMut};
use num_complex::Complex;

use crate::error::{MrdError, Result};
use crate::header::{AcquisitionHeader, ImageHeader};
use crate::layout::TypeDescriptor;
use crate::record::{Acquisition, Image};
use crate::types::{ElementKind, RecordKind};

/// An acquisition whose sample type is chosen at run time
#[derive(Debug, Clone, PartialEq)]
pub enum AcquisitionRecord {
    I16(Acquisition<i16>),
    I32(Acquisition<i32>),
    F32(Acquisition<f32>),
    F64(Acquisition<f64>),
}

macro_rules! for_each_acquisition {
    ($value:expr, $acq:ident => $body:expr) => {
        match $value {
            AcquisitionRecord::I16($acq) => $body,
            AcquisitionRecord::I32($acq) => $body,
            AcquisitionRecord::F32($acq) => $body,
            AcquisitionRecord::F64($acq) => $body,
        }
    };
}

impl AcquisitionRecord {
    /// Empty acquisition carrying `element` data (one of the complex kinds)
    pub fn new(element: ElementKind) -> Result<Self> {
        Ok(match element {
            ElementKind::ComplexI16 => AcquisitionRecord::I16(Acquisition::new()),
            ElementKind::ComplexI32 => AcquisitionRecord::I32(Acquisition::new()),
            ElementKind::ComplexF32 => AcquisitionRecord::F32(Acquisition::new()),
            ElementKind::ComplexF64 => AcquisitionRecord::F64(Acquisition::new()),
            _ => return Err(unsupported(RecordKind::Acquisition, element)),
        })
    }

    /// Decode an acquisition whose data element kind is `element`
    pub fn deserialize(element: ElementKind, bytes: &[u8]) -> Result<Self> {
        Ok(match element {
            ElementKind::ComplexI16 => AcquisitionRecord::I16(Acquisition::deserialize(bytes)?),
            ElementKind::ComplexI32 => AcquisitionRecord::I32(Acquisition::deserialize(bytes)?),
            ElementKind::ComplexF32 => AcquisitionRecord::F32(Acquisition::deserialize(bytes)?),
            ElementKind::ComplexF64 => AcquisitionRecord::F64(Acquisition::deserialize(bytes)?),
            _ => return Err(unsupported(RecordKind::Acquisition, element)),
        })
    }

    pub fn element_kind(&self) -> ElementKind {
        for_each_acquisition!(self, acq => acq.element_kind())
    }

    pub fn head(&self) -> &AcquisitionHeader {
        for_each_acquisition!(self, acq => acq.head())
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        crate::record::acquisition_layout(self.element_kind())
    }

    pub fn serialized_len(&self) -> usize {
        for_each_acquisition!(self, acq => acq.serialized_len())
    }

    pub fn serialize(&self) -> Bytes {
        for_each_acquisition!(self, acq => acq.serialize())
    }

    pub fn serialize_into(&self, buf: &mut BytesMut) {
        for_each_acquisition!(self, acq => acq.serialize_into(buf))
    }
}

macro_rules! impl_from_record {
    ($wrapper:ident, $record:ident, $($variant:ident => $elem:ty),* $(,)?) => {
        $(
            impl From<$record<$elem>> for $wrapper {
                fn from(record: $record<$elem>) -> Self {
                    $wrapper::$variant(record)
                }
            }
        )*
    };
}

impl_from_record!(AcquisitionRecord, Acquisition,
    I16 => i16,
    I32 => i32,
    F32 => f32,
    F64 => f64,
);

/// An image whose pixel type is chosen at run time
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRecord {
    U16(Image<u16>),
    I16(Image<i16>),
    U32(Image<u32>),
    I32(Image<i32>),
    F32(Image<f32>),
    F64(Image<f64>),
    ComplexF32(Image<Complex<f32>>),
    ComplexF64(Image<Complex<f64>>),
}

macro_rules! for_each_image {
    ($value:expr, $image:ident => $body:expr) => {
        match $value {
            ImageRecord::U16($image) => $body,
            ImageRecord::I16($image) => $body,
            ImageRecord::U32($image) => $body,
            ImageRecord::I32($image) => $body,
            ImageRecord::F32($image) => $body,
            ImageRecord::F64($image) => $body,
            ImageRecord::ComplexF32($image) => $body,
            ImageRecord::ComplexF64($image) => $body,
        }
    };
}

impl ImageRecord {
    /// Empty image with `element` pixels
    pub fn new(element: ElementKind) -> Result<Self> {
        Ok(match element {
            ElementKind::U16 => ImageRecord::U16(Image::new()),
            ElementKind::I16 => ImageRecord::I16(Image::new()),
            ElementKind::U32 => ImageRecord::U32(Image::new()),
            ElementKind::I32 => ImageRecord::I32(Image::new()),
            ElementKind::F32 => ImageRecord::F32(Image::new()),
            ElementKind::F64 => ImageRecord::F64(Image::new()),
            ElementKind::ComplexF32 => ImageRecord::ComplexF32(Image::new()),
            ElementKind::ComplexF64 => ImageRecord::ComplexF64(Image::new()),
            ElementKind::ComplexI16 | ElementKind::ComplexI32 => {
                return Err(unsupported(RecordKind::Image, element))
            }
        })
    }

    /// Decode an image whose pixel kind is `element`
    pub fn deserialize(element: ElementKind, bytes: &[u8]) -> Result<Self> {
        Ok(match element {
            ElementKind::U16 => ImageRecord::U16(Image::deserialize(bytes)?),
            ElementKind::I16 => ImageRecord::I16(Image::deserialize(bytes)?),
            ElementKind::U32 => ImageRecord::U32(Image::deserialize(bytes)?),
            ElementKind::I32 => ImageRecord::I32(Image::deserialize(bytes)?),
            ElementKind::F32 => ImageRecord::F32(Image::deserialize(bytes)?),
            ElementKind::F64 => ImageRecord::F64(Image::deserialize(bytes)?),
            ElementKind::ComplexF32 => ImageRecord::ComplexF32(Image::deserialize(bytes)?),
            ElementKind::ComplexF64 => ImageRecord::ComplexF64(Image::deserialize(bytes)?),
            ElementKind::ComplexI16 | ElementKind::ComplexI32 => {
                return Err(unsupported(RecordKind::Image, element))
            }
        })
    }

    pub fn element_kind(&self) -> ElementKind {
        for_each_image!(self, image => image.element_kind())
    }

    pub fn head(&self) -> &ImageHeader {
        for_each_image!(self, image => image.head())
    }

    pub fn attribute_string(&self) -> &str {
        for_each_image!(self, image => image.attribute_string())
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        crate::record::image_layout(self.element_kind())
    }

    pub fn serialized_len(&self) -> usize {
        for_each_image!(self, image => image.serialized_len())
    }

    pub fn serialize(&self) -> Bytes {
        for_each_image!(self, image => image.serialize())
    }

    pub fn serialize_into(&self, buf: &mut BytesMut) {
        for_each_image!(self, image => image.serialize_into(buf))
    }
}

impl_from_record!(ImageRecord, Image,
    U16 => u16,
    I16 => i16,
    U32 => u32,
    I32 => i32,
    F32 => f32,
    F64 => f64,
    ComplexF32 => Complex<f32>,
    ComplexF64 => Complex<f64>,
);

fn unsupported(record: RecordKind, element: ElementKind) -> MrdError {
    MrdError::UnsupportedElementType { record, element }
}
