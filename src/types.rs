// src/types.rs
use byteorder::{ByteOrder, LittleEndian};
use bytes::{BufMut, BytesMut};
use num_complex::Complex;
use std::fmt;

use crate::layout::{FieldType, TypeDescriptor};

/// Fixed-width scalar types that appear in header layouts and descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveType {
    Char,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl PrimitiveType {
    /// Width of this type in bytes
    pub const fn size(&self) -> usize {
        match self {
            PrimitiveType::Char => 1,
            PrimitiveType::I16 | PrimitiveType::U16 => 2,
            PrimitiveType::I32 | PrimitiveType::U32 | PrimitiveType::F32 => 4,
            PrimitiveType::I64 | PrimitiveType::U64 | PrimitiveType::F64 => 8,
        }
    }

    /// Check if this is an integer type
    pub fn is_integer(&self) -> bool {
        matches!(self,
            PrimitiveType::I16 | PrimitiveType::U16 |
            PrimitiveType::I32 | PrimitiveType::U32 |
            PrimitiveType::I64 | PrimitiveType::U64
        )
    }

    /// Check if this is a floating point type
    pub fn is_float(&self) -> bool {
        matches!(self, PrimitiveType::F32 | PrimitiveType::F64)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::Char => "char",
            PrimitiveType::I16 => "i16",
            PrimitiveType::U16 => "u16",
            PrimitiveType::I32 => "i32",
            PrimitiveType::U32 => "u32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::U64 => "u64",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
        }
    }
}

/// The two record families of the format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordKind {
    Acquisition,
    Image,
}

/// Closed set of payload element kinds.
///
/// Acquisitions always carry complex samples; images carry any kind except
/// the complex integer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    I16,
    U16,
    I32,
    U32,
    F32,
    F64,
    ComplexI16,
    ComplexI32,
    ComplexF32,
    ComplexF64,
}

impl ElementKind {
    pub const ALL: [ElementKind; 10] = [
        ElementKind::I16,
        ElementKind::U16,
        ElementKind::I32,
        ElementKind::U32,
        ElementKind::F32,
        ElementKind::F64,
        ElementKind::ComplexI16,
        ElementKind::ComplexI32,
        ElementKind::ComplexF32,
        ElementKind::ComplexF64,
    ];

    /// Scalar type of one component (the real part for complex kinds)
    pub const fn component(&self) -> PrimitiveType {
        match self {
            ElementKind::I16 | ElementKind::ComplexI16 => PrimitiveType::I16,
            ElementKind::U16 => PrimitiveType::U16,
            ElementKind::I32 | ElementKind::ComplexI32 => PrimitiveType::I32,
            ElementKind::U32 => PrimitiveType::U32,
            ElementKind::F32 | ElementKind::ComplexF32 => PrimitiveType::F32,
            ElementKind::F64 | ElementKind::ComplexF64 => PrimitiveType::F64,
        }
    }

    pub const fn is_complex(&self) -> bool {
        matches!(self,
            ElementKind::ComplexI16 | ElementKind::ComplexI32 |
            ElementKind::ComplexF32 | ElementKind::ComplexF64
        )
    }

    /// Encoded width of one element in bytes
    pub const fn size(&self) -> usize {
        if self.is_complex() {
            2 * self.component().size()
        } else {
            self.component().size()
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::I16 => "i16",
            ElementKind::U16 => "u16",
            ElementKind::I32 => "i32",
            ElementKind::U32 => "u32",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::ComplexI16 => "complex_i16",
            ElementKind::ComplexI32 => "complex_i32",
            ElementKind::ComplexF32 => "complex_f32",
            ElementKind::ComplexF64 => "complex_f64",
        }
    }

    /// Whether records of `record` kind may carry elements of this kind
    pub fn is_supported_by(&self, record: RecordKind) -> bool {
        match record {
            RecordKind::Acquisition => self.is_complex(),
            RecordKind::Image => !matches!(self, ElementKind::ComplexI16 | ElementKind::ComplexI32),
        }
    }

    /// Descriptor type for one element of this kind.
    ///
    /// Complex kinds map to a two-member compound `{ real, imag }` whose
    /// members share the component width.
    pub fn field_type(&self) -> FieldType {
        let component = self.component();
        if self.is_complex() {
            FieldType::Compound(
                TypeDescriptor::builder(self.name())
                    .member("real", FieldType::Primitive(component))
                    .member("imag", FieldType::Primitive(component))
                    .build(),
            )
        } else {
            FieldType::Primitive(component)
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A payload element with a fixed little-endian encoding
pub trait Element: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    const KIND: ElementKind;

    fn zero() -> Self;

    /// Append the little-endian encoding of `self`
    fn put_le(self, buf: &mut BytesMut);

    /// Decode from exactly `Self::KIND.size()` bytes
    fn read_le(bytes: &[u8]) -> Self;
}

/// Real component types of acquisition samples (stored as `Complex<T>`)
pub trait Sample: Element {
    const COMPLEX_KIND: ElementKind;
}

/// Element types accepted by image records
pub trait ImageElement: Element {}

macro_rules! impl_real_element {
    ($ty:ty, $kind:ident, $put:ident, $read:ident) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;

            fn zero() -> Self {
                0 as $ty
            }

            fn put_le(self, buf: &mut BytesMut) {
                buf.$put(self);
            }

            fn read_le(bytes: &[u8]) -> Self {
                LittleEndian::$read(bytes)
            }
        }
    };
}

impl_real_element!(i16, I16, put_i16_le, read_i16);
impl_real_element!(u16, U16, put_u16_le, read_u16);
impl_real_element!(i32, I32, put_i32_le, read_i32);
impl_real_element!(u32, U32, put_u32_le, read_u32);
impl_real_element!(f32, F32, put_f32_le, read_f32);
impl_real_element!(f64, F64, put_f64_le, read_f64);

impl Sample for i16 {
    const COMPLEX_KIND: ElementKind = ElementKind::ComplexI16;
}

impl Sample for i32 {
    const COMPLEX_KIND: ElementKind = ElementKind::ComplexI32;
}

impl Sample for f32 {
    const COMPLEX_KIND: ElementKind = ElementKind::ComplexF32;
}

impl Sample for f64 {
    const COMPLEX_KIND: ElementKind = ElementKind::ComplexF64;
}

// Interleaved: real then imaginary, each in the component's native width.
impl<T: Sample> Element for Complex<T> {
    const KIND: ElementKind = T::COMPLEX_KIND;

    fn zero() -> Self {
        Complex::new(T::zero(), T::zero())
    }

    fn put_le(self, buf: &mut BytesMut) {
        self.re.put_le(buf);
        self.im.put_le(buf);
    }

    fn read_le(bytes: &[u8]) -> Self {
        let (re, im) = bytes.split_at(T::KIND.size());
        Complex::new(T::read_le(re), T::read_le(im))
    }
}

impl ImageElement for u16 {}
impl ImageElement for i16 {}
impl ImageElement for u32 {}
impl ImageElement for i32 {}
impl ImageElement for f32 {}
impl ImageElement for f64 {}
impl ImageElement for Complex<f32> {}
impl ImageElement for Complex<f64> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_sizes() {
        assert_eq!(ElementKind::I16.size(), 2);
        assert_eq!(ElementKind::U32.size(), 4);
        assert_eq!(ElementKind::F64.size(), 8);
        assert_eq!(ElementKind::ComplexI16.size(), 4);
        assert_eq!(ElementKind::ComplexF32.size(), 8);
        assert_eq!(ElementKind::ComplexF64.size(), 16);
    }

    #[test]
    fn test_record_support() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.is_supported_by(RecordKind::Acquisition), kind.is_complex());
        }
        assert!(ElementKind::I16.is_supported_by(RecordKind::Image));
        assert!(ElementKind::ComplexF64.is_supported_by(RecordKind::Image));
        assert!(!ElementKind::ComplexI16.is_supported_by(RecordKind::Image));
        assert!(!ElementKind::ComplexI32.is_supported_by(RecordKind::Image));
    }

    #[test]
    fn test_complex_field_type() {
        let FieldType::Compound(desc) = ElementKind::ComplexI32.field_type() else {
            panic!("Expected compound");
        };
        assert_eq!(desc.size(), 8);
        assert_eq!(desc.fields()[0].name, "real");
        assert_eq!(desc.fields()[0].offset, 0);
        assert_eq!(desc.fields()[1].name, "imag");
        assert_eq!(desc.fields()[1].offset, 4);

        assert_eq!(ElementKind::U16.field_type(), FieldType::Primitive(PrimitiveType::U16));
    }

    #[test]
    fn test_element_kind_constants() {
        assert_eq!(<i16 as Element>::KIND, ElementKind::I16);
        assert_eq!(<Complex<i16> as Element>::KIND, ElementKind::ComplexI16);
        assert_eq!(<Complex<f64> as Element>::KIND, ElementKind::ComplexF64);
    }

    #[test]
    fn test_complex_interleaved_encoding() {
        let mut buf = BytesMut::new();
        Complex::new(1i16, -2i16).put_le(&mut buf);
        assert_eq!(&buf[..], &[1, 0, 0xFE, 0xFF]);

        let value = <Complex<i16> as Element>::read_le(&buf);
        assert_eq!(value, Complex::new(1, -2));
    }

    #[test]
    fn test_float_encoding() {
        let mut buf = BytesMut::new();
        1.0f32.put_le(&mut buf);
        assert_eq!(&buf[..], &[0, 0, 128, 63]);
        assert_eq!(<f32 as Element>::read_le(&buf[..]), 1.0);
    }
}
