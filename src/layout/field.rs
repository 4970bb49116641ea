// src/layout/field.rs
use byteorder::{ByteOrder, LittleEndian};
use bytes::{BufMut, BytesMut};

use crate::codec::ByteReader;
use crate::error::Result;
use crate::layout::FieldType;
use crate::types::PrimitiveType;

/// A value with a packed, little-endian header layout
///
/// Implemented for the scalar header field types, for fixed arrays of them,
/// and (through `fixed_layout!`) for whole headers, which is how a nested
/// header such as `EncodingCounters` becomes a member of another one.
pub trait LayoutField: Sized {
    /// Packed size in bytes
    const SIZE: usize;

    fn field_type() -> FieldType;

    fn encode(&self, buf: &mut BytesMut);

    fn decode(reader: &mut ByteReader<'_>) -> Result<Self>;
}

/// Scalar header field types, usable as fixed-array elements
pub trait Primitive: LayoutField + Copy + Default {
    const TYPE: PrimitiveType;
}

macro_rules! impl_primitive_field {
    ($ty:ty, $kind:ident, $put:ident, $read:ident) => {
        impl LayoutField for $ty {
            const SIZE: usize = PrimitiveType::$kind.size();

            fn field_type() -> FieldType {
                FieldType::Primitive(PrimitiveType::$kind)
            }

            fn encode(&self, buf: &mut BytesMut) {
                buf.$put(*self);
            }

            fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
                Ok(LittleEndian::$read(reader.take(Self::SIZE, PrimitiveType::$kind.name())?))
            }
        }

        impl Primitive for $ty {
            const TYPE: PrimitiveType = PrimitiveType::$kind;
        }
    };
}

impl_primitive_field!(u16, U16, put_u16_le, read_u16);
impl_primitive_field!(i16, I16, put_i16_le, read_i16);
impl_primitive_field!(u32, U32, put_u32_le, read_u32);
impl_primitive_field!(i32, I32, put_i32_le, read_i32);
impl_primitive_field!(u64, U64, put_u64_le, read_u64);
impl_primitive_field!(i64, I64, put_i64_le, read_i64);
impl_primitive_field!(f32, F32, put_f32_le, read_f32);
impl_primitive_field!(f64, F64, put_f64_le, read_f64);

impl<P: Primitive, const N: usize> LayoutField for [P; N] {
    const SIZE: usize = P::SIZE * N;

    fn field_type() -> FieldType {
        FieldType::Array {
            element: P::TYPE,
            len: N,
        }
    }

    fn encode(&self, buf: &mut BytesMut) {
        for value in self {
            value.encode(buf);
        }
    }

    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let mut out = [P::default(); N];
        for slot in out.iter_mut() {
            *slot = P::decode(reader)?;
        }
        Ok(out)
    }
}
