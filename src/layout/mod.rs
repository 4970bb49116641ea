// src/layout/mod.rs
//! Explicit packed layouts for fixed-size headers
//!
//! Headers are never encoded from their in-memory representation. Each one
//! is declared once through `fixed_layout!`, which produces from a single
//! ordered field list:
//!
//! - the Rust struct itself,
//! - its packed `SIZE` (sum of member widths, no padding),
//! - its [`TypeDescriptor`] (member names, offsets and types),
//! - a [`LayoutField`] impl whose encoder and decoder walk the members in
//!   the same order.
//!
//! Because all four come from the same list they cannot drift apart.

mod descriptor;
mod field;

pub use descriptor::{DescriptorBuilder, FieldDescriptor, FieldType, LeafField, TypeDescriptor, VARLEN_SLOT_SIZE};
pub use field::{LayoutField, Primitive};

macro_rules! fixed_layout {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $name {
            /// Packed size in bytes
            pub const SIZE: usize = 0 $( + <$ty as $crate::layout::LayoutField>::SIZE )*;

            /// Ordered member layout of this header
            pub fn descriptor() -> $crate::layout::TypeDescriptor {
                $crate::layout::TypeDescriptor::builder(stringify!($name))
                    $( .member(stringify!($field), <$ty as $crate::layout::LayoutField>::field_type()) )*
                    .build()
            }
        }

        impl $crate::layout::LayoutField for $name {
            const SIZE: usize = $name::SIZE;

            fn field_type() -> $crate::layout::FieldType {
                $crate::layout::FieldType::Compound(Self::descriptor())
            }

            fn encode(&self, buf: &mut ::bytes::BytesMut) {
                $( $crate::layout::LayoutField::encode(&self.$field, buf); )*
            }

            fn decode(reader: &mut $crate::codec::ByteReader<'_>) -> $crate::error::Result<Self> {
                // Struct expression fields evaluate in the order written.
                Ok($name {
                    $( $field: <$ty as $crate::layout::LayoutField>::decode(reader)?, )*
                })
            }
        }
    };
}

pub(crate) use fixed_layout;
