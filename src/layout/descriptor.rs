// src/layout/descriptor.rs
use crate::types::PrimitiveType;

/// Slot occupied by a variable-length member inside a record descriptor:
/// a `u64` element count followed by a `u64` handle, filled in by the
/// persistence layer.
pub const VARLEN_SLOT_SIZE: usize = 16;

/// Type of one member in a [`TypeDescriptor`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldType {
    Primitive(PrimitiveType),
    /// Fixed-length one-dimensional array
    Array { element: PrimitiveType, len: usize },
    /// Nested fixed-layout type spliced in at the member's offset
    Compound(TypeDescriptor),
    /// Variable-length sequence of the inner type
    VarLen(Box<FieldType>),
}

impl FieldType {
    pub fn var_len(inner: FieldType) -> Self {
        FieldType::VarLen(Box::new(inner))
    }

    /// Bytes this member occupies inside its parent
    pub fn size(&self) -> usize {
        match self {
            FieldType::Primitive(p) => p.size(),
            FieldType::Array { element, len } => element.size() * len,
            FieldType::Compound(desc) => desc.size(),
            FieldType::VarLen(_) => VARLEN_SLOT_SIZE,
        }
    }

    /// Fixed array length, if this is an array member
    pub fn array_len(&self) -> Option<usize> {
        match self {
            FieldType::Array { len, .. } => Some(*len),
            _ => None,
        }
    }

    pub fn is_variable_length(&self) -> bool {
        matches!(self, FieldType::VarLen(_))
    }
}

/// One member of a compound layout
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDescriptor {
    pub name: &'static str,
    /// Byte offset from the start of the enclosing type
    pub offset: usize,
    pub ty: FieldType,
}

/// A flattened leaf of a descriptor with its absolute offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafField {
    /// Dotted path such as `idx.kspace_encode_step_1`
    pub path: String,
    pub offset: usize,
    pub ty: FieldType,
}

/// Packed, ordered layout of a fixed-size type
///
/// This is the only surface an external persistence layer needs: it can
/// build its own compound and variable-length types from the member list.
/// Descriptors are plain values, so building the same one twice yields
/// equal results.
///
/// # Example
///
/// ```
/// use mrd_records::layout::{FieldType, TypeDescriptor};
/// use mrd_records::types::PrimitiveType;
///
/// let desc = TypeDescriptor::builder("Pair")
///     .member("stream", FieldType::Primitive(PrimitiveType::U32))
///     .member("time_stamp", FieldType::Primitive(PrimitiveType::U64))
///     .build();
///
/// assert_eq!(desc.size(), 12);
/// assert_eq!(desc.field("time_stamp").unwrap().offset, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeDescriptor {
    name: &'static str,
    size: usize,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn builder(name: &'static str) -> DescriptorBuilder {
        DescriptorBuilder {
            name,
            offset: 0,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Total packed size in bytes
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flatten nested compounds into leaves with absolute offsets
    pub fn leaves(&self) -> Vec<LeafField> {
        let mut out = Vec::new();
        self.collect_leaves("", 0, &mut out);
        out
    }

    fn collect_leaves(&self, prefix: &str, base: usize, out: &mut Vec<LeafField>) {
        for field in &self.fields {
            let path = if prefix.is_empty() {
                field.name.to_string()
            } else {
                format!("{}.{}", prefix, field.name)
            };
            match &field.ty {
                FieldType::Compound(inner) => {
                    inner.collect_leaves(&path, base + field.offset, out)
                }
                ty => out.push(LeafField {
                    path,
                    offset: base + field.offset,
                    ty: ty.clone(),
                }),
            }
        }
    }
}

/// Appends members at consecutive packed offsets
#[derive(Debug)]
pub struct DescriptorBuilder {
    name: &'static str,
    offset: usize,
    fields: Vec<FieldDescriptor>,
}

impl DescriptorBuilder {
    pub fn member(mut self, name: &'static str, ty: FieldType) -> Self {
        let size = ty.size();
        self.fields.push(FieldDescriptor {
            name,
            offset: self.offset,
            ty,
        });
        self.offset += size;
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            size: self.offset,
            fields: self.fields,
        }
    }
}
