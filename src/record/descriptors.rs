// src/record/descriptors.rs
use crate::error::{MrdError, Result};
use crate::header::{AcquisitionHeader, ImageHeader};
use crate::layout::{FieldType, LayoutField, TypeDescriptor};
use crate::types::{ElementKind, PrimitiveType, RecordKind};

/// Layout of an acquisition record with `element` data
///
/// # Example
///
/// ```
/// use mrd_records::record::acquisition_descriptor;
/// use mrd_records::{ElementKind, MrdError};
///
/// let desc = acquisition_descriptor(ElementKind::ComplexF32).unwrap();
/// assert_eq!(desc.fields().len(), 3);
///
/// assert!(matches!(
///     acquisition_descriptor(ElementKind::F32),
///     Err(MrdError::UnsupportedElementType { .. })
/// ));
/// ```
pub fn acquisition_descriptor(element: ElementKind) -> Result<TypeDescriptor> {
    record_descriptor(RecordKind::Acquisition, element)
}

/// Layout of an image record with `element` pixels
pub fn image_descriptor(element: ElementKind) -> Result<TypeDescriptor> {
    record_descriptor(RecordKind::Image, element)
}

/// Single dispatch point from `(record, element)` to a record layout
pub fn record_descriptor(record: RecordKind, element: ElementKind) -> Result<TypeDescriptor> {
    if !element.is_supported_by(record) {
        return Err(MrdError::UnsupportedElementType { record, element });
    }
    Ok(match record {
        RecordKind::Acquisition => acquisition_layout(element),
        RecordKind::Image => image_layout(element),
    })
}

// Callers guarantee `element` is valid for the record kind.
pub(crate) fn acquisition_layout(element: ElementKind) -> TypeDescriptor {
    TypeDescriptor::builder("Acquisition")
        .member("head", AcquisitionHeader::field_type())
        .member("traj", FieldType::var_len(FieldType::Primitive(PrimitiveType::F32)))
        .member("data", FieldType::var_len(element.field_type()))
        .build()
}

pub(crate) fn image_layout(element: ElementKind) -> TypeDescriptor {
    TypeDescriptor::builder("Image")
        .member("head", ImageHeader::field_type())
        .member("attribute_string", FieldType::var_len(FieldType::Primitive(PrimitiveType::Char)))
        .member("data", FieldType::var_len(element.field_type()))
        .build()
}
