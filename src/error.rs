// src/error.rs
use thiserror::Error;

use crate::types::{ElementKind, RecordKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MrdError {
    #[error("Signature mismatch: expected {expected:#010x}, found {found:#010x}")]
    FormatMismatch { expected: u32, found: u32 },

    #[error("Truncated input while reading {context}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Index {index} out of range for {field} (length {len})")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Element type {element:?} is not supported by {record:?} records")]
    UnsupportedElementType {
        record: RecordKind,
        element: ElementKind,
    },

    #[error("Invalid UTF-8 in attribute string")]
    InvalidUtf8,
}

pub type Result<T> = std::result::Result<T, MrdError>;
