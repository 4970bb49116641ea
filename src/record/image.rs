// src/record/image.rs
use bytes::{Bytes, BytesMut};

use crate::codec::{self, array_encoded_len, put_array, put_string, ByteReader, Record};
use crate::error::{MrdError, Result};
use crate::header::{ImageFlag, ImageHeader};
use crate::layout::{LayoutField, TypeDescriptor};
use crate::record::{check_payload_len, check_signature, image_layout, image_len};
use crate::types::{ElementKind, ImageElement};
use crate::utils::attribute_string_len;

/// One reconstructed image: header, free-form attribute string and pixels
///
/// Pixels are stored x fastest, then y, z and channel:
/// `x + X * (y + Y * (z + Z * c))` for a matrix of `[X, Y, Z]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T: ImageElement> {
    head: ImageHeader,
    attribute_string: String,
    data: Vec<T>,
}

impl<T: ImageElement> Default for Image<T> {
    fn default() -> Self {
        Image {
            head: ImageHeader::default(),
            attribute_string: String::new(),
            data: Vec::new(),
        }
    }
}

impl<T: ImageElement> Image<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimensions(matrix_size: [u32; 3], channels: u32) -> Result<Self> {
        let mut image = Self::new();
        image.resize(matrix_size, channels)?;
        Ok(image)
    }

    /// Assemble an image from a header and matching payloads.
    ///
    /// `head.attribute_string_len` must equal the byte length of `attribute_string`.
    pub fn from_parts(head: ImageHeader, attribute_string: String, data: Vec<T>) -> Result<Self> {
        check_signature(head.signature)?;
        let len = image_len(head.matrix_size, head.channels)?;
        check_payload_len("data", len, data.len())?;
        check_payload_len(
            "attribute string",
            head.attribute_string_len as usize,
            attribute_string.len(),
        )?;
        Ok(Image { head, attribute_string, data })
    }

    pub fn into_parts(self) -> (ImageHeader, String, Vec<T>) {
        (self.head, self.attribute_string, self.data)
    }

    pub fn head(&self) -> &ImageHeader {
        &self.head
    }

    /// Replace the header, resizing the pixel data to its matrix.
    ///
    /// `attribute_string_len` always tracks the owned attribute string, so
    /// the incoming value of that field is ignored.
    pub fn set_head(&mut self, mut head: ImageHeader) -> Result<()> {
        check_signature(head.signature)?;
        let len = image_len(head.matrix_size, head.channels)?;
        self.data.resize(len, T::zero());
        head.attribute_string_len = self.head.attribute_string_len;
        self.head = head;
        Ok(())
    }

    pub fn modify_head<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ImageHeader),
    {
        let mut head = self.head;
        f(&mut head);
        self.set_head(head)
    }

    pub fn matrix_size(&self) -> [u32; 3] {
        self.head.matrix_size
    }

    pub fn channels(&self) -> u32 {
        self.head.channels
    }

    /// Resize the matrix and channel count, zero-filling new pixels
    pub fn resize(&mut self, matrix_size: [u32; 3], channels: u32) -> Result<()> {
        let len = image_len(matrix_size, channels)?;
        self.data.resize(len, T::zero());
        self.head.matrix_size = matrix_size;
        self.head.channels = channels;
        Ok(())
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn pixel(&self, x: usize, y: usize, z: usize, channel: usize) -> Result<T> {
        let index = self.pixel_index(x, y, z, channel)?;
        Ok(self.data[index])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, z: usize, channel: usize, value: T) -> Result<()> {
        let index = self.pixel_index(x, y, z, channel)?;
        self.data[index] = value;
        Ok(())
    }

    pub fn attribute_string(&self) -> &str {
        &self.attribute_string
    }

    pub fn set_attribute_string(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.head.attribute_string_len = attribute_string_len(&value)?;
        self.attribute_string = value;
        Ok(())
    }

    pub fn is_flag_set(&self, flag: ImageFlag) -> bool {
        self.head.is_flag_set(flag)
    }

    pub fn set_flag(&mut self, flag: ImageFlag) {
        self.head.set_flag(flag);
    }

    pub fn clear_flag(&mut self, flag: ImageFlag) {
        self.head.clear_flag(flag);
    }

    pub fn element_kind(&self) -> ElementKind {
        T::KIND
    }

    /// Record layout for this pixel type
    pub fn descriptor() -> TypeDescriptor {
        image_layout(T::KIND)
    }

    pub fn serialized_len(&self) -> usize {
        self.encoded_len()
    }

    pub fn serialize(&self) -> Bytes {
        codec::serialize(self)
    }

    pub fn serialize_into(&self, buf: &mut BytesMut) {
        buf.reserve(self.encoded_len());
        self.encode(buf);
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        codec::deserialize(bytes)
    }

    pub fn deserialize_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
        codec::deserialize_prefix(bytes)
    }

    /// Overwrite this image with one decoded from `bytes`, all or nothing
    pub fn read_from_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        let (decoded, consumed) = Self::deserialize_prefix(bytes)?;
        *self = decoded;
        Ok(consumed)
    }

    fn pixel_index(&self, x: usize, y: usize, z: usize, channel: usize) -> Result<usize> {
        let [nx, ny, nz] = self.head.matrix_size.map(|n| n as usize);
        let nc = self.head.channels as usize;
        for (field, index, len) in [("x", x, nx), ("y", y, ny), ("z", z, nz), ("channel", channel, nc)] {
            if index >= len {
                return Err(MrdError::IndexOutOfRange { field, index, len });
            }
        }
        Ok(x + nx * (y + ny * (z + nz * channel)))
    }
}

impl<T: ImageElement> Record for Image<T> {
    fn encoded_len(&self) -> usize {
        ImageHeader::SIZE + 4 + self.attribute_string.len() + array_encoded_len::<T>(self.data.len())
    }

    fn encode(&self, buf: &mut BytesMut) {
        self.head.encode(buf);
        put_string(buf, &self.attribute_string);
        put_array(buf, &self.data);
    }

    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let head: ImageHeader = reader.read_header()?;
        let len = image_len(head.matrix_size, head.channels)?;

        let attribute_string = reader.read_string("attribute string")?;
        check_payload_len(
            "attribute string",
            head.attribute_string_len as usize,
            attribute_string.len(),
        )?;
        let data: Vec<T> = reader.read_array("data")?;
        check_payload_len("data", len, data.len())?;

        Ok(Image { head, attribute_string, data })
    }
}
