// src/record/mod.rs
//! Acquisition and image records
//!
//! A record owns its header and its payload arrays. The array lengths are
//! derived from the header counts and only change together with them, so
//! a record can never be observed with counts and payload out of step:
//!
//! - [`Acquisition`] - `number_of_samples * trajectory_dimensions` trajectory
//!   values and `number_of_samples * active_channels` complex samples
//! - [`Image`] - `matrix_size[0] * matrix_size[1] * matrix_size[2] * channels`
//!   pixels plus an attribute string
//!
//! [`AcquisitionRecord`] and [`ImageRecord`] wrap the generic records for
//! callers that only learn the element type at run time.

mod acquisition;
mod descriptors;
mod dynamic;
mod image;

pub use acquisition::Acquisition;
pub use descriptors::{acquisition_descriptor, image_descriptor, record_descriptor};
pub use dynamic::{AcquisitionRecord, ImageRecord};
pub use image::Image;

pub(crate) use descriptors::{acquisition_layout, image_layout};

use crate::error::{MrdError, Result};
use crate::header::SIGNATURE;

/// Payload lengths implied by acquisition counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AcquisitionDims {
    pub data_len: usize,
    pub traj_len: usize,
}

pub(crate) fn acquisition_dims(
    number_of_samples: u32,
    active_channels: u32,
    trajectory_dimensions: u32,
) -> Result<AcquisitionDims> {
    if active_channels == 0 && number_of_samples > 0 {
        return Err(MrdError::InvalidDimension(format!(
            "{} samples with zero active channels",
            number_of_samples
        )));
    }
    let data_len = number_of_samples.checked_mul(active_channels).ok_or_else(|| {
        MrdError::InvalidDimension(format!(
            "{} samples x {} channels overflows the u32 data length",
            number_of_samples, active_channels
        ))
    })?;
    let traj_len = number_of_samples.checked_mul(trajectory_dimensions).ok_or_else(|| {
        MrdError::InvalidDimension(format!(
            "{} samples x {} trajectory dimensions overflows the u32 trajectory length",
            number_of_samples, trajectory_dimensions
        ))
    })?;
    Ok(AcquisitionDims {
        data_len: data_len as usize,
        traj_len: traj_len as usize,
    })
}

/// Pixel count implied by an image matrix and channel count
pub(crate) fn image_len(matrix_size: [u32; 3], channels: u32) -> Result<usize> {
    let overflow = || {
        MrdError::InvalidDimension(format!(
            "matrix {:?} x {} channels overflows the u32 pixel count",
            matrix_size, channels
        ))
    };
    let empty_matrix = matrix_size.contains(&0);
    if channels == 0 && !empty_matrix {
        return Err(MrdError::InvalidDimension(format!(
            "matrix {:?} with zero channels",
            matrix_size
        )));
    }
    // Any zero axis empties the image whatever the other axes hold.
    if empty_matrix {
        return Ok(0);
    }
    let len = matrix_size
        .iter()
        .try_fold(channels, |acc, &n| acc.checked_mul(n))
        .ok_or_else(overflow)?;
    Ok(len as usize)
}

/// Reject headers that do not carry the format signature
pub(crate) fn check_signature(found: u32) -> Result<()> {
    if found != SIGNATURE {
        return Err(MrdError::FormatMismatch { expected: SIGNATURE, found });
    }
    Ok(())
}

/// Compare a decoded payload length against the one the header implies
pub(crate) fn check_payload_len(what: &str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(MrdError::InvalidDimension(format!(
            "{} holds {} elements but the header implies {}",
            what, found, expected
        )));
    }
    Ok(())
}
