// src/record/acquisition.rs
use bytes::{Bytes, BytesMut};
use num_complex::Complex;

use crate::codec::{self, array_encoded_len, put_array, ByteReader, Record};
use crate::error::{MrdError, Result};
use crate::header::{AcquisitionFlag, AcquisitionHeader, EncodingCounters};
use crate::layout::{LayoutField, TypeDescriptor};
use crate::record::{acquisition_dims, acquisition_layout, check_payload_len, check_signature};
use crate::types::{Element, ElementKind, Sample};

/// One raw-data readout: header, k-space trajectory and complex samples
///
/// `data` is channel-major: sample `s` of channel `c` lives at
/// `s + c * number_of_samples`. `traj` is sample-major: dimension `d` of
/// sample `s` lives at `d + s * trajectory_dimensions`.
///
/// # Example
///
/// ```
/// use mrd_records::{Acquisition, AcquisitionFlag};
/// use num_complex::Complex;
///
/// let mut acq = Acquisition::<f32>::new();
/// acq.resize(128, 4).unwrap();
/// acq.set_flag(AcquisitionFlag::FirstInSlice);
/// acq.set_sample(5, 2, Complex::new(1.0, -1.0)).unwrap();
///
/// assert_eq!(acq.data().len(), 512);
/// assert_eq!(acq.channel_data(2).unwrap()[5], Complex::new(1.0, -1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Acquisition<T: Sample> {
    head: AcquisitionHeader,
    traj: Vec<f32>,
    data: Vec<Complex<T>>,
}

impl<T: Sample> Default for Acquisition<T> {
    fn default() -> Self {
        Acquisition {
            head: AcquisitionHeader::default(),
            traj: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl<T: Sample> Acquisition<T> {
    /// Empty acquisition with a default header
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimensions(
        number_of_samples: u32,
        active_channels: u32,
        trajectory_dimensions: u32,
    ) -> Result<Self> {
        let mut acq = Self::new();
        acq.resize_with_trajectory(number_of_samples, active_channels, trajectory_dimensions)?;
        Ok(acq)
    }

    /// Assemble an acquisition from a header and matching payloads
    pub fn from_parts(head: AcquisitionHeader, traj: Vec<f32>, data: Vec<Complex<T>>) -> Result<Self> {
        check_signature(head.signature)?;
        let dims = acquisition_dims(
            head.number_of_samples,
            head.active_channels,
            head.trajectory_dimensions,
        )?;
        check_payload_len("trajectory", dims.traj_len, traj.len())?;
        check_payload_len("data", dims.data_len, data.len())?;
        Ok(Acquisition { head, traj, data })
    }

    pub fn into_parts(self) -> (AcquisitionHeader, Vec<f32>, Vec<Complex<T>>) {
        (self.head, self.traj, self.data)
    }

    pub fn head(&self) -> &AcquisitionHeader {
        &self.head
    }

    /// Replace the header, resizing the payloads to its counts.
    ///
    /// Fails without modifying the record if the signature is foreign or
    /// the counts are invalid.
    pub fn set_head(&mut self, head: AcquisitionHeader) -> Result<()> {
        check_signature(head.signature)?;
        let dims = acquisition_dims(
            head.number_of_samples,
            head.active_channels,
            head.trajectory_dimensions,
        )?;
        self.traj.resize(dims.traj_len, 0.0);
        self.data.resize(dims.data_len, <Complex<T> as Element>::zero());
        self.head = head;
        Ok(())
    }

    /// Edit a copy of the header and apply it through [`Acquisition::set_head`]
    pub fn modify_head<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AcquisitionHeader),
    {
        let mut head = self.head;
        f(&mut head);
        self.set_head(head)
    }

    pub fn number_of_samples(&self) -> u32 {
        self.head.number_of_samples
    }

    pub fn active_channels(&self) -> u32 {
        self.head.active_channels
    }

    pub fn available_channels(&self) -> u32 {
        self.head.available_channels
    }

    pub fn trajectory_dimensions(&self) -> u32 {
        self.head.trajectory_dimensions
    }

    /// Resize sample and channel counts, keeping the trajectory dimensions
    pub fn resize(&mut self, number_of_samples: u32, active_channels: u32) -> Result<()> {
        let trajectory_dimensions = self.head.trajectory_dimensions;
        self.resize_with_trajectory(number_of_samples, active_channels, trajectory_dimensions)
    }

    /// Resize all three counts at once.
    ///
    /// Existing elements are kept as a prefix and new ones are zero. The
    /// header counts are only written after both payloads have been resized.
    pub fn resize_with_trajectory(
        &mut self,
        number_of_samples: u32,
        active_channels: u32,
        trajectory_dimensions: u32,
    ) -> Result<()> {
        let dims = acquisition_dims(number_of_samples, active_channels, trajectory_dimensions)?;
        self.traj.resize(dims.traj_len, 0.0);
        self.data.resize(dims.data_len, <Complex<T> as Element>::zero());

        self.head.number_of_samples = number_of_samples;
        self.head.active_channels = active_channels;
        self.head.trajectory_dimensions = trajectory_dimensions;
        Ok(())
    }

    pub fn set_trajectory_dimensions(&mut self, trajectory_dimensions: u32) -> Result<()> {
        let (samples, channels) = (self.head.number_of_samples, self.head.active_channels);
        self.resize_with_trajectory(samples, channels, trajectory_dimensions)
    }

    pub fn data(&self) -> &[Complex<T>] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [Complex<T>] {
        &mut self.data
    }

    pub fn traj(&self) -> &[f32] {
        &self.traj
    }

    pub fn traj_mut(&mut self) -> &mut [f32] {
        &mut self.traj
    }

    pub fn sample(&self, sample: usize, channel: usize) -> Result<Complex<T>> {
        let index = self.sample_index(sample, channel)?;
        Ok(self.data[index])
    }

    pub fn set_sample(&mut self, sample: usize, channel: usize, value: Complex<T>) -> Result<()> {
        let index = self.sample_index(sample, channel)?;
        self.data[index] = value;
        Ok(())
    }

    /// All samples of one channel
    pub fn channel_data(&self, channel: usize) -> Result<&[Complex<T>]> {
        let range = self.channel_range(channel)?;
        Ok(&self.data[range])
    }

    pub fn channel_data_mut(&mut self, channel: usize) -> Result<&mut [Complex<T>]> {
        let range = self.channel_range(channel)?;
        Ok(&mut self.data[range])
    }

    /// Trajectory coordinates of one sample
    pub fn trajectory_point(&self, sample: usize) -> Result<&[f32]> {
        let samples = self.head.number_of_samples as usize;
        if sample >= samples {
            return Err(MrdError::IndexOutOfRange { field: "sample", index: sample, len: samples });
        }
        let dims = self.head.trajectory_dimensions as usize;
        Ok(&self.traj[sample * dims..(sample + 1) * dims])
    }

    pub fn idx(&self) -> &EncodingCounters {
        &self.head.idx
    }

    pub fn idx_mut(&mut self) -> &mut EncodingCounters {
        &mut self.head.idx
    }

    pub fn is_flag_set(&self, flag: AcquisitionFlag) -> bool {
        self.head.is_flag_set(flag)
    }

    pub fn set_flag(&mut self, flag: AcquisitionFlag) {
        self.head.set_flag(flag);
    }

    pub fn clear_flag(&mut self, flag: AcquisitionFlag) {
        self.head.clear_flag(flag);
    }

    pub fn clear_all_flags(&mut self) {
        self.head.clear_all_flags();
    }

    /// Element kind of the data payload
    pub fn element_kind(&self) -> ElementKind {
        T::COMPLEX_KIND
    }

    /// Record layout for this sample type
    pub fn descriptor() -> TypeDescriptor {
        acquisition_layout(T::COMPLEX_KIND)
    }

    /// Number of bytes [`Acquisition::serialize`] produces
    pub fn serialized_len(&self) -> usize {
        self.encoded_len()
    }

    pub fn serialize(&self) -> Bytes {
        codec::serialize(self)
    }

    /// Append the encoded record to `buf`
    pub fn serialize_into(&self, buf: &mut BytesMut) {
        buf.reserve(self.encoded_len());
        self.encode(buf);
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        codec::deserialize(bytes)
    }

    /// Decode one record from the front of `bytes`, returning it and the bytes consumed
    pub fn deserialize_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
        codec::deserialize_prefix(bytes)
    }

    /// Overwrite this record with one decoded from `bytes`.
    ///
    /// Either the whole record is replaced or, on error, nothing is.
    /// Returns the number of bytes consumed.
    pub fn read_from_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        let (decoded, consumed) = Self::deserialize_prefix(bytes)?;
        *self = decoded;
        Ok(consumed)
    }

    fn sample_index(&self, sample: usize, channel: usize) -> Result<usize> {
        let samples = self.head.number_of_samples as usize;
        let channels = self.head.active_channels as usize;
        if sample >= samples {
            return Err(MrdError::IndexOutOfRange { field: "sample", index: sample, len: samples });
        }
        if channel >= channels {
            return Err(MrdError::IndexOutOfRange { field: "channel", index: channel, len: channels });
        }
        Ok(sample + channel * samples)
    }

    fn channel_range(&self, channel: usize) -> Result<std::ops::Range<usize>> {
        let samples = self.head.number_of_samples as usize;
        let channels = self.head.active_channels as usize;
        if channel >= channels {
            return Err(MrdError::IndexOutOfRange { field: "channel", index: channel, len: channels });
        }
        Ok(channel * samples..(channel + 1) * samples)
    }
}

impl<T: Sample> Record for Acquisition<T> {
    fn encoded_len(&self) -> usize {
        AcquisitionHeader::SIZE
            + array_encoded_len::<f32>(self.traj.len())
            + array_encoded_len::<Complex<T>>(self.data.len())
    }

    fn encode(&self, buf: &mut BytesMut) {
        self.head.encode(buf);
        put_array(buf, &self.traj);
        put_array(buf, &self.data);
    }

    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let head: AcquisitionHeader = reader.read_header()?;
        let dims = acquisition_dims(
            head.number_of_samples,
            head.active_channels,
            head.trajectory_dimensions,
        )?;

        let traj: Vec<f32> = reader.read_array("trajectory")?;
        check_payload_len("trajectory", dims.traj_len, traj.len())?;
        let data: Vec<Complex<T>> = reader.read_array("data")?;
        check_payload_len("data", dims.data_len, data.len())?;

        Ok(Acquisition { head, traj, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let acq = Acquisition::<i16>::new();
        assert_eq!(acq.number_of_samples(), 0);
        assert_eq!(acq.active_channels(), 1);
        assert_eq!(acq.available_channels(), 1);
        assert!(acq.data().is_empty());
        assert!(acq.traj().is_empty());
        assert_eq!(acq.element_kind(), ElementKind::ComplexI16);
    }

    #[test]
    fn test_resize_72_by_32() {
        let mut acq = Acquisition::<i16>::new();
        acq.resize(72, 32).unwrap();

        assert_eq!(acq.number_of_samples(), 72);
        assert_eq!(acq.active_channels(), 32);
        assert_eq!(acq.data().len(), 2304);
        assert!(acq.data().iter().all(|v| *v == Complex::new(0, 0)));
        assert!(acq.traj().is_empty());
    }

    #[test]
    fn test_resize_keeps_prefix_and_trajectory_dims() {
        let mut acq = Acquisition::<f32>::with_dimensions(4, 1, 2).unwrap();
        acq.data_mut()[1] = Complex::new(3.0, 4.0);
        acq.traj_mut()[0] = 0.5;

        acq.resize(8, 2).unwrap();
        assert_eq!(acq.trajectory_dimensions(), 2);
        assert_eq!(acq.traj().len(), 16);
        assert_eq!(acq.data().len(), 16);
        assert_eq!(acq.data()[1], Complex::new(3.0, 4.0));
        assert_eq!(acq.traj()[0], 0.5);
        assert_eq!(acq.data()[15], Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_failed_resize_leaves_record_untouched() {
        let mut acq = Acquisition::<f64>::with_dimensions(16, 2, 3).unwrap();
        let before = acq.clone();

        assert!(matches!(acq.resize(10, 0), Err(MrdError::InvalidDimension(_))));
        assert!(matches!(acq.resize(u32::MAX, 4), Err(MrdError::InvalidDimension(_))));
        assert_eq!(acq, before);
    }

    #[test]
    fn test_set_trajectory_dimensions() {
        let mut acq = Acquisition::<f32>::with_dimensions(10, 2, 0).unwrap();
        acq.set_trajectory_dimensions(3).unwrap();
        assert_eq!(acq.traj().len(), 30);
        assert_eq!(acq.data().len(), 20);
        assert_eq!(acq.trajectory_point(9).unwrap().len(), 3);
        assert!(acq.trajectory_point(10).is_err());
    }

    #[test]
    fn test_sample_indexing_is_channel_major() {
        let mut acq = Acquisition::<i32>::with_dimensions(3, 2, 0).unwrap();
        acq.set_sample(1, 1, Complex::new(7, 8)).unwrap();

        assert_eq!(acq.data()[1 + 3], Complex::new(7, 8));
        assert_eq!(acq.sample(1, 1).unwrap(), Complex::new(7, 8));
        assert_eq!(acq.channel_data(1).unwrap(), &[Complex::new(0, 0), Complex::new(7, 8), Complex::new(0, 0)]);

        assert_eq!(
            acq.sample(3, 0),
            Err(MrdError::IndexOutOfRange { field: "sample", index: 3, len: 3 })
        );
        assert_eq!(
            acq.set_sample(0, 2, Complex::new(1, 1)),
            Err(MrdError::IndexOutOfRange { field: "channel", index: 2, len: 2 })
        );
    }

    #[test]
    fn test_set_head_resizes_payloads() {
        let mut acq = Acquisition::<f32>::new();
        let mut head = AcquisitionHeader::new();
        head.number_of_samples = 64;
        head.active_channels = 4;
        head.trajectory_dimensions = 2;
        head.scan_counter = 12;

        acq.set_head(head).unwrap();
        assert_eq!(acq.head().scan_counter, 12);
        assert_eq!(acq.data().len(), 256);
        assert_eq!(acq.traj().len(), 128);
    }

    #[test]
    fn test_set_head_rejects_foreign_signature() {
        let mut acq = Acquisition::<f32>::with_dimensions(2, 1, 0).unwrap();
        let mut head = *acq.head();
        head.signature = 0;
        head.number_of_samples = 100;

        assert!(matches!(acq.set_head(head), Err(MrdError::FormatMismatch { found: 0, .. })));
        assert_eq!(acq.number_of_samples(), 2);
        assert_eq!(acq.data().len(), 2);
    }

    #[test]
    fn test_modify_head() {
        let mut acq = Acquisition::<i16>::new();
        acq.modify_head(|h| {
            h.number_of_samples = 8;
            h.active_channels = 2;
            h.idx.slice = 3;
        })
        .unwrap();
        assert_eq!(acq.data().len(), 16);
        assert_eq!(acq.idx().slice, 3);

        acq.idx_mut().repetition = 5;
        assert_eq!(acq.head().idx.repetition, 5);
    }

    #[test]
    fn test_from_parts_validates_lengths() {
        let mut head = AcquisitionHeader::new();
        head.number_of_samples = 2;

        let ok = Acquisition::<f32>::from_parts(head, vec![], vec![Complex::new(1.0, 0.0); 2]).unwrap();
        assert_eq!(ok.sample(1, 0).unwrap(), Complex::new(1.0, 0.0));

        let bad = Acquisition::<f32>::from_parts(head, vec![], vec![Complex::new(1.0, 0.0); 3]);
        assert!(matches!(bad, Err(MrdError::InvalidDimension(_))));
    }

    #[test]
    fn test_flags_delegate_to_header() {
        let mut acq = Acquisition::<f32>::new();
        acq.set_flag(AcquisitionFlag::IsNoiseMeasurement);
        assert!(acq.is_flag_set(AcquisitionFlag::IsNoiseMeasurement));
        assert_eq!(acq.head().flags, 1 << 18);
        acq.clear_flag(AcquisitionFlag::IsNoiseMeasurement);
        assert_eq!(acq.head().flags, 0);
    }

    #[test]
    fn test_serialize_layout() {
        let mut acq = Acquisition::<i16>::with_dimensions(2, 1, 1).unwrap();
        acq.data_mut()[1] = Complex::new(-1, 2);
        acq.traj_mut()[1] = 1.0;

        let bytes = acq.serialize();
        assert_eq!(bytes.len(), acq.serialized_len());
        assert_eq!(bytes.len(), 408 + 4 + 2 * 4 + 4 + 2 * 4);

        let traj = &bytes[408..];
        assert_eq!(&traj[0..4], &2u32.to_le_bytes());
        assert_eq!(&traj[8..12], &1.0f32.to_le_bytes());
        let data = &traj[12..];
        assert_eq!(&data[0..4], &2u32.to_le_bytes());
        assert_eq!(&data[8..12], &[0xFF, 0xFF, 2, 0]);
    }

    #[test]
    fn test_round_trip() {
        let mut acq = Acquisition::<f64>::with_dimensions(5, 3, 2).unwrap();
        acq.set_flag(AcquisitionFlag::LastInSlice);
        acq.idx_mut().kspace_encode_step_1 = 17;
        for (i, v) in acq.data_mut().iter_mut().enumerate() {
            *v = Complex::new(i as f64, -(i as f64));
        }

        let decoded = Acquisition::<f64>::deserialize(&acq.serialize()).unwrap();
        assert_eq!(decoded, acq);
    }

    #[test]
    fn test_read_from_bytes_is_all_or_nothing() {
        let source = Acquisition::<f32>::with_dimensions(4, 2, 0).unwrap();
        let bytes = source.serialize();

        let mut target = Acquisition::<f32>::with_dimensions(1, 1, 1).unwrap();
        let before = target.clone();
        assert!(target.read_from_bytes(&bytes[..bytes.len() - 1]).is_err());
        assert_eq!(target, before);

        assert_eq!(target.read_from_bytes(&bytes).unwrap(), bytes.len());
        assert_eq!(target, source);
    }

    #[test]
    fn test_decode_rejects_count_mismatch() {
        let acq = Acquisition::<f32>::with_dimensions(4, 1, 0).unwrap();
        let mut bytes = acq.serialize().to_vec();
        // number_of_samples lives at byte 48
        bytes[48..52].copy_from_slice(&5u32.to_le_bytes());

        assert!(matches!(
            Acquisition::<f32>::deserialize(&bytes),
            Err(MrdError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_descriptor() {
        let desc = Acquisition::<i16>::descriptor();
        assert_eq!(desc.name(), "Acquisition");
        assert_eq!(desc.size(), 408 + 16 + 16);
    }
}
