// src/header/acquisition_header.rs
use crate::error::{MrdError, Result};
use crate::header::{
    AcquisitionFlag, EncodingCounters, CHANNEL_MASKS, DIRECTION_LENGTH, PHYS_STAMPS,
    POSITION_LENGTH, SIGNATURE, USER_FLOATS, USER_INTS,
};
use crate::layout::fixed_layout;

fixed_layout! {
    /// Header of one raw-data readout
    ///
    /// The member order below is the wire order. Note that `channel_mask`
    /// begins at byte 60, which is not 8-byte aligned: the layout is packed
    /// and only ever produced through the generated encoder.
    #[derive(Debug, Clone, Copy, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AcquisitionHeader {
        /// Format magic, always [`SIGNATURE`] for valid headers
        pub signature: u32,
        pub entity_type: u32,
        pub storage_type: u32,
        pub stream: u32,
        /// Acquisition clock time stamp
        pub time_stamp: u64,
        /// Bit field of [`AcquisitionFlag`]s
        pub flags: u64,
        /// Current acquisition number in the measurement
        pub scan_counter: u32,
        pub physiology_time_stamp: [u32; PHYS_STAMPS],
        pub number_of_samples: u32,
        pub available_channels: u32,
        pub active_channels: u32,
        /// One bit per channel, channel `c` in word `c / 64`, bit `c % 64`
        pub channel_mask: [u64; CHANNEL_MASKS],
        pub discard_pre: u32,
        pub discard_post: u32,
        pub center_sample: u32,
        pub encoding_space_ref: u32,
        pub trajectory_dimensions: u32,
        pub dwell_time_ns: u32,
        pub position: [f32; POSITION_LENGTH],
        pub read_dir: [f32; DIRECTION_LENGTH],
        pub phase_dir: [f32; DIRECTION_LENGTH],
        pub slice_dir: [f32; DIRECTION_LENGTH],
        pub patient_table_position: [f32; POSITION_LENGTH],
        pub idx: EncodingCounters,
        pub user_int: [i32; USER_INTS],
        pub user_float: [f32; USER_FLOATS],
    }
}

impl Default for AcquisitionHeader {
    fn default() -> Self {
        AcquisitionHeader {
            signature: SIGNATURE,
            entity_type: 0,
            storage_type: 0,
            stream: 0,
            time_stamp: 0,
            flags: 0,
            scan_counter: 0,
            physiology_time_stamp: [0; PHYS_STAMPS],
            number_of_samples: 0,
            available_channels: 1,
            active_channels: 1,
            channel_mask: [0; CHANNEL_MASKS],
            discard_pre: 0,
            discard_post: 0,
            center_sample: 0,
            encoding_space_ref: 0,
            trajectory_dimensions: 0,
            dwell_time_ns: 0,
            position: [0.0; POSITION_LENGTH],
            read_dir: [0.0; DIRECTION_LENGTH],
            phase_dir: [0.0; DIRECTION_LENGTH],
            slice_dir: [0.0; DIRECTION_LENGTH],
            patient_table_position: [0.0; POSITION_LENGTH],
            idx: EncodingCounters::default(),
            user_int: [0; USER_INTS],
            user_float: [0.0; USER_FLOATS],
        }
    }
}

impl AcquisitionHeader {
    /// Highest addressable channel count of the mask
    pub const MAX_CHANNELS: usize = CHANNEL_MASKS * 64;

    pub fn new() -> Self {
        Self::default()
    }

    array_accessors! {
        physiology_time_stamp, set_physiology_time_stamp: u32;
        channel_mask, set_channel_mask: u64;
        position, set_position: f32;
        read_dir, set_read_dir: f32;
        phase_dir, set_phase_dir: f32;
        slice_dir, set_slice_dir: f32;
        patient_table_position, set_patient_table_position: f32;
        user_int, set_user_int: i32;
        user_float, set_user_float: f32;
    }

    pub fn is_flag_set(&self, flag: AcquisitionFlag) -> bool {
        self.flags & flag.mask() != 0
    }

    pub fn set_flag(&mut self, flag: AcquisitionFlag) {
        self.flags |= flag.mask();
    }

    pub fn clear_flag(&mut self, flag: AcquisitionFlag) {
        self.flags &= !flag.mask();
    }

    pub fn clear_all_flags(&mut self) {
        self.flags = 0;
    }

    pub fn is_channel_active(&self, channel: usize) -> Result<bool> {
        let (word, bit) = Self::channel_bit(channel)?;
        Ok(self.channel_mask[word] & bit != 0)
    }

    pub fn set_channel_active(&mut self, channel: usize) -> Result<()> {
        let (word, bit) = Self::channel_bit(channel)?;
        self.channel_mask[word] |= bit;
        Ok(())
    }

    pub fn set_channel_not_active(&mut self, channel: usize) -> Result<()> {
        let (word, bit) = Self::channel_bit(channel)?;
        self.channel_mask[word] &= !bit;
        Ok(())
    }

    pub fn set_all_channels_not_active(&mut self) {
        self.channel_mask = [0; CHANNEL_MASKS];
    }

    /// Number of channels whose mask bit is set
    pub fn count_active_mask_bits(&self) -> u32 {
        self.channel_mask.iter().map(|w| w.count_ones()).sum()
    }

    fn channel_bit(channel: usize) -> Result<(usize, u64)> {
        if channel >= Self::MAX_CHANNELS {
            return Err(MrdError::IndexOutOfRange {
                field: "channel_mask",
                index: channel,
                len: Self::MAX_CHANNELS,
            });
        }
        Ok((channel / 64, 1u64 << (channel % 64)))
    }
}
