// src/header/image_header.rs
use crate::header::{
    ImageFlag, ImageType, DIRECTION_LENGTH, PHYS_STAMPS, POSITION_LENGTH, SIGNATURE,
    USER_FLOATS, USER_INTS,
};
use crate::layout::fixed_layout;

fixed_layout! {
    /// Header of one reconstructed image
    ///
    /// `attribute_string_len` mirrors the byte length of the attribute
    /// string owned by the enclosing [`Image`](crate::record::Image).
    #[derive(Debug, Clone, Copy, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ImageHeader {
        pub signature: u32,
        pub entity_type: u32,
        pub storage_type: u32,
        pub stream: u32,
        pub time_stamp: u64,
        /// Bit field of [`ImageFlag`]s
        pub flags: u64,
        /// Pixels along x, y and z
        pub matrix_size: [u32; 3],
        /// Physical extent in mm along x, y and z
        pub field_of_view: [f32; 3],
        pub channels: u32,
        pub position: [f32; POSITION_LENGTH],
        pub read_dir: [f32; DIRECTION_LENGTH],
        pub phase_dir: [f32; DIRECTION_LENGTH],
        pub slice_dir: [f32; DIRECTION_LENGTH],
        pub patient_table_position: [f32; POSITION_LENGTH],
        pub average: u32,
        pub slice: u32,
        pub phase: u32,
        pub repetition: u32,
        pub set: u32,
        pub physiology_time_stamp: [u32; PHYS_STAMPS],
        /// One of the [`ImageType`] codes
        pub image_type: u32,
        pub image_index: u32,
        pub image_series_index: u32,
        pub user_int: [i32; USER_INTS],
        pub user_float: [f32; USER_FLOATS],
        pub attribute_string_len: u32,
    }
}

impl Default for ImageHeader {
    fn default() -> Self {
        ImageHeader {
            signature: SIGNATURE,
            entity_type: 0,
            storage_type: 0,
            stream: 0,
            time_stamp: 0,
            flags: 0,
            matrix_size: [0; 3],
            field_of_view: [0.0; 3],
            channels: 1,
            position: [0.0; POSITION_LENGTH],
            read_dir: [0.0; DIRECTION_LENGTH],
            phase_dir: [0.0; DIRECTION_LENGTH],
            slice_dir: [0.0; DIRECTION_LENGTH],
            patient_table_position: [0.0; POSITION_LENGTH],
            average: 0,
            slice: 0,
            phase: 0,
            repetition: 0,
            set: 0,
            physiology_time_stamp: [0; PHYS_STAMPS],
            image_type: 0,
            image_index: 0,
            image_series_index: 0,
            user_int: [0; USER_INTS],
            user_float: [0.0; USER_FLOATS],
            attribute_string_len: 0,
        }
    }
}

impl ImageHeader {
    pub fn new() -> Self {
        Self::default()
    }

    array_accessors! {
        matrix_size, set_matrix_size: u32;
        field_of_view, set_field_of_view: f32;
        position, set_position: f32;
        read_dir, set_read_dir: f32;
        phase_dir, set_phase_dir: f32;
        slice_dir, set_slice_dir: f32;
        patient_table_position, set_patient_table_position: f32;
        physiology_time_stamp, set_physiology_time_stamp: u32;
        user_int, set_user_int: i32;
        user_float, set_user_float: f32;
    }

    /// Decoded `image_type`, or `None` for an unknown code
    pub fn image_type_kind(&self) -> Option<ImageType> {
        ImageType::from_u32(self.image_type)
    }

    pub fn set_image_type(&mut self, image_type: ImageType) {
        self.image_type = image_type as u32;
    }

    pub fn is_flag_set(&self, flag: ImageFlag) -> bool {
        self.flags & flag.mask() != 0
    }

    pub fn set_flag(&mut self, flag: ImageFlag) {
        self.flags |= flag.mask();
    }

    pub fn clear_flag(&mut self, flag: ImageFlag) {
        self.flags &= !flag.mask();
    }

    pub fn clear_all_flags(&mut self) {
        self.flags = 0;
    }
}
