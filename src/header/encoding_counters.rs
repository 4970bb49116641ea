// src/header/encoding_counters.rs
use crate::header::USER_INTS;
use crate::layout::fixed_layout;

fixed_layout! {
    /// Sequence-loop indices of one readout
    ///
    /// Embedded in [`AcquisitionHeader`](crate::header::AcquisitionHeader)
    /// as the `idx` member; its descriptor is spliced into the parent as a
    /// nested compound.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EncodingCounters {
        /// Readout (frequency encoding) step, typically unused
        pub kspace_encode_step_0: u32,
        /// Phase encoding line number
        pub kspace_encode_step_1: u32,
        /// Partition encoding number
        pub kspace_encode_step_2: u32,
        pub average: u32,
        pub slice: u32,
        pub contrast: u32,
        pub phase: u32,
        pub repetition: u32,
        pub set: u32,
        pub segment: u32,
        pub user: [u32; USER_INTS],
    }
}

impl EncodingCounters {
    array_accessors! {
        user, set_user: u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ByteReader;
    use crate::error::MrdError;
    use crate::layout::{FieldType, LayoutField};
    use crate::types::PrimitiveType;
    use bytes::BytesMut;

    #[test]
    fn test_size_has_no_padding() {
        assert_eq!(EncodingCounters::SIZE, (10 + USER_INTS) * 4);
        assert_eq!(EncodingCounters::descriptor().size(), EncodingCounters::SIZE);
    }

    #[test]
    fn test_descriptor_order() {
        let desc = EncodingCounters::descriptor();
        let names: Vec<&str> = desc.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec![
            "kspace_encode_step_0", "kspace_encode_step_1", "kspace_encode_step_2",
            "average", "slice",
            "contrast", "phase", "repetition", "set", "segment", "user",
        ]);
        for (i, field) in desc.fields().iter().enumerate().take(10) {
            assert_eq!(field.offset, i * 4);
            assert_eq!(field.ty, FieldType::Primitive(PrimitiveType::U32));
        }
        assert_eq!(desc.field("user").unwrap().ty.array_len(), Some(USER_INTS));
    }

    #[test]
    fn test_user_accessors() {
        let mut idx = EncodingCounters::default();
        idx.set_user(7, 42).unwrap();
        assert_eq!(idx.user(7).unwrap(), 42);
        assert_eq!(idx.user[7], 42);

        assert_eq!(
            idx.user(USER_INTS),
            Err(MrdError::IndexOutOfRange { field: "user", index: USER_INTS, len: USER_INTS })
        );
        assert!(idx.set_user(100, 1).is_err());
    }

    #[test]
    fn test_encode_decode() {
        let idx = EncodingCounters {
            kspace_encode_step_1: 12,
            slice: 3,
            segment: 9,
            user: [1, 2, 3, 4, 5, 6, 7, 8],
            ..Default::default()
        };

        let mut buf = BytesMut::new();
        idx.encode(&mut buf);
        assert_eq!(buf.len(), EncodingCounters::SIZE);
        assert_eq!(&buf[0..4], &[0, 0, 0, 0]);
        assert_eq!(&buf[4..8], &12u32.to_le_bytes());
        assert_eq!(&buf[16..20], &3u32.to_le_bytes());

        let decoded = EncodingCounters::decode(&mut ByteReader::new(&buf)).unwrap();
        assert_eq!(decoded, idx);
    }
}
