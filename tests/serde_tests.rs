// tests/serde_tests.rs
#![cfg(feature = "serde")]

use mrd_records::*;

#[test]
fn test_acquisition_header_serde_round_trip() {
    let mut head = AcquisitionHeader::new();
    head.scan_counter = 17;
    head.number_of_samples = 256;
    head.channel_mask[3] = u64::MAX;
    head.idx.kspace_encode_step_1 = 42;
    head.read_dir = [1.0, 0.0, 0.0];
    head.user_float[7] = -2.5;
    head.set_flag(AcquisitionFlag::LastInSlice);

    let bytes = rmp_serde::to_vec(&head).unwrap();
    let decoded: AcquisitionHeader = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(decoded, head);
}

#[test]
fn test_image_header_serde_round_trip() {
    let mut head = ImageHeader::new();
    head.matrix_size = [128, 96, 1];
    head.field_of_view = [240.0, 180.0, 5.0];
    head.set_image_type(ImageType::Phase);
    head.attribute_string_len = 12;

    let bytes = rmp_serde::to_vec(&head).unwrap();
    let decoded: ImageHeader = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(decoded, head);
}

#[test]
fn test_kinds_and_index_entry_serde_round_trip() {
    for kind in ElementKind::ALL {
        let decoded: ElementKind = rmp_serde::from_slice(&rmp_serde::to_vec(&kind).unwrap()).unwrap();
        assert_eq!(decoded, kind);
    }

    let entry = IndexEntry { stream: 2, index: 9 };
    let decoded: IndexEntry = rmp_serde::from_slice(&rmp_serde::to_vec(&entry).unwrap()).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn test_descriptors_serialize() {
    for kind in ElementKind::ALL {
        for record in [RecordKind::Acquisition, RecordKind::Image] {
            if let Ok(desc) = record_descriptor(record, kind) {
                let first = rmp_serde::to_vec(&desc).unwrap();
                assert!(!first.is_empty());
                // Identical descriptors encode identically.
                assert_eq!(first, rmp_serde::to_vec(&record_descriptor(record, kind).unwrap()).unwrap());
            }
        }
    }
}
