// tests/file_round_trip.rs
use mrd_records::*;
use num_complex::Complex;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_records_survive_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("series.mrd");

    let mut buffer = RecordBuffer::new();
    let mut written = Vec::new();
    for repetition in 0..5u32 {
        let mut acq = Acquisition::<i16>::with_dimensions(72, 32, 0).unwrap();
        acq.idx_mut().repetition = repetition;
        acq.set_sample(71, 31, Complex::new(repetition as i16, -1)).unwrap();
        buffer.push(&acq);
        written.push(acq);
    }
    fs::write(&path, buffer.take()).unwrap();
    assert!(buffer.is_empty());

    let contents = fs::read(&path).unwrap();
    let read: Vec<Acquisition<i16>> = RecordIter::new(&contents).collect::<Result<_>>().unwrap();
    assert_eq!(read, written);
}

#[test]
fn test_image_file_with_runtime_type() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("image.mrd");

    let mut image = Image::<u32>::with_dimensions([4, 4, 4], 2).unwrap();
    image.set_attribute_string("kind=u32").unwrap();
    image.set_pixel(3, 3, 3, 1, 42).unwrap();
    fs::write(&path, image.serialize()).unwrap();

    let contents = fs::read(&path).unwrap();
    let record = ImageRecord::deserialize(ElementKind::U32, &contents).unwrap();
    match record {
        ImageRecord::U32(read) => assert_eq!(read, image),
        other => panic!("Expected u32 image, got {:?}", other.element_kind()),
    }
}
