// tests/image_tests.rs
use mrd_records::*;
use num_complex::Complex;

macro_rules! image_suite {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn test_create() {
                    let image = Image::<$ty>::new();
                    let head = image.head();
                    assert_eq!(head.signature, SIGNATURE);
                    assert_eq!(head.channels, 1);
                    assert_eq!(head.matrix_size, [0, 0, 0]);
                    assert_eq!(head.attribute_string_len, 0);
                    assert!(image.data().is_empty());
                }

                #[test]
                fn test_resize_and_round_trip() {
                    let mut image = Image::<$ty>::new();
                    image.resize([16, 8, 2], 2).unwrap();
                    assert_eq!(image.data().len(), 16 * 8 * 2 * 2);
                    assert!(image.data().iter().all(|v| *v == <$ty as Element>::zero()));

                    image.set_attribute_string("<meta><name>x</name></meta>").unwrap();
                    image.modify_head(|h| {
                        h.image_index = 3;
                        h.field_of_view = [240.0, 120.0, 10.0];
                    })
                    .unwrap();

                    let decoded = Image::<$ty>::deserialize(&image.serialize()).unwrap();
                    assert_eq!(decoded, image);
                    assert_eq!(decoded.element_kind(), <$ty as Element>::KIND);
                }
            }
        )*
    };
}

image_suite! {
    uint16: u16,
    int16: i16,
    uint32: u32,
    int32: i32,
    float32: f32,
    float64: f64,
    complex_float32: Complex<f32>,
    complex_float64: Complex<f64>,
}

#[test]
fn test_magnitude_series() {
    let mut buffer = RecordBuffer::new();
    for slice in 0..4u32 {
        let mut image = Image::<u16>::with_dimensions([8, 8, 1], 1).unwrap();
        image
            .modify_head(|h| {
                h.slice = slice;
                h.image_series_index = 1;
                h.set_image_type(ImageType::Magnitude);
            })
            .unwrap();
        image.set_pixel(slice as usize, slice as usize, 0, 0, 1000 + slice as u16).unwrap();
        buffer.push(&image);
    }

    let images: Vec<Image<u16>> = RecordIter::new(buffer.as_bytes())
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(images.len(), 4);
    for (slice, image) in images.iter().enumerate() {
        assert_eq!(image.head().slice, slice as u32);
        assert_eq!(image.head().image_type_kind(), Some(ImageType::Magnitude));
        assert_eq!(image.pixel(slice, slice, 0, 0).unwrap(), 1000 + slice as u16);
    }
}

#[test]
fn test_multibyte_attribute_string() {
    let mut image = Image::<f32>::new();
    image.set_attribute_string("TE=5µs").unwrap();
    assert_eq!(image.head().attribute_string_len, 7);

    let decoded = Image::<f32>::deserialize(&image.serialize()).unwrap();
    assert_eq!(decoded.attribute_string(), "TE=5µs");
}

#[test]
fn test_runtime_typed_images() {
    let image = Image::<Complex<f64>>::with_dimensions([2, 2, 2], 1).unwrap();
    let bytes = image.serialize();

    let record = ImageRecord::deserialize(ElementKind::ComplexF64, &bytes).unwrap();
    assert_eq!(record.element_kind(), ElementKind::ComplexF64);
    assert_eq!(record.head().matrix_size, [2, 2, 2]);
    assert_eq!(record.serialize(), bytes);
    assert_eq!(record, ImageRecord::from(image));
}
