// src/header/flags.rs

/// Bit positions in `AcquisitionHeader::flags`.
///
/// Bit `N` occupies mask `1 << (N - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AcquisitionFlag {
    FirstInEncodeStep1 = 1,
    LastInEncodeStep1 = 2,
    FirstInEncodeStep2 = 3,
    LastInEncodeStep2 = 4,
    FirstInAverage = 5,
    LastInAverage = 6,
    FirstInSlice = 7,
    LastInSlice = 8,
    FirstInContrast = 9,
    LastInContrast = 10,
    FirstInPhase = 11,
    LastInPhase = 12,
    FirstInRepetition = 13,
    LastInRepetition = 14,
    FirstInSet = 15,
    LastInSet = 16,
    FirstInSegment = 17,
    LastInSegment = 18,
    IsNoiseMeasurement = 19,
    IsParallelCalibration = 20,
    IsParallelCalibrationAndImaging = 21,
    IsReverse = 22,
    IsNavigationData = 23,
    IsPhasecorrData = 24,
    LastInMeasurement = 25,
    IsHpFeedbackData = 26,
    IsDummyscanData = 27,
    IsRtFeedbackData = 28,
    IsSurfaceCoilCorrectionScanData = 29,
    User1 = 57,
    User2 = 58,
    User3 = 59,
    User4 = 60,
    User5 = 61,
    User6 = 62,
    User7 = 63,
    User8 = 64,
}

impl AcquisitionFlag {
    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn mask(self) -> u64 {
        1u64 << (self as u8 - 1)
    }
}

/// Bit positions in `ImageHeader::flags`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ImageFlag {
    IsNavigationData = 1,
    User1 = 57,
    User2 = 58,
    User3 = 59,
    User4 = 60,
    User5 = 61,
    User6 = 62,
    User7 = 63,
    User8 = 64,
}

impl ImageFlag {
    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn mask(self) -> u64 {
        1u64 << (self as u8 - 1)
    }
}

/// Interpretation of image pixel values (`ImageHeader::image_type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ImageType {
    Magnitude = 1,
    Phase = 2,
    Real = 3,
    Imag = 4,
    Complex = 5,
}

impl ImageType {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(ImageType::Magnitude),
            2 => Some(ImageType::Phase),
            3 => Some(ImageType::Real),
            4 => Some(ImageType::Imag),
            5 => Some(ImageType::Complex),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImageType::Magnitude => "magnitude",
            ImageType::Phase => "phase",
            ImageType::Real => "real",
            ImageType::Imag => "imag",
            ImageType::Complex => "complex",
        }
    }
}
