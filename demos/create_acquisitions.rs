// demos/create_acquisitions.rs
use mrd_records::*;
use num_complex::Complex;
use std::error::Error;
use std::fs;

const SAMPLES: u32 = 128;
const COILS: u32 = 8;
const LINES: u32 = 64;
const SLICES: u32 = 2;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let mut buffer = RecordBuffer::new();

    for slice in 0..SLICES {
        for line in 0..LINES {
            let mut acq = Acquisition::<f32>::with_dimensions(SAMPLES, COILS, 0)?;
            acq.modify_head(|h| {
                h.scan_counter = slice * LINES + line;
                h.available_channels = COILS;
                h.center_sample = SAMPLES / 2;
                h.dwell_time_ns = 2500;
                h.read_dir = [1.0, 0.0, 0.0];
                h.phase_dir = [0.0, 1.0, 0.0];
                h.slice_dir = [0.0, 0.0, 1.0];
                h.position = [0.0, 0.0, slice as f32 * 5.0];
            })?;

            let idx = acq.idx_mut();
            idx.kspace_encode_step_1 = line;
            idx.slice = slice;

            if line == 0 {
                acq.set_flag(AcquisitionFlag::FirstInEncodeStep1);
                acq.set_flag(AcquisitionFlag::FirstInSlice);
            }
            if line == LINES - 1 {
                acq.set_flag(AcquisitionFlag::LastInEncodeStep1);
                acq.set_flag(AcquisitionFlag::LastInSlice);
                if slice == SLICES - 1 {
                    acq.set_flag(AcquisitionFlag::LastInMeasurement);
                }
            }

            // A phase ramp per coil stands in for a real echo.
            for coil in 0..COILS as usize {
                let phase = coil as f32 * std::f32::consts::FRAC_PI_4;
                for (s, v) in acq.channel_data_mut(coil)?.iter_mut().enumerate() {
                    let k = s as f32 - (SAMPLES / 2) as f32;
                    let magnitude = (-k * k / 512.0).exp();
                    *v = Complex::from_polar(magnitude, phase + line as f32 * 0.01);
                }
            }

            buffer.push(&acq);
        }
    }

    fs::create_dir_all("demos/output")?;
    let path = "demos/output/acquisitions.mrd";
    let count = buffer.record_count();
    fs::write(path, buffer.take())?;
    println!("Wrote {} acquisitions to {}", count, path);

    let contents = fs::read(path)?;
    let mut last_in_slice = 0;
    let mut total = 0;
    for acq in RecordIter::<Acquisition<f32>>::new(&contents) {
        let acq = acq?;
        if acq.is_flag_set(AcquisitionFlag::LastInSlice) {
            last_in_slice += 1;
        }
        total += 1;
    }
    println!("Read back {} acquisitions ({} slice ends)", total, last_in_slice);

    Ok(())
}
