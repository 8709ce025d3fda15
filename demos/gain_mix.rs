//! Mixes two mono f32 signals with per-sample gains, the kind of inner loop
//! the vector types are meant for.
//!
//! Run with `cargo run --release --example gain_mix`.

use std::f32::consts::TAU;

use lanewise::{AlignedBuf, SimdFma, SimdSum, Vec8xF32};

const SAMPLE_RATE: f32 = 48_000.0;
const FRAMES: usize = 4_800;

fn sine(freq: f32, len: usize) -> lanewise::Result<AlignedBuf<f32>> {
    let mut buf = AlignedBuf::for_vector::<Vec8xF32>(len)?;
    for (n, sample) in buf.iter_mut().enumerate() {
        *sample = (TAU * freq * n as f32 / SAMPLE_RATE).sin();
    }
    Ok(buf)
}

fn main() -> lanewise::Result<()> {
    println!("backend: {}", lanewise::backend());

    let carrier = sine(440.0, FRAMES)?;
    let overtone = sine(880.0, FRAMES)?;

    // Linear fade-in for the overtone, scaled by 0.25.
    let mut envelope = AlignedBuf::for_vector::<Vec8xF32>(FRAMES)?;
    for (n, gain) in envelope.iter_mut().enumerate() {
        *gain = 0.25 * n as f32 / FRAMES as f32;
    }

    // mix = overtone * envelope + carrier
    let mix = overtone.simd_fma(&envelope[..], &carrier[..])?;

    // Hand-rolled block loop: peak absolute value, 8 samples at a time.
    let mut peak = Vec8xF32::new();
    for block in mix.chunks_exact(8) {
        let mut v = Vec8xF32::new();
        unsafe { v.load_unaligned(block.as_ptr()) };
        let a = v.abs().to_array();
        let p = peak.to_array();
        let maxed: [f32; 8] = std::array::from_fn(|i| a[i].max(p[i]));
        peak = Vec8xF32::from(maxed);
    }
    let peak = peak.to_array().iter().copied().fold(0.0f32, f32::max);

    let energy = mix.iter().map(|x| x * x).collect::<Vec<f32>>();
    let rms = (energy.as_slice().simd_sum() / FRAMES as f32).sqrt();

    println!("frames: {FRAMES}, peak: {peak:.4}, rms: {rms:.4}");
    Ok(())
}
