mod common;

use common::{compare_real, random_signal, zero_spectrum, SIZES};
use fastfourier::backend::{PortableSplitEngine, SplitAdapter};
use fastfourier::{FastFourier, RealFft};

fn roundtrip(fft: &mut dyn RealFft, seed: u64) {
    let n = fft.len();
    let data = random_signal(n, seed);
    let mut vhat = zero_spectrum(n);
    let mut back = vec![0f32; n];
    fft.forward(&data, &mut vhat).unwrap();
    fft.inverse(&mut vhat, &mut back).unwrap();
    let norm = fft.normalization_factor();
    let back: Vec<f32> = back.iter().map(|b| b / norm).collect();
    compare_real(&data, &back, 1e-4);
}

#[test]
fn test_handle_roundtrip() {
    for (seed, &n) in SIZES.iter().enumerate() {
        let mut fft = FastFourier::new(n).unwrap();
        let data = random_signal(n, seed as u64);
        let mut vhat = zero_spectrum(n);
        let mut back = vec![0f32; n];
        fft.forward(&data, &mut vhat).unwrap();
        fft.inverse(&mut vhat, &mut back).unwrap();
        let norm = fft.normalization_factor();
        let back: Vec<f32> = back.iter().map(|b| b / norm).collect();
        compare_real(&data, &back, 1e-4);
    }
}

#[test]
fn test_selected_roundtrip() {
    for &n in &SIZES {
        let mut fft = fastfourier::backend::select(n).unwrap();
        roundtrip(fft.as_mut(), 7);
    }
}

#[test]
fn test_split_roundtrip() {
    for &n in &SIZES {
        let mut fft = SplitAdapter::<PortableSplitEngine>::new(n).unwrap();
        roundtrip(&mut fft, 11);
    }
}

#[test]
fn test_ccs_roundtrip() {
    for &n in &SIZES {
        let mut fft = fastfourier::backend::CcsAdapter::new(n).unwrap();
        roundtrip(&mut fft, 13);
    }
}

#[cfg(target_arch = "aarch64")]
#[test]
fn test_neon_roundtrip() {
    for &n in &SIZES {
        let mut fft = fastfourier::backend::NeonAdapter::new(n).unwrap();
        roundtrip(&mut fft, 17);
    }
}

#[cfg(target_vendor = "apple")]
#[test]
fn test_vdsp_roundtrip() {
    use fastfourier::backend::VdspEngine;
    for &n in &SIZES {
        let mut fft = SplitAdapter::<VdspEngine>::new(n).unwrap();
        roundtrip(&mut fft, 19);
    }
}

#[test]
fn test_repeated_transforms_reuse_plan() {
    let n = 256;
    let mut fft = FastFourier::new(n).unwrap();
    for seed in 0..5 {
        let data = random_signal(n, 100 + seed);
        let mut vhat = zero_spectrum(n);
        let mut back = vec![0f32; n];
        fft.forward(&data, &mut vhat).unwrap();
        fft.inverse(&mut vhat, &mut back).unwrap();
        let norm = fft.normalization_factor();
        let back: Vec<f32> = back.iter().map(|b| b / norm).collect();
        compare_real(&data, &back, 1e-4);
    }
}
