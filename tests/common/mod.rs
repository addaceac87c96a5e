#![allow(dead_code)]
use fastfourier::backend::SELECTED;
use fastfourier::{Backend, Complex32};
use rand::distributions::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};
use std::f64::consts::PI;

pub const SIZES: [usize; 4] = [64, 256, 1024, 4096];

/// Scale the compiled-in engine applies to its forward output.
pub fn forward_gain() -> f32 {
    match SELECTED {
        Backend::Split => 2.,
        Backend::Ccs | Backend::Neon => 1.,
    }
}

pub fn random_signal(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-1f32, 1f32);
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

pub fn zero_spectrum(n: usize) -> Vec<Complex32> {
    vec![Complex32::new(0., 0.); n / 2 + 1]
}

/// Naive O(n^2) DFT of a real signal, first n/2+1 bins.
pub fn dft(signal: &[f32]) -> Vec<Complex32> {
    let n = signal.len();
    (0..=n / 2)
        .map(|k| {
            let (mut re, mut im) = (0f64, 0f64);
            for (i, &x) in signal.iter().enumerate() {
                let angle = -2. * PI * (k * i % n) as f64 / n as f64;
                re += f64::from(x) * angle.cos();
                im += f64::from(x) * angle.sin();
            }
            Complex32::new(re as f32, im as f32)
        })
        .collect()
}

pub fn compare_real(expected: &[f32], got: &[f32], tol: f32) {
    assert_eq!(expected.len(), got.len());
    for (i, (a, b)) in expected.iter().zip(got.iter()).enumerate() {
        if (a - b).abs() > tol * a.abs().max(1.) {
            panic!("Large difference at {i}, got {b} expected {a}.")
        }
    }
}

pub fn compare_spectrum(expected: &[Complex32], got: &[Complex32], tol: f32) {
    assert_eq!(expected.len(), got.len());
    for (i, (a, b)) in expected.iter().zip(got.iter()).enumerate() {
        if (a - b).norm() > tol {
            panic!("Large difference at bin {i}, got {b} expected {a}.")
        }
    }
}
