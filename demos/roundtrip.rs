//! Perform a real-to-complex Fourier Transform and back, folding the
//! normalization into a gain that is applied anyway.
//!
//! RUST_LOG=debug cargo run --example roundtrip
use fastfourier::{Complex32, FastFourier};

fn main() {
    env_logger::init();
    let n = 16;

    // Init arrays
    let v: Vec<f32> = (0..n).map(|i| (i as f32 * 0.4).sin()).collect();
    let mut vhat = vec![Complex32::new(0., 0.); n / 2 + 1];
    let mut v2 = vec![0f32; n];

    // Init handler
    let mut handler = match FastFourier::new(n) {
        Ok(handler) => handler,
        Err(err) => {
            eprintln!("no transform for size {n}: {err}");
            return;
        }
    };
    println!("{handler:?}");

    // Perform transforms
    handler.forward(&v, &mut vhat).unwrap();
    handler.inverse(&mut vhat, &mut v2).unwrap();

    // Output gain of 0.5, merged with the normalization
    let scale = 0.5 / handler.normalization_factor();
    for (a, b) in v.iter().zip(v2.iter()) {
        println!("{a:>8.4} -> {:>8.4}", b * scale);
    }
}
