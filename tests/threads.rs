mod common;

use common::{random_signal, zero_spectrum};
use fastfourier::{Complex32, FastFourier};
use std::thread;

fn spectrum_on_thread(n: usize, data: Vec<f32>) -> thread::JoinHandle<Vec<Complex32>> {
    thread::spawn(move || {
        let mut fft = FastFourier::new(n).unwrap();
        let mut vhat = zero_spectrum(n);
        fft.forward(&data, &mut vhat).unwrap();
        vhat
    })
}

#[test]
fn test_independent_handles_agree() {
    let n = 1024;
    let data = random_signal(n, 21);
    let a = spectrum_on_thread(n, data.clone());
    let b = spectrum_on_thread(n, data);
    let a = a.join().unwrap();
    let b = b.join().unwrap();
    let bits = |v: &[Complex32]| -> Vec<(u32, u32)> {
        v.iter().map(|c| (c.re.to_bits(), c.im.to_bits())).collect()
    };
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn test_handle_moves_between_threads() {
    let n = 64;
    let mut fft = FastFourier::new(n).unwrap();
    let data = random_signal(n, 22);
    let mut first = zero_spectrum(n);
    fft.forward(&data, &mut first).unwrap();
    let second = thread::spawn(move || {
        let mut vhat = zero_spectrum(n);
        fft.forward(&data, &mut vhat).unwrap();
        vhat
    })
    .join()
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_many_sizes_concurrently() {
    let handles: Vec<_> = [2usize, 8, 64, 512, 4096]
        .iter()
        .map(|&n| {
            thread::spawn(move || {
                let mut fft = FastFourier::new(n).unwrap();
                let data = random_signal(n, n as u64);
                let mut vhat = zero_spectrum(n);
                let mut back = vec![0f32; n];
                fft.forward(&data, &mut vhat).unwrap();
                fft.inverse(&mut vhat, &mut back).unwrap();
                let norm = fft.normalization_factor();
                data.iter()
                    .zip(back.iter())
                    .all(|(a, b)| (a - b / norm).abs() < 1e-4)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
