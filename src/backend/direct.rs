//! Plan core shared by the engines whose native layout already is the
//! interleaved `n / 2 + 1` bin layout.
use crate::error::FftError;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};
use rustfft::num_complex::Complex32;
use std::sync::Arc;

const ENGINE: &str = "realfft";

/// Forward and inverse plans plus the buffers they work in.
///
/// `realfft` uses its inputs as scratch space, so both directions copy the
/// caller's input into `real` / `spectrum` first.
pub(crate) struct RealPlan {
    n: usize,
    plan_fwd: Arc<dyn RealToComplex<f32>>,
    plan_bwd: Arc<dyn ComplexToReal<f32>>,
    real: Vec<f32>,
    spectrum: Vec<Complex32>,
    scratch_fwd: Vec<Complex32>,
    scratch_bwd: Vec<Complex32>,
}

impl RealPlan {
    /// `n` must already have passed `check_len`.
    pub(crate) fn new(n: usize) -> Self {
        let mut planner = RealFftPlanner::<f32>::new();
        let fwd = planner.plan_fft_forward(n);
        let bwd = planner.plan_fft_inverse(n);
        log::debug!(
            "planned real fft of size {n}, scratch {}/{}",
            fwd.get_scratch_len(),
            bwd.get_scratch_len()
        );
        RealPlan {
            n,
            real: fwd.make_input_vec(),
            spectrum: fwd.make_output_vec(),
            scratch_fwd: fwd.make_scratch_vec(),
            scratch_bwd: bwd.make_scratch_vec(),
            plan_fwd: fwd,
            plan_bwd: bwd,
        }
    }

    /// Unnormalised forward transform. Both buffers are already checked.
    pub(crate) fn forward(&mut self, data: &[f32], out: &mut [Complex32]) -> Result<(), FftError> {
        self.real.copy_from_slice(data);
        self.plan_fwd
            .process_with_scratch(&mut self.real, out, &mut self.scratch_fwd)
            .map_err(|e| FftError::backend(ENGINE, e))?;
        out[0].im = 0.;
        out[self.n / 2].im = 0.;
        Ok(())
    }

    /// Unnormalised inverse transform: `inverse(forward(x)) == n * x`.
    pub(crate) fn inverse(&mut self, data: &[Complex32], out: &mut [f32]) -> Result<(), FftError> {
        self.spectrum.copy_from_slice(data);
        // DC and Nyquist are real by convention; realfft rejects anything else.
        let m = self.spectrum.len();
        self.spectrum[0].im = 0.;
        self.spectrum[m - 1].im = 0.;
        self.plan_bwd
            .process_with_scratch(&mut self.spectrum, out, &mut self.scratch_bwd)
            .map_err(|e| FftError::backend(ENGINE, e))
    }
}
