//! x86-class engine: `realfft` on the AVX/SSE kernels of `rustfft`.
//!
//! The engine's native output already is the uniform `n / 2 + 1` bin layout
//! (the "CCS" packing), so the adapter is a straight pass-through and its inverse
//! scales by `n`.
use super::direct::RealPlan;
use super::Backend;
use crate::error::FftError;
use crate::transform::{check_len, check_real, check_spectrum, RealFft};
use rustfft::num_complex::Complex32;

/// Direct-mapping adapter with normalization factor `n`.
///
/// # Example
/// ```
/// use fastfourier::backend::CcsAdapter;
/// use fastfourier::{Complex32, RealFft};
///
/// let mut fft = CcsAdapter::new(8).unwrap();
/// let data = vec![1f32; 8];
/// let mut vhat = vec![Complex32::new(0., 0.); 5];
/// fft.forward(&data, &mut vhat).unwrap();
/// assert!((vhat[0].re - 8.).abs() < 1e-6);
/// assert_eq!(vhat[0].im, 0.);
/// ```
pub struct CcsAdapter {
    n: usize,
    plan: RealPlan,
}

impl CcsAdapter {
    /// Creates a new `CcsAdapter`.
    ///
    /// # Errors
    /// [`FftError::InvalidSize`] unless `n` is a power of two `>= 2`.
    pub fn new(n: usize) -> Result<Self, FftError> {
        check_len(n)?;
        Ok(CcsAdapter {
            n,
            plan: RealPlan::new(n),
        })
    }
}

impl RealFft for CcsAdapter {
    fn len(&self) -> usize {
        self.n
    }

    fn backend(&self) -> Backend {
        Backend::Ccs
    }

    fn forward(&mut self, input: &[f32], output: &mut [Complex32]) -> Result<(), FftError> {
        check_real(input, self.n)?;
        check_spectrum(output, self.n)?;
        log::trace!("ccs forward, n = {}", self.n);
        self.plan.forward(input, output)
    }

    fn inverse(&mut self, input: &mut [Complex32], output: &mut [f32]) -> Result<(), FftError> {
        check_spectrum(input, self.n)?;
        check_real(output, self.n)?;
        log::trace!("ccs inverse, n = {}", self.n);
        self.plan.inverse(input, output)
    }

    #[allow(clippy::cast_precision_loss)]
    fn normalization_factor(&self) -> f32 {
        self.n as f32
    }
}
