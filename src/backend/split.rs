//! Engines on split storage with DC and Nyquist sharing bin 0.
//!
//! Such an engine reads and writes `n / 2` complex values, the real parts at
//! even float offsets and the imaginary parts at odd ones (stride 2 over an
//! interleaved buffer). Bin 0 carries DC in its real part and Nyquist in its
//! imaginary part, and the forward output is twice the DFT.
//!
//! The adapter moves Nyquist into its own bin after every forward transform and
//! folds it back into bin 0 of the caller's spectrum for the duration of an
//! inverse transform.
use super::Backend;
use crate::error::FftError;
use crate::transform::{as_floats, as_floats_mut, check_len, check_real, check_spectrum, RealFft};
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};
use rustfft::num_complex::Complex32;
use std::sync::Arc;

/// Transform direction passed to a [`SplitEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Real -> packed spectrum.
    Forward,
    /// Packed spectrum -> real.
    Inverse,
}

/// A real FFT engine working on packed split storage.
pub trait SplitEngine: Send + Sized {
    /// Engine name used in logs and errors.
    const NAME: &'static str;

    /// Builds the engine for transforms of `2^order` real samples.
    ///
    /// # Errors
    /// [`FftError::Backend`] if the engine cannot set itself up.
    fn with_order(order: u32) -> Result<Self, FftError>;

    /// Out-of-place transform. `input` and `output` both hold `2^order` floats.
    ///
    /// # Errors
    /// [`FftError::Backend`] if the engine reports a failure.
    fn transform(
        &mut self,
        input: &[f32],
        output: &mut [f32],
        direction: Direction,
    ) -> Result<(), FftError>;
}

/// Packing-reconciliation adapter, normalization factor `4 * n`.
///
/// # Example
/// ```
/// use fastfourier::backend::{PortableSplitEngine, SplitAdapter};
/// use fastfourier::{Complex32, RealFft};
///
/// let mut fft = SplitAdapter::<PortableSplitEngine>::new(8).unwrap();
/// let data = vec![1., -1., 1., -1., 1., -1., 1., -1.];
/// let mut vhat = vec![Complex32::new(0., 0.); 5];
/// fft.forward(&data, &mut vhat).unwrap();
/// // Nyquist lands in its own bin, scaled by the engine's factor 2
/// assert!((vhat[4].re - 16.).abs() < 1e-5);
/// assert_eq!(vhat[0].im, 0.);
/// ```
pub struct SplitAdapter<E: SplitEngine> {
    order: u32,
    engine: E,
}

impl<E: SplitEngine> SplitAdapter<E> {
    /// Creates a new `SplitAdapter`.
    ///
    /// # Errors
    /// [`FftError::InvalidSize`] unless `n` is a power of two `>= 2`,
    /// [`FftError::Backend`] if the engine fails to set up.
    pub fn new(n: usize) -> Result<Self, FftError> {
        check_len(n)?;
        let order = n.trailing_zeros();
        log::debug!("building {} setup of order {order}", E::NAME);
        Ok(SplitAdapter {
            order,
            engine: E::with_order(order)?,
        })
    }
}

impl<E: SplitEngine> RealFft for SplitAdapter<E> {
    fn len(&self) -> usize {
        1 << self.order
    }

    fn backend(&self) -> Backend {
        Backend::Split
    }

    fn forward(&mut self, input: &[f32], output: &mut [Complex32]) -> Result<(), FftError> {
        let n = self.len();
        check_real(input, n)?;
        check_spectrum(output, n)?;
        log::trace!("{} forward, n = {n}", E::NAME);
        self.engine
            .transform(input, as_floats_mut(&mut output[..n / 2]), Direction::Forward)?;
        unpack_nyquist(output);
        Ok(())
    }

    fn inverse(&mut self, input: &mut [Complex32], output: &mut [f32]) -> Result<(), FftError> {
        let n = self.len();
        check_spectrum(input, n)?;
        check_real(output, n)?;
        log::trace!("{} inverse, n = {n}", E::NAME);
        let packed = PackedNyquist::fold(input);
        self.engine
            .transform(packed.floats(n), output, Direction::Inverse)
    }

    #[allow(clippy::cast_precision_loss)]
    fn normalization_factor(&self) -> f32 {
        (1u64 << self.order) as f32 * 4.
    }
}

/// Moves the Nyquist value from the imaginary slot of bin 0 into the last bin.
fn unpack_nyquist(spectrum: &mut [Complex32]) {
    let last = spectrum.len() - 1;
    spectrum[last] = Complex32::new(spectrum[0].im, 0.);
    spectrum[0].im = 0.;
}

/// A spectrum with Nyquist folded into the imaginary slot of bin 0.
///
/// Holds the caller's original bin-0 imaginary part and writes it back on drop,
/// so the spectrum is restored on every exit path.
struct PackedNyquist<'a> {
    spectrum: &'a mut [Complex32],
    saved_im: f32,
}

impl<'a> PackedNyquist<'a> {
    fn fold(spectrum: &'a mut [Complex32]) -> Self {
        let saved_im = spectrum[0].im;
        let nyquist = spectrum[spectrum.len() - 1].re;
        spectrum[0].im = nyquist;
        PackedNyquist { spectrum, saved_im }
    }

    /// The first `n` floats, i.e. the `n / 2` packed bins.
    fn floats(&self, n: usize) -> &[f32] {
        &as_floats(self.spectrum)[..n]
    }
}

impl Drop for PackedNyquist<'_> {
    fn drop(&mut self) {
        self.spectrum[0].im = self.saved_im;
    }
}

/// Split-storage engine built on `realfft`, usable on every target.
///
/// Follows the same conventions as vDSP's real transforms: the forward output
/// is twice the DFT, packed; the inverse is twice the unnormalised inverse DFT,
/// so a round trip scales by `4 * n`.
pub struct PortableSplitEngine {
    plan_fwd: Arc<dyn RealToComplex<f32>>,
    plan_bwd: Arc<dyn ComplexToReal<f32>>,
    real: Vec<f32>,
    spectrum: Vec<Complex32>,
    scratch_fwd: Vec<Complex32>,
    scratch_bwd: Vec<Complex32>,
}

impl SplitEngine for PortableSplitEngine {
    const NAME: &'static str = "portable split fft";

    fn with_order(order: u32) -> Result<Self, FftError> {
        let n = 1usize
            .checked_shl(order)
            .filter(|&n| n >= 2)
            .ok_or_else(|| FftError::backend(Self::NAME, format!("unsupported order {order}")))?;
        let mut planner = RealFftPlanner::<f32>::new();
        let fwd = planner.plan_fft_forward(n);
        let bwd = planner.plan_fft_inverse(n);
        Ok(PortableSplitEngine {
            real: fwd.make_input_vec(),
            spectrum: fwd.make_output_vec(),
            scratch_fwd: fwd.make_scratch_vec(),
            scratch_bwd: bwd.make_scratch_vec(),
            plan_fwd: fwd,
            plan_bwd: bwd,
        })
    }

    fn transform(
        &mut self,
        input: &[f32],
        output: &mut [f32],
        direction: Direction,
    ) -> Result<(), FftError> {
        let n = self.real.len();
        if input.len() != n || output.len() != n {
            return Err(FftError::backend(
                Self::NAME,
                format!("expected {n} floats, got {} in, {} out", input.len(), output.len()),
            ));
        }
        let half = n / 2;
        match direction {
            Direction::Forward => {
                self.real.copy_from_slice(input);
                self.plan_fwd
                    .process_with_scratch(&mut self.real, &mut self.spectrum, &mut self.scratch_fwd)
                    .map_err(|e| FftError::backend(Self::NAME, e))?;
                output[0] = 2. * self.spectrum[0].re;
                output[1] = 2. * self.spectrum[half].re;
                for (k, pair) in output.chunks_exact_mut(2).enumerate().skip(1) {
                    pair[0] = 2. * self.spectrum[k].re;
                    pair[1] = 2. * self.spectrum[k].im;
                }
            }
            Direction::Inverse => {
                self.spectrum[0] = Complex32::new(input[0], 0.);
                self.spectrum[half] = Complex32::new(input[1], 0.);
                for (k, pair) in input.chunks_exact(2).enumerate().skip(1) {
                    self.spectrum[k] = Complex32::new(pair[0], pair[1]);
                }
                self.plan_bwd
                    .process_with_scratch(&mut self.spectrum, output, &mut self.scratch_bwd)
                    .map_err(|e| FftError::backend(Self::NAME, e))?;
                for d in output.iter_mut() {
                    *d *= 2.;
                }
            }
        }
        Ok(())
    }
}
