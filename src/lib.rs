//! # fastfourier: one real-to-complex FFT over a compile-time selected engine
//!
//! This library puts a single forward/inverse real FFT contract in front of
//! engines that disagree on spectral layout and scaling.
//!
//! [`FastFourier`] owns one plan of a fixed power-of-two length *n*. The real
//! side has *n* samples, the spectral side the *n/2+1* non-redundant bins,
//! interleaved as (re, im), with zero imaginary parts at DC and Nyquist.
//! Which engine does the work is decided when the crate is compiled
//! (see [`backend`]); every engine produces the same layout, and their
//! scaling differences are folded into [`FastFourier::normalization_factor`].
//!
//! Transforms are unnormalised on purpose, so that the division can be merged
//! into a multiplication that happens anyway.
//!
//! ## Buffers
//! Both buffer kinds must have exactly the planned length and start on a
//! [`SIMD_ALIGN`] byte boundary. Violations are reported as
//! [`ErrorKind::InvalidConfiguration`].
//!
//! ## Example
//! Real-to-complex fft and back
//! ```
//! use fastfourier::{Complex32, FastFourier};
//!
//! let n = 16;
//! let data: Vec<f32> = (0..n).map(|i| i as f32).collect();
//! let mut vhat = vec![Complex32::new(0., 0.); n / 2 + 1];
//! let mut back = vec![0f32; n];
//! let mut fft = FastFourier::new(n).unwrap();
//! fft.forward(&data, &mut vhat).unwrap();
//! fft.inverse(&mut vhat, &mut back).unwrap();
//! let norm = fft.normalization_factor();
//! for (a, b) in data.iter().zip(back.iter()) {
//!     assert!((a - b / norm).abs() < 1e-4);
//! }
//! ```
#![warn(missing_docs)]
pub mod backend;
mod error;
mod transform;

pub use backend::Backend;
pub use error::{ErrorKind, FftError};
pub use rustfft::num_complex::{Complex, Complex32};
pub use transform::{RealFft, MIN_LEN, SIMD_ALIGN};

use ndarray::{ArrayBase, Data, DataMut, Ix1};
use std::fmt;

/// # Real-to-complex Fourier Transform of fixed length.
///
/// Owns the adapter built by [`backend::select`] and forwards every call to it.
/// Dropping the handle releases the engine's plan state.
///
/// Not meant for concurrent use: one handle per thread. Distinct handles are
/// independent.
///
/// # Example
/// ```
/// use fastfourier::{Complex32, FastFourier};
///
/// let mut fft = FastFourier::new(8).unwrap();
/// let mut impulse = vec![0f32; 8];
/// impulse[0] = 1.;
/// let mut vhat = vec![Complex32::new(0., 0.); fft.spectrum_len()];
/// fft.forward(&impulse, &mut vhat).unwrap();
/// assert!(vhat.iter().all(|v| v.im.abs() < 1e-6));
/// ```
pub struct FastFourier {
    inner: Box<dyn RealFft>,
}

impl FastFourier {
    /// Creates a new `FastFourier`.
    ///
    /// # Arguments
    ///
    /// * `n` - Number of real samples, a power of two `>= 2`.
    /// The complex side of the transform has *n / 2 + 1* bins.
    ///
    /// # Errors
    /// [`FftError::InvalidSize`] for other lengths; the selected engine may
    /// also report [`FftError::MissingSimd`] or [`FftError::Backend`].
    pub fn new(n: usize) -> Result<Self, FftError> {
        Ok(FastFourier {
            inner: backend::select(n)?,
        })
    }

    /// Number of real samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of complex bins, *n / 2 + 1*.
    #[must_use]
    pub fn spectrum_len(&self) -> usize {
        self.inner.spectrum_len()
    }

    /// Engine family compiled into this build.
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.inner.backend()
    }

    /// Forward transform (real -> complex).
    ///
    /// # Errors
    /// See [`RealFft::forward`].
    pub fn forward(&mut self, input: &[f32], output: &mut [Complex32]) -> Result<(), FftError> {
        self.inner.forward(input, output)
    }

    /// Inverse transform (complex -> real). `input` is unchanged on return.
    ///
    /// # Errors
    /// See [`RealFft::inverse`].
    pub fn inverse(&mut self, input: &mut [Complex32], output: &mut [f32]) -> Result<(), FftError> {
        self.inner.inverse(input, output)
    }

    /// Divide inverse output by this to undo a forward + inverse round trip.
    #[must_use]
    pub fn normalization_factor(&self) -> f32 {
        self.inner.normalization_factor()
    }

    /// [`FastFourier::forward`] on 1-dimensional arrays.
    ///
    /// # Errors
    /// [`FftError::NonContiguous`] if either array is not laid out contiguously,
    /// otherwise as [`FastFourier::forward`].
    ///
    /// # Example
    /// ```
    /// use ndarray::Array1;
    /// use fastfourier::{Complex32, FastFourier};
    ///
    /// let mut fft = FastFourier::new(4).unwrap();
    /// let data = Array1::from(vec![1f32, 2., 3., 4.]);
    /// let mut vhat = Array1::<Complex32>::zeros(3);
    /// fft.forward_array(&data, &mut vhat).unwrap();
    /// ```
    pub fn forward_array<R, S>(
        &mut self,
        input: &ArrayBase<R, Ix1>,
        output: &mut ArrayBase<S, Ix1>,
    ) -> Result<(), FftError>
    where
        R: Data<Elem = f32>,
        S: DataMut<Elem = Complex32>,
    {
        let input = input.as_slice().ok_or(FftError::NonContiguous)?;
        let output = output.as_slice_mut().ok_or(FftError::NonContiguous)?;
        self.forward(input, output)
    }

    /// [`FastFourier::inverse`] on 1-dimensional arrays.
    ///
    /// # Errors
    /// [`FftError::NonContiguous`] if either array is not laid out contiguously,
    /// otherwise as [`FastFourier::inverse`].
    pub fn inverse_array<R, S>(
        &mut self,
        input: &mut ArrayBase<R, Ix1>,
        output: &mut ArrayBase<S, Ix1>,
    ) -> Result<(), FftError>
    where
        R: DataMut<Elem = Complex32>,
        S: DataMut<Elem = f32>,
    {
        let input = input.as_slice_mut().ok_or(FftError::NonContiguous)?;
        let output = output.as_slice_mut().ok_or(FftError::NonContiguous)?;
        self.inverse(input, output)
    }
}

impl fmt::Debug for FastFourier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastFourier")
            .field("len", &self.len())
            .field("backend", &self.backend())
            .finish()
    }
}

impl Drop for FastFourier {
    fn drop(&mut self) {
        log::trace!("releasing {} fft of size {}", self.backend(), self.len());
    }
}
