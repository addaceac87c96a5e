//! The real-to-complex transform contract every backend implements.
use crate::backend::Backend;
use crate::error::FftError;
use rustfft::num_complex::Complex32;

/// Smallest supported transform length.
pub const MIN_LEN: usize = 2;

/// Byte alignment required of every real and spectral buffer.
pub const SIMD_ALIGN: usize = 16;

/// Real-to-complex FFT of one fixed power-of-two length.
///
/// The real side holds `len()` samples, the spectral side the `len() / 2 + 1`
/// non-redundant bins, interleaved as (re, im). Transforms are unnormalised:
/// `inverse(forward(x))` yields `x * normalization_factor()`.
///
/// Dropping an implementor releases its plan state.
pub trait RealFft: Send {
    /// Number of real samples.
    fn len(&self) -> usize;

    /// Always `false`; a plan has at least [`MIN_LEN`] samples.
    fn is_empty(&self) -> bool {
        false
    }

    /// Number of complex bins, `len() / 2 + 1`.
    fn spectrum_len(&self) -> usize {
        self.len() / 2 + 1
    }

    /// Engine family behind this instance.
    fn backend(&self) -> Backend;

    /// Real -> complex. Bins 0 and `len() / 2` come back with an imaginary part of exactly zero.
    ///
    /// # Errors
    /// [`FftError`] if a buffer has the wrong length or alignment, or the engine fails.
    fn forward(&mut self, input: &[f32], output: &mut [Complex32]) -> Result<(), FftError>;

    /// Complex -> real. The imaginary parts of bins 0 and `len() / 2` are ignored.
    ///
    /// `input` is borrowed mutably because an engine may rearrange it during the
    /// call. On return it is bit-identical to what the caller passed in.
    ///
    /// # Errors
    /// [`FftError`] if a buffer has the wrong length or alignment, or the engine fails.
    fn inverse(&mut self, input: &mut [Complex32], output: &mut [f32]) -> Result<(), FftError>;

    /// Divide the output of [`RealFft::inverse`] by this to recover the amplitude
    /// of the signal that went into [`RealFft::forward`].
    fn normalization_factor(&self) -> f32;
}

pub(crate) fn check_len(len: usize) -> Result<(), FftError> {
    if len < MIN_LEN || !len.is_power_of_two() {
        return Err(FftError::InvalidSize { len });
    }
    Ok(())
}

pub(crate) fn check_real(buffer: &[f32], len: usize) -> Result<(), FftError> {
    check_size(buffer.len(), len)?;
    check_aligned(buffer)
}

pub(crate) fn check_spectrum(buffer: &[Complex32], len: usize) -> Result<(), FftError> {
    check_size(buffer.len(), len / 2 + 1)?;
    check_aligned(buffer)
}

fn check_size(actual: usize, expected: usize) -> Result<(), FftError> {
    if actual != expected {
        return Err(FftError::LengthMismatch { expected, actual });
    }
    Ok(())
}

fn check_aligned<T>(buffer: &[T]) -> Result<(), FftError> {
    if (buffer.as_ptr() as usize) % SIMD_ALIGN != 0 {
        return Err(FftError::Misaligned {
            required: SIMD_ALIGN,
        });
    }
    Ok(())
}

/// View interleaved complex values as `2 * len` floats.
pub(crate) fn as_floats(data: &[Complex32]) -> &[f32] {
    // SAFETY: `Complex<f32>` is `#[repr(C)]` with fields `re`, `im`.
    unsafe { std::slice::from_raw_parts(data.as_ptr().cast::<f32>(), data.len() * 2) }
}

pub(crate) fn as_floats_mut(data: &mut [Complex32]) -> &mut [f32] {
    // SAFETY: see `as_floats`.
    unsafe { std::slice::from_raw_parts_mut(data.as_mut_ptr().cast::<f32>(), data.len() * 2) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_len() {
        for len in [2, 4, 64, 4096, 1 << 20] {
            assert!(check_len(len).is_ok(), "{len}");
        }
        for len in [0, 1, 3, 6, 100, 4095] {
            assert_eq!(check_len(len), Err(FftError::InvalidSize { len }));
        }
    }

    #[test]
    fn test_check_buffers() {
        let real = vec![0f32; 16];
        let spectrum = vec![Complex32::new(0., 0.); 9];
        assert!(check_real(&real, 16).is_ok());
        assert!(check_spectrum(&spectrum, 16).is_ok());
        assert_eq!(
            check_real(&real[..8], 16),
            Err(FftError::LengthMismatch {
                expected: 16,
                actual: 8
            })
        );
        assert_eq!(
            check_spectrum(&spectrum, 8),
            Err(FftError::LengthMismatch {
                expected: 5,
                actual: 9
            })
        );
        // one float past a 16-byte boundary
        assert_eq!(
            check_real(&real[1..9], 8),
            Err(FftError::Misaligned { required: 16 })
        );
    }

    #[test]
    fn test_float_view() {
        let mut data = vec![Complex32::new(1., 2.), Complex32::new(3., 4.)];
        assert_eq!(as_floats(&data), &[1., 2., 3., 4.]);
        as_floats_mut(&mut data)[3] = -4.;
        assert_eq!(data[1], Complex32::new(3., -4.));
    }
}
