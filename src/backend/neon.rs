//! ARM-class engine: `realfft` on the Neon kernels of `rustfft`.
//!
//! Presents the self-normalising convention: the inverse already divides by
//! `n`, so the normalization factor is `1`.
use super::direct::RealPlan;
use super::Backend;
use crate::error::FftError;
use crate::transform::{check_len, check_real, check_spectrum, RealFft};
use rustfft::num_complex::Complex32;
use std::sync::OnceLock;

static NEON: OnceLock<bool> = OnceLock::new();

#[cfg(test)]
static PROBES: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

/// Whether this machine can run the Neon kernels.
///
/// The hardware probe runs at most once per process, no matter how many
/// threads race into the first call.
pub fn neon_available() -> bool {
    *NEON.get_or_init(|| {
        #[cfg(test)]
        PROBES.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let present = detect_neon();
        log::debug!("neon capability probe: {present}");
        present
    })
}

#[cfg(target_arch = "aarch64")]
fn detect_neon() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

#[cfg(target_arch = "arm")]
fn detect_neon() -> bool {
    cfg!(target_feature = "neon")
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "arm")))]
fn detect_neon() -> bool {
    false
}

/// Direct-mapping adapter with normalization factor `1`.
pub struct NeonAdapter {
    n: usize,
    scale: f32,
    plan: RealPlan,
}

impl NeonAdapter {
    /// Creates a new `NeonAdapter`.
    ///
    /// # Errors
    /// [`FftError::InvalidSize`] unless `n` is a power of two `>= 2`,
    /// [`FftError::MissingSimd`] if the machine lacks Neon.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(n: usize) -> Result<Self, FftError> {
        check_len(n)?;
        if !neon_available() {
            return Err(FftError::MissingSimd { feature: "neon" });
        }
        Ok(NeonAdapter {
            n,
            scale: 1. / n as f32,
            plan: RealPlan::new(n),
        })
    }
}

impl RealFft for NeonAdapter {
    fn len(&self) -> usize {
        self.n
    }

    fn backend(&self) -> Backend {
        Backend::Neon
    }

    fn forward(&mut self, input: &[f32], output: &mut [Complex32]) -> Result<(), FftError> {
        check_real(input, self.n)?;
        check_spectrum(output, self.n)?;
        log::trace!("neon forward, n = {}", self.n);
        self.plan.forward(input, output)
    }

    fn inverse(&mut self, input: &mut [Complex32], output: &mut [f32]) -> Result<(), FftError> {
        check_spectrum(input, self.n)?;
        check_real(output, self.n)?;
        log::trace!("neon inverse, n = {}", self.n);
        self.plan.inverse(input, output)?;
        for d in output.iter_mut() {
            *d *= self.scale;
        }
        Ok(())
    }

    fn normalization_factor(&self) -> f32 {
        1.
    }
}
