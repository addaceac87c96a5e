//! Transform engines and the compile-time choice between them.
//!
//! | target                     | adapter                       | normalization |
//! |----------------------------|-------------------------------|---------------|
//! | Apple (macOS, iOS, ...)    | `SplitAdapter<VdspEngine>`    | `4 * n`       |
//! | other `aarch64` / `arm`    | [`NeonAdapter`]               | `1`           |
//! | everything else (x86, ...) | [`CcsAdapter`]                | `n`           |
//!
//! Only [`Selected`] is reachable through [`select`]; the other adapters are
//! public for direct use and testing but never chosen at runtime.
mod ccs;
mod direct;
mod neon;
mod split;
#[cfg(target_vendor = "apple")]
mod vdsp;

pub use ccs::CcsAdapter;
pub use neon::{neon_available, NeonAdapter};
pub use split::{Direction, PortableSplitEngine, SplitAdapter, SplitEngine};
#[cfg(target_vendor = "apple")]
pub use vdsp::VdspEngine;

use crate::error::FftError;
use crate::transform::RealFft;
use std::fmt;

/// Engine family behind a [`RealFft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Interleaved output, unnormalised inverse.
    Ccs,
    /// Interleaved output, self-normalising inverse; needs Neon.
    Neon,
    /// Split storage with Nyquist packed into bin 0, repacked by the adapter.
    Split,
}

impl Backend {
    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Ccs => "ccs",
            Backend::Neon => "neon",
            Backend::Split => "split",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Adapter compiled in for this target.
#[cfg(target_vendor = "apple")]
pub type Selected = SplitAdapter<VdspEngine>;
/// Adapter compiled in for this target.
#[cfg(all(
    not(target_vendor = "apple"),
    any(target_arch = "aarch64", target_arch = "arm")
))]
pub type Selected = NeonAdapter;
/// Adapter compiled in for this target.
#[cfg(not(any(
    target_vendor = "apple",
    target_arch = "aarch64",
    target_arch = "arm"
)))]
pub type Selected = CcsAdapter;

/// Engine family of [`Selected`].
#[cfg(target_vendor = "apple")]
pub const SELECTED: Backend = Backend::Split;
/// Engine family of [`Selected`].
#[cfg(all(
    not(target_vendor = "apple"),
    any(target_arch = "aarch64", target_arch = "arm")
))]
pub const SELECTED: Backend = Backend::Neon;
/// Engine family of [`Selected`].
#[cfg(not(any(
    target_vendor = "apple",
    target_arch = "aarch64",
    target_arch = "arm"
)))]
pub const SELECTED: Backend = Backend::Ccs;

/// Builds the compiled-in adapter for transforms of length `n`.
///
/// # Errors
/// Whatever the adapter's constructor reports, see [`FftError`].
///
/// # Example
/// ```
/// use fastfourier::backend::{select, SELECTED};
/// use fastfourier::RealFft;
/// let fft = select(1024).unwrap();
/// assert_eq!(fft.len(), 1024);
/// assert_eq!(fft.backend(), SELECTED);
/// ```
pub fn select(n: usize) -> Result<Box<dyn RealFft>, FftError> {
    let fft = Selected::new(n)?;
    log::debug!("selected {SELECTED} backend for size {n}");
    Ok(Box::new(fft))
}
