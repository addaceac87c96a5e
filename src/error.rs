use std::fmt::{self, Display, Formatter};

/// Coarse classification of an [`FftError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller broke the transform contract: bad length, wrong buffer size,
    /// misaligned or non-contiguous buffer, or missing SIMD support.
    InvalidConfiguration,
    /// The engine behind the interface reported a failure.
    BackendFailure,
}

/// Errors reported by every transform backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    /// Transform length is not a power of two, or is below [`crate::MIN_LEN`].
    InvalidSize { len: usize },
    /// A buffer does not have the length the plan was built for.
    LengthMismatch { expected: usize, actual: usize },
    /// A buffer does not start on a [`crate::SIMD_ALIGN`] byte boundary.
    Misaligned { required: usize },
    /// An ndarray view is not contiguous in memory.
    NonContiguous,
    /// The engine needs a SIMD extension this machine does not have.
    MissingSimd { feature: &'static str },
    /// The engine returned an error status.
    Backend { engine: &'static str, detail: String },
}

impl FftError {
    /// Classify the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastfourier::{ErrorKind, FftError};
    /// let err = FftError::InvalidSize { len: 12 };
    /// assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Backend { .. } => ErrorKind::BackendFailure,
            _ => ErrorKind::InvalidConfiguration,
        }
    }

    pub(crate) fn backend(engine: &'static str, detail: impl Display) -> Self {
        Self::Backend {
            engine,
            detail: detail.to_string(),
        }
    }
}

impl Display for FftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { len } => {
                write!(f, "invalid transform size {len}: must be a power of two >= 2")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "size mismatch in fft, got {actual} expected {expected}")
            }
            Self::Misaligned { required } => {
                write!(f, "buffer is not aligned to {required} bytes")
            }
            Self::NonContiguous => write!(f, "array view is not contiguous"),
            Self::MissingSimd { feature } => {
                write!(f, "required SIMD extension `{feature}` is not available")
            }
            Self::Backend { engine, detail } => write!(f, "{engine} failed: {detail}"),
        }
    }
}

impl std::error::Error for FftError {}
