//! Apple Accelerate engine (`vDSP_fft_zrop`).
use super::split::{Direction, SplitEngine};
use crate::error::FftError;
use std::os::raw::{c_ulong, c_void};
use std::ptr::NonNull;

#[allow(non_snake_case)]
mod sys {
    use std::os::raw::{c_int, c_long, c_ulong, c_void};

    pub type FFTSetup = *mut c_void;

    #[repr(C)]
    pub struct DSPSplitComplex {
        pub realp: *mut f32,
        pub imagp: *mut f32,
    }

    pub const K_FFT_RADIX2: c_int = 0;
    pub const K_FFT_DIRECTION_FORWARD: c_int = 1;
    pub const K_FFT_DIRECTION_INVERSE: c_int = -1;

    #[link(name = "Accelerate", kind = "framework")]
    extern "C" {
        pub fn vDSP_create_fftsetup(log2n: c_ulong, radix: c_int) -> FFTSetup;
        pub fn vDSP_destroy_fftsetup(setup: FFTSetup);
        pub fn vDSP_fft_zrop(
            setup: FFTSetup,
            a: *const DSPSplitComplex,
            ia: c_long,
            c: *const DSPSplitComplex,
            ic: c_long,
            log2n: c_ulong,
            direction: c_int,
        );
    }
}

/// Owns one vDSP FFT setup; destroyed on drop.
pub struct VdspEngine {
    order: u32,
    setup: NonNull<c_void>,
}

// SAFETY: a setup is only touched through `&mut self`, never shared.
unsafe impl Send for VdspEngine {}

impl SplitEngine for VdspEngine {
    const NAME: &'static str = "vDSP";

    fn with_order(order: u32) -> Result<Self, FftError> {
        // SAFETY: plain constructor call; a null result is handled below.
        let raw = unsafe { sys::vDSP_create_fftsetup(c_ulong::from(order), sys::K_FFT_RADIX2) };
        let setup = NonNull::new(raw)
            .ok_or_else(|| FftError::backend(Self::NAME, "vDSP_create_fftsetup returned null"))?;
        Ok(VdspEngine { order, setup })
    }

    fn transform(
        &mut self,
        input: &[f32],
        output: &mut [f32],
        direction: Direction,
    ) -> Result<(), FftError> {
        let n = 1usize << self.order;
        if input.len() != n || output.len() != n {
            return Err(FftError::backend(
                Self::NAME,
                format!("expected {n} floats, got {} in, {} out", input.len(), output.len()),
            ));
        }
        // zrop is out of place and never writes through its input pointers.
        let src = sys::DSPSplitComplex {
            realp: input.as_ptr() as *mut f32,
            imagp: input[1..].as_ptr() as *mut f32,
        };
        let dst = sys::DSPSplitComplex {
            realp: output.as_mut_ptr(),
            imagp: output[1..].as_mut_ptr(),
        };
        let direction = match direction {
            Direction::Forward => sys::K_FFT_DIRECTION_FORWARD,
            Direction::Inverse => sys::K_FFT_DIRECTION_INVERSE,
        };
        // SAFETY: both views cover `n / 2` complex values at stride 2 inside
        // buffers of `n` floats, and the setup was built for this order.
        unsafe {
            sys::vDSP_fft_zrop(
                self.setup.as_ptr(),
                &src,
                2,
                &dst,
                2,
                c_ulong::from(self.order),
                direction,
            );
        }
        Ok(())
    }
}

impl Drop for VdspEngine {
    fn drop(&mut self) {
        log::trace!("destroying vDSP setup of order {}", self.order);
        // SAFETY: created by vDSP_create_fftsetup and destroyed exactly once.
        unsafe { sys::vDSP_destroy_fftsetup(self.setup.as_ptr()) }
    }
}
