//! Error types for the DSP core
//!
//! Out-of-range parameters are clamped, never reported. These variants cover
//! the faults that clamping cannot repair.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DspError {
    #[error("FFT length must be a power of two (got {0})")]
    NotPowerOfTwo(usize),

    #[error("Time axis has {time} samples but value axis has {values}")]
    LengthMismatch { time: usize, values: usize },

    #[error("Time axis decreases at index {0}")]
    NonMonotonicTime(usize),

    #[error("FFT processing failed: {0}")]
    Fft(#[from] realfft::FftError),

    #[error("Unknown modulation scheme: {0}")]
    UnknownScheme(String),

    #[error("Invalid signal configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DspError>;
