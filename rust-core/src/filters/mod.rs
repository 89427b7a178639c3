//! Band-pass FIR design and same-length filtering

pub mod windows;
pub mod design;
pub mod fir;
pub mod fast_fir;

pub use windows::{WindowType, generate_window};
pub use design::{FilterSpec, ResolvedBand, design_band_pass, sinc};
pub use fir::{apply_band_pass, convolve_same};
pub use fast_fir::convolve_same_fft;
