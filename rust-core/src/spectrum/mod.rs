//! Fourier engine, Hilbert transform and spectral views

pub mod fft;
pub mod hilbert;
pub mod response;
pub mod windowing;
pub mod analysis;

pub use fft::{fft, ifft, next_power_of_two, zero_pad};
pub use hilbert::hilbert;
pub use response::{compute_frequency_response, dtft};
pub use windowing::apply_window;
pub use analysis::{compute_spectrum, SpectrumAnalyzer};
