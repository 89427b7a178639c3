//! Modem Workbench - Analog Modulation DSP Core
//!
//! Waveform synthesis, band-pass FIR filtering, Fourier analysis and the
//! AM/PM/FM modulation chain, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod signal;
pub mod filters;
pub mod spectrum;
pub mod modulation;
pub mod config;
pub mod pipeline;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::DspError;
pub use signal::{synthesize, OscillatorDescriptor, TimeSeries, WaveformKind};
pub use filters::{apply_band_pass, design_band_pass, FilterSpec, WindowType};
pub use spectrum::{compute_frequency_response, compute_spectrum, dtft, fft, hilbert, ifft, SpectrumAnalyzer};
pub use modulation::{demodulate, modulate, ModulationSpec, Scheme};
pub use config::SignalConfig;
pub use pipeline::{receive, transmit, TransmitOutput};
