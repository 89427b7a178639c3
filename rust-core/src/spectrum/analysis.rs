//! Magnitude spectra of time series
//!
//! `compute_spectrum` is the exact single-sided spectrum used by the signal
//! chain. `SpectrumAnalyzer` is a windowed, dB-oriented view for displays.

use super::fft::{transform, zero_pad};
use super::response::magnitude_to_db;
use super::windowing::{apply_window, window_correction_factor};
use crate::error::Result;
use crate::filters::windows::WindowType;
use crate::signal::{effective_sampling_rate, TimeSeries};
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// Single-sided magnitude spectrum
///
/// The signal is zero-padded to N = next power of two. Bin k sits at
/// `k·fs/N` for `k = 0..=N/2` with magnitude `|X[k]|/N`, doubled for every
/// bin strictly between DC and Nyquist.
pub fn compute_spectrum(signal: &TimeSeries, sampling_rate_hz: f64) -> TimeSeries {
    if signal.is_empty() {
        return TimeSeries::empty();
    }

    let fs = effective_sampling_rate(sampling_rate_hz);
    let spectrum = transform(&zero_pad(signal.values()));
    let n = spectrum.len();
    let half = n / 2;

    let frequencies: Vec<f64> = (0..=half).map(|k| k as f64 * fs / n as f64).collect();
    let magnitudes = spectrum[..=half]
        .iter()
        .enumerate()
        .map(|(k, bin)| {
            let mag = bin.norm() / n as f64;
            if k > 0 && k < half {
                2.0 * mag
            } else {
                mag
            }
        })
        .collect();

    TimeSeries::from_parts(frequencies.into(), magnitudes)
}

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// FFT size (number of samples)
    pub fft_size: usize,

    /// Window type for spectral analysis
    pub window_type: WindowType,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Apply amplitude correction for windowing
    pub apply_correction: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            window_type: WindowType::Hamming,
            sample_rate: 48000.0,
            apply_correction: true,
        }
    }
}

/// Windowed spectrum analyzer with a reusable real-FFT plan
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    r2c: Arc<dyn RealToComplex<f64>>,
    input_buffer: Vec<f64>,
    output_buffer: Vec<Complex64>,
    correction_factor: f64,
}

impl SpectrumAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        let fft_size = config.fft_size.max(2);
        let r2c = RealFftPlanner::<f64>::new().plan_fft_forward(fft_size);
        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        let correction_factor = if config.apply_correction {
            window_correction_factor(config.window_type, fft_size)
        } else {
            1.0
        };

        Self {
            config: AnalyzerConfig { fft_size, ..config },
            r2c,
            input_buffer,
            output_buffer,
            correction_factor,
        }
    }

    /// Single-sided amplitude spectrum of the first `fft_size` samples
    ///
    /// Shorter signals are windowed over their own length and zero-padded.
    pub fn analyze(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        let fft_size = self.config.fft_size;
        let copy_len = signal.len().min(fft_size);
        let windowed = apply_window(&signal[..copy_len], self.config.window_type);

        self.input_buffer[..copy_len].copy_from_slice(&windowed);
        self.input_buffer[copy_len..].fill(0.0);

        self.r2c.process(&mut self.input_buffer, &mut self.output_buffer)?;

        let last = self.output_buffer.len() - 1;
        let scale = self.correction_factor / fft_size as f64;
        Ok(self
            .output_buffer
            .iter()
            .enumerate()
            .map(|(k, c)| {
                let mag = c.norm() * scale;
                if k > 0 && k < last {
                    2.0 * mag
                } else {
                    mag
                }
            })
            .collect())
    }

    /// Analyze and return magnitude in dB relative to `reference`
    pub fn analyze_db(&mut self, signal: &[f64], reference: f64) -> Result<Vec<f64>> {
        Ok(magnitude_to_db(&self.analyze(signal)?, reference))
    }

    /// Frequency of each output bin in Hz
    pub fn frequency_bins_hz(&self) -> Vec<f64> {
        let bin_width = self.config.sample_rate / self.config.fft_size as f64;
        (0..self.num_bins()).map(|k| k as f64 * bin_width).collect()
    }

    /// Replace the configuration, re-planning only when the size changes
    pub fn update_config(&mut self, config: AnalyzerConfig) {
        if config.fft_size.max(2) != self.config.fft_size {
            *self = Self::new(config);
            return;
        }

        self.correction_factor = if config.apply_correction {
            window_correction_factor(config.window_type, self.config.fft_size)
        } else {
            1.0
        };
        self.config = AnalyzerConfig {
            fft_size: self.config.fft_size,
            ..config
        };
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Number of bins (fft_size/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.config.fft_size / 2 + 1
    }
}
