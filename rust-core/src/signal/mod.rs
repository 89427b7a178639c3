//! Time-indexed signals and the waveform synthesizer

pub mod oscillator;
pub mod synth;

pub use oscillator::{OscillatorDescriptor, WaveformKind};
pub use synth::{synthesize, MIN_SAMPLING_RATE};

use crate::error::{DspError, Result};
use std::sync::Arc;

/// Floor a sampling rate to a small positive value
///
/// Non-positive and NaN rates become `MIN_SAMPLING_RATE`.
pub fn effective_sampling_rate(sampling_rate_hz: f64) -> f64 {
    if sampling_rate_hz.is_nan() || sampling_rate_hz < MIN_SAMPLING_RATE {
        MIN_SAMPLING_RATE
    } else {
        sampling_rate_hz
    }
}

/// Equal-length time and value sequences
///
/// The time axis sits behind an `Arc` so stages that keep the input timing
/// (filter, modulator, demodulator) share it rather than copy it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    time: Arc<[f64]>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a time series, checking the length and ordering invariants
    ///
    /// # Arguments
    /// * `time` - Time axis (non-decreasing)
    /// * `values` - Sample values, one per time instant
    pub fn new(time: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if time.len() != values.len() {
            return Err(DspError::LengthMismatch {
                time: time.len(),
                values: values.len(),
            });
        }

        if let Some(i) = time.windows(2).position(|w| w[1] < w[0]) {
            return Err(DspError::NonMonotonicTime(i + 1));
        }

        Ok(Self {
            time: time.into(),
            values,
        })
    }

    /// Series sampled uniformly at `sampling_rate_hz`, starting at t = 0
    pub fn uniform(values: Vec<f64>, sampling_rate_hz: f64) -> Self {
        let fs = effective_sampling_rate(sampling_rate_hz);
        let time: Arc<[f64]> = (0..values.len()).map(|i| i as f64 / fs).collect();
        Self { time, values }
    }

    /// Empty series
    pub fn empty() -> Self {
        Self {
            time: Arc::from(Vec::new()),
            values: Vec::new(),
        }
    }

    /// New series over this series' time axis
    ///
    /// `values` must have the same length as the time axis.
    pub(crate) fn with_values(&self, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), self.time.len());
        Self {
            time: Arc::clone(&self.time),
            values,
        }
    }

    /// Build from parts already known to satisfy the invariants
    pub(crate) fn from_parts(time: Arc<[f64]>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), time.len());
        Self { time, values }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Shared handle to the time axis
    pub fn time_axis(&self) -> Arc<[f64]> {
        Arc::clone(&self.time)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sampling rate inferred from the first two time instants
    ///
    /// Returns `None` for fewer than two samples or a zero spacing.
    pub fn inferred_sampling_rate(&self) -> Option<f64> {
        match self.time.get(..2) {
            Some([t0, t1]) if t1 > t0 => Some(1.0 / (t1 - t0)),
            _ => None,
        }
    }

    /// Split into owned axes
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time.to_vec(), self.values)
    }
}
