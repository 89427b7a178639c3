//! Python bindings for waveform synthesis

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::signal::{OscillatorDescriptor, WaveformKind};
use super::series_to_arrays;

/// Waveform kind enum exposed to Python
#[pyclass(name = "WaveformKind")]
#[derive(Clone)]
pub enum PyWaveformKind {
    Sine,
    Cosine,
    Square,
    Triangle,
    Sawtooth,
}

impl From<WaveformKind> for PyWaveformKind {
    fn from(kind: WaveformKind) -> Self {
        match kind {
            WaveformKind::Sine => PyWaveformKind::Sine,
            WaveformKind::Cosine => PyWaveformKind::Cosine,
            WaveformKind::Square => PyWaveformKind::Square,
            WaveformKind::Triangle => PyWaveformKind::Triangle,
            WaveformKind::Sawtooth => PyWaveformKind::Sawtooth,
        }
    }
}

impl From<PyWaveformKind> for WaveformKind {
    fn from(py_kind: PyWaveformKind) -> Self {
        match py_kind {
            PyWaveformKind::Sine => WaveformKind::Sine,
            PyWaveformKind::Cosine => WaveformKind::Cosine,
            PyWaveformKind::Square => WaveformKind::Square,
            PyWaveformKind::Triangle => WaveformKind::Triangle,
            PyWaveformKind::Sawtooth => WaveformKind::Sawtooth,
        }
    }
}

/// Oscillator descriptor exposed to Python
#[pyclass(name = "Oscillator")]
#[derive(Clone)]
pub struct PyOscillator {
    descriptor: OscillatorDescriptor,
}

#[pymethods]
impl PyOscillator {
    /// Create an oscillator
    ///
    /// Args:
    ///     kind: Waveform kind
    ///     amplitude: Peak amplitude
    ///     frequency: Frequency in Hz (negative values act as 0)
    ///     phase: Phase offset in radians
    #[new]
    #[pyo3(signature = (kind=PyWaveformKind::Sine, amplitude=1.0, frequency=1.0, phase=0.0))]
    fn new(kind: PyWaveformKind, amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            descriptor: OscillatorDescriptor::new(kind.into(), amplitude, frequency, phase),
        }
    }

    #[getter]
    fn kind(&self) -> PyWaveformKind {
        self.descriptor.kind.into()
    }

    #[getter]
    fn amplitude(&self) -> f64 {
        self.descriptor.amplitude
    }

    #[getter]
    fn frequency(&self) -> f64 {
        self.descriptor.frequency
    }

    #[getter]
    fn phase(&self) -> f64 {
        self.descriptor.phase
    }
}

/// Synthesize the sum of oscillators
///
/// Args:
///     oscillators: List of Oscillator
///     duration: Duration in seconds
///     sampling_rate: Sampling rate in Hz
///
/// Returns:
///     Tuple of (time, values) numpy arrays
#[pyfunction]
pub fn synthesize<'py>(
    py: Python<'py>,
    oscillators: Vec<PyOscillator>,
    duration: f64,
    sampling_rate: f64,
) -> (&'py PyArray1<f64>, &'py PyArray1<f64>) {
    let descriptors: Vec<OscillatorDescriptor> = oscillators.iter().map(|o| o.descriptor).collect();
    series_to_arrays(py, crate::signal::synthesize(&descriptors, duration, sampling_rate))
}
