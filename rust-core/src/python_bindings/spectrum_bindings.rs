//! Python bindings for spectrum analysis

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::spectrum::{SpectrumAnalyzer, analysis::AnalyzerConfig};
use super::filter_bindings::PyWindowType;
use super::{as_slice, series_from_arrays, series_to_arrays, to_py_err};

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// Args:
    ///     fft_size: FFT size (number of samples)
    ///     window_type: Window type for analysis
    ///     sample_rate: Sample rate in Hz
    ///     apply_correction: Whether to apply amplitude correction for windowing
    #[new]
    #[pyo3(signature = (fft_size=2048, window_type=PyWindowType::Hamming, sample_rate=48000.0, apply_correction=true))]
    fn new(
        fft_size: usize,
        window_type: PyWindowType,
        sample_rate: f64,
        apply_correction: bool,
    ) -> Self {
        let config = AnalyzerConfig {
            fft_size,
            window_type: window_type.into(),
            sample_rate,
            apply_correction,
        };

        Self {
            analyzer: SpectrumAnalyzer::new(config),
        }
    }

    /// Analyze signal and return magnitude spectrum
    fn analyze<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let spectrum = self.analyzer.analyze(as_slice(&signal)?).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Analyze signal and return magnitude in dB
    #[pyo3(signature = (signal, reference=1.0))]
    fn analyze_db<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        reference: f64,
    ) -> PyResult<&'py PyArray1<f64>> {
        let spectrum = self
            .analyzer
            .analyze_db(as_slice(&signal)?, reference)
            .map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Get frequency bins in Hz
    fn frequency_bins_hz<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.analyzer.frequency_bins_hz())
    }

    /// Get number of frequency bins
    fn num_bins(&self) -> usize {
        self.analyzer.num_bins()
    }

    #[pyo3(signature = (fft_size=None, window_type=None, sample_rate=None, apply_correction=None))]
    fn update_config(
        &mut self,
        fft_size: Option<usize>,
        window_type: Option<PyWindowType>,
        sample_rate: Option<f64>,
        apply_correction: Option<bool>,
    ) {
        let mut config = self.analyzer.config().clone();

        if let Some(size) = fft_size {
            config.fft_size = size;
        }
        if let Some(win) = window_type {
            config.window_type = win.into();
        }
        if let Some(sr) = sample_rate {
            config.sample_rate = sr;
        }
        if let Some(corr) = apply_correction {
            config.apply_correction = corr;
        }

        self.analyzer.update_config(config);
    }
}

/// Single-sided amplitude spectrum of a signal
///
/// Args:
///     time: Time axis as numpy array
///     values: Sample values as numpy array
///     sampling_rate: Sampling rate in Hz
///
/// Returns:
///     Tuple of (frequencies, magnitudes) numpy arrays
#[pyfunction]
pub fn compute_spectrum<'py>(
    py: Python<'py>,
    time: PyReadonlyArray1<f64>,
    values: PyReadonlyArray1<f64>,
    sampling_rate: f64,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let signal = series_from_arrays(&time, &values)?;
    Ok(series_to_arrays(py, crate::spectrum::compute_spectrum(&signal, sampling_rate)))
}

/// Magnitude response of FIR coefficients over [0, fs/2]
#[pyfunction]
#[pyo3(signature = (coefficients, sampling_rate, num_points=512))]
pub fn compute_frequency_response<'py>(
    py: Python<'py>,
    coefficients: PyReadonlyArray1<f64>,
    sampling_rate: f64,
    num_points: usize,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let response = crate::spectrum::compute_frequency_response(
        as_slice(&coefficients)?,
        sampling_rate,
        num_points,
    );
    Ok(series_to_arrays(py, response))
}

/// Hilbert transform of a real signal
#[pyfunction]
pub fn hilbert<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let transformed = crate::spectrum::hilbert::hilbert_values(as_slice(&values)?);
    Ok(PyArray1::from_vec(py, transformed))
}
