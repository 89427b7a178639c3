//! Python bindings for band-pass FIR design and filtering

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::filters::WindowType;
use super::{series_from_arrays, series_to_arrays};

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Hann,
    Hamming,
    Blackman,
    Rectangular,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::Rectangular => WindowType::Rectangular,
        }
    }
}

/// Design band-pass FIR coefficients
///
/// Args:
///     order: Kernel length (forced odd, at least 3)
///     sampling_rate: Sampling rate in Hz
///     low_cutoff: Lower band edge in Hz
///     high_cutoff: Upper band edge in Hz
///
/// Returns:
///     Coefficients as numpy array
#[pyfunction]
pub fn design_band_pass<'py>(
    py: Python<'py>,
    order: usize,
    sampling_rate: f64,
    low_cutoff: f64,
    high_cutoff: f64,
) -> &'py PyArray1<f64> {
    let coeffs = crate::filters::design_band_pass(order, sampling_rate, low_cutoff, high_cutoff);
    PyArray1::from_vec(py, coeffs)
}

/// Band-pass filter a signal
///
/// Args:
///     time: Time axis as numpy array
///     values: Sample values as numpy array
///     low_cutoff: Lower band edge in Hz
///     high_cutoff: Upper band edge in Hz
///     sampling_rate: Sampling rate in Hz
///     order: Kernel length
///
/// Returns:
///     Tuple of (time, filtered values) numpy arrays
#[pyfunction]
#[pyo3(signature = (time, values, low_cutoff, high_cutoff, sampling_rate, order=101))]
pub fn apply_band_pass<'py>(
    py: Python<'py>,
    time: PyReadonlyArray1<f64>,
    values: PyReadonlyArray1<f64>,
    low_cutoff: f64,
    high_cutoff: f64,
    sampling_rate: f64,
    order: usize,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let signal = series_from_arrays(&time, &values)?;
    let filtered = crate::filters::apply_band_pass(&signal, low_cutoff, high_cutoff, sampling_rate, order);
    Ok(series_to_arrays(py, filtered))
}
