//! Python bindings for the modulation chain

use pyo3::prelude::*;
use pyo3::types::PyDict;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::config::SignalConfig;
use crate::modulation::{demodulate_fm_message, demodulate_named, modulate_named};
use crate::signal::TimeSeries;
use super::{series_from_arrays, series_to_arrays, to_py_err};

/// Modulate a message onto a carrier
///
/// Args:
///     time: Time axis as numpy array
///     values: Message samples as numpy array
///     carrier_frequency: Carrier frequency in Hz
///     modulation_constant: Modulation index / deviation constant
///     scheme: One of AM-DSB, AM-DSB-SC, AM-SSB, PM, FM
///
/// Returns:
///     Tuple of (time, modulated) numpy arrays; empty for an unknown scheme
#[pyfunction]
pub fn modulate<'py>(
    py: Python<'py>,
    time: PyReadonlyArray1<f64>,
    values: PyReadonlyArray1<f64>,
    carrier_frequency: f64,
    modulation_constant: f64,
    scheme: &str,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let message = series_from_arrays(&time, &values)?;
    let modulated = modulate_named(&message, carrier_frequency, modulation_constant, scheme);
    Ok(series_to_arrays(py, modulated))
}

/// Recover the message from a modulated signal
#[pyfunction]
pub fn demodulate<'py>(
    py: Python<'py>,
    time: PyReadonlyArray1<f64>,
    values: PyReadonlyArray1<f64>,
    carrier_frequency: f64,
    sampling_rate: f64,
    demod_constant: f64,
    scheme: &str,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let signal = series_from_arrays(&time, &values)?;
    let recovered = demodulate_named(&signal, carrier_frequency, sampling_rate, demod_constant, scheme);
    Ok(series_to_arrays(py, recovered))
}

/// FM discriminator returning the message in its original units
#[pyfunction]
pub fn demodulate_fm<'py>(
    py: Python<'py>,
    time: PyReadonlyArray1<f64>,
    values: PyReadonlyArray1<f64>,
    carrier_frequency: f64,
    sampling_rate: f64,
    demod_constant: f64,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let signal = series_from_arrays(&time, &values)?;
    let recovered = demodulate_fm_message(&signal, carrier_frequency, sampling_rate, demod_constant);
    Ok(series_to_arrays(py, recovered))
}

/// Run the transmit chain from a JSON signal record
///
/// Returns:
///     Dict of (x, y) array tuples keyed by stage name, plus the filter's
///     group delay in samples. The filter entries are present only when the
///     record configures a filter.
#[pyfunction]
pub fn transmit<'py>(py: Python<'py>, config_json: &str) -> PyResult<&'py PyDict> {
    let config = SignalConfig::from_json(config_json).map_err(to_py_err)?;
    let output = crate::pipeline::transmit(&config);

    let dict = PyDict::new(py);
    let put = |key: &str, series: TimeSeries| dict.set_item(key, series_to_arrays(py, series).into_py(py));

    put("message", output.message)?;
    if let Some(filtered) = output.filtered {
        put("filtered", filtered)?;
    }
    if let Some(response) = output.filter_response {
        put("filter_response", response)?;
    }
    if let Some(delay) = output.filter_delay_samples {
        dict.set_item("filter_delay_samples", delay)?;
    }
    put("modulated", output.modulated)?;
    put("spectrum", output.spectrum)?;

    Ok(dict)
}
