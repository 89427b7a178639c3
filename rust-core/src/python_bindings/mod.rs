//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod signal_bindings;
mod filter_bindings;
mod spectrum_bindings;
mod modulation_bindings;

/// Python module definition
#[pymodule]
fn modem_workbench(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<signal_bindings::PyOscillator>()?;
    m.add_class::<signal_bindings::PyWaveformKind>()?;
    m.add_function(wrap_pyfunction!(signal_bindings::synthesize, m)?)?;

    m.add_class::<filter_bindings::PyWindowType>()?;
    m.add_function(wrap_pyfunction!(filter_bindings::design_band_pass, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::apply_band_pass, m)?)?;

    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_spectrum, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_frequency_response, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::hilbert, m)?)?;

    m.add_function(wrap_pyfunction!(modulation_bindings::modulate, m)?)?;
    m.add_function(wrap_pyfunction!(modulation_bindings::demodulate, m)?)?;
    m.add_function(wrap_pyfunction!(modulation_bindings::demodulate_fm, m)?)?;
    m.add_function(wrap_pyfunction!(modulation_bindings::transmit, m)?)?;

    Ok(())
}

/// Convert a core error into a Python ValueError
pub(crate) fn to_py_err(err: crate::DspError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Borrow a numpy array as a slice, rejecting non-contiguous input
pub(crate) fn as_slice<'a>(array: &'a numpy::PyReadonlyArray1<f64>) -> PyResult<&'a [f64]> {
    array
        .as_slice()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

/// Build a time series from numpy time and value arrays
pub(crate) fn series_from_arrays(
    time: &numpy::PyReadonlyArray1<f64>,
    values: &numpy::PyReadonlyArray1<f64>,
) -> PyResult<crate::TimeSeries> {
    crate::TimeSeries::new(as_slice(time)?.to_vec(), as_slice(values)?.to_vec()).map_err(to_py_err)
}

/// Split a time series into a (time, values) pair of numpy arrays
pub(crate) fn series_to_arrays<'py>(
    py: Python<'py>,
    series: crate::TimeSeries,
) -> (&'py numpy::PyArray1<f64>, &'py numpy::PyArray1<f64>) {
    let (time, values) = series.into_parts();
    (
        numpy::PyArray1::from_vec(py, time),
        numpy::PyArray1::from_vec(py, values),
    )
}
