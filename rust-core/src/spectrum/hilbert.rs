//! FFT-based Hilbert transform
//!
//! Produces the quadrature (90° shifted) component of a real signal, plus the
//! envelope and instantaneous phase derived from it.

use super::fft::{inverse_transform, transform, zero_pad};
use crate::signal::TimeSeries;
use num_complex::Complex64;

/// Hilbert transform of a time series' values
pub fn hilbert(signal: &TimeSeries) -> Vec<f64> {
    hilbert_values(signal.values())
}

/// Hilbert transform of a raw sample sequence
///
/// # Algorithm
/// 1. Zero-pad to the next power of two and transform
/// 2. Zero DC and Nyquist
/// 3. Multiply positive-frequency bins by −j, negative-frequency bins by +j
/// 4. Inverse transform and truncate to the input length
pub fn hilbert_values(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut spectrum = transform(&zero_pad(values));
    let n = spectrum.len();
    let half = n / 2;

    for (k, bin) in spectrum.iter_mut().enumerate() {
        *bin = if k == 0 || k == half {
            Complex64::new(0.0, 0.0)
        } else if k < half {
            Complex64::new(bin.im, -bin.re)
        } else {
            Complex64::new(-bin.im, bin.re)
        };
    }

    inverse_transform(&spectrum)
        .into_iter()
        .take(values.len())
        .map(|c| c.re)
        .collect()
}

/// Envelope `sqrt(s² + H[s]²)`
pub fn envelope(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .zip(hilbert_values(values))
        .map(|(&s, h)| s.hypot(h))
        .collect()
}

/// Wrapped instantaneous phase `atan2(H[s], s)` in (−π, π]
pub fn instantaneous_phase(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .zip(hilbert_values(values))
        .map(|(&s, h)| h.atan2(s))
        .collect()
}
