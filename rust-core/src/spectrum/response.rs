//! Frequency response of FIR kernels by direct DTFT evaluation
//!
//! Works for any kernel length and any frequency, no FFT grid involved.

use crate::signal::{effective_sampling_rate, TimeSeries};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Complex DTFT of `coefficients` at `frequency_hz`
///
/// Sample indices are measured from `center`, so a symmetric kernel centered
/// at `(N-1)/2` yields a purely real response.
pub fn dtft_complex(
    coefficients: &[f64],
    frequency_hz: f64,
    sampling_rate_hz: f64,
    center: f64,
) -> Complex64 {
    let fs = effective_sampling_rate(sampling_rate_hz);
    let omega = 2.0 * PI * frequency_hz / fs;

    coefficients
        .iter()
        .enumerate()
        .map(|(n, &h)| h * Complex64::from_polar(1.0, -omega * (n as f64 - center)))
        .sum()
}

/// Magnitude `|Σ h[n]·e^{-j2πf(n-center)/fs}|`
pub fn dtft(coefficients: &[f64], frequency_hz: f64, sampling_rate_hz: f64, center: f64) -> f64 {
    dtft_complex(coefficients, frequency_hz, sampling_rate_hz, center).norm()
}

/// Sample the kernel's magnitude response over `[0, fs/2]`
///
/// # Arguments
/// * `coefficients` - Filter coefficients h[n]
/// * `sampling_rate_hz` - Sampling rate in Hz
/// * `num_points` - Number of linearly spaced frequencies
///
/// # Returns
/// Frequency response with a Hz axis and a magnitude value axis
pub fn compute_frequency_response(
    coefficients: &[f64],
    sampling_rate_hz: f64,
    num_points: usize,
) -> TimeSeries {
    if coefficients.is_empty() || num_points == 0 {
        return TimeSeries::empty();
    }

    let fs = effective_sampling_rate(sampling_rate_hz);
    let nyquist = fs / 2.0;
    let center = (coefficients.len() - 1) as f64 / 2.0;
    let step = if num_points > 1 {
        nyquist / (num_points - 1) as f64
    } else {
        0.0
    };

    let frequencies: Vec<f64> = (0..num_points).map(|i| i as f64 * step).collect();
    let magnitudes = frequencies
        .iter()
        .map(|&f| dtft(coefficients, f, fs, center))
        .collect();

    TimeSeries::from_parts(frequencies.into(), magnitudes)
}

/// Convert magnitudes to dB, flooring at 1e-10 to avoid log(0)
pub fn magnitude_to_db(magnitudes: &[f64], reference: f64) -> Vec<f64> {
    magnitudes
        .iter()
        .map(|&mag| 20.0 * (mag.max(1e-10) / reference).log10())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtft_of_impulse_is_flat() {
        let h = [0.0, 0.0, 1.0, 0.0, 0.0];

        for f in [0.0, 100.0, 250.0, 499.0] {
            assert!((dtft(&h, f, 1000.0, 2.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_dtft_moving_average() {
        let h = [1.0 / 3.0; 3];

        // DC gain is the coefficient sum
        assert!((dtft(&h, 0.0, 300.0, 1.0) - 1.0).abs() < 1e-12);
        // 3-tap average nulls fs/3
        assert!(dtft(&h, 100.0, 300.0, 1.0) < 1e-12);
    }

    #[test]
    fn test_centered_symmetric_kernel_is_real() {
        let h = [0.1, 0.2, 0.4, 0.2, 0.1];
        let response = dtft_complex(&h, 123.0, 1000.0, 2.0);
        assert!(response.im.abs() < 1e-12);
    }

    #[test]
    fn test_frequency_response_axis() {
        let h = [0.25, 0.5, 0.25];
        let response = compute_frequency_response(&h, 8000.0, 5);

        assert_eq!(response.time(), &[0.0, 1000.0, 2000.0, 3000.0, 4000.0]);
        assert!((response.values()[0] - 1.0).abs() < 1e-12);
        // [1,2,1]/4 has a zero at Nyquist
        assert!(response.values()[4] < 1e-12);
        assert!(response.values().iter().all(|&m| m >= 0.0));
    }

    #[test]
    fn test_frequency_response_degenerate() {
        assert!(compute_frequency_response(&[], 1000.0, 10).is_empty());
        assert!(compute_frequency_response(&[1.0], 1000.0, 0).is_empty());
        assert_eq!(compute_frequency_response(&[1.0], 1000.0, 1).time(), &[0.0]);
    }

    #[test]
    fn test_magnitude_to_db() {
        let db = magnitude_to_db(&[1.0, 10.0, 0.0], 1.0);
        assert!(db[0].abs() < 1e-12);
        assert!((db[1] - 20.0).abs() < 1e-12);
        assert!((db[2] + 200.0).abs() < 1e-9);
    }
}
