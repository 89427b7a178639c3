//! Same-length FIR convolution and the band-pass stage
//!
//! Output sample n is `Σ_k x[n+k-half]·h[k]` over in-bounds indices, so the
//! kernel center aligns with the input and the edges see implicit zeros.

use super::design::{design_resolved, ResolvedBand};
use super::fast_fir::{convolve_same_fft, FAST_CONVOLUTION_THRESHOLD};
use crate::signal::TimeSeries;

/// Direct-form same-length convolution, O(len(h)·len(x))
pub fn convolve_same(signal: &[f64], coefficients: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let half = coefficients.len() / 2;

    (0..n)
        .map(|i| {
            // k such that 0 <= i + k - half < n
            let k_start = half.saturating_sub(i);
            let k_end = coefficients.len().min(n + half - i);

            (k_start..k_end)
                .map(|k| signal[i + k - half] * coefficients[k])
                .sum::<f64>()
        })
        .collect()
}

/// Band-pass filter a time series
///
/// # Arguments
/// * `signal` - Input series (its time axis is shared by the output)
/// * `low_cutoff_hz`, `high_cutoff_hz` - Band edges, clamped to [0, Nyquist)
/// * `sampling_rate_hz` - Sampling rate in Hz
/// * `order` - Kernel length (forced odd, at least 3)
///
/// # Returns
/// Filtered series of the same length. An empty band after clamping returns
/// a value copy of the input.
pub fn apply_band_pass(
    signal: &TimeSeries,
    low_cutoff_hz: f64,
    high_cutoff_hz: f64,
    sampling_rate_hz: f64,
    order: usize,
) -> TimeSeries {
    apply_resolved(
        signal,
        &ResolvedBand::new(order, sampling_rate_hz, low_cutoff_hz, high_cutoff_hz),
    )
}

pub(crate) fn apply_resolved(signal: &TimeSeries, band: &ResolvedBand) -> TimeSeries {
    if signal.is_empty() {
        return TimeSeries::empty();
    }

    if band.is_pass_through() {
        tracing::debug!(
            low = band.low_cutoff,
            high = band.high_cutoff,
            "empty pass band, filter bypassed"
        );
        return signal.clone();
    }

    let coefficients = design_resolved(band);
    let values = if coefficients.len() > FAST_CONVOLUTION_THRESHOLD {
        convolve_same_fft(signal.values(), &coefficients)
    } else {
        convolve_same(signal.values(), &coefficients)
    };

    signal.with_values(values)
}

/// Group delay of a symmetric kernel in samples
pub fn group_delay_samples(coefficients: &[f64]) -> f64 {
    coefficients.len().saturating_sub(1) as f64 / 2.0
}
