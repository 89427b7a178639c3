//! Composite waveform synthesis
//!
//! Sums oscillator contributions over a uniform time grid.

use super::oscillator::OscillatorDescriptor;
use super::{effective_sampling_rate, TimeSeries};

/// Lowest sampling rate accepted anywhere in the core (Hz)
pub const MIN_SAMPLING_RATE: f64 = 1e-6;

/// Synthesize the superposition of `oscillators`
///
/// # Arguments
/// * `oscillators` - Additive components (an empty list yields silence)
/// * `duration_s` - Signal duration in seconds
/// * `sampling_rate_hz` - Sampling rate, floored to `MIN_SAMPLING_RATE`
///
/// # Returns
/// `max(1, round(duration_s * fs))` samples with `t[i] = i / fs`
pub fn synthesize(
    oscillators: &[OscillatorDescriptor],
    duration_s: f64,
    sampling_rate_hz: f64,
) -> TimeSeries {
    let fs = effective_sampling_rate(sampling_rate_hz);
    if fs != sampling_rate_hz {
        tracing::debug!(sampling_rate_hz, fs, "sampling rate floored");
    }

    // NaN and negative products collapse to a single sample
    let num_samples = (duration_s * fs).round().max(1.0) as usize;

    let time: Vec<f64> = (0..num_samples).map(|i| i as f64 / fs).collect();
    let values = time
        .iter()
        .map(|&t| oscillators.iter().map(|osc| osc.sample(t)).sum())
        .collect();

    TimeSeries::from_parts(time.into(), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::WaveformKind;
    use std::f64::consts::PI;

    #[test]
    fn test_zero_frequency_sine_is_silent() {
        let osc = [OscillatorDescriptor::new(WaveformKind::Sine, 1.0, 0.0, 0.0)];
        let series = synthesize(&osc, 1.0, 10.0);

        assert_eq!(series.len(), 10);
        assert!(series.values().iter().all(|&v| v == 0.0));
        assert!((series.time()[9] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_no_oscillators() {
        let series = synthesize(&[], 0.5, 100.0);
        assert_eq!(series.len(), 50);
        assert!(series.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_superposition_is_additive() {
        let a = OscillatorDescriptor::sine(1.0, 3.0);
        let b = OscillatorDescriptor::cosine(0.5, 7.0);

        let sum = synthesize(&[a, b], 1.0, 200.0);
        let only_a = synthesize(&[a], 1.0, 200.0);
        let only_b = synthesize(&[b], 1.0, 200.0);

        for i in 0..sum.len() {
            let expected = only_a.values()[i] + only_b.values()[i];
            assert!((sum.values()[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sine_values() {
        let series = synthesize(&[OscillatorDescriptor::sine(2.0, 10.0)], 1.0, 1000.0);

        assert_eq!(series.len(), 1000);
        for (i, (&t, &v)) in series.time().iter().zip(series.values()).enumerate() {
            let expected = 2.0 * (2.0 * PI * 10.0 * t).sin();
            assert!((v - expected).abs() < 1e-12, "Mismatch at {}", i);
        }
    }

    #[test]
    fn test_degenerate_parameters() {
        // Zero sampling rate is floored, and the count never drops below one
        let series = synthesize(&[OscillatorDescriptor::cosine(1.0, 1.0)], 1.0, 0.0);
        assert_eq!(series.len(), 1);
        assert!((series.values()[0] - 1.0).abs() < 1e-12);

        let series = synthesize(&[], -3.0, 100.0);
        assert_eq!(series.len(), 1);
    }
}
