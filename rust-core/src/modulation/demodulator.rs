//! Message recovery for the five modulation schemes
//!
//! AM-DSB uses an envelope detector, the suppressed-carrier schemes use
//! coherent detection, and PM/FM read the instantaneous phase of the
//! analytic signal. Coherent detection leaves the 2·fc image in place; run a
//! low-pass filter over the result to remove it.

use super::Scheme;
use crate::signal::{effective_sampling_rate, TimeSeries};
use crate::spectrum::hilbert::{envelope, instantaneous_phase};
use std::f64::consts::PI;

/// Recover the message from a modulated signal
///
/// # Arguments
/// * `signal` - Received signal (its time axis is shared by the output)
/// * `carrier_frequency` - Carrier frequency in Hz
/// * `sampling_rate` - Sampling rate in Hz (used by FM)
/// * `demod_constant` - The modulation constant used on transmit
/// * `scheme` - Modulation scheme
pub fn demodulate(
    signal: &TimeSeries,
    carrier_frequency: f64,
    sampling_rate: f64,
    demod_constant: f64,
    scheme: Scheme,
) -> TimeSeries {
    if signal.is_empty() {
        return TimeSeries::empty();
    }

    let k = effective_constant(demod_constant);
    let omega = 2.0 * PI * carrier_frequency;
    let t = signal.time();
    let s = signal.values();

    let values: Vec<f64> = match scheme {
        Scheme::AmDsb => envelope(s).into_iter().map(|e| (e - 1.0) / k).collect(),

        Scheme::AmDsbSc | Scheme::AmSsbUsb => t
            .iter()
            .zip(s)
            .map(|(&t, &s)| 2.0 * s * (omega * t).cos() / k)
            .collect(),

        Scheme::Pm => t
            .iter()
            .zip(instantaneous_phase(s))
            .map(|(&t, phase)| wrap_phase(phase - omega * t) / k)
            .collect(),

        // Frequency offset normalized by fs/k: a message m comes back as m·fs/2π
        Scheme::Fm => {
            let fs = effective_sampling_rate(sampling_rate);
            instantaneous_frequency(s, fs)
                .into_iter()
                .map(|f| (f - carrier_frequency) * fs / k)
                .collect()
        }
    };

    signal.with_values(values)
}

/// FM discriminator scaled back to message units
///
/// The modulator advances the phase by `k·m/fs` per sample, so the carrier
/// offset is `k·m/2π` Hz and `(f − fc)·2π/k` recovers `m` itself. Use this
/// where the FM output of [`demodulate`] (scaled by `fs/k`) is not wanted.
pub fn demodulate_fm_message(
    signal: &TimeSeries,
    carrier_frequency: f64,
    sampling_rate: f64,
    demod_constant: f64,
) -> TimeSeries {
    if signal.is_empty() {
        return TimeSeries::empty();
    }

    let k = effective_constant(demod_constant);
    let fs = effective_sampling_rate(sampling_rate);
    let values = instantaneous_frequency(signal.values(), fs)
        .into_iter()
        .map(|f| (f - carrier_frequency) * 2.0 * PI / k)
        .collect();

    signal.with_values(values)
}

/// Instantaneous frequency in Hz from the analytic-signal phase
fn instantaneous_frequency(values: &[f64], sampling_rate: f64) -> Vec<f64> {
    phase_increments(&instantaneous_phase(values))
        .into_iter()
        .map(|delta| delta * sampling_rate / (2.0 * PI))
        .collect()
}

/// Demodulate with a scheme given by name
///
/// An unrecognized name yields an empty series.
pub fn demodulate_named(
    signal: &TimeSeries,
    carrier_frequency: f64,
    sampling_rate: f64,
    demod_constant: f64,
    scheme: &str,
) -> TimeSeries {
    match scheme.parse::<Scheme>() {
        Ok(scheme) => demodulate(signal, carrier_frequency, sampling_rate, demod_constant, scheme),
        Err(e) => {
            tracing::warn!(%e, "demodulation skipped");
            TimeSeries::empty()
        }
    }
}

/// Zero constants would divide by zero; they fall back to unity scaling
fn effective_constant(k: f64) -> f64 {
    if k == 0.0 || !k.is_finite() {
        tracing::warn!(k, "demodulation constant unusable, using 1.0");
        1.0
    } else {
        k
    }
}

/// Wrap an angle into [−π, π)
fn wrap_phase(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}

/// Per-sample phase advance in radians
///
/// Central difference in the interior, one-sided at the two ends. Each step
/// is wrapped, so the result follows the unwrapped phase.
fn phase_increments(phase: &[f64]) -> Vec<f64> {
    let n = phase.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let steps: Vec<f64> = phase.windows(2).map(|w| wrap_phase(w[1] - w[0])).collect();

    (0..n)
        .map(|i| match i {
            0 => steps[0],
            i if i == n - 1 => steps[n - 2],
            i => (steps[i - 1] + steps[i]) / 2.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modulation::{modulate, ModulationSpec};
    use crate::signal::{synthesize, OscillatorDescriptor};

    // 1024 samples at 1024 Hz: every tone below is periodic in the FFT frame
    const FS: f64 = 1024.0;

    fn message(freq: f64) -> TimeSeries {
        synthesize(&[OscillatorDescriptor::sine(1.0, freq)], 1.0, FS)
    }

    fn assert_recovered(recovered: &TimeSeries, original: &TimeSeries, range: std::ops::Range<usize>, tol: f64) {
        assert_eq!(recovered.len(), original.len());
        for i in range {
            let diff = (recovered.values()[i] - original.values()[i]).abs();
            assert!(diff < tol, "Mismatch at {}: {} vs {}", i, recovered.values()[i], original.values()[i]);
        }
    }

    #[test]
    fn test_am_dsb_round_trip() {
        let m = message(8.0);
        let modulated = modulate(&m, &ModulationSpec::new(128.0, 0.5, Scheme::AmDsb));
        let recovered = demodulate(&modulated, 128.0, FS, 0.5, Scheme::AmDsb);

        assert_recovered(&recovered, &m, 0..1024, 1e-9);
    }

    #[test]
    fn test_am_dsb_round_trip_padded() {
        // 1000 samples padded to 1024: edges carry Hilbert padding artifacts
        let m = synthesize(&[OscillatorDescriptor::sine(1.0, 10.0)], 1.0, 1000.0);
        let modulated = modulate(&m, &ModulationSpec::new(100.0, 0.5, Scheme::AmDsb));
        let recovered = demodulate(&modulated, 100.0, 1000.0, 0.5, Scheme::AmDsb);

        assert_recovered(&recovered, &m, 200..800, 0.05);
    }

    #[test]
    fn test_coherent_detection_keeps_image() {
        let m = message(8.0);
        let modulated = modulate(&m, &ModulationSpec::new(128.0, 2.0, Scheme::AmDsbSc));
        let detected = demodulate(&modulated, 128.0, FS, 2.0, Scheme::AmDsbSc);

        // 2·m·cos²(ωt) = m + m·cos(2ωt)
        for i in 0..1024 {
            let t = m.time()[i];
            let mi = m.values()[i];
            let expected = mi + mi * (2.0 * 2.0 * PI * 128.0 * t).cos();
            assert!((detected.values()[i] - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_coherent_detection_after_low_pass() {
        use crate::filters::apply_band_pass;

        let m = message(8.0);
        let modulated = modulate(&m, &ModulationSpec::new(128.0, 1.0, Scheme::AmSsbUsb));
        let detected = demodulate(&modulated, 128.0, FS, 1.0, Scheme::AmSsbUsb);
        let baseband = apply_band_pass(&detected, 0.0, 40.0, FS, 101);

        assert_recovered(&baseband, &m, 100..924, 0.05);
    }

    #[test]
    fn test_pm_round_trip() {
        let m = message(4.0);
        let modulated = modulate(&m, &ModulationSpec::new(128.0, 0.8, Scheme::Pm));
        let recovered = demodulate(&modulated, 128.0, FS, 0.8, Scheme::Pm);

        assert_recovered(&recovered, &m, 0..1024, 1e-6);
    }

    #[test]
    fn test_fm_output_scaled_by_rate_over_constant() {
        let m = message(4.0);
        let k = 2.0 * PI * 20.0;
        let modulated = modulate(&m, &ModulationSpec::new(128.0, k, Scheme::Fm));
        let recovered = demodulate(&modulated, 128.0, FS, k, Scheme::Fm);

        // (f − fc)·fs/k with f − fc = k·m/2π gives m·fs/2π
        let expected = m.with_values(m.values().iter().map(|v| v * FS / (2.0 * PI)).collect());
        // Central differences lag the running sum by half a sample
        assert_recovered(&recovered, &expected, 1..1023, 0.05 * FS / (2.0 * PI));
    }

    #[test]
    fn test_fm_constant_message_formula() {
        // m = 1 puts the carrier at 132 Hz, periodic in the 1024-sample frame
        let k = 2.0 * PI * 4.0;
        let m = TimeSeries::uniform(vec![1.0; 1024], FS);
        let modulated = modulate(&m, &ModulationSpec::new(128.0, k, Scheme::Fm));

        let recovered = demodulate(&modulated, 128.0, FS, k, Scheme::Fm);
        let expected = FS / (2.0 * PI);
        for &v in recovered.values() {
            assert!((v - expected).abs() < 1e-6 * expected);
        }

        let unit = demodulate_fm_message(&modulated, 128.0, FS, k);
        for &v in unit.values() {
            assert!((v - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_fm_message_round_trip() {
        let m = message(4.0);
        let k = 2.0 * PI * 20.0;
        let modulated = modulate(&m, &ModulationSpec::new(128.0, k, Scheme::Fm));
        let recovered = demodulate_fm_message(&modulated, 128.0, FS, k);

        assert_recovered(&recovered, &m, 1..1023, 0.05);
        assert!(demodulate_fm_message(&TimeSeries::empty(), 128.0, FS, k).is_empty());
    }

    #[test]
    fn test_phase_increments() {
        let phase: Vec<f64> = (0..6).map(|i| wrap_phase(1.0 * i as f64)).collect();
        for delta in phase_increments(&phase) {
            assert!((delta - 1.0).abs() < 1e-12);
        }

        assert_eq!(phase_increments(&[0.3]), vec![0.0]);
        assert!(phase_increments(&[]).is_empty());
    }

    #[test]
    fn test_wrap_phase() {
        assert!((wrap_phase(2.5 * PI) - 0.5 * PI).abs() < 1e-12);
        assert!((wrap_phase(0.5) - 0.5).abs() < 1e-12);
        assert!((wrap_phase(-0.5 - 2.0 * PI) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_unknown_and_zero_constant() {
        assert!(demodulate(&TimeSeries::empty(), 100.0, 1000.0, 1.0, Scheme::Fm).is_empty());

        let m = message(8.0);
        assert!(demodulate_named(&m, 128.0, FS, 1.0, "SSB-LSB").is_empty());

        let detected = demodulate(&m, 128.0, FS, 0.0, Scheme::AmDsbSc);
        assert!(detected.values().iter().all(|v| v.is_finite()));
    }
}
