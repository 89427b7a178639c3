//! Carrier modulation of a baseband message
//!
//! Per sample, with ω = 2π·fc, m = message value and t = message time:
//!
//! | Scheme    | Output                              |
//! |-----------|-------------------------------------|
//! | AM-DSB    | (1 + k·m)·cos(ωt)                   |
//! | AM-DSB-SC | k·m·cos(ωt)                         |
//! | AM-SSB    | k·(m·cos(ωt) − H[m]·sin(ωt))        |
//! | PM        | cos(ωt + k·m)                       |
//! | FM        | cos(ωt + k·Σ_{0..i} m / fs)         |

use super::{ModulationSpec, Scheme};
use crate::signal::TimeSeries;
use crate::spectrum::hilbert::hilbert_values;
use std::f64::consts::PI;

/// Modulate `message` onto a carrier
///
/// The output shares the message's time axis. An empty message yields an
/// empty series.
pub fn modulate(message: &TimeSeries, spec: &ModulationSpec) -> TimeSeries {
    if message.is_empty() {
        return TimeSeries::empty();
    }

    let omega = 2.0 * PI * spec.carrier_frequency;
    let k = spec.modulation_constant;
    let t = message.time();
    let m = message.values();

    let values: Vec<f64> = match spec.scheme {
        Scheme::AmDsb => t
            .iter()
            .zip(m)
            .map(|(&t, &m)| (1.0 + k * m) * (omega * t).cos())
            .collect(),

        Scheme::AmDsbSc => t
            .iter()
            .zip(m)
            .map(|(&t, &m)| k * m * (omega * t).cos())
            .collect(),

        Scheme::AmSsbUsb => {
            let quadrature = hilbert_values(m);
            t.iter()
                .zip(m)
                .zip(quadrature)
                .map(|((&t, &m), q)| {
                    let (sin, cos) = (omega * t).sin_cos();
                    k * (m * cos - q * sin)
                })
                .collect()
        }

        Scheme::Pm => t
            .iter()
            .zip(m)
            .map(|(&t, &m)| (omega * t + k * m).cos())
            .collect(),

        Scheme::Fm => {
            let fs = spec.effective_sampling_rate(message);
            let mut integral = 0.0;
            t.iter()
                .zip(m)
                .map(|(&t, &m)| {
                    integral += m / fs;
                    (omega * t + k * integral).cos()
                })
                .collect()
        }
    };

    message.with_values(values)
}

/// Modulate with a scheme given by name
///
/// An unrecognized name yields an empty series.
pub fn modulate_named(
    message: &TimeSeries,
    carrier_frequency: f64,
    modulation_constant: f64,
    scheme: &str,
) -> TimeSeries {
    match scheme.parse::<Scheme>() {
        Ok(scheme) => modulate(
            message,
            &ModulationSpec::new(carrier_frequency, modulation_constant, scheme),
        ),
        Err(e) => {
            tracing::warn!(%e, "modulation skipped");
            TimeSeries::empty()
        }
    }
}
