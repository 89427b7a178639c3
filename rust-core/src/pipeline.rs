//! Transmit and receive chains driven by a [`SignalConfig`]
//!
//! Transmit: synthesize → (band-pass) → modulate → spectrum.
//! Receive: (band-pass) → demodulate.

use crate::config::SignalConfig;
use crate::filters::design::design_resolved;
use crate::filters::fir::{apply_resolved, group_delay_samples};
use crate::modulation::{demodulate, modulate};
use crate::signal::TimeSeries;
use crate::spectrum::{compute_frequency_response, compute_spectrum};

/// Points in the filter response attached to a transmit run
pub const RESPONSE_POINTS: usize = 512;

/// Every intermediate signal of a transmit run
#[derive(Debug, Clone)]
pub struct TransmitOutput {
    /// Synthesized baseband message
    pub message: TimeSeries,

    /// Message after the band-pass stage, when one is configured
    pub filtered: Option<TimeSeries>,

    /// Magnitude response of the configured filter
    pub filter_response: Option<TimeSeries>,

    /// Group delay of the configured filter in samples
    pub filter_delay_samples: Option<f64>,

    /// Modulated carrier
    pub modulated: TimeSeries,

    /// Single-sided spectrum of the modulated carrier
    pub spectrum: TimeSeries,
}

impl TransmitOutput {
    /// The signal that was fed to the modulator
    pub fn baseband(&self) -> &TimeSeries {
        self.filtered.as_ref().unwrap_or(&self.message)
    }
}

/// Run the transmit chain
pub fn transmit(config: &SignalConfig) -> TransmitOutput {
    let message = config.synthesize();

    let (filtered, filter_response, filter_delay_samples) = match &config.filter {
        Some(spec) => {
            let band = spec.resolve();
            let coefficients = design_resolved(&band);
            let response = compute_frequency_response(&coefficients, band.sampling_rate, RESPONSE_POINTS);
            (
                Some(apply_resolved(&message, &band)),
                Some(response),
                Some(group_delay_samples(&coefficients)),
            )
        }
        None => (None, None, None),
    };

    let modulation = config.resolved_modulation();
    let baseband = filtered.as_ref().unwrap_or(&message);
    let modulated = modulate(baseband, &modulation);
    let spectrum = compute_spectrum(&modulated, config.sampling_rate);

    tracing::debug!(
        samples = message.len(),
        scheme = %modulation.scheme,
        filtered = filtered.is_some(),
        "transmit chain complete"
    );

    TransmitOutput {
        message,
        filtered,
        filter_response,
        filter_delay_samples,
        modulated,
        spectrum,
    }
}

/// Run the receive chain on `received` using the record's settings
pub fn receive(received: &TimeSeries, config: &SignalConfig) -> TimeSeries {
    let filtered;
    let input = match &config.filter {
        Some(spec) => {
            filtered = apply_resolved(received, &spec.resolve());
            &filtered
        }
        None => received,
    };

    let modulation = config.resolved_modulation();
    demodulate(
        input,
        modulation.carrier_frequency,
        modulation.effective_sampling_rate(input),
        modulation.modulation_constant,
        modulation.scheme,
    )
}
