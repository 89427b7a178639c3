//! Analog modulation schemes
//!
//! Five schemes, dispatched by exhaustive `match` on [`Scheme`]:
//! AM-DSB, AM-DSB-SC, AM-SSB (upper sideband), PM and FM.

pub mod modulator;
pub mod demodulator;

pub use modulator::{modulate, modulate_named};
pub use demodulator::{demodulate, demodulate_fm_message, demodulate_named};

use crate::error::DspError;
use crate::signal::{effective_sampling_rate, TimeSeries};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Modulation scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// Double sideband with carrier
    #[serde(rename = "AM-DSB")]
    AmDsb,

    /// Double sideband, suppressed carrier
    #[serde(rename = "AM-DSB-SC")]
    AmDsbSc,

    /// Single sideband, upper sideband
    #[serde(rename = "AM-SSB", alias = "AM-SSB-USB")]
    AmSsbUsb,

    /// Phase modulation
    #[serde(rename = "PM")]
    Pm,

    /// Frequency modulation
    #[serde(rename = "FM")]
    Fm,
}

impl Scheme {
    pub const ALL: [Scheme; 5] = [
        Scheme::AmDsb,
        Scheme::AmDsbSc,
        Scheme::AmSsbUsb,
        Scheme::Pm,
        Scheme::Fm,
    ];

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::AmDsb => "AM-DSB",
            Scheme::AmDsbSc => "AM-DSB-SC",
            Scheme::AmSsbUsb => "AM-SSB",
            Scheme::Pm => "PM",
            Scheme::Fm => "FM",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = DspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM-DSB" => Ok(Scheme::AmDsb),
            "AM-DSB-SC" => Ok(Scheme::AmDsbSc),
            "AM-SSB" | "AM-SSB-USB" => Ok(Scheme::AmSsbUsb),
            "PM" => Ok(Scheme::Pm),
            "FM" => Ok(Scheme::Fm),
            _ => Err(DspError::UnknownScheme(s.to_string())),
        }
    }
}

/// Carrier and scheme parameters for the modulator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModulationSpec {
    /// Carrier frequency in Hz
    pub carrier_frequency: f64,

    /// Modulation index (AM), kp (PM) or kf (FM)
    pub modulation_constant: f64,

    pub scheme: Scheme,

    /// Sampling rate in Hz; inferred from the message time axis when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampling_rate: Option<f64>,
}

impl ModulationSpec {
    pub fn new(carrier_frequency: f64, modulation_constant: f64, scheme: Scheme) -> Self {
        Self {
            carrier_frequency,
            modulation_constant,
            scheme,
            sampling_rate: None,
        }
    }

    pub fn with_sampling_rate(mut self, sampling_rate: f64) -> Self {
        self.sampling_rate = Some(sampling_rate);
        self
    }

    /// Sampling rate used for `message`: explicit, else inferred, else the floor
    pub fn effective_sampling_rate(&self, message: &TimeSeries) -> f64 {
        let rate = self
            .sampling_rate
            .or_else(|| message.inferred_sampling_rate())
            .unwrap_or(0.0);
        effective_sampling_rate(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parsing() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.name().parse::<Scheme>().unwrap(), scheme);
        }
        assert_eq!("am-ssb-usb".parse::<Scheme>().unwrap(), Scheme::AmSsbUsb);
        assert_eq!(" fm ".parse::<Scheme>().unwrap(), Scheme::Fm);
        assert!(matches!("QAM".parse::<Scheme>(), Err(DspError::UnknownScheme(_))));
    }

    #[test]
    fn test_scheme_serde_names() {
        assert_eq!(serde_json::to_string(&Scheme::AmDsbSc).unwrap(), "\"AM-DSB-SC\"");
        let parsed: Scheme = serde_json::from_str("\"AM-SSB-USB\"").unwrap();
        assert_eq!(parsed, Scheme::AmSsbUsb);
    }

    #[test]
    fn test_sampling_rate_resolution() {
        let message = TimeSeries::uniform(vec![0.0; 4], 500.0);
        let spec = ModulationSpec::new(100.0, 1.0, Scheme::Fm);

        assert!((spec.effective_sampling_rate(&message) - 500.0).abs() < 1e-9);
        assert_eq!(spec.with_sampling_rate(800.0).effective_sampling_rate(&message), 800.0);
    }
}
