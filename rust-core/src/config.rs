//! Serializable signal configuration
//!
//! Everything needed to regenerate a transmit chain's output: the oscillator
//! list, timing, the optional band-pass filter and the modulation settings.
//! Storage layers persist this record as JSON and hand it back unchanged.

use crate::error::Result;
use crate::filters::FilterSpec;
use crate::modulation::ModulationSpec;
use crate::signal::{synthesize, OscillatorDescriptor, TimeSeries};
use serde::{Deserialize, Serialize};

/// Complete description of a synthesized, optionally filtered, modulated signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Additive components of the baseband message
    pub oscillators: Vec<OscillatorDescriptor>,

    /// Duration in seconds
    pub duration: f64,

    /// Sampling rate in Hz
    pub sampling_rate: f64,

    /// Optional band-pass stage between synthesis and modulation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterSpec>,

    pub modulation: ModulationSpec,
}

impl SignalConfig {
    pub fn new(
        oscillators: Vec<OscillatorDescriptor>,
        duration: f64,
        sampling_rate: f64,
        modulation: ModulationSpec,
    ) -> Self {
        Self {
            oscillators,
            duration,
            sampling_rate,
            filter: None,
            modulation,
        }
    }

    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Parse a record previously produced by `to_json`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The baseband message described by the oscillator list
    pub fn synthesize(&self) -> TimeSeries {
        synthesize(&self.oscillators, self.duration, self.sampling_rate)
    }

    /// Modulation settings with the record's sampling rate filled in
    pub fn resolved_modulation(&self) -> ModulationSpec {
        ModulationSpec {
            sampling_rate: self.modulation.sampling_rate.or(Some(self.sampling_rate)),
            ..self.modulation
        }
    }
}
