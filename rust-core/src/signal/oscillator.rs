//! Primitive oscillator descriptors
//!
//! Each descriptor is one additive component of a baseband message.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Oscillator waveform shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveformKind {
    /// sin(θ)
    Sine,

    /// cos(θ)
    Cosine,

    /// Bipolar sign(sin(θ)), zero at the crossings
    Square,

    /// (2/π)·asin(sin(θ))
    Triangle,

    /// 2·(x − floor(x + 0.5)) with x in cycles
    Sawtooth,
}

/// One oscillator in a composite signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorDescriptor {
    pub kind: WaveformKind,

    /// Peak amplitude
    pub amplitude: f64,

    /// Frequency in Hz (negative values are treated as 0)
    pub frequency: f64,

    /// Phase offset in radians
    pub phase: f64,
}

impl OscillatorDescriptor {
    pub fn new(kind: WaveformKind, amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            kind,
            amplitude,
            frequency,
            phase,
        }
    }

    pub fn sine(amplitude: f64, frequency: f64) -> Self {
        Self::new(WaveformKind::Sine, amplitude, frequency, 0.0)
    }

    pub fn cosine(amplitude: f64, frequency: f64) -> Self {
        Self::new(WaveformKind::Cosine, amplitude, frequency, 0.0)
    }

    /// Frequency with negative values clamped to zero
    pub fn effective_frequency(&self) -> f64 {
        self.frequency.max(0.0)
    }

    /// Sample value at time `t` seconds, amplitude included
    #[inline]
    pub fn sample(&self, t: f64) -> f64 {
        let f = self.effective_frequency();
        let theta = 2.0 * PI * f * t + self.phase;

        let shape = match self.kind {
            WaveformKind::Sine => theta.sin(),
            WaveformKind::Cosine => theta.cos(),
            WaveformKind::Square => sign(theta.sin()),
            WaveformKind::Triangle => (2.0 / PI) * theta.sin().asin(),
            WaveformKind::Sawtooth => {
                let x = f * t + self.phase / (2.0 * PI);
                2.0 * (x - (x + 0.5).floor())
            }
        };

        self.amplitude * shape
    }
}

/// Sign function with sign(0) = 0
///
/// `f64::signum` returns 1.0 for +0.0, which would bias the square wave.
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
