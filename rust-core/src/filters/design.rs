//! Band-pass FIR design using the windowing method
//!
//! The kernel is the difference of two windowed-sinc low-pass kernels,
//! Hamming windowed and normalized to unit gain at the band center.

use super::windows::WindowType;
use crate::signal::effective_sampling_rate;
use crate::spectrum::response::dtft;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Smallest kernel length the designer produces
pub const MIN_ORDER: usize = 3;

/// Distance kept between the upper cutoff and Nyquist (Hz)
pub const NYQUIST_MARGIN_HZ: f64 = 1e-6;

/// Normalized sinc: sin(πx)/(πx), with sinc(0) = 1
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Force an order to be odd and at least `MIN_ORDER`
pub fn effective_order(order: usize) -> usize {
    let odd = if order % 2 == 0 { order + 1 } else { order };
    odd.max(MIN_ORDER)
}

/// Band-pass filter parameters as entered by a user
///
/// Missing cutoffs resolve to the widest band: 0 Hz below, just under
/// Nyquist above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Lower cutoff in Hz
    pub low_cutoff: Option<f64>,

    /// Upper cutoff in Hz
    pub high_cutoff: Option<f64>,

    /// Kernel length (forced odd, at least 3)
    pub order: usize,

    /// Sampling rate in Hz
    pub sampling_rate: f64,
}

/// Filter parameters after clamping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBand {
    pub order: usize,
    pub sampling_rate: f64,
    pub low_cutoff: f64,
    pub high_cutoff: f64,
}

impl ResolvedBand {
    /// Clamp raw parameters into a designable band
    pub fn new(order: usize, sampling_rate_hz: f64, low_cutoff_hz: f64, high_cutoff_hz: f64) -> Self {
        let mut resolved = Self {
            order: effective_order(order),
            sampling_rate: effective_sampling_rate(sampling_rate_hz),
            low_cutoff: 0.0,
            high_cutoff: 0.0,
        };

        let max_cutoff = (resolved.nyquist() - NYQUIST_MARGIN_HZ).max(0.0);
        let clamp = |f: f64| if f.is_nan() { 0.0 } else { f.clamp(0.0, max_cutoff) };
        resolved.low_cutoff = clamp(low_cutoff_hz);
        resolved.high_cutoff = clamp(high_cutoff_hz);

        if resolved.order != order
            || resolved.low_cutoff != low_cutoff_hz
            || resolved.high_cutoff != high_cutoff_hz
        {
            tracing::debug!(?resolved, order, low_cutoff_hz, high_cutoff_hz, "filter parameters clamped");
        }

        resolved
    }

    /// True when the band is empty and the filter degenerates to identity
    pub fn is_pass_through(&self) -> bool {
        self.low_cutoff >= self.high_cutoff
    }

    pub fn nyquist(&self) -> f64 {
        self.sampling_rate / 2.0
    }

    pub fn center_frequency(&self) -> f64 {
        (self.low_cutoff + self.high_cutoff) / 2.0
    }
}

impl FilterSpec {
    pub fn new(low_cutoff: Option<f64>, high_cutoff: Option<f64>, order: usize, sampling_rate: f64) -> Self {
        Self {
            low_cutoff,
            high_cutoff,
            order,
            sampling_rate,
        }
    }

    /// Effective band with defaults filled in and limits applied
    pub fn resolve(&self) -> ResolvedBand {
        let nyquist = effective_sampling_rate(self.sampling_rate) / 2.0;
        ResolvedBand::new(
            self.order,
            self.sampling_rate,
            self.low_cutoff.unwrap_or(0.0),
            self.high_cutoff.unwrap_or(nyquist),
        )
    }

    /// Designed coefficients for this spec
    pub fn coefficients(&self) -> Vec<f64> {
        design_resolved(&self.resolve())
    }
}

/// Design band-pass FIR coefficients
///
/// # Arguments
/// * `order` - Kernel length (forced odd, at least 3)
/// * `sampling_rate_hz` - Sampling rate in Hz
/// * `low_cutoff_hz` - Lower band edge in Hz
/// * `high_cutoff_hz` - Upper band edge in Hz
///
/// # Returns
/// Symmetric coefficients h[n], n = 0..N-1. An empty band yields the unit
/// impulse, so convolving with it leaves a signal unchanged.
pub fn design_band_pass(
    order: usize,
    sampling_rate_hz: f64,
    low_cutoff_hz: f64,
    high_cutoff_hz: f64,
) -> Vec<f64> {
    design_resolved(&ResolvedBand::new(order, sampling_rate_hz, low_cutoff_hz, high_cutoff_hz))
}

pub(crate) fn design_resolved(band: &ResolvedBand) -> Vec<f64> {
    let m = band.order;
    let center = (m - 1) / 2;

    if band.is_pass_through() {
        let mut impulse = vec![0.0; m];
        impulse[center] = 1.0;
        return impulse;
    }

    // Cutoffs in cycles per sample
    let fh = band.high_cutoff / band.sampling_rate;
    let fl = band.low_cutoff / band.sampling_rate;

    let mut h: Vec<f64> = (0..m)
        .map(|n| {
            let k = n as f64 - center as f64;
            let ideal = lowpass_tap(fh, k) - lowpass_tap(fl, k);
            ideal * WindowType::Hamming.value(n, m)
        })
        .collect();

    let f_center = band.center_frequency();
    if f_center > 0.0 {
        let gain = dtft(&h, f_center, band.sampling_rate, center as f64);
        if gain > f64::EPSILON {
            h.iter_mut().for_each(|c| *c /= gain);
        }
    }

    h
}

/// Ideal low-pass tap 2·fc·sinc(2·fc·k)
#[inline]
fn lowpass_tap(fc: f64, k: f64) -> f64 {
    2.0 * fc * sinc(2.0 * fc * k)
}
