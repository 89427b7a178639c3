//! Analysis windows applied to signals before a spectrum display

use crate::filters::windows::{generate_window, WindowType};

/// Multiply `signal` by a window of the same length
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    signal
        .iter()
        .zip(generate_window(window_type, signal.len()))
        .map(|(&s, w)| s * w)
        .collect()
}

/// Amplitude correction (inverse coherent gain) for a window
///
/// Multiplying a windowed spectrum by this factor restores tone amplitudes.
pub fn window_correction_factor(window_type: WindowType, length: usize) -> f64 {
    let sum: f64 = generate_window(window_type, length).iter().sum();
    if sum > 0.0 {
        length as f64 / sum
    } else {
        1.0
    }
}
