//! Window functions for FIR design and spectral analysis

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    /// w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    Hann,

    /// w[n] = 0.54 - 0.46*cos(2πn/(M-1)), used by the band-pass designer
    #[default]
    Hamming,

    /// w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,

    /// w[n] = 1
    Rectangular,
}

impl WindowType {
    /// Window value at index `n` of an `length`-point symmetric window
    #[inline]
    pub fn value(&self, n: usize, length: usize) -> f64 {
        if length <= 1 {
            return 1.0;
        }

        let angle = 2.0 * PI * n as f64 / (length - 1) as f64;
        match self {
            WindowType::Hann => 0.5 - 0.5 * angle.cos(),
            WindowType::Hamming => 0.54 - 0.46 * angle.cos(),
            WindowType::Blackman => 0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos(),
            WindowType::Rectangular => 1.0,
        }
    }
}

/// Generate symmetric window coefficients w[n], n = 0..length-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    (0..length).map(|n| window_type.value(n, length)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_generation() {
        let length = 161;

        for window_type in [WindowType::Hann, WindowType::Hamming, WindowType::Blackman] {
            let w = generate_window(window_type, length);
            assert_eq!(w.len(), length);

            // Symmetric, peaking at 1.0 in the middle
            for i in 0..length / 2 {
                assert!((w[i] - w[length - 1 - i]).abs() < 1e-12);
            }
            assert!((w[length / 2] - 1.0).abs() < 1e-12);
        }

        let hamming = generate_window(WindowType::Hamming, length);
        assert!((hamming[0] - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_rectangular_window() {
        let window = generate_window(WindowType::Rectangular, 100);
        assert!(window.iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_short_windows() {
        assert!(generate_window(WindowType::Hann, 0).is_empty());
        assert_eq!(generate_window(WindowType::Hann, 1), vec![1.0]);
    }
}
