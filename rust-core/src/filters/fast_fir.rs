//! FFT-based same-length convolution for long kernels
//!
//! Frequency-domain multiplication: O((N+M) log(N+M)) instead of O(N·M).

use rustfft::{num_complex::Complex, FftPlanner};

/// Kernel length above which the band-pass stage switches to FFT convolution
pub const FAST_CONVOLUTION_THRESHOLD: usize = 128;

/// Same-length convolution computed through rustfft
///
/// Produces the same output as `fir::convolve_same` within rounding error.
pub fn convolve_same_fft(signal: &[f64], coefficients: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let m = coefficients.len();
    if n == 0 || m == 0 {
        return vec![0.0; n];
    }

    let fft_size = (n + m - 1).next_power_of_two();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(fft_size);
    let ifft = planner.plan_fft_inverse(fft_size);

    let mut x = vec![Complex::new(0.0, 0.0); fft_size];
    for (slot, &v) in x.iter_mut().zip(signal) {
        slot.re = v;
    }

    // Correlating with h is convolving with h reversed
    let mut h = vec![Complex::new(0.0, 0.0); fft_size];
    for (slot, &c) in h.iter_mut().zip(coefficients.iter().rev()) {
        slot.re = c;
    }

    fft.process(&mut x);
    fft.process(&mut h);

    for (a, b) in x.iter_mut().zip(&h) {
        *a *= b;
    }

    ifft.process(&mut x);

    // Full linear result index for output n is n + (m - 1) - half
    let offset = m - 1 - m / 2;
    let scale = 1.0 / fft_size as f64;
    x[offset..offset + n].iter().map(|c| c.re * scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::design::design_band_pass;
    use crate::filters::fir::convolve_same;

    #[test]
    fn test_fast_matches_direct_symmetric() {
        let coeffs = design_band_pass(161, 48000.0, 2000.0, 6000.0);
        let input: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.37).sin() + (i as f64 * 0.01).cos()).collect();

        let fast = convolve_same_fft(&input, &coeffs);
        let direct = convolve_same(&input, &coeffs);

        assert_eq!(fast.len(), direct.len());
        for i in 0..input.len() {
            let diff = (fast[i] - direct[i]).abs();
            assert!(diff < 1e-9, "Mismatch at {}: diff = {}", i, diff);
        }
    }

    #[test]
    fn test_fast_matches_direct_asymmetric() {
        let coeffs = [1.0, 10.0, 100.0, 0.5];
        let input = [1.0, 2.0, 3.0, 4.0, 5.0];

        let fast = convolve_same_fft(&input, &coeffs);
        let direct = convolve_same(&input, &coeffs);

        for (a, b) in fast.iter().zip(&direct) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_impulse_returns_centered_kernel() {
        let h = [0.1, 0.2, 0.4, 0.2, 0.1];
        let mut input = vec![0.0; 32];
        input[10] = 1.0;

        let output = convolve_same_fft(&input, &h);

        for (k, &expected) in h.iter().enumerate() {
            assert!((output[8 + k] - expected).abs() < 1e-12);
        }
    }
}
