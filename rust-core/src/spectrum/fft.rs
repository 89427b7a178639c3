//! Radix-2 FFT engine
//!
//! Recursive decimation-in-time Cooley–Tukey transform. Lengths must be
//! powers of two; use `zero_pad` first for arbitrary signals.

use crate::error::{DspError, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Smallest power of two that is `>= n` (1 for an empty input)
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Copy a real signal into a complex buffer zero-padded to a power of two
pub fn zero_pad(signal: &[f64]) -> Vec<Complex64> {
    let size = next_power_of_two(signal.len());
    let mut buffer = vec![Complex64::new(0.0, 0.0); size];
    for (slot, &x) in buffer.iter_mut().zip(signal) {
        slot.re = x;
    }
    buffer
}

/// Forward FFT of a real sequence
///
/// # Errors
/// `DspError::NotPowerOfTwo` if the (non-empty) length is not a power of two.
pub fn fft(signal: &[f64]) -> Result<Vec<Complex64>> {
    check_length(signal.len())?;
    let input: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    Ok(transform(&input))
}

/// Inverse FFT returning the real part of the time-domain result
///
/// # Errors
/// `DspError::NotPowerOfTwo` if the (non-empty) length is not a power of two.
pub fn ifft(spectrum: &[Complex64]) -> Result<Vec<f64>> {
    check_length(spectrum.len())?;
    Ok(inverse_transform(spectrum).iter().map(|c| c.re).collect())
}

fn check_length(len: usize) -> Result<()> {
    if len == 0 || len.is_power_of_two() {
        Ok(())
    } else {
        Err(DspError::NotPowerOfTwo(len))
    }
}

/// Forward transform of a power-of-two complex sequence
pub(crate) fn transform(input: &[Complex64]) -> Vec<Complex64> {
    let n = input.len();
    if n <= 1 {
        return input.to_vec();
    }

    let even: Vec<Complex64> = input.iter().step_by(2).copied().collect();
    let odd: Vec<Complex64> = input.iter().skip(1).step_by(2).copied().collect();

    let even = transform(&even);
    let odd = transform(&odd);

    let half = n / 2;
    let mut output = vec![Complex64::new(0.0, 0.0); n];
    for k in 0..half {
        // e^{-2πik/N}
        let twiddle = Complex64::from_polar(1.0, -2.0 * PI * k as f64 / n as f64) * odd[k];
        output[k] = even[k] + twiddle;
        output[k + half] = even[k] - twiddle;
    }

    output
}

/// Inverse transform via conjugation around the forward transform
pub(crate) fn inverse_transform(spectrum: &[Complex64]) -> Vec<Complex64> {
    let n = spectrum.len();
    if n == 0 {
        return Vec::new();
    }

    let conjugated: Vec<Complex64> = spectrum.iter().map(|c| c.conj()).collect();
    let scale = 1.0 / n as f64;

    transform(&conjugated)
        .into_iter()
        .map(|c| c.conj() * scale)
        .collect()
}
