// SPDX-License-Identifier: LGPL-3.0-or-later

//! Window functions and windowed-sinc FIR design.
//!
//! Each window fills a destination buffer with a symmetric taper centered
//! on the middle sample; the classic odd-length `2M+1` formulas fall out
//! when the buffer length is odd. [`sinc_filter`] combines a sinc kernel
//! with a window and normalizes the result to unit DC gain, yielding an
//! FIR lowpass prototype.

use std::f32::consts::PI;

/// Window function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Bartlett (triangular) window.
    Bartlett,
    /// Hann window (raised cosine).
    Hann,
    /// Hamming window.
    Hamming,
    /// Blackman window.
    Blackman,
    /// Rectangular window (all ones).
    Rectangular,
}

/// Generate a window function into the destination buffer.
///
/// # Arguments
/// * `dst` - Destination buffer for window coefficients
/// * `window_type` - Type of window to generate
pub fn window(dst: &mut [f32], window_type: WindowType) {
    match window_type {
        WindowType::Bartlett => bartlett(dst),
        WindowType::Hann => hann(dst),
        WindowType::Hamming => hamming(dst),
        WindowType::Blackman => blackman(dst),
        WindowType::Rectangular => rectangular(dst),
    }
}

/// Generate a rectangular window (all ones).
pub fn rectangular(dst: &mut [f32]) {
    dst.fill(1.0);
}

/// Generate a Bartlett (triangular) window.
pub fn bartlett(dst: &mut [f32]) {
    let n = dst.len();
    if n == 0 {
        return;
    }
    let c = (n - 1) as f32 * 0.5;
    let m = c + 1.0;
    for (i, sample) in dst.iter_mut().enumerate() {
        *sample = 1.0 - (i as f32 - c).abs() / m;
    }
}

/// Generate a Hann window.
pub fn hann(dst: &mut [f32]) {
    cosine_sum(dst, &[0.5, 0.5]);
}

/// Generate a Hamming window.
pub fn hamming(dst: &mut [f32]) {
    cosine_sum(dst, &[0.54, 0.46]);
}

/// Generate a Blackman window.
pub fn blackman(dst: &mut [f32]) {
    cosine_sum(dst, &[0.42, 0.5, 0.08]);
}

/// Fill `dst` with `sum_k coeffs[k] * cos(k * 2*pi*(i - c) / n)`.
fn cosine_sum(dst: &mut [f32], coeffs: &[f32]) {
    let n = dst.len();
    if n == 0 {
        return;
    }
    let c = (n - 1) as f32 * 0.5;
    let step = 2.0 * PI / n as f32;
    for (i, sample) in dst.iter_mut().enumerate() {
        let t = (i as f32 - c) * step;
        *sample = coeffs
            .iter()
            .enumerate()
            .map(|(k, &a)| a * (k as f32 * t).cos())
            .sum();
    }
}

/// Generate a symmetric sinc kernel with a unity center tap.
///
/// # Arguments
/// * `dst` - Destination buffer (odd lengths center the unity tap exactly)
/// * `omega` - Normalized cutoff, 0..=0.5 where 0.5 is Nyquist
pub fn sinc(dst: &mut [f32], omega: f32) {
    let n = dst.len();
    if n == 0 {
        return;
    }
    let c = (n - 1) as f32 * 0.5;
    for (i, sample) in dst.iter_mut().enumerate() {
        let t = i as f32 - c;
        *sample = if t == 0.0 {
            1.0
        } else {
            let x = 2.0 * PI * omega * t;
            x.sin() / x
        };
    }
}

/// Design a windowed-sinc FIR lowpass, normalized to unit DC gain.
///
/// # Arguments
/// * `dst` - Destination buffer for the filter taps
/// * `omega` - Normalized cutoff, 0..=0.5 where 0.5 is Nyquist
/// * `window_type` - Window applied to the sinc kernel
pub fn sinc_filter(dst: &mut [f32], omega: f32, window_type: WindowType) {
    sinc(dst, omega);

    let mut win = vec![0.0f32; dst.len()];
    window(&mut win, window_type);
    for (tap, &w) in dst.iter_mut().zip(win.iter()) {
        *tap *= w;
    }

    let sum: f32 = dst.iter().sum();
    if sum != 0.0 {
        let inv = 1.0 / sum;
        for tap in dst.iter_mut() {
            *tap *= inv;
        }
    }
}
