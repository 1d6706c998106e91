// SPDX-License-Identifier: LGPL-3.0-or-later

//! One-shot waveform generators.
//!
//! Each function fills a destination buffer with a single waveform, either
//! geometrically (ideal shape, including the discontinuities) or additively
//! from a truncated harmonic series (bandlimited by construction). The
//! additive variants place harmonic `k` at `k` cycles across the buffer.

use std::f32::consts::PI;

/// Fill `dst` with a sine wave.
///
/// # Arguments
/// * `dst` - Destination buffer
/// * `phase` - Starting phase in radians
/// * `omega` - Normalized angular frequency in radians per sample
///   (0..=pi; values beyond alias)
/// * `amplitude` - Peak amplitude
pub fn sine(dst: &mut [f32], phase: f32, omega: f32, amplitude: f32) {
    for (i, sample) in dst.iter_mut().enumerate() {
        *sample = (phase + i as f32 * omega).sin() * amplitude;
    }
}

/// Fill `dst` with a single descending sawtooth ramp from `+amplitude`
/// to `-amplitude`.
pub fn saw(dst: &mut [f32], amplitude: f32) {
    let n = dst.len();
    if n < 2 {
        dst.fill(amplitude);
        return;
    }
    let unit = 2.0 * amplitude / (n - 1) as f32;
    for (i, sample) in dst.iter_mut().enumerate() {
        *sample = amplitude - i as f32 * unit;
    }
}

/// Fill `dst` with a sawtooth built from its harmonic series
/// (`sin(2*pi*k*t) / k` over `k = 1..partials`), scaled by `2/pi`.
pub fn saw_additive(dst: &mut [f32], partials: usize, amplitude: f32) {
    let n = dst.len();
    dst.fill(0.0);
    for k in 1..partials {
        let w = k as f32 / n as f32 * 2.0 * PI;
        for (j, sample) in dst.iter_mut().enumerate() {
            *sample += (w * j as f32).sin() / k as f32;
        }
    }

    let scale = 2.0 / PI * amplitude;
    for sample in dst.iter_mut() {
        *sample *= scale;
    }
}

/// Fill `dst` with a centered rectangular pulse.
///
/// # Arguments
/// * `dst` - Destination buffer
/// * `amplitude` - Peak amplitude; low samples sit at `-amplitude`
/// * `width` - Duty cycle in 0..=1 (0.5 gives a square wave)
pub fn square(dst: &mut [f32], amplitude: f32, width: f32) {
    let n = dst.len();
    let high = (width * n as f32 + 0.5) as usize;
    let start = (n - high.min(n)) / 2;
    for (i, sample) in dst.iter_mut().enumerate() {
        *sample = if i >= start && i < start + high {
            amplitude
        } else {
            -amplitude
        };
    }
}

/// Fill `dst` with a square wave built from its odd-harmonic series
/// (`sin(2*pi*k*t) / k` over odd `k < partials`), scaled by `4/pi`.
pub fn square_additive(dst: &mut [f32], partials: usize, amplitude: f32) {
    let n = dst.len();
    dst.fill(0.0);
    for k in (1..partials).step_by(2) {
        let w = k as f32 / n as f32 * 2.0 * PI;
        for (j, sample) in dst.iter_mut().enumerate() {
            *sample += (w * j as f32).sin() / k as f32;
        }
    }

    let scale = 4.0 / PI * amplitude;
    for sample in dst.iter_mut() {
        *sample *= scale;
    }
}

/// Fill `dst` with one symmetric triangle cycle, starting at `+amplitude`,
/// reaching `-amplitude` at the midpoint and returning by reflection.
pub fn triangle(dst: &mut [f32], amplitude: f32) {
    let n = dst.len();
    if n < 2 {
        dst.fill(amplitude);
        return;
    }
    let half = n / 2 + 1;
    for i in 0..half {
        dst[i] = amplitude - 2.0 * amplitude * i as f32 / (half - 1) as f32;
    }
    for i in half..n {
        dst[i] = dst[2 * (half - 1) - i];
    }
}

/// Fill `dst` with a triangle built from its odd-harmonic series
/// (`8 / (k^2 * pi^2)` weights with alternating sign).
pub fn triangle_additive(dst: &mut [f32], partials: usize, amplitude: f32) {
    let n = dst.len();
    dst.fill(0.0);
    let mut sign = 1.0f32;
    for k in (1..partials).step_by(2) {
        let w = k as f32 / n as f32 * 2.0 * PI;
        let weight = 8.0 / (k * k) as f32 / (PI * PI) * sign;
        for (j, sample) in dst.iter_mut().enumerate() {
            *sample += (w * j as f32).sin() * weight;
        }
        sign = -sign;
    }

    for sample in dst.iter_mut() {
        *sample *= amplitude;
    }
}
