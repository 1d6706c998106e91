// SPDX-License-Identifier: LGPL-3.0-or-later

//! First-order lowpass filter via pre-warped bilinear transform.
//!
//! An independent sibling of the parametric biquad: the analog prototype
//! `H(s) = w_c / (s + w_c)` is mapped to the z-plane with the bilinear
//! transform, with the cutoff pre-warped so the digital -3 dB point lands
//! on the requested frequency. Unlike the biquad engine, this design
//! clamps its cutoff below Nyquist internally.

use std::f32::consts::PI;

use crate::consts::{LOWPASS1_FREQ_EPSILON, LOWPASS1_FREQ_LIMIT};

/// First-order lowpass with internal cutoff clamping.
///
/// # Examples
///
/// ```
/// use audiolib_dsp::filters::lowpass1::Lowpass1;
///
/// let mut filt = Lowpass1::new(48000.0);
/// filt.set_frequency(1000.0);
/// filt.update();
///
/// let mut buf = [1.0f32; 8];
/// filt.process_inplace(&mut buf);
/// ```
pub struct Lowpass1 {
    sample_rate: f32,
    frequency: f32,
    b: [f32; 2],
    a: [f32; 2],
    x1: f32,
    y1: f32,
}

impl Lowpass1 {
    /// Create a new first-order lowpass for the given sample rate.
    ///
    /// The cutoff starts at zero; [`update`](Lowpass1::update) substitutes
    /// a small epsilon for the degenerate pre-warped frequency, so the
    /// filter is usable (as an extremely narrow lowpass) even before a
    /// real cutoff is assigned.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            frequency: 0.0,
            b: [0.0; 2],
            a: [1.0, 0.0],
            x1: 0.0,
            y1: 0.0,
        }
    }

    /// Set the cutoff frequency in Hz.
    ///
    /// Values at or above Nyquist are clamped to `0.499 * sample_rate` by
    /// the next [`update`](Lowpass1::update) call.
    pub fn set_frequency(&mut self, freq: f32) -> &mut Self {
        self.frequency = freq;
        self
    }

    /// Recompute the normalized coefficients from the current cutoff.
    pub fn update(&mut self) {
        // Keep the cutoff below Nyquist
        if self.frequency >= self.sample_rate * 0.5 {
            self.frequency = self.sample_rate * LOWPASS1_FREQ_LIMIT;
        }

        // Pre-warp the cutoff for the bilinear transform
        let mut f =
            2.0 * self.sample_rate * ((self.frequency * 2.0 * PI) / (self.sample_rate * 2.0)).tan();
        if f == 0.0 {
            f = LOWPASS1_FREQ_EPSILON;
        }

        let b0 = f;
        let b1 = f;
        let a0 = f + 2.0 * self.sample_rate;
        let a1 = f - 2.0 * self.sample_rate;

        let a_inv = 1.0 / a0;
        self.b = [b0 * a_inv, b1 * a_inv];
        self.a = [1.0, a1 * a_inv];
    }

    /// Numerator coefficients `[b0, b1]`.
    pub fn b(&self) -> [f32; 2] {
        self.b
    }

    /// Denominator coefficients `[1, a1]` (leading term normalized).
    pub fn a(&self) -> [f32; 2] {
        self.a
    }

    /// Reset the one-sample history.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.y1 = 0.0;
    }

    /// Process one input sample: `y = b0*x + b1*x1 - a1*y1`.
    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        let y = self.b[0] * x + self.b[1] * self.x1 - self.a[1] * self.y1;
        self.x1 = x;
        self.y1 = y;
        y
    }

    /// Process audio from `src` into `dst`.
    ///
    /// Output length is `min(dst.len(), src.len())`.
    pub fn process_slice(&mut self, dst: &mut [f32], src: &[f32]) {
        for (out, &inp) in dst.iter_mut().zip(src.iter()) {
            *out = self.process(inp);
        }
    }

    /// Process audio in-place.
    pub fn process_inplace(&mut self, buf: &mut [f32]) {
        for sample in buf.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}
