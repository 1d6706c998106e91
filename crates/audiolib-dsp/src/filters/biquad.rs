// SPDX-License-Identifier: LGPL-3.0-or-later

//! Parametric biquad filter with parameter management.
//!
//! A [`Biquad`] owns its musical parameters (type, frequency, Q, shelf
//! slope, gain), the normalized coefficients derived from them, and four
//! scalars of direct-form-I history. Coefficients are recomputed only by
//! an explicit [`update`](Biquad::update) call; the per-sample recursion
//! reads whatever coefficients were cached by the most recent update, and
//! parameter changes never touch the processing history.

use std::f32::consts::PI;

use crate::consts::{FREQ_DFL, Q_DFL, Q_FLOOR, SLOPE_DFL};
use crate::filters::coeffs::{BiquadCoeffs, FilterType, calc_biquad_coeffs};

/// Parametric second-order filter section.
///
/// # Examples
///
/// ```
/// use audiolib_dsp::filters::biquad::Biquad;
/// use audiolib_dsp::filters::coeffs::FilterType;
///
/// let mut filt = Biquad::new(FilterType::Lowpass, 48000.0);
/// filt.set_frequency(1000.0)
///     .set_q(std::f32::consts::FRAC_1_SQRT_2);
/// filt.update();
///
/// let y = filt.process(1.0);
/// assert_eq!(y, filt.b()[0]);
/// ```
pub struct Biquad {
    filter_type: FilterType,
    sample_rate: f32,
    frequency: f32,
    q: f32,
    slope: f32,
    gain_db: f32,
    /// Linear gain `10^(gain_db/40)`, kept consistent with `gain_db` by
    /// [`set_gain_db`](Biquad::set_gain_db).
    gain: f32,
    coeffs: BiquadCoeffs,
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
    output: f32,
}

impl Biquad {
    /// Create a new filter for the given response type and sample rate.
    ///
    /// Defaults: 0 dB gain, nominal frequency 0.5, Q 0.5, slope 1.0.
    /// Coefficients start at zero and stay zero until the first
    /// [`update`](Biquad::update) call.
    pub fn new(filter_type: FilterType, sample_rate: f32) -> Self {
        Self {
            filter_type,
            sample_rate,
            frequency: FREQ_DFL,
            q: Q_DFL,
            slope: SLOPE_DFL,
            gain_db: 0.0,
            gain: 1.0,
            coeffs: BiquadCoeffs::default(),
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
            output: 0.0,
        }
    }

    /// Set the filter response type.
    pub fn set_filter_type(&mut self, ft: FilterType) -> &mut Self {
        self.filter_type = ft;
        self
    }

    /// Set the cutoff/center frequency in Hz.
    ///
    /// Stored verbatim; frequencies at or above Nyquist are not clamped.
    pub fn set_frequency(&mut self, freq: f32) -> &mut Self {
        self.frequency = freq;
        self
    }

    /// Set the sample rate in Hz.
    pub fn set_sample_rate(&mut self, sr: f32) -> &mut Self {
        self.sample_rate = sr;
        self
    }

    /// Set the quality factor.
    ///
    /// An assignment of exactly zero is replaced by a small positive floor
    /// so the coefficient derivation never divides by zero.
    pub fn set_q(&mut self, q: f32) -> &mut Self {
        self.q = if q == 0.0 { Q_FLOOR } else { q };
        self
    }

    /// Set the shelf slope (LowShelf/HighShelf only).
    pub fn set_slope(&mut self, slope: f32) -> &mut Self {
        self.slope = slope;
        self
    }

    /// Set the gain in dB (Peaking/LowShelf/HighShelf only).
    ///
    /// Updates both the stored dB value and the cached linear gain
    /// `10^(gain_db/40)` in one step, so the two are always consistent.
    pub fn set_gain_db(&mut self, gain_db: f32) -> &mut Self {
        self.gain_db = gain_db;
        self.gain = 10.0_f32.powf(gain_db / 40.0);
        self
    }

    /// Recompute the normalized coefficients from the current parameters.
    ///
    /// Must be called after parameter changes; processing and response
    /// queries use whatever coefficients the most recent call produced.
    /// Does not touch the filter history.
    pub fn update(&mut self) {
        self.coeffs = calc_biquad_coeffs(
            self.filter_type,
            self.sample_rate,
            self.frequency,
            self.q,
            self.slope,
            self.gain,
        );
    }

    /// Numerator coefficients `[b0, b1, b2]`.
    ///
    /// Valid after at least one [`update`](Biquad::update) call following
    /// the most recent parameter change.
    pub fn b(&self) -> [f32; 3] {
        [self.coeffs.b0, self.coeffs.b1, self.coeffs.b2]
    }

    /// Denominator coefficients `[1, a1, a2]` (leading term normalized).
    pub fn a(&self) -> [f32; 3] {
        [1.0, self.coeffs.a1, self.coeffs.a2]
    }

    /// The most recent output sample.
    pub fn output(&self) -> f32 {
        self.output
    }

    /// The stored gain in dB.
    pub fn gain_db(&self) -> f32 {
        self.gain_db
    }

    /// The stored quality factor (after any zero-floor substitution).
    pub fn q(&self) -> f32 {
        self.q
    }

    /// Reset the filter history (input and output delay cells).
    ///
    /// Does not change parameters or coefficients.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
        self.output = 0.0;
    }

    /// Process one input sample through the direct-form-I recursion.
    ///
    /// `y = b0*x + b1*x1 + b2*x2 - a1*y1 - a2*y2`, then the history
    /// advances. The result is returned and also readable afterwards via
    /// [`output`](Biquad::output).
    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        let c = &self.coeffs;
        let y = c.b0 * x + c.b1 * self.x1 + c.b2 * self.x2 - c.a1 * self.y1 - c.a2 * self.y2;

        self.x2 = self.x1;
        self.y2 = self.y1;
        self.x1 = x;
        self.y1 = y;

        self.output = y;
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

    /// Squared magnitude of the frequency response at `freq` Hz.
    ///
    /// Closed-form evaluation of `|H(e^{jw})|^2` over the currently cached
    /// coefficients, via `phi = sin^2(pi*freq/sample_rate)` -- no complex
    /// arithmetic. The value can be arbitrarily large for response poles
    /// close to the unit circle; it is not guarded.
    pub fn response(&self, freq: f32) -> f32 {
        let phi = (PI * freq / self.sample_rate).sin().powi(2);
        let c = &self.coeffs;

        let num = (c.b0 + c.b1 + c.b2).powi(2)
            - 4.0 * (c.b0 * c.b1 + 4.0 * c.b0 * c.b2 + c.b1 * c.b2) * phi
            + 16.0 * c.b0 * c.b2 * phi * phi;
        let den = (1.0 + c.a1 + c.a2).powi(2)
            - 4.0 * (c.a1 + 4.0 * c.a2 + c.a1 * c.a2) * phi
            + 16.0 * c.a2 * phi * phi;

        num / den
    }
}
