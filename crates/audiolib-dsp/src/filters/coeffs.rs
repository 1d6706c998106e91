// SPDX-License-Identifier: LGPL-3.0-or-later

//! Biquad coefficient derivation using the classic audio EQ cookbook
//! formulas.
//!
//! Coefficients are returned in the standard sign convention with the
//! leading denominator term normalized to 1, so the difference equation is
//! `y = b0*x + b1*x1 + b2*x2 - a1*y1 - a2*y2` and no per-sample division
//! is ever required.

use std::f32::consts::PI;

/// Supported biquad filter response types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    /// Second-order low-pass filter.
    Lowpass,
    /// Second-order high-pass filter.
    Highpass,
    /// Band-pass with constant skirt gain (peak gain = Q).
    Bandpass,
    /// Notch (band-reject) filter.
    Notch,
    /// Peaking (bell/parametric) equalizer.
    Peaking,
    /// Low-shelf equalizer.
    LowShelf,
    /// High-shelf equalizer.
    HighShelf,
}

/// Normalized biquad coefficients.
///
/// The denominator's leading term is an implicit 1; `a1` and `a2` carry
/// the standard cookbook signs (the recursion subtracts them).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BiquadCoeffs {
    pub b0: f32,
    pub b1: f32,
    pub b2: f32,
    pub a1: f32,
    pub a2: f32,
}

/// Derive normalized biquad coefficients for the given filter type.
///
/// # Parameters
///
/// - `filter_type` -- response type to compute
/// - `sample_rate` -- sample rate in Hz (must be > 0)
/// - `freq` -- center or cutoff frequency in Hz; frequencies at or above
///   Nyquist are not clamped here and are the caller's responsibility
/// - `q` -- quality factor (must be > 0; the parameter store floors a
///   zero assignment before it reaches this function)
/// - `slope` -- shelf steepness, used only by [`FilterType::LowShelf`] and
///   [`FilterType::HighShelf`]
/// - `gain` -- *linear* gain `10^(gain_db/40)`, used by
///   [`FilterType::Peaking`] and the shelf types
pub fn calc_biquad_coeffs(
    filter_type: FilterType,
    sample_rate: f32,
    freq: f32,
    q: f32,
    slope: f32,
    gain: f32,
) -> BiquadCoeffs {
    let w0 = 2.0 * PI * freq / sample_rate;
    let cos_w0 = w0.cos();
    let sin_w0 = w0.sin();

    // Shelf types derive alpha from the slope parameter; everything else
    // derives it from Q.
    let (alpha, sqrt_gain) = match filter_type {
        FilterType::LowShelf | FilterType::HighShelf => {
            let alpha =
                sin_w0 / 2.0 * ((gain + 1.0 / gain) * (1.0 / slope - 1.0) + 2.0).sqrt();
            (alpha, gain.sqrt())
        }
        _ => (sin_w0 / (2.0 * q), 0.0),
    };

    let (b0, b1, b2, a0, a1, a2) = match filter_type {
        FilterType::Lowpass => {
            let b1 = 1.0 - cos_w0;
            let b0 = b1 / 2.0;
            (b0, b1, b0, 1.0 + alpha, -2.0 * cos_w0, 1.0 - alpha)
        }

        FilterType::Highpass => {
            let b0 = (1.0 + cos_w0) / 2.0;
            let b1 = -(1.0 + cos_w0);
            (b0, b1, b0, 1.0 + alpha, -2.0 * cos_w0, 1.0 - alpha)
        }

        FilterType::Bandpass => {
            (alpha, 0.0, -alpha, 1.0 + alpha, -2.0 * cos_w0, 1.0 - alpha)
        }

        FilterType::Notch => (
            1.0,
            -2.0 * cos_w0,
            1.0,
            1.0 + alpha,
            -2.0 * cos_w0,
            1.0 - alpha,
        ),

        FilterType::Peaking => (
            1.0 + alpha * gain,
            -2.0 * cos_w0,
            1.0 - alpha * gain,
            1.0 + alpha / gain,
            -2.0 * cos_w0,
            1.0 - alpha / gain,
        ),

        FilterType::LowShelf => {
            let two_sqrt_a_alpha = 2.0 * sqrt_gain * alpha;
            let a_plus_1 = gain + 1.0;
            let a_minus_1 = gain - 1.0;

            let b0 = gain * (a_plus_1 - a_minus_1 * cos_w0 + two_sqrt_a_alpha);
            let b1 = 2.0 * gain * (a_minus_1 - a_plus_1 * cos_w0);
            let b2 = gain * (a_plus_1 - a_minus_1 * cos_w0 - two_sqrt_a_alpha);
            let a0 = a_plus_1 + a_minus_1 * cos_w0 + two_sqrt_a_alpha;
            let a1 = -2.0 * (a_minus_1 + a_plus_1 * cos_w0);
            let a2 = a_plus_1 + a_minus_1 * cos_w0 - two_sqrt_a_alpha;
            (b0, b1, b2, a0, a1, a2)
        }

        FilterType::HighShelf => {
            let two_sqrt_a_alpha = 2.0 * sqrt_gain * alpha;
            let a_plus_1 = gain + 1.0;
            let a_minus_1 = gain - 1.0;

            let b0 = gain * (a_plus_1 + a_minus_1 * cos_w0 + two_sqrt_a_alpha);
            let b1 = -2.0 * gain * (a_minus_1 + a_plus_1 * cos_w0);
            let b2 = gain * (a_plus_1 + a_minus_1 * cos_w0 - two_sqrt_a_alpha);
            let a0 = a_plus_1 - a_minus_1 * cos_w0 + two_sqrt_a_alpha;
            let a1 = 2.0 * (a_minus_1 - a_plus_1 * cos_w0);
            let a2 = a_plus_1 - a_minus_1 * cos_w0 - two_sqrt_a_alpha;
            (b0, b1, b2, a0, a1, a2)
        }
    };

    // Divide a0 out of everything once, here, so the recursion never has to.
    let g = 1.0 / a0;

    BiquadCoeffs {
        b0: b0 * g,
        b1: b1 * g,
        b2: b2 * g,
        a1: a1 * g,
        a2: a2 * g,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f32 = 48000.0;
    const BUTTERWORTH_Q: f32 = std::f32::consts::FRAC_1_SQRT_2;

    const ALL_TYPES: [FilterType; 7] = [
        FilterType::Lowpass,
        FilterType::Highpass,
        FilterType::Bandpass,
        FilterType::Notch,
        FilterType::Peaking,
        FilterType::LowShelf,
        FilterType::HighShelf,
    ];

    fn gain_lin(gain_db: f32) -> f32 {
        10.0_f32.powf(gain_db / 40.0)
    }

    /// Helper: check that no coefficient is NaN or Inf.
    fn assert_finite(c: &BiquadCoeffs, label: &str) {
        assert!(c.b0.is_finite(), "{label}: b0 is not finite");
        assert!(c.b1.is_finite(), "{label}: b1 is not finite");
        assert!(c.b2.is_finite(), "{label}: b2 is not finite");
        assert!(c.a1.is_finite(), "{label}: a1 is not finite");
        assert!(c.a2.is_finite(), "{label}: a2 is not finite");
    }

    /// Helper: DC gain `H(z=1) = (b0+b1+b2) / (1+a1+a2)`.
    fn dc_gain(c: &BiquadCoeffs) -> f32 {
        (c.b0 + c.b1 + c.b2) / (1.0 + c.a1 + c.a2)
    }

    /// Helper: Nyquist gain `H(z=-1) = (b0-b1+b2) / (1-a1+a2)`.
    fn nyquist_gain(c: &BiquadCoeffs) -> f32 {
        (c.b0 - c.b1 + c.b2) / (1.0 - c.a1 + c.a2)
    }

    /// Helper: magnitude of `H(e^{jw})` at angular frequency `w`.
    fn mag_at_w(c: &BiquadCoeffs, w: f32) -> f32 {
        let cos_w = w.cos();
        let sin_w = w.sin();
        let cos_2w = (2.0 * w).cos();
        let sin_2w = (2.0 * w).sin();

        let num_re = c.b0 + c.b1 * cos_w + c.b2 * cos_2w;
        let num_im = -c.b1 * sin_w - c.b2 * sin_2w;
        let den_re = 1.0 + c.a1 * cos_w + c.a2 * cos_2w;
        let den_im = -c.a1 * sin_w - c.a2 * sin_2w;

        let num_mag_sq = num_re * num_re + num_im * num_im;
        let den_mag_sq = den_re * den_re + den_im * den_im;
        (num_mag_sq / den_mag_sq).sqrt()
    }

    #[test]
    fn lowpass_known_values() {
        // LPF at 1000 Hz, Butterworth Q, 48 kHz sample rate
        let c = calc_biquad_coeffs(FilterType::Lowpass, SR, 1000.0, BUTTERWORTH_Q, 1.0, 1.0);
        assert_finite(&c, "LPF");

        let w0 = 2.0 * PI * 1000.0 / SR;
        let cos_w0 = w0.cos();
        let sin_w0 = w0.sin();
        let alpha = sin_w0 / (2.0 * BUTTERWORTH_Q);

        let b1_raw = 1.0 - cos_w0;
        let b0_raw = b1_raw / 2.0;
        let a0_raw = 1.0 + alpha;

        let tol = 1e-7;
        assert!((c.b0 - b0_raw / a0_raw).abs() < tol, "b0 mismatch");
        assert!((c.b1 - b1_raw / a0_raw).abs() < tol, "b1 mismatch");
        assert!((c.b2 - b0_raw / a0_raw).abs() < tol, "b2 mismatch");
        assert!((c.a1 - (-2.0 * cos_w0) / a0_raw).abs() < tol, "a1 mismatch");
        assert!((c.a2 - (1.0 - alpha) / a0_raw).abs() < tol, "a2 mismatch");
    }

    #[test]
    fn normalization_recovers_raw_values() {
        // Multiplying the normalized coefficients back by the raw a0 must
        // reproduce the raw cookbook values. The notch numerator is the
        // easiest to check since its raw b0 and b2 are exactly 1.
        let freq = 2000.0;
        let q = 4.0;
        let c = calc_biquad_coeffs(FilterType::Notch, SR, freq, q, 1.0, 1.0);

        let w0 = 2.0 * PI * freq / SR;
        let alpha = w0.sin() / (2.0 * q);
        let a0_raw = 1.0 + alpha;

        let tol = 1e-6;
        assert!((a0_raw * c.b0 - 1.0).abs() < tol, "raw b0 should be 1");
        assert!(
            (a0_raw * c.b1 - (-2.0 * w0.cos())).abs() < tol,
            "raw b1 should be -2*cos(w0)"
        );
        assert!((a0_raw * c.b2 - 1.0).abs() < tol, "raw b2 should be 1");
        assert!(
            (a0_raw * c.a1 - (-2.0 * w0.cos())).abs() < tol,
            "raw a1 should be -2*cos(w0)"
        );
        assert!(
            (a0_raw * c.a2 - (1.0 - alpha)).abs() < tol,
            "raw a2 should be 1-alpha"
        );
    }

    #[test]
    fn all_types_produce_finite_coefficients() {
        for &ft in &ALL_TYPES {
            let c = calc_biquad_coeffs(ft, SR, 1000.0, 1.0, 1.0, gain_lin(3.0));
            assert_finite(&c, &format!("{ft:?}"));
        }
    }

    #[test]
    fn floored_q_produces_finite_coefficients() {
        // The parameter store substitutes 1e-12 for a zero Q; the derivation
        // must stay finite at that floor.
        for &ft in &[
            FilterType::Lowpass,
            FilterType::Highpass,
            FilterType::Bandpass,
            FilterType::Notch,
            FilterType::Peaking,
        ] {
            let c = calc_biquad_coeffs(ft, SR, 1000.0, 1e-12, 1.0, gain_lin(6.0));
            assert_finite(&c, &format!("{ft:?} q=1e-12"));
        }
    }

    #[test]
    fn peaking_zero_gain_is_identity() {
        // Peaking at 0 dB (linear gain 1): numerator equals denominator
        // elementwise, so the response is exactly flat.
        let c = calc_biquad_coeffs(FilterType::Peaking, SR, 1000.0, 1.0, 1.0, 1.0);
        let tol = 1e-6;
        assert!((c.b0 - 1.0).abs() < tol, "b0 should be 1, got {}", c.b0);
        assert!((c.b1 - c.a1).abs() < tol, "b1 should equal a1");
        assert!((c.b2 - c.a2).abs() < tol, "b2 should equal a2");
    }

    #[test]
    fn peaking_gain_at_center_matches_gain_db() {
        for &gain_db in &[-12.0, -6.0, 3.0, 6.0, 12.0] {
            let c = calc_biquad_coeffs(FilterType::Peaking, SR, 2000.0, 1.0, 1.0, gain_lin(gain_db));
            let w0 = 2.0 * PI * 2000.0 / SR;
            let mag = mag_at_w(&c, w0);
            let expected = 10.0_f32.powf(gain_db / 20.0);
            assert!(
                (mag - expected).abs() < 0.02,
                "Peaking at {gain_db}dB center gain: expected {expected}, got {mag}"
            );
        }
    }

    #[test]
    fn lowpass_dc_gain_is_unity() {
        let c = calc_biquad_coeffs(FilterType::Lowpass, SR, 1000.0, BUTTERWORTH_Q, 1.0, 1.0);
        let g = dc_gain(&c);
        assert!((g - 1.0).abs() < 1e-5, "LPF DC gain should be 1.0, got {g}");
    }

    #[test]
    fn highpass_dc_gain_is_zero() {
        let c = calc_biquad_coeffs(FilterType::Highpass, SR, 5000.0, BUTTERWORTH_Q, 1.0, 1.0);
        let g = dc_gain(&c);
        assert!(g.abs() < 1e-5, "HPF DC gain should be ~0.0, got {g}");
    }

    #[test]
    fn bandpass_dc_gain_is_zero() {
        let c = calc_biquad_coeffs(FilterType::Bandpass, SR, 1000.0, 1.0, 1.0, 1.0);
        let g = dc_gain(&c);
        assert!(g.abs() < 1e-5, "Bandpass DC gain should be ~0.0, got {g}");
    }

    #[test]
    fn bandpass_unity_peak_at_center() {
        // The constant-skirt form (b0 = alpha) peaks at 0 dB regardless of Q.
        for &q in &[0.5, 1.0, 2.0, 5.0, 10.0] {
            let c = calc_biquad_coeffs(FilterType::Bandpass, SR, 3000.0, q, 1.0, 1.0);
            let w0 = 2.0 * PI * 3000.0 / SR;
            let mag = mag_at_w(&c, w0);
            assert!(
                (mag - 1.0).abs() < 0.01,
                "Bandpass Q={q} at center should be ~1.0, got {mag}"
            );
        }
    }

    #[test]
    fn notch_unity_at_dc_and_nyquist() {
        let c = calc_biquad_coeffs(FilterType::Notch, SR, 5000.0, 10.0, 1.0, 1.0);
        let g_dc = dc_gain(&c);
        let g_ny = nyquist_gain(&c).abs();
        assert!(
            (g_dc - 1.0).abs() < 0.01,
            "Notch DC gain should be ~1.0, got {g_dc}"
        );
        assert!(
            (g_ny - 1.0).abs() < 0.01,
            "Notch Nyquist gain should be ~1.0, got {g_ny}"
        );
    }

    #[test]
    fn notch_zero_at_center() {
        let c = calc_biquad_coeffs(FilterType::Notch, SR, 1000.0, 10.0, 1.0, 1.0);
        assert_finite(&c, "Notch");

        let w0 = 2.0 * PI * 1000.0 / SR;
        let mag = mag_at_w(&c, w0);
        assert!(
            mag < 1e-3,
            "Notch magnitude at center should be ~0, got {mag}"
        );
    }

    #[test]
    fn low_shelf_dc_gain_matches_gain_db() {
        for &gain_db in &[-12.0, -6.0, 0.0, 6.0, 12.0] {
            let c =
                calc_biquad_coeffs(FilterType::LowShelf, SR, 1000.0, 1.0, 1.0, gain_lin(gain_db));
            let g = dc_gain(&c);
            let expected = 10.0_f32.powf(gain_db / 20.0);
            assert!(
                (g - expected).abs() < 0.01,
                "LowShelf DC gain at {gain_db}dB: expected {expected}, got {g}"
            );
        }
    }

    #[test]
    fn high_shelf_nyquist_gain_matches_gain_db() {
        for &gain_db in &[-12.0, -6.0, 3.0, 6.0, 12.0] {
            let c =
                calc_biquad_coeffs(FilterType::HighShelf, SR, 1000.0, 1.0, 1.0, gain_lin(gain_db));
            let g = nyquist_gain(&c).abs();
            let expected = 10.0_f32.powf(gain_db / 20.0);
            assert!(
                (g - expected).abs() < 0.05,
                "HighShelf Nyquist gain at {gain_db}dB: expected {expected}, got {g}"
            );
        }
    }

    #[test]
    fn high_shelf_dc_gain_is_unity() {
        for &gain_db in &[-12.0, -6.0, 6.0, 12.0] {
            let c =
                calc_biquad_coeffs(FilterType::HighShelf, SR, 1000.0, 1.0, 1.0, gain_lin(gain_db));
            let g = dc_gain(&c);
            assert!(
                (g - 1.0).abs() < 0.01,
                "HighShelf DC gain at {gain_db}dB should be ~1.0, got {g}"
            );
        }
    }

    #[test]
    fn shelf_zero_gain_is_flat() {
        let c_low = calc_biquad_coeffs(FilterType::LowShelf, SR, 1000.0, 1.0, 1.0, 1.0);
        let c_high = calc_biquad_coeffs(FilterType::HighShelf, SR, 1000.0, 1.0, 1.0, 1.0);

        for &freq in &[100.0, 1000.0, 10000.0] {
            let w = 2.0 * PI * freq / SR;
            let m_low = mag_at_w(&c_low, w);
            let m_high = mag_at_w(&c_high, w);
            assert!(
                (m_low - 1.0).abs() < 1e-4,
                "LowShelf 0dB at {freq}Hz should be flat, got {m_low}"
            );
            assert!(
                (m_high - 1.0).abs() < 1e-4,
                "HighShelf 0dB at {freq}Hz should be flat, got {m_high}"
            );
        }
    }

    #[test]
    fn lowpass_butterworth_at_cutoff_is_minus_3db() {
        let c = calc_biquad_coeffs(FilterType::Lowpass, SR, 1000.0, BUTTERWORTH_Q, 1.0, 1.0);
        let w0 = 2.0 * PI * 1000.0 / SR;
        let mag = mag_at_w(&c, w0);
        assert!(
            (mag - BUTTERWORTH_Q).abs() < 0.005,
            "Butterworth LPF at cutoff should be -3dB ({BUTTERWORTH_Q}), got {mag}"
        );
    }

    #[test]
    fn lowpass_and_highpass_power_complementary() {
        // Second-order Butterworth LP/HP at the same cutoff satisfy
        // |H_lp|^2 + |H_hp|^2 = 1 at every frequency.
        let fc = 4000.0;
        let c_lp = calc_biquad_coeffs(FilterType::Lowpass, SR, fc, BUTTERWORTH_Q, 1.0, 1.0);
        let c_hp = calc_biquad_coeffs(FilterType::Highpass, SR, fc, BUTTERWORTH_Q, 1.0, 1.0);

        for &freq in &[100.0, 1000.0, 4000.0, 10000.0, 20000.0] {
            let w = 2.0 * PI * freq / SR;
            let m_lp = mag_at_w(&c_lp, w);
            let m_hp = mag_at_w(&c_hp, w);
            let power_sum = m_lp * m_lp + m_hp * m_hp;
            assert!(
                (power_sum - 1.0).abs() < 0.02,
                "LPF+HPF power at {freq}Hz should be ~1.0, got {power_sum}"
            );
        }
    }

    #[test]
    fn steep_slope_shelf_stays_finite() {
        // Slopes above 1 make the alpha radicand grow; the derivation should
        // remain finite over a generous slope range.
        for &slope in &[0.1, 0.25, 0.5, 1.0, 2.0, 4.0] {
            for &ft in &[FilterType::LowShelf, FilterType::HighShelf] {
                let c = calc_biquad_coeffs(ft, SR, 1000.0, 1.0, slope, gain_lin(9.0));
                assert_finite(&c, &format!("{ft:?} slope={slope}"));
            }
        }
    }

    #[test]
    fn no_nan_inf_for_parameter_sweep() {
        let freqs = [10.0, 100.0, 1000.0, 5000.0, 20000.0, 23000.0];
        let qs = [0.01, 0.1, BUTTERWORTH_Q, 1.0, 5.0, 50.0];
        let gains_db = [-24.0, -6.0, 0.0, 6.0, 24.0];

        for &ft in &ALL_TYPES {
            for &freq in &freqs {
                for &q in &qs {
                    for &gain_db in &gains_db {
                        let c = calc_biquad_coeffs(ft, SR, freq, q, 1.0, gain_lin(gain_db));
                        assert_finite(&c, &format!("{ft:?} freq={freq} q={q} gain={gain_db}"));
                    }
                }
            }
        }
    }
}
