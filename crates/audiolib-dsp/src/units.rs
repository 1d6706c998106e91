// SPDX-License-Identifier: LGPL-3.0-or-later

//! Unit conversion and control-taper functions.
//!
//! Conversions between decibels and linear amplitude gain, plus the
//! exponential/logarithmic taper curves used to map normalized control
//! values (faders, knobs) onto perceptually useful ranges.

/// Convert decibels to linear gain (amplitude ratio).
///
/// # Arguments
/// * `db` - Level in decibels
///
/// # Returns
/// Linear gain (amplitude ratio)
#[inline]
pub fn db_to_gain(db: f32) -> f32 {
    (db * (std::f32::consts::LN_10 / 20.0)).exp()
}

/// Convert linear gain (amplitude ratio) to decibels.
///
/// # Arguments
/// * `gain` - Linear gain (amplitude ratio)
///
/// # Returns
/// Level in decibels
#[inline]
pub fn gain_to_db(gain: f32) -> f32 {
    20.0 * gain.log10()
}

/// Exponential taper for a normalized control value.
///
/// Maps `x` in 0..=1 onto 0..=1 with an exponential curve
/// (`(20^x - 1) / 19`), concentrating resolution at the low end.
#[inline]
pub fn exp_response(x: f32) -> f32 {
    ((x * LN_20).exp() - 1.0) / 19.0
}

/// Logarithmic taper for a normalized control value.
///
/// The reflection of [`exp_response`] around the identity line:
/// `2*x - exp_response(x)`. Maps 0..=1 onto 0..=1 with resolution
/// concentrated at the high end.
#[inline]
pub fn log_response(x: f32) -> f32 {
    2.0 * x - exp_response(x)
}

/// ln(20), the rate constant of the taper curves.
const LN_20: f32 = 2.995_732_3;
