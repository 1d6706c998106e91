// SPDX-License-Identifier: LGPL-3.0-or-later

//! # audiolib-dsp
//!
//! A small audio DSP toolbox built around a parametric biquad filter engine.
//!
//! This crate provides:
//!
//! - **Filters**: a parametric second-order (biquad) filter with seven
//!   response types, per-sample processing and closed-form frequency
//!   response evaluation, plus an independent first-order lowpass built on
//!   a pre-warped bilinear transform
//! - **Generators**: one-shot waveform generators (sine, saw, square,
//!   triangle and their additive variants), window functions, and
//!   windowed-sinc FIR design
//! - **Math**: buffer reductions (min/max/mean/RMS) and transforms
//!   (scaling, saturation)
//! - **Units**: dB/gain conversions and control-taper curves

pub mod consts;
pub mod filters;
pub mod math;
pub mod misc;
pub mod units;
