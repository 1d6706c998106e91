// SPDX-License-Identifier: LGPL-3.0-or-later

//! Filter coefficient derivation and stateful filter sections.
//!
//! The parametric [`biquad`] engine derives second-order coefficients from
//! musical parameters via the [`coeffs`] calculator; [`lowpass1`] is an
//! independent first-order design built on a pre-warped bilinear transform.

pub mod biquad;
pub mod coeffs;
pub mod lowpass1;
