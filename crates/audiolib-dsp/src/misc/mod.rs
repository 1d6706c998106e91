// SPDX-License-Identifier: LGPL-3.0-or-later

//! Stateless signal generators.
//!
//! - **Windows**: symmetric window functions and windowed-sinc FIR design
//! - **Waveforms**: one-shot waveform generators for test and analysis
//!   signals

pub mod waveforms;
pub mod windows;
