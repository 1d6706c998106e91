// SPDX-License-Identifier: LGPL-3.0-or-later

//! Horizontal (reduction) operations on float buffers.

use multiversion::multiversion;

/// Sum of all elements.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn sum(src: &[f32]) -> f32 {
    src.iter().sum()
}

/// Mean (average).
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn mean(src: &[f32]) -> f32 {
    if src.is_empty() {
        return 0.0;
    }
    sum(src) / src.len() as f32
}

/// Root mean square (RMS).
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn rms(src: &[f32]) -> f32 {
    if src.is_empty() {
        return 0.0;
    }
    let sq: f32 = src.iter().map(|x| x * x).sum();
    (sq / src.len() as f32).sqrt()
}

/// Find the minimum value.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn min(src: &[f32]) -> f32 {
    src.iter().copied().fold(f32::INFINITY, f32::min)
}

/// Find the maximum value.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn max(src: &[f32]) -> f32 {
    src.iter().copied().fold(f32::NEG_INFINITY, f32::max)
}
