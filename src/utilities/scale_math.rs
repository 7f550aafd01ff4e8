// src/utilities/scale_math.rs
//
// Turns a node's global scale into per-part rotation amounts.
// A row of `n` parts is activated one after the other as the scale rises.

use std::f32::consts::PI;

pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// How far `x` has progressed past the start of part `i` out of `n`.
pub fn max_scale(x: f32, i: usize, n: usize) -> f32 {
    (x - i as f32 * inverse(n)).max(0.0)
}

/// Local progress of part `i` out of `n`, clamped to [0, 1].
pub fn divide_scale(x: f32, i: usize, n: usize) -> f32 {
    inverse(n).min(max_scale(x, i, n)) * n as f32
}

/// Maps linear progress onto a single bounce: 0 -> 1 -> 0 over [0, 1].
pub fn sinify(x: f32) -> f32 {
    (x * PI).sin()
}

/// Rotation fraction (of a quarter turn) for part `i` of a row at `scale`.
pub fn part_rotation(scale: f32, i: usize, parts: usize) -> f32 {
    divide_scale(sinify(scale), i, parts)
}
