//! Angle helpers
//!
//! Headings and pitches are fractional turns: `1.0` is a full revolution,
//! `0.0` points east and values grow counter-clockwise. Turns are unbounded
//! while a sequence runs and only get canonicalised when crossing into the
//! host's fixed-point units.

use std::f64::consts::TAU;

/// Fixed-point shift used by the host for coordinates and angles
pub const FRACBITS: u32 = 16;

/// One map unit in 16.16 fixed point
pub const FRACUNIT: i32 = 1 << FRACBITS;

/// Resolution of a fractional turn once it reaches the host
pub const ANGLE_STEPS: u32 = 65536;

/// Convert fractional turns to the host's binary angle.
///
/// The integer part of `turns` is dropped, so `1.25` and `-0.75` map to the
/// same angle as `0.25`.
pub fn to_fixed_angle(turns: f32) -> u32 {
    let frac = turns - turns.floor();
    let steps = (frac * ANGLE_STEPS as f32).floor() as u32 % ANGLE_STEPS;
    steps << FRACBITS
}

/// Convert a host binary angle back to fractional turns in `[0, 1)`.
pub fn from_fixed_angle(angle: u32) -> f32 {
    (angle >> FRACBITS) as f32 / ANGLE_STEPS as f32
}

/// Convert a map coordinate to 16.16 fixed point
pub fn to_fixed_coord(value: f32) -> i32 {
    (value * FRACUNIT as f32) as i32
}

/// Convert fractional turns to radians
pub fn turns_to_radians(turns: f32) -> f32 {
    (turns as f64 * TAU) as f32
}

/// Length of the `<x, y>` vector
pub fn vector_length(x: f32, y: f32) -> f32 {
    (x * x + y * y).sqrt()
}

/// Heading of the `<x, y>` vector, in fractional turns.
///
/// The result is canonical (`[0, 1)`) and quantised to the host's angle
/// resolution, so headings derived here survive a round trip through
/// [`to_fixed_angle`] unchanged. The zero vector has heading `0.0`.
pub fn vector_angle(x: f32, y: f32) -> f32 {
    let turns = (y as f64).atan2(x as f64) / TAU;
    from_fixed_angle(to_fixed_angle(turns as f32))
}
