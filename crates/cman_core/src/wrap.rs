//! Heading continuity across the east boundary
//!
//! Headings derived from vectors live in `[0, 1)`, so a camera turning
//! through east jumps between ~0.99 and ~0.01. Smoothing and finite
//! differences need the sequence to stay continuous instead.

/// Largest heading change assumed to happen between two consecutive samples.
///
/// A bigger jump is read as the shorter way round through the 0/1 boundary.
pub const HALF_TURN: f32 = 0.5;

/// Move `angle` by a whole turn if that brings it closer to `previous`.
///
/// - `previous = 0.99`, `angle = 0.01` gives `1.01`
/// - `previous = 0.01`, `angle = 0.99` gives `-0.01`
pub fn correct_wrap(angle: f32, previous: f32) -> f32 {
    let delta = angle - previous;
    if delta < -HALF_TURN {
        // Crossed east turning counter-clockwise
        angle + 1.0
    } else if delta > HALF_TURN {
        // Crossed east turning clockwise
        angle - 1.0
    } else {
        angle
    }
}
