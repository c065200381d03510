//! Small vector math used by the path kinematics
//!
//! Map coordinates are floats in map units; only the horizontal plane
//! (x, y) matters for headings, z is carried along for position.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point or offset in map space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Length of the horizontal (x, y) component
    pub fn planar_length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Point on the quadratic Bézier `start -> control -> end` at parameter `p`.
    ///
    /// Written relative to the control point so that `p` outside `[0, 1]`
    /// keeps extrapolating along the same parabola.
    pub fn quadratic_bezier(start: Vec3, control: Vec3, end: Vec3, p: f32) -> Vec3 {
        let omp = 1.0 - p;
        control + (start - control) * (omp * omp) + (end - control) * (p * p)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Copy {
    /// Interpolate between self and other by factor t.
    ///
    /// `t` is not clamped: values past 1.0 extrapolate.
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::new(
            self.x.lerp(&other.x, t),
            self.y.lerp(&other.y, t),
            self.z.lerp(&other.z, t),
        )
    }
}
