//! Camera pose produced each tick

use crate::angle::{to_fixed_angle, to_fixed_coord};
use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Camera position and orientation, angles in fractional turns
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputPose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Heading, unbounded (may drift past 1.0 or below 0.0 on long turns)
    pub yaw: f32,
    pub pitch: f32,
}

impl OutputPose {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            yaw,
            pitch,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Pose in the host's fixed-point units
    pub fn to_fixed(&self) -> FixedPose {
        FixedPose {
            x: to_fixed_coord(self.x),
            y: to_fixed_coord(self.y),
            z: to_fixed_coord(self.z),
            angle: to_fixed_angle(self.yaw),
            pitch: to_fixed_angle(self.pitch),
        }
    }
}

/// Pose as the host consumes it: 16.16 coordinates and binary angles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPose {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub angle: u32,
    pub pitch: u32,
}
