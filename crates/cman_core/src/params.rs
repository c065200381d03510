//! Cameraman parameter set
//!
//! Loaded once per run and read-only afterwards. All angles are fractional
//! turns, all coordinates are map units.

use crate::error::{CmanError, Result};
use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Capacity of the heading smoothing window
pub const ANGLE_BUFFER_CAPACITY: usize = 1024;

/// Shape of the camera path
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathMode {
    /// Straight line from point 0 to point 1
    #[default]
    Linear,
    /// Orbit around a (possibly moving) center
    Radial,
    /// Quadratic Bézier from point 0 to point 2, bent towards point 1
    Bezier,
}

impl PathMode {
    /// Profile numbering: 0 = linear, 1 = radial, 2 = bezier
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Linear),
            1 => Some(Self::Radial),
            2 => Some(Self::Bezier),
            _ => None,
        }
    }
}

/// How `speed` turns elapsed ticks into path progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedMode {
    /// `speed` is map units (or turns, for radial paths) per tick
    #[default]
    Distance,
    /// `speed` is the duration of the whole path in ticks
    Time,
}

impl SpeedMode {
    /// Profile numbering: 0 = distance, 1 = time
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Distance),
            1 => Some(Self::Time),
            _ => None,
        }
    }
}

/// Whether the configured yaw is an offset from the direction of travel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMode {
    /// Yaw is added to the heading derived from the path
    #[default]
    Relative,
    /// Yaw is used as-is
    Absolute,
}

impl AngleMode {
    /// Profile numbering: 0 = relative, 1 = absolute
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Relative),
            1 => Some(Self::Absolute),
            _ => None,
        }
    }
}

/// Everything a cameraman profile can configure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Ticks to wait after level start, `-1` disables the cameraman
    pub delay: i32,
    pub path_mode: PathMode,
    pub speed_mode: SpeedMode,
    pub angle_mode: AngleMode,
    /// Keep moving past the end of the path instead of stopping there
    pub overshoot: bool,
    /// Ask the host to teleport the player along with the camera
    pub warp_player: bool,
    /// Ask the host to stop drawing the player
    pub hide_player: bool,
    /// Heading smoothing window in ticks, `0` or `1` disables smoothing
    pub buffer_length: usize,
    /// Distance per tick, or path duration in ticks, depending on `speed_mode`
    pub speed: f32,

    /// Path start (also carries z for radial paths)
    pub point0: Vec3,
    /// Linear end point, or the Bézier control point
    pub point1: Vec3,
    /// Bézier end point
    pub point2: Vec3,

    /// Yaw at path start and end
    pub yaw0: f32,
    pub yaw1: f32,
    /// Pitch at path start and end
    pub pitch0: f32,
    pub pitch1: f32,

    /// Orbit angle at path start and end (radial only)
    pub orbit0: f32,
    pub orbit1: f32,
    /// Orbit radius at path start and end (radial only)
    pub radius0: f32,
    pub radius1: f32,
    /// Orbit center at path start and end (radial only)
    pub center0: (f32, f32),
    pub center1: (f32, f32),
}

impl ParameterSet {
    /// A parameter set that never engages the camera
    pub fn disabled() -> Self {
        Self {
            delay: -1,
            ..Self::default()
        }
    }

    /// Whether a profile was supplied at all
    pub fn is_enabled(&self) -> bool {
        self.delay >= 0
    }

    /// Whether headings go through the smoothing window.
    ///
    /// Only the Bézier tangent is noisy enough to need it.
    pub fn smoothing_enabled(&self) -> bool {
        self.buffer_length > 1
            && self.path_mode == PathMode::Bezier
            && self.angle_mode == AngleMode::Relative
    }

    /// Reject values the evaluator cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.buffer_length > ANGLE_BUFFER_CAPACITY {
            return Err(CmanError::BufferLength(self.buffer_length as i64));
        }
        Ok(())
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            delay: 0,
            path_mode: PathMode::Linear,
            speed_mode: SpeedMode::Distance,
            angle_mode: AngleMode::Relative,
            overshoot: false,
            warp_player: false,
            hide_player: false,
            buffer_length: 0,
            speed: 1.0,
            point0: Vec3::ZERO,
            point1: Vec3::ZERO,
            point2: Vec3::ZERO,
            yaw0: 0.0,
            yaw1: 0.0,
            pitch0: 0.0,
            pitch1: 0.0,
            orbit0: 0.0,
            orbit1: 0.0,
            radius0: 0.0,
            radius1: 0.0,
            center0: (0.0, 0.0),
            center1: (0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_numbering() {
        assert_eq!(PathMode::from_index(2), Some(PathMode::Bezier));
        assert_eq!(PathMode::from_index(3), None);
        assert_eq!(SpeedMode::from_index(1), Some(SpeedMode::Time));
        assert_eq!(SpeedMode::from_index(-1), None);
        assert_eq!(AngleMode::from_index(1), Some(AngleMode::Absolute));
    }

    #[test]
    fn test_smoothing_needs_bezier_relative_and_window() {
        let mut params = ParameterSet {
            path_mode: PathMode::Bezier,
            buffer_length: 8,
            ..ParameterSet::default()
        };
        assert!(params.smoothing_enabled());

        params.buffer_length = 1;
        assert!(!params.smoothing_enabled());

        params.buffer_length = 8;
        params.angle_mode = AngleMode::Absolute;
        assert!(!params.smoothing_enabled());

        params.angle_mode = AngleMode::Relative;
        params.path_mode = PathMode::Linear;
        assert!(!params.smoothing_enabled());
    }

    #[test]
    fn test_validate_buffer_capacity() {
        let mut params = ParameterSet {
            buffer_length: ANGLE_BUFFER_CAPACITY,
            ..ParameterSet::default()
        };
        assert!(params.validate().is_ok());

        params.buffer_length = ANGLE_BUFFER_CAPACITY + 1;
        assert!(matches!(params.validate(), Err(CmanError::BufferLength(1025))));
    }

    #[test]
    fn test_disabled() {
        assert!(!ParameterSet::disabled().is_enabled());
        assert!(ParameterSet::default().is_enabled());
    }
}
