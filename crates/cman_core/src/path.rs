//! Path kinematics
//!
//! Turns elapsed cameraman ticks into a raw (unsmoothed) pose for one of
//! three path shapes:
//!
//! - **Linear**: straight segment from point 0 to point 1
//! - **Radial**: orbit whose angle, radius and center all interpolate
//! - **Bézier**: quadratic curve from point 0 to point 2, control point 1
//!
//! Every interpolation is a plain lerp by `progress`, so with overshoot
//! enabled the camera keeps moving along the same motion past `progress = 1`.

use crate::angle::{turns_to_radians, vector_angle};
use crate::math::{Interpolate, Vec3};
use crate::params::{AngleMode, ParameterSet, PathMode, SpeedMode};
use crate::pose::OutputPose;
use crate::wrap::correct_wrap;

/// Raw pose for a given tick, plus how far along the path it is
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSample {
    pub pose: OutputPose,
    /// Normalised path parameter, `1.0` at the path end, larger when overshooting
    pub progress: f32,
}

/// Memory of the last Bézier tangent heading, for wrap correction
#[derive(Clone, Copy, Debug, Default)]
pub struct TangentTracker {
    previous: Option<f32>,
}

impl TangentTracker {
    /// Make `raw` continuous with the previous sample and remember it
    pub fn track(&mut self, raw: f32) -> f32 {
        let heading = match self.previous {
            Some(previous) => correct_wrap(raw, previous),
            None => raw,
        };
        self.previous = Some(heading);
        heading
    }

    pub fn previous(&self) -> Option<f32> {
        self.previous
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}

/// Evaluates the configured path at arbitrary tick offsets
#[derive(Clone, Debug)]
pub struct PathEvaluator {
    params: ParameterSet,
    /// Distance-mode denominator: planar length (linear) or orbit span (radial)
    path_length: f32,
}

impl PathEvaluator {
    pub fn new(params: ParameterSet) -> Self {
        let path_length = match params.path_mode {
            PathMode::Linear => (params.point1 - params.point0).planar_length(),
            PathMode::Radial => (params.orbit1 - params.orbit0).abs(),
            PathMode::Bezier => 0.0,
        };

        Self {
            params,
            path_length,
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Progress along the path after `t` cameraman ticks.
    ///
    /// Bézier paths have no arc length and always run on time. A path of
    /// zero length is complete from the first tick.
    pub fn progress(&self, t: f32) -> f32 {
        let speed_mode = match self.params.path_mode {
            PathMode::Bezier => SpeedMode::Time,
            _ => self.params.speed_mode,
        };

        match speed_mode {
            SpeedMode::Distance => {
                if self.path_length > 0.0 {
                    self.params.speed * t / self.path_length
                } else {
                    1.0
                }
            }
            SpeedMode::Time => self.time_progress(t),
        }
    }

    fn time_progress(&self, t: f32) -> f32 {
        if self.params.speed != 0.0 {
            t / self.params.speed
        } else {
            0.0
        }
    }

    /// Raw pose after `t` cameraman ticks.
    ///
    /// Without `overshoot` the pose snaps to the path end once progress
    /// reaches 1. The tangent tracker is only touched by relative Bézier paths.
    pub fn evaluate(&self, t: f32, overshoot: bool, tangent: &mut TangentTracker) -> PathSample {
        let progress = self.progress(t);
        let snapped = !overshoot && progress >= 1.0;

        let pose = match self.params.path_mode {
            PathMode::Linear => self.linear(progress, snapped),
            PathMode::Radial => self.radial(progress, snapped),
            PathMode::Bezier => self.bezier(t, progress, snapped, tangent),
        };

        PathSample { pose, progress }
    }

    fn is_relative(&self) -> bool {
        self.params.angle_mode == AngleMode::Relative
    }

    /// Interpolated (or end) yaw and pitch shared by all path shapes
    fn orientation(&self, progress: f32, snapped: bool) -> (f32, f32) {
        let p = &self.params;
        if snapped {
            (p.yaw1, p.pitch1)
        } else {
            (p.yaw0.lerp(&p.yaw1, progress), p.pitch0.lerp(&p.pitch1, progress))
        }
    }

    fn linear(&self, progress: f32, snapped: bool) -> OutputPose {
        let p = &self.params;
        let position = if snapped {
            p.point1
        } else {
            p.point0.lerp(&p.point1, progress)
        };
        let (mut yaw, pitch) = self.orientation(progress, snapped);

        if self.is_relative() {
            let travel = p.point1 - p.point0;
            yaw += vector_angle(travel.x, travel.y);
        }

        OutputPose::new(position, yaw, pitch)
    }

    fn radial(&self, progress: f32, snapped: bool) -> OutputPose {
        let p = &self.params;
        let (orbit, radius, center, z) = if snapped {
            (p.orbit1, p.radius1, p.center1, p.point1.z)
        } else {
            (
                p.orbit0.lerp(&p.orbit1, progress),
                p.radius0.lerp(&p.radius1, progress),
                (
                    p.center0.0.lerp(&p.center1.0, progress),
                    p.center0.1.lerp(&p.center1.1, progress),
                ),
                p.point0.z.lerp(&p.point1.z, progress),
            )
        };
        let (mut yaw, pitch) = self.orientation(progress, snapped);

        let theta = turns_to_radians(orbit);
        let x = center.0 + theta.cos() * radius;
        let y = center.1 + theta.sin() * radius;

        if self.is_relative() {
            // Face the orbit center
            yaw += vector_angle(center.0 - x, center.1 - y);
        }

        OutputPose::new(Vec3::new(x, y, z), yaw, pitch)
    }

    fn bezier(
        &self,
        t: f32,
        progress: f32,
        snapped: bool,
        tangent: &mut TangentTracker,
    ) -> OutputPose {
        let p = &self.params;
        let position = if snapped {
            p.point2
        } else {
            Vec3::quadratic_bezier(p.point0, p.point1, p.point2, progress)
        };
        let (mut yaw, pitch) = self.orientation(progress, snapped);

        if self.is_relative() {
            // Direction of travel over the last tick
            let previous = Vec3::quadratic_bezier(
                p.point0,
                p.point1,
                p.point2,
                self.time_progress(t - 1.0),
            );
            let travel = position - previous;
            yaw += tangent.track(vector_angle(travel.x, travel.y));
        }

        OutputPose::new(position, yaw, pitch)
    }
}
