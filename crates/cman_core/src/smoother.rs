//! Heading smoothing for relative Bézier paths
//!
//! The Bézier tangent is a finite difference over one tick and jitters
//! visibly. The smoother keeps a ring buffer of raw headings sampled ahead
//! of the current tick and reports their mean, so the camera turns into a
//! bend slightly before reaching it.
//!
//! Samples are taken with overshoot enabled so the window can look past the
//! path end without snapping.

use crate::params::ANGLE_BUFFER_CAPACITY;
use crate::path::{PathEvaluator, TangentTracker};

/// Fixed-size moving average over future raw headings
#[derive(Clone, Debug)]
pub struct AngleSmoother {
    values: Vec<f32>,
    /// Slot holding the oldest sample, overwritten on the next slide
    index: usize,
    /// Running sum of `values`
    sum: f32,
    filled: bool,
}

impl AngleSmoother {
    /// Create a smoother averaging over `length` ticks (capped at the buffer capacity)
    pub fn new(length: usize) -> Self {
        let length = length.clamp(1, ANGLE_BUFFER_CAPACITY);
        Self {
            values: vec![0.0; length],
            index: 0,
            sum: 0.0,
            filled: false,
        }
    }

    /// Window size in ticks
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.filled
    }

    /// How many ticks ahead of the current one the newest sample is taken
    pub fn lookahead(&self) -> usize {
        self.values.len() / 2
    }

    pub fn sum(&self) -> f32 {
        self.sum
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Forget all samples; the next advance refills the whole window
    pub fn reset(&mut self) {
        self.values.fill(0.0);
        self.index = 0;
        self.sum = 0.0;
        self.filled = false;
    }

    /// Take the samples needed for tick `t` and return the smoothed heading.
    ///
    /// The first call after creation or reset samples the whole window
    /// `t + lookahead - len + 1 ..= t + lookahead`; later calls only sample
    /// the new far end and drop the oldest entry.
    pub fn advance(
        &mut self,
        t: f32,
        evaluator: &PathEvaluator,
        tangent: &mut TangentTracker,
    ) -> f32 {
        let far = t + self.lookahead() as f32;

        if !self.filled {
            self.sum = 0.0;
            let mut sample_t = far;
            for i in (0..self.values.len()).rev() {
                let yaw = evaluator.evaluate(sample_t, true, tangent).pose.yaw;
                self.values[i] = yaw;
                self.sum += yaw;
                sample_t -= 1.0;
            }
            self.index = 0;
            self.filled = true;
        } else {
            let yaw = evaluator.evaluate(far, true, tangent).pose.yaw;
            self.sum -= self.values[self.index];
            self.sum += yaw;
            self.values[self.index] = yaw;
            self.index = (self.index + 1) % self.values.len();
        }

        self.sum / self.values.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use crate::params::{AngleMode, ParameterSet, PathMode, SpeedMode};

    fn s_curve() -> PathEvaluator {
        PathEvaluator::new(ParameterSet {
            path_mode: PathMode::Bezier,
            speed_mode: SpeedMode::Time,
            angle_mode: AngleMode::Relative,
            speed: 120.0,
            buffer_length: 16,
            point0: Vec3::new(0.0, 0.0, 0.0),
            point1: Vec3::new(800.0, -300.0, 0.0),
            point2: Vec3::new(200.0, 600.0, 0.0),
            ..ParameterSet::default()
        })
    }

    #[test]
    fn test_running_sum_matches_contents() {
        let eval = s_curve();
        let mut tangent = TangentTracker::default();
        let mut smoother = AngleSmoother::new(16);

        for tick in 0..200 {
            smoother.advance(tick as f32, &eval, &mut tangent);
            let literal: f32 = smoother.values().iter().sum();
            assert!(
                (smoother.sum() - literal).abs() < 1e-3,
                "tick {tick}: {} vs {literal}",
                smoother.sum()
            );
        }
    }

    #[test]
    fn test_first_advance_fills_window_ending_at_lookahead() {
        let eval = s_curve();
        let mut tangent = TangentTracker::default();
        let mut smoother = AngleSmoother::new(4);
        assert!(smoother.is_empty());

        let smoothed = smoother.advance(10.0, &eval, &mut tangent);
        assert!(!smoother.is_empty());

        // Window covers t = 9..=12
        let mut reference = TangentTracker::default();
        let mut expected = [0.0f32; 4];
        for (i, t) in (9..=12).rev().enumerate() {
            expected[3 - i] = eval.evaluate(t as f32, true, &mut reference).pose.yaw;
        }
        assert_eq!(smoother.values(), &expected);
        assert!((smoothed - expected.iter().sum::<f32>() / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_slide_replaces_oldest_sample() {
        let eval = s_curve();
        let mut tangent = TangentTracker::default();
        let mut smoother = AngleSmoother::new(4);

        smoother.advance(10.0, &eval, &mut tangent);
        let before = smoother.values().to_vec();
        smoother.advance(11.0, &eval, &mut tangent);
        let after = smoother.values();

        // Slot 0 held t = 9, now holds t = 13; the rest is untouched
        assert_ne!(after[0], before[0]);
        assert_eq!(&after[1..], &before[1..]);
    }

    #[test]
    fn test_smoothed_heading_lags_less_than_raw_jump() {
        let eval = s_curve();
        let mut tangent = TangentTracker::default();
        let mut smoother = AngleSmoother::new(16);

        let mut previous: Option<f32> = None;
        for tick in 0..120 {
            let smoothed = smoother.advance(tick as f32, &eval, &mut tangent);
            assert!(smoothed.is_finite());
            if let Some(prev) = previous {
                // Continuous: no wrap jumps survive averaging
                assert!((smoothed - prev).abs() < 0.05, "tick {tick}");
            }
            previous = Some(smoothed);
        }
    }

    #[test]
    fn test_reset_refills() {
        let eval = s_curve();
        let mut tangent = TangentTracker::default();
        let mut smoother = AngleSmoother::new(8);

        smoother.advance(0.0, &eval, &mut tangent);
        smoother.advance(1.0, &eval, &mut tangent);
        smoother.reset();
        assert!(smoother.is_empty());
        assert_eq!(smoother.sum(), 0.0);

        tangent.reset();
        let mut fresh = AngleSmoother::new(8);
        let mut fresh_tangent = TangentTracker::default();
        assert_eq!(
            smoother.advance(0.0, &eval, &mut tangent),
            fresh.advance(0.0, &eval, &mut fresh_tangent)
        );
    }

    #[test]
    fn test_length_is_capped() {
        assert_eq!(AngleSmoother::new(5000).len(), ANGLE_BUFFER_CAPACITY);
        assert_eq!(AngleSmoother::new(8).lookahead(), 4);
        assert_eq!(AngleSmoother::new(7).lookahead(), 3);
    }
}
