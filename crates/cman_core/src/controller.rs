//! Per-tick cameraman sequencing
//!
//! The host calls [`SequenceController::advance`] once per simulation tick,
//! in increasing tick order starting from the level's tick zero. The
//! controller decides whether the cameraman drives the camera on that tick
//! and, if so, which pose it should have.
//!
//! ```text
//! Disabled                       (no profile, terminal)
//! Armed ──tick >= delay──► Active ──progress >= 1, no overshoot──► Completed
//!   ▲                                                                  │
//!   └─────────────────────────────── reset() ──────────────────────────┘
//! ```
//!
//! Cameraman time is `t = tick - delay`, so the first Active tick evaluates
//! the path at `t = 0`.

use crate::error::Result;
use crate::params::ParameterSet;
use crate::path::{PathEvaluator, TangentTracker};
use crate::pose::OutputPose;
use crate::smoother::AngleSmoother;
use serde::Serialize;
use tracing::debug;

/// Lifecycle of a cameraman sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SequencePhase {
    /// No profile loaded; the camera is never touched
    Disabled,
    /// Waiting for the delay to pass
    Armed,
    /// Driving the camera
    Active,
    /// Path finished; the camera holds the final pose
    Completed,
}

/// State carried from one tick to the next
#[derive(Clone, Copy, Debug, Default)]
pub struct ActivationState {
    /// Set on the first Active tick, cleared by reset
    pub was_active: bool,
    pub tangent: TangentTracker,
}

/// What the host should do with the camera this tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TickOutput {
    /// The cameraman owns the camera; player input must not move it
    pub engaged: bool,
    pub pose: OutputPose,
    pub progress: f32,
    /// Teleport the player to the camera (advisory)
    pub request_teleport: bool,
    /// Stop drawing the player (advisory)
    pub request_hide: bool,
    /// Jump to the pose instead of interpolating from the previous view
    pub reset_interpolation: bool,
    /// The path completed on this tick
    pub finished: bool,
}

impl TickOutput {
    fn idle() -> Self {
        Self::default()
    }
}

/// Drives one cameraman profile over a level's ticks
#[derive(Clone, Debug)]
pub struct SequenceController {
    evaluator: PathEvaluator,
    smoother: Option<AngleSmoother>,
    state: ActivationState,
    phase: SequencePhase,
    /// Output of the completing tick, repeated afterwards
    held: TickOutput,
}

impl SequenceController {
    /// Arm a controller for `params`.
    ///
    /// A parameter set with a negative delay produces a disabled controller.
    pub fn new(params: ParameterSet) -> Result<Self> {
        params.validate()?;

        let smoother = params
            .smoothing_enabled()
            .then(|| AngleSmoother::new(params.buffer_length));
        let phase = if params.is_enabled() {
            SequencePhase::Armed
        } else {
            SequencePhase::Disabled
        };

        Ok(Self {
            evaluator: PathEvaluator::new(params),
            smoother,
            state: ActivationState::default(),
            phase,
            held: TickOutput::idle(),
        })
    }

    /// Controller for a run without a cameraman profile
    pub fn disabled() -> Self {
        Self {
            evaluator: PathEvaluator::new(ParameterSet::disabled()),
            smoother: None,
            state: ActivationState::default(),
            phase: SequencePhase::Disabled,
            held: TickOutput::idle(),
        }
    }

    /// Build from an optional profile, disabled when none was supplied
    pub fn load(params: Option<ParameterSet>) -> Result<Self> {
        match params {
            Some(params) => Self::new(params),
            None => Ok(Self::disabled()),
        }
    }

    pub fn params(&self) -> &ParameterSet {
        self.evaluator.params()
    }

    pub fn phase(&self) -> SequencePhase {
        self.phase
    }

    pub fn activation(&self) -> &ActivationState {
        &self.state
    }

    pub fn smoother(&self) -> Option<&AngleSmoother> {
        self.smoother.as_ref()
    }

    /// Re-arm for a level restart, keeping the loaded parameters
    pub fn reset(&mut self) {
        if self.phase == SequencePhase::Disabled {
            return;
        }

        self.phase = SequencePhase::Armed;
        self.state = ActivationState::default();
        self.held = TickOutput::idle();
        if let Some(smoother) = self.smoother.as_mut() {
            smoother.reset();
        }
    }

    /// Advance to `tick` and return the camera instructions for it
    pub fn advance(&mut self, tick: i64) -> TickOutput {
        match self.phase {
            SequencePhase::Disabled => return TickOutput::idle(),
            SequencePhase::Completed => {
                return TickOutput {
                    finished: false,
                    reset_interpolation: false,
                    ..self.held
                }
            }
            SequencePhase::Armed | SequencePhase::Active => {}
        }

        let params = self.evaluator.params();
        let elapsed = tick - i64::from(params.delay);
        if elapsed < 0 {
            return TickOutput::idle();
        }

        let t = elapsed as f32;
        let overshoot = params.overshoot;

        // Smoother samples go first so the tracker ends on the actual tick
        let smoothed = self
            .smoother
            .as_mut()
            .map(|smoother| smoother.advance(t, &self.evaluator, &mut self.state.tangent));

        let mut sample = self.evaluator.evaluate(t, overshoot, &mut self.state.tangent);
        if let Some(yaw) = smoothed {
            sample.pose.yaw = yaw;
        }

        let first = !self.state.was_active;
        self.state.was_active = true;
        if first {
            debug!(tick, "Cameraman engaged");
        }

        if !overshoot && sample.progress >= 1.0 {
            debug!(tick, progress = sample.progress, "Cameraman path completed");
            self.phase = SequencePhase::Completed;
            self.held = TickOutput {
                engaged: true,
                pose: sample.pose,
                progress: sample.progress,
                request_teleport: false,
                request_hide: false,
                reset_interpolation: first,
                finished: true,
            };
            return self.held;
        }

        let params = self.evaluator.params();
        self.phase = SequencePhase::Active;
        TickOutput {
            engaged: true,
            pose: sample.pose,
            progress: sample.progress,
            request_teleport: params.warp_player,
            request_hide: params.hide_player,
            reset_interpolation: first,
            finished: false,
        }
    }
}
