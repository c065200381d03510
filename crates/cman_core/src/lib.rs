//! Cameraman
//!
//! Scripted free-camera sequences for demo playback and video capture. A
//! profile describes one camera path; the host calls the controller once
//! per simulation tick and gets back the camera pose for that tick.
//!
//! # Features
//!
//! - **Path shapes**: linear, radial (orbit) and quadratic Bézier
//! - **Progress models**: distance per tick or total duration in ticks
//! - **Overshoot**: keep moving past the path end instead of stopping
//! - **Relative headings**: yaw as an offset from the direction of travel
//! - **Heading smoothing**: look-ahead moving average for Bézier tangents
//! - **Deterministic**: the same profile and tick history always produce
//!   bit-identical poses, so recorded demos replay exactly
//!
//! # Example
//!
//! ```ignore
//! use cman_core::{load_profile, SequenceController};
//!
//! let params = load_profile("intro.cman")?;
//! let mut controller = SequenceController::new(params)?;
//!
//! for tick in 0.. {
//!     let out = controller.advance(tick);
//!     if out.engaged {
//!         // hand out.pose.to_fixed() to the renderer
//!     }
//! }
//! ```

pub mod angle;
pub mod controller;
pub mod error;
pub mod math;
pub mod options;
pub mod params;
pub mod path;
pub mod pose;
pub mod profile;
pub mod smoother;
pub mod wrap;

pub use controller::{ActivationState, SequenceController, SequencePhase, TickOutput};
pub use error::{CmanError, Result};
pub use math::{Interpolate, Vec3};
pub use options::LaunchOptions;
pub use params::{AngleMode, ParameterSet, PathMode, SpeedMode, ANGLE_BUFFER_CAPACITY};
pub use path::{PathEvaluator, PathSample, TangentTracker};
pub use pose::{FixedPose, OutputPose};
pub use profile::{load_profile, parse_profile};
pub use smoother::AngleSmoother;
pub use wrap::correct_wrap;
