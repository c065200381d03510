//! Launch-time behaviour around a cameraman run
//!
//! These don't change the camera path, only what the host does around it:
//! fast-forwarding to the start of the sequence and quitting once it ends.

use crate::controller::TickOutput;
use crate::params::ParameterSet;
use serde::{Deserialize, Serialize};

/// Host behaviour requested on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchOptions {
    /// Fast-forward through the delay before the camera engages
    pub auto_skip: bool,
    /// Quit once the camera path completes
    pub auto_exit: bool,
}

impl LaunchOptions {
    /// Options for unattended video capture: skip in, exit out
    pub fn viddump() -> Self {
        Self {
            auto_skip: true,
            auto_exit: true,
        }
    }

    /// Ticks the host should skip before rendering, if any
    pub fn skip_tics(&self, params: &ParameterSet) -> Option<u32> {
        if !self.auto_skip {
            return None;
        }
        u32::try_from(params.delay).ok()
    }

    /// Whether the host should quit after this tick.
    ///
    /// Never fires while the host is fast-forwarding, so skipping through
    /// an earlier level cannot end the run early.
    pub fn should_exit(&self, output: &TickOutput, skipping: bool) -> bool {
        self.auto_exit && output.finished && !skipping
    }
}
