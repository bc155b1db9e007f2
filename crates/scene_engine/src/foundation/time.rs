//! Time management utilities

/// Frame rate assumed before the game loop reports a real one
pub const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Scaled frame timing shared with behaviour scripts
///
/// `delta_time` is derived from the time scale and the measured frame rate,
/// so a scale of `0.5` halves every per-frame step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    time_scale: f64,
    delta_time: f64,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a time source with unit scale at the default frame rate
    pub fn new() -> Self {
        Self {
            time_scale: 1.0,
            delta_time: 1.0 / DEFAULT_FRAME_RATE,
        }
    }

    /// Get the scaled time step of the current frame in seconds
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Get the time scale
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Set the time scale
    ///
    /// Takes effect on the next [`Time::set_frame_rate`] call.
    pub fn set_time_scale(&mut self, time_scale: f64) {
        self.time_scale = time_scale;
    }

    /// Recompute the delta time from the measured frame rate
    ///
    /// A non-positive frame rate leaves the previous delta untouched.
    pub fn set_frame_rate(&mut self, frames_per_second: f64) {
        if frames_per_second > 0.0 {
            self.delta_time = self.time_scale / frames_per_second;
        }
    }
}
