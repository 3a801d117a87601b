//! Adaptive low-pass filter for the per-frame angle stream
//!
//! Browser-side MediaPipe does not guarantee landmark smoothing, so the
//! measured joint angle jitters by a few degrees frame to frame. This
//! filter smooths hard when the angle is near-stationary and backs off
//! during fast motion, so rep transitions are not delayed.

use std::f32::consts::PI;

/// One-euro style scalar filter tuned for joint angles in degrees.
pub struct AngleSmoother {
    /// Cutoff frequency (Hz) at rest
    min_cutoff: f32,
    /// How quickly the cutoff opens up with angular speed
    beta: f32,
    /// Cutoff for the derivative estimate
    derivative_cutoff: f32,

    last_angle: f32,
    last_rate: f32,
    last_time: f64,
    primed: bool,
}

impl AngleSmoother {
    pub fn new(min_cutoff: f32, beta: f32) -> Self {
        Self {
            min_cutoff,
            beta,
            derivative_cutoff: 1.0,
            last_angle: 0.0,
            last_rate: 0.0,
            last_time: 0.0,
            primed: false,
        }
    }

    /// Preset for arm exercises: heavy smoothing at the hold positions,
    /// responsive enough for a ~1 s lift.
    pub fn for_arm_tracking() -> Self {
        Self::new(1.5, 0.02)
    }

    fn alpha(dt: f32, cutoff: f32) -> f32 {
        let r = 2.0 * PI * cutoff * dt;
        r / (r + 1.0)
    }

    /// Smooth one angle sample taken at time `t` (seconds).
    pub fn apply(&mut self, t: f64, angle: f32) -> f32 {
        if !self.primed {
            self.last_angle = angle;
            self.last_time = t;
            self.primed = true;
            return angle;
        }

        let dt = (t - self.last_time) as f32;
        if dt <= 0.0 {
            return self.last_angle;
        }

        let rate = (angle - self.last_angle) / dt;
        let a_rate = Self::alpha(dt, self.derivative_cutoff);
        let rate_hat = a_rate * rate + (1.0 - a_rate) * self.last_rate;

        let cutoff = self.min_cutoff + self.beta * rate_hat.abs();
        let a = Self::alpha(dt, cutoff);
        let smoothed = a * angle + (1.0 - a) * self.last_angle;

        self.last_angle = smoothed;
        self.last_rate = rate_hat;
        self.last_time = t;
        smoothed
    }

    /// Forget all history; the next sample passes through unchanged.
    pub fn reset(&mut self) {
        self.primed = false;
        self.last_rate = 0.0;
    }
}

impl Default for AngleSmoother {
    fn default() -> Self {
        Self::for_arm_tracking()
    }
}
